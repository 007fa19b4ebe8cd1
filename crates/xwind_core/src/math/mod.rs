//! Numerical building blocks for tabulated coefficient lookup.
//!
//! - [`axis`]: Clamp a query into an anchor axis and locate it (exact anchor or bracket)
//! - [`blend`]: Linear blending of scalar and compound values
//! - [`anchor_table`]: Immutable two-axis anchor grids
//! - [`interpolators`]: 1D linear and two-axis interpolation over anchors

pub mod anchor_table;
pub mod axis;
pub mod blend;
pub mod interpolators;
