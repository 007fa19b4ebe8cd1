//! # xwind_core: Interpolation Foundation for Wind-Load Coefficient Tables
//!
//! ## Layer 1 (Foundation) Role
//!
//! xwind_core is the bottom layer of the workspace, providing:
//! - Axis resolution: clamping, exact-anchor matching, bracketing (`math::axis`)
//! - Linear blending of scalar and compound coefficient values (`math::blend`)
//! - Immutable, sorted-array-backed anchor grids (`math::anchor_table`)
//! - 1D and two-axis interpolators (`math::interpolators`)
//! - Shared classification enums: exposure, enclosure, surface, ... (`types::category`)
//! - Error types: `InterpolationError`, `CategoryError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other xwind_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use xwind_core::math::anchor_table::AnchorTable2D;
//! use xwind_core::math::interpolators::BilinearInterpolator;
//!
//! static TABLE: AnchorTable2D<f64> = AnchorTable2D::new(
//!     "example",
//!     &[0.0, 1.0],
//!     &[10.0, 20.0],
//!     &[
//!         &[(10.0, 0.0), (20.0, 2.0)],
//!         &[(10.0, 4.0), (20.0, 6.0)],
//!     ],
//! );
//!
//! let interp = BilinearInterpolator::new(&TABLE);
//! let z = interp.interpolate(0.5, 15.0).unwrap();
//! assert!((z - 3.0).abs() < 1e-12);
//!
//! // Queries outside the grid are clamped onto its edges
//! assert_eq!(interp.interpolate(9.0, 99.0).unwrap(), 6.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the category enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
