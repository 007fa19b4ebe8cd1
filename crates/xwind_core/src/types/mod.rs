//! Classification and error types shared across the workspace.
//!
//! This module provides:
//! - `category`: Exposure, enclosure, risk, structure, topography and surface classifications
//! - `error`: Structured error types for interpolation and category parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ExposureCategory`], [`EnclosureType`], [`RiskCategory`], [`StructureType`],
//!   [`StructureFlexibility`], [`TopographyType`], [`CrestPosition`], [`SurfaceType`] from `category`
//! - [`InterpolationError`], [`CategoryError`] from `error`

pub mod category;
pub mod error;

// Re-export commonly used types at module level
pub use category::{
    CrestPosition, EnclosureType, ExposureCategory, RiskCategory, StructureFlexibility,
    StructureType, SurfaceType, TopographyType,
};
pub use error::{CategoryError, InterpolationError};
