//! # XWind ASCE 7-22 (Domain Layer)
//!
//! Tabulated external pressure coefficients and the supporting wind-load
//! quantities of the directional procedure.
//!
//! This crate provides:
//! - Embedded, read-only coefficient tables (windward and leeward roof,
//!   parallel-to-ridge zones, leeward wall, area reduction curve)
//! - Roof pressure coefficients with domain clamping and area reduction
//! - Wall and internal pressure coefficients
//! - Site parameters: directionality, gust effect, topographic and ground
//!   elevation factors
//! - Terrain exposure constants, the exposure coefficient `Kz` and velocity
//!   pressure `qz`
//! - The directional design-pressure combination
//!
//! ## Errors
//!
//! Every fallible operation returns [`CoefficientError`]. Caller-input
//! problems ([`CoefficientError::InvalidGeometry`]) are kept apart from
//! malformed embedded data ([`CoefficientError::DataIntegrity`]); the latter
//! should never be observed and is fatal when it is.
//!
//! ## Example
//!
//! ```
//! use xwind_asce722::pressure::roof::{leeward_cp, windward_roof_cp};
//!
//! // h/L = 10 / 40 = 0.25 at a 10 degree pitch is a table anchor
//! let cp = windward_roof_cp(40.0, 10.0, 10.0, None).unwrap();
//! assert_eq!((cp.cp1, cp.cp2), (-0.7, -0.18));
//!
//! let cp = leeward_cp(0.5, 17.5, None).unwrap();
//! assert!((cp - (-0.55)).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod parameters;
pub mod pressure;
pub mod procedure;
pub mod tables;

pub use error::CoefficientError;
