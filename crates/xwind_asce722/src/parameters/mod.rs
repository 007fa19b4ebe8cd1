//! Site and structure parameters of the velocity pressure and design
//! pressure equations.
//!
//! - [`directionality`]: wind directionality factor `Kd`
//! - [`gust`]: gust effect factor `G`
//! - [`topographic`]: topographic factor `Kzt` and its multipliers
//! - [`ground_elevation`]: ground elevation factor `Ke`

pub mod directionality;
pub mod ground_elevation;
pub mod gust;
pub mod topographic;

pub use directionality::kd;
pub use ground_elevation::ke;
pub use gust::g;
pub use topographic::{k1, k2, k3, kzt, TopographicFactor, TopographicMultipliers};
