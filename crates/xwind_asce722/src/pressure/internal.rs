//! Internal pressure coefficients, ASCE 7-22 Table 26.13-1.

use xwind_core::types::EnclosureType;

/// Internal pressure coefficient `(+GCpi, -GCpi)` for an enclosure classification.
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::internal::gcpi;
/// use xwind_core::types::EnclosureType;
///
/// assert_eq!(gcpi(EnclosureType::PartiallyEnclosed), (0.55, -0.55));
/// ```
pub fn gcpi(enclosure: EnclosureType) -> (f64, f64) {
    match enclosure {
        EnclosureType::Enclosed | EnclosureType::PartiallyOpen => (0.18, -0.18),
        EnclosureType::PartiallyEnclosed => (0.55, -0.55),
        EnclosureType::Open => (0.0, 0.0),
    }
}
