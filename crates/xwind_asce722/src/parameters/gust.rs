//! Gust effect factor, ASCE 7-22 Section 26.11.

use xwind_core::types::StructureFlexibility;

use crate::error::CoefficientError;

/// Gust effect factor permitted for rigid buildings.
pub const RIGID_GUST_FACTOR: f64 = 0.85;

/// Gust effect factor `G`.
///
/// # Errors
///
/// * `Unsupported` - flexible structures need the dynamic gust factor `Gf`
pub fn g(flexibility: StructureFlexibility) -> Result<f64, CoefficientError> {
    match flexibility {
        StructureFlexibility::Rigid => Ok(RIGID_GUST_FACTOR),
        StructureFlexibility::Flexible => Err(CoefficientError::Unsupported(
            "gust effect factor for flexible structures".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigid() {
        assert_eq!(g(StructureFlexibility::Rigid).unwrap(), 0.85);
    }

    #[test]
    fn test_flexible_unsupported() {
        assert!(matches!(
            g(StructureFlexibility::Flexible),
            Err(CoefficientError::Unsupported(_))
        ));
    }
}
