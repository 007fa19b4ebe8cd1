//! Ground elevation factor, ASCE 7-22 Section 26.9.

/// Ground elevation factor `Ke` at `elevation` ft above sea level.
///
/// Uses the permitted simplification `Ke = 1.0` at every elevation.
#[inline]
pub fn ke(_elevation: f64) -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplified() {
        assert_eq!(ke(0.0), 1.0);
        assert_eq!(ke(6000.0), 1.0);
    }
}
