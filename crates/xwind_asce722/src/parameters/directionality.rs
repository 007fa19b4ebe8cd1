//! Wind directionality factor, ASCE 7-22 Table 26.6-1.

use xwind_core::types::StructureType;

/// Directionality factor `Kd` for a structure type.
///
/// # Example
///
/// ```
/// use xwind_asce722::parameters::kd;
/// use xwind_core::types::StructureType;
///
/// assert_eq!(kd(StructureType::BuildingMwfrs), 0.85);
/// assert_eq!(kd(StructureType::ChimneyRound), 1.0);
/// ```
pub fn kd(structure: StructureType) -> f64 {
    match structure {
        StructureType::BuildingMwfrs
        | StructureType::BuildingComponentsAndCladding
        | StructureType::ArchedRoofs
        | StructureType::SolidFreestandingWallsAndSigns
        | StructureType::OpenSignsAndFrames
        | StructureType::TrussedTowerRectangular => 0.85,
        StructureType::ChimneySquare => 0.90,
        StructureType::ChimneyHexagonal
        | StructureType::CircularDomesNonAxisymmetric
        | StructureType::ChimneyOctagonalNonAxisymmetric
        | StructureType::ChimneyRoundNonAxisymmetric
        | StructureType::TrussedTowerOther => 0.95,
        StructureType::CircularDomes
        | StructureType::ChimneyOctagonal
        | StructureType::ChimneyRound => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_structure_in_range() {
        for structure in StructureType::ALL {
            let k = kd(structure);
            assert!((0.85..=1.0).contains(&k), "{}: {}", structure, k);
        }
    }

    #[test]
    fn test_non_axisymmetric_systems_reduced() {
        assert_eq!(kd(StructureType::CircularDomes), 1.0);
        assert_eq!(kd(StructureType::CircularDomesNonAxisymmetric), 0.95);
        assert_eq!(kd(StructureType::ChimneyOctagonalNonAxisymmetric), 0.95);
        assert_eq!(kd(StructureType::ChimneySquare), 0.90);
    }
}
