//! Site and building classifications used to select coefficients.
//!
//! Every classification is a plain `Copy` enum with a stable kebab-case
//! name, a case-insensitive [`FromStr`] implementation and a matching
//! [`Display`](fmt::Display). The names are what the CLI and the TOML
//! configuration accept.
//!
//! # Examples
//!
//! ```
//! use xwind_core::types::category::{ExposureCategory, SurfaceType};
//!
//! let exposure: ExposureCategory = "c".parse().unwrap();
//! assert_eq!(exposure, ExposureCategory::C);
//!
//! let surface: SurfaceType = "leeward-wall".parse().unwrap();
//! assert_eq!(surface.to_string(), "leeward-wall");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CategoryError;

/// Terrain exposure category (B, C or D).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExposureCategory {
    /// Urban and suburban areas, wooded areas
    B,
    /// Open terrain with scattered obstructions
    C,
    /// Flat, unobstructed areas and water surfaces
    D,
}

impl ExposureCategory {
    /// All exposure categories in table order.
    pub const ALL: [ExposureCategory; 3] =
        [ExposureCategory::B, ExposureCategory::C, ExposureCategory::D];

    /// Returns the single-letter name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            ExposureCategory::B => "B",
            ExposureCategory::C => "C",
            ExposureCategory::D => "D",
        }
    }
}

impl FromStr for ExposureCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_uppercase().as_str() {
            "B" => Ok(ExposureCategory::B),
            "C" => Ok(ExposureCategory::C),
            "D" => Ok(ExposureCategory::D),
            _ => Err(unknown("exposure category", s)),
        }
    }
}

impl fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Building enclosure classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnclosureType {
    /// Enclosed building
    Enclosed,
    /// Partially enclosed building
    PartiallyEnclosed,
    /// Partially open building
    PartiallyOpen,
    /// Open building
    Open,
}

impl EnclosureType {
    /// Returns the kebab-case name of the classification.
    pub fn name(&self) -> &'static str {
        match self {
            EnclosureType::Enclosed => "enclosed",
            EnclosureType::PartiallyEnclosed => "partially-enclosed",
            EnclosureType::PartiallyOpen => "partially-open",
            EnclosureType::Open => "open",
        }
    }
}

impl FromStr for EnclosureType {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "enclosed" => Ok(EnclosureType::Enclosed),
            "partially-enclosed" => Ok(EnclosureType::PartiallyEnclosed),
            "partially-open" => Ok(EnclosureType::PartiallyOpen),
            "open" => Ok(EnclosureType::Open),
            _ => Err(unknown("enclosure type", s)),
        }
    }
}

impl fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Risk category of the building or structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskCategory {
    /// Low risk to human life
    I,
    /// Standard occupancy
    II,
    /// Substantial risk to human life
    III,
    /// Essential facilities
    IV,
}

impl RiskCategory {
    /// Returns the roman-numeral name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            RiskCategory::I => "I",
            RiskCategory::II => "II",
            RiskCategory::III => "III",
            RiskCategory::IV => "IV",
        }
    }
}

impl FromStr for RiskCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_uppercase().as_str() {
            "I" => Ok(RiskCategory::I),
            "II" => Ok(RiskCategory::II),
            "III" => Ok(RiskCategory::III),
            "IV" => Ok(RiskCategory::IV),
            _ => Err(unknown("risk category", s)),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structure type, used to select the wind directionality factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureType {
    /// Building main wind force resisting system
    BuildingMwfrs,
    /// Building components and cladding
    BuildingComponentsAndCladding,
    /// Arched roofs
    ArchedRoofs,
    /// Circular domes
    CircularDomes,
    /// Circular domes with a non-axisymmetric structural system
    CircularDomesNonAxisymmetric,
    /// Chimneys, tanks and similar structures: square
    ChimneySquare,
    /// Chimneys, tanks and similar structures: hexagonal
    ChimneyHexagonal,
    /// Chimneys, tanks and similar structures: octagonal
    ChimneyOctagonal,
    /// Octagonal chimneys with a non-axisymmetric structural system
    ChimneyOctagonalNonAxisymmetric,
    /// Chimneys, tanks and similar structures: round
    ChimneyRound,
    /// Round chimneys with a non-axisymmetric structural system
    ChimneyRoundNonAxisymmetric,
    /// Solid freestanding walls, rooftop equipment and solid signs
    SolidFreestandingWallsAndSigns,
    /// Open signs and single-plane open frames
    OpenSignsAndFrames,
    /// Trussed towers: triangular, square or rectangular
    TrussedTowerRectangular,
    /// Trussed towers: all other cross sections
    TrussedTowerOther,
}

impl StructureType {
    /// All structure types in table order.
    pub const ALL: [StructureType; 15] = [
        StructureType::BuildingMwfrs,
        StructureType::BuildingComponentsAndCladding,
        StructureType::ArchedRoofs,
        StructureType::CircularDomes,
        StructureType::CircularDomesNonAxisymmetric,
        StructureType::ChimneySquare,
        StructureType::ChimneyHexagonal,
        StructureType::ChimneyOctagonal,
        StructureType::ChimneyOctagonalNonAxisymmetric,
        StructureType::ChimneyRound,
        StructureType::ChimneyRoundNonAxisymmetric,
        StructureType::SolidFreestandingWallsAndSigns,
        StructureType::OpenSignsAndFrames,
        StructureType::TrussedTowerRectangular,
        StructureType::TrussedTowerOther,
    ];

    /// Returns the kebab-case name of the structure type.
    pub fn name(&self) -> &'static str {
        match self {
            StructureType::BuildingMwfrs => "building-mwfrs",
            StructureType::BuildingComponentsAndCladding => "building-cladding",
            StructureType::ArchedRoofs => "arched-roofs",
            StructureType::CircularDomes => "circular-domes",
            StructureType::CircularDomesNonAxisymmetric => "circular-domes-non-axisymmetric",
            StructureType::ChimneySquare => "chimney-square",
            StructureType::ChimneyHexagonal => "chimney-hexagonal",
            StructureType::ChimneyOctagonal => "chimney-octagonal",
            StructureType::ChimneyOctagonalNonAxisymmetric => "chimney-octagonal-non-axisymmetric",
            StructureType::ChimneyRound => "chimney-round",
            StructureType::ChimneyRoundNonAxisymmetric => "chimney-round-non-axisymmetric",
            StructureType::SolidFreestandingWallsAndSigns => "solid-walls-and-signs",
            StructureType::OpenSignsAndFrames => "open-signs-and-frames",
            StructureType::TrussedTowerRectangular => "trussed-tower-rectangular",
            StructureType::TrussedTowerOther => "trussed-tower-other",
        }
    }
}

impl FromStr for StructureType {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        let lowered = s.to_lowercase();
        StructureType::ALL
            .iter()
            .copied()
            .find(|structure| structure.name() == lowered)
            .ok_or_else(|| unknown("structure type", s))
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dynamic response class of the structure, used for the gust effect factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureFlexibility {
    /// Fundamental natural frequency of at least 1 Hz
    Rigid,
    /// Fundamental natural frequency below 1 Hz
    Flexible,
}

impl FromStr for StructureFlexibility {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "rigid" => Ok(StructureFlexibility::Rigid),
            "flexible" => Ok(StructureFlexibility::Flexible),
            _ => Err(unknown("structure flexibility", s)),
        }
    }
}

impl fmt::Display for StructureFlexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureFlexibility::Rigid => write!(f, "rigid"),
            StructureFlexibility::Flexible => write!(f, "flexible"),
        }
    }
}

/// Topographic feature at the site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopographyType {
    /// Flat terrain, no speed-up
    None,
    /// Two-dimensional ridge or valley
    RidgeOrValley,
    /// Two-dimensional escarpment
    Escarpment,
    /// Three-dimensional axisymmetrical hill
    AxisymmetricalHill,
}

impl TopographyType {
    /// Returns the kebab-case name of the feature.
    pub fn name(&self) -> &'static str {
        match self {
            TopographyType::None => "none",
            TopographyType::RidgeOrValley => "ridge-or-valley",
            TopographyType::Escarpment => "escarpment",
            TopographyType::AxisymmetricalHill => "axisymmetrical-hill",
        }
    }
}

impl FromStr for TopographyType {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "none" | "flat" => Ok(TopographyType::None),
            "ridge-or-valley" | "ridge" | "valley" => Ok(TopographyType::RidgeOrValley),
            "escarpment" => Ok(TopographyType::Escarpment),
            "axisymmetrical-hill" | "hill" => Ok(TopographyType::AxisymmetricalHill),
            _ => Err(unknown("topography type", s)),
        }
    }
}

impl fmt::Display for TopographyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Position of the building relative to the crest of a topographic feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrestPosition {
    /// Upwind of the crest
    UpwindOfCrest,
    /// Downwind of the crest
    DownwindOfCrest,
}

impl FromStr for CrestPosition {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "upwind" | "upwind-of-crest" => Ok(CrestPosition::UpwindOfCrest),
            "downwind" | "downwind-of-crest" => Ok(CrestPosition::DownwindOfCrest),
            _ => Err(unknown("crest position", s)),
        }
    }
}

impl fmt::Display for CrestPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrestPosition::UpwindOfCrest => write!(f, "upwind-of-crest"),
            CrestPosition::DownwindOfCrest => write!(f, "downwind-of-crest"),
        }
    }
}

/// Building surface a pressure coefficient applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceType {
    /// Wall facing the wind
    WindwardWall,
    /// Wall facing away from the wind
    LeewardWall,
    /// Walls parallel to the wind
    SideWall,
    /// Windward roof slope, wind normal to ridge
    RoofWindward,
    /// Leeward roof slope, wind normal to ridge
    RoofLeeward,
    /// Roof zones, wind parallel to ridge (or flat roof)
    RoofParallelToRidge,
    /// Parapet
    Parapet,
}

impl SurfaceType {
    /// All surfaces.
    pub const ALL: [SurfaceType; 7] = [
        SurfaceType::WindwardWall,
        SurfaceType::LeewardWall,
        SurfaceType::SideWall,
        SurfaceType::RoofWindward,
        SurfaceType::RoofLeeward,
        SurfaceType::RoofParallelToRidge,
        SurfaceType::Parapet,
    ];

    /// Returns the kebab-case name of the surface.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceType::WindwardWall => "windward-wall",
            SurfaceType::LeewardWall => "leeward-wall",
            SurfaceType::SideWall => "side-wall",
            SurfaceType::RoofWindward => "roof-windward",
            SurfaceType::RoofLeeward => "roof-leeward",
            SurfaceType::RoofParallelToRidge => "roof-parallel-to-ridge",
            SurfaceType::Parapet => "parapet",
        }
    }

    /// True for the three wall surfaces.
    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            SurfaceType::WindwardWall | SurfaceType::LeewardWall | SurfaceType::SideWall
        )
    }
}

impl FromStr for SurfaceType {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, CategoryError> {
        let lowered = s.to_lowercase();
        SurfaceType::ALL
            .iter()
            .copied()
            .find(|surface| surface.name() == lowered)
            .ok_or_else(|| unknown("surface type", s))
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn unknown(kind: &'static str, value: &str) -> CategoryError {
    CategoryError::Unknown {
        kind,
        value: value.to_string(),
    }
}
