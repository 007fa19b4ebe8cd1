//! Embedded, read-only coefficient tables.
//!
//! All tables are `static` data built at compile time. Queries only read
//! them, so they can be shared freely across threads.
//!
//! [`check_all`] re-validates every table's structural invariants and is
//! what `xwind check` reports on.

pub mod reduction;
pub mod roof;
pub mod terrain;
pub mod wall;

use xwind_core::math::interpolators::LinearInterpolator;
use xwind_core::types::InterpolationError;

/// Validation outcome for one embedded table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCheck {
    /// Table name
    pub table: &'static str,
    /// Number of stored values
    pub cells: usize,
    /// `Ok(())` when every invariant holds
    pub outcome: Result<(), InterpolationError>,
}

impl TableCheck {
    /// True when the table passed.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Validate every embedded table.
///
/// # Example
///
/// ```
/// use xwind_asce722::tables::check_all;
///
/// assert!(check_all().iter().all(|check| check.is_ok()));
/// ```
pub fn check_all() -> [TableCheck; 5] {
    let windward = &roof::WINDWARD_CP;
    let leeward = &roof::LEEWARD_CP;

    [
        TableCheck {
            table: windward.name(),
            cells: windward.ratio_anchors().len() * windward.column_anchors().len(),
            outcome: windward.validate(),
        },
        TableCheck {
            table: leeward.name(),
            cells: leeward.ratio_anchors().len() * leeward.column_anchors().len(),
            outcome: leeward.validate(),
        },
        TableCheck {
            table: "parallel-to-ridge zones",
            cells: roof::PARALLEL_TO_RIDGE_ZONES.len(),
            outcome: check_zones(),
        },
        TableCheck {
            table: "area reduction",
            cells: reduction::AREA_REDUCTION.areas().len(),
            outcome: reduction::AREA_REDUCTION.validate(),
        },
        TableCheck {
            table: "leeward wall",
            cells: wall::LEEWARD_WALL_CP.len(),
            outcome: LinearInterpolator::new(&wall::LEEWARD_WALL_RATIOS, &wall::LEEWARD_WALL_CP)
                .map(|_| ()),
        },
    ]
}

fn check_zones() -> Result<(), InterpolationError> {
    match roof::PARALLEL_TO_RIDGE_ZONES
        .iter()
        .find(|zone| !zone.is_finite())
    {
        Some(zone) => Err(InterpolationError::InvalidInput(format!(
            "zone '{}' has a non-finite coefficient",
            zone.label
        ))),
        None => Ok(()),
    }
}
