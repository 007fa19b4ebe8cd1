//! Pressure coefficients and velocity pressure.
//!
//! - [`roof`]: windward, leeward and parallel-to-ridge roof coefficients
//! - [`area_reduction`]: conditional reduction of roof coefficients by plan area
//! - [`wall`]: wall coefficients
//! - [`internal`]: internal pressure coefficients
//! - [`velocity`]: exposure coefficient `Kz` and velocity pressure `qz`

pub mod area_reduction;
pub mod internal;
pub mod roof;
pub mod velocity;
pub mod wall;

use tracing::debug;
use xwind_core::math::anchor_table::AnchorTable2D;

/// A query coordinate that was moved onto the edge of a table domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainClamp {
    /// Table that was queried
    pub table: &'static str,
    /// Axis name (`"h/L"` or `"angle"`)
    pub axis: &'static str,
    /// Value supplied by the caller
    pub value: f64,
    /// Anchor the value was clamped to
    pub clamped_to: f64,
}

/// Axes of a `(ratio, angle)` query that fall outside `table`'s domain.
///
/// Clamping is normal behaviour, not an error; this lets callers surface
/// it as a warning.
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::domain_clamps;
/// use xwind_asce722::tables::roof::LEEWARD_CP;
///
/// let clamps: Vec<_> = domain_clamps(&LEEWARD_CP, 0.5, 30.0).collect();
/// assert_eq!(clamps.len(), 1);
/// assert_eq!(clamps[0].axis, "angle");
/// assert_eq!(clamps[0].clamped_to, 20.0);
/// ```
pub fn domain_clamps<V: Copy + 'static>(
    table: &AnchorTable2D<V>,
    ratio: f64,
    angle: f64,
) -> impl Iterator<Item = DomainClamp> {
    let (r_min, r_max) = table.ratio_domain();
    let (a_min, a_max) = table.column_domain();
    let name = table.name();

    [
        clamp_of(name, "h/L", ratio, r_min, r_max),
        clamp_of(name, "angle", angle, a_min, a_max),
    ]
    .into_iter()
    .flatten()
}

fn clamp_of(
    table: &'static str,
    axis: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Option<DomainClamp> {
    let clamped_to = if value < min {
        min
    } else if value > max {
        max
    } else {
        return None;
    };

    Some(DomainClamp {
        table,
        axis,
        value,
        clamped_to,
    })
}

/// Emit a debug event for each clamped axis of a query.
pub(crate) fn log_clamps<V: Copy + 'static>(table: &AnchorTable2D<V>, ratio: f64, angle: f64) {
    for clamp in domain_clamps(table, ratio, angle) {
        debug!(
            table = clamp.table,
            axis = clamp.axis,
            value = clamp.value,
            clamped_to = clamp.clamped_to,
            "query clamped into table domain"
        );
    }
}
