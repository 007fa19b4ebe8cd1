//! Two-axis interpolation over anchor tables.

use crate::math::anchor_table::AnchorTable2D;
use crate::math::axis::{bracket, clamp, match_exact};
use crate::math::blend::Blend;
use crate::types::InterpolationError;

/// Bilinear interpolator over an [`AnchorTable2D`].
///
/// Composes two 1D linear interpolations: first along the ratio axis at
/// each bounding column anchor, then across the column axis. Both query
/// coordinates are clamped into the table domain first, so any finite
/// query resolves to a value.
///
/// When the column query matches a column anchor exactly, only a single
/// ratio-axis interpolation is performed at that column. Combined with an
/// exact ratio match this returns the stored cell unchanged.
///
/// # Type Parameters
///
/// * `V` - Cell value: a scalar or a compound implementing [`Blend`]
///
/// # Example
///
/// ```
/// use xwind_core::math::anchor_table::AnchorTable2D;
/// use xwind_core::math::interpolators::BilinearInterpolator;
///
/// static GRID: AnchorTable2D<f64> = AnchorTable2D::new(
///     "leeward",
///     &[0.25, 0.5, 1.0],
///     &[10.0, 15.0, 20.0],
///     &[
///         &[(10.0, -0.3), (15.0, -0.5), (20.0, -0.6)],
///         &[(10.0, -0.5), (15.0, -0.5), (20.0, -0.6)],
///         &[(10.0, -0.7), (15.0, -0.6), (20.0, -0.6)],
///     ],
/// );
///
/// let interp = BilinearInterpolator::new(&GRID);
///
/// // Exact anchors return the stored value
/// assert_eq!(interp.interpolate(0.25, 10.0).unwrap(), -0.3);
///
/// // Midway between the 15 and 20 degree columns
/// let cp = interp.interpolate(0.5, 17.5).unwrap();
/// assert!((cp - (-0.55)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BilinearInterpolator<'a, V: 'static> {
    table: &'a AnchorTable2D<V>,
}

impl<'a, V: Blend + 'static> BilinearInterpolator<'a, V> {
    /// Wrap an anchor table.
    #[inline]
    pub fn new(table: &'a AnchorTable2D<V>) -> Self {
        Self { table }
    }

    /// Returns the underlying table.
    #[inline]
    pub fn table(&self) -> &'a AnchorTable2D<V> {
        self.table
    }

    /// Interpolate at `(ratio, column)` after clamping both into the table domain.
    ///
    /// # Algorithm
    ///
    /// 1. Clamp `ratio` and `column` to their anchor domains.
    /// 2. If `column` matches a column anchor, interpolate along the ratio
    ///    axis at that column and return.
    /// 3. Otherwise bracket `column` into `(c0, c1)` with fraction `t`,
    ///    interpolate along the ratio axis at `c0` and `c1`, and blend the
    ///    two results by `t`.
    ///
    /// # Returns
    ///
    /// * `Ok(v)` - The interpolated value
    /// * `Err(InterpolationError::InvalidInput)` - A query coordinate is NaN
    /// * `Err(InterpolationError::MissingCell)` - The table is not rectangular
    /// * `Err(InterpolationError::InsufficientData)` - The table has an empty axis
    pub fn interpolate(&self, ratio: f64, column: f64) -> Result<V, InterpolationError> {
        if ratio.is_nan() || column.is_nan() {
            return Err(InterpolationError::InvalidInput(format!(
                "{}: query ({}, {}) is not a number",
                self.table.name(),
                ratio,
                column
            )));
        }

        let (r_min, r_max) = self.table.ratio_domain();
        let (c_min, c_max) = self.table.column_domain();
        let r = clamp(ratio, r_min, r_max);
        let c = clamp(column, c_min, c_max);

        let columns = self.table.column_anchors();

        // Exact column: single pass along the ratio axis
        if let Some(index) = match_exact(c, columns) {
            return self.table.interpolate_column(columns[index], r);
        }

        let b = bracket(c, columns)?;
        let v0 = self.table.interpolate_column(columns[b.lower], r)?;
        let v1 = self.table.interpolate_column(columns[b.upper], r)?;

        Ok(v0.blend(v1, b.t))
    }
}
