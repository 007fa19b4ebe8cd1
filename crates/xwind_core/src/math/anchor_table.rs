//! Immutable two-axis anchor grids.
//!
//! An [`AnchorTable2D`] is a rectangular grid of tabulated values keyed by a
//! ratio axis (rows) and a column axis. It is backed entirely by `'static`
//! slices so that tables can be declared as `static` items: they are built
//! once, never mutated, and every lookup is a pure read.
//!
//! Each row stores its cells keyed by column anchor rather than by position.
//! A row that omits a column breaks the rectangular-grid invariant; lookups
//! that reach such a cell fail with [`InterpolationError::MissingCell`] and
//! [`AnchorTable2D::validate`] reports it up front.
//!
//! # Grid Layout
//!
//! ```text
//!               column anchors (ascending)
//!               c0        c1        c2
//! ratio r0  [ (c0, v) , (c1, v) , (c2, v) ]
//! ratio r1  [ (c0, v) , (c1, v) , (c2, v) ]
//! ```

use super::axis::{self, match_exact, AxisPosition};
use super::blend::Blend;
use crate::types::InterpolationError;

/// Cells of one grid row, keyed by column anchor.
pub type AnchorRow<V> = &'static [(f64, V)];

/// Rectangular grid of values indexed by a ratio axis and a column axis.
///
/// # Type Parameters
///
/// * `V` - Stored value: a scalar coefficient or a compound of coefficients
///
/// # Example
///
/// ```
/// use xwind_core::math::anchor_table::AnchorTable2D;
///
/// static GRID: AnchorTable2D<f64> = AnchorTable2D::new(
///     "leeward",
///     &[0.25, 0.5],
///     &[10.0, 15.0],
///     &[
///         &[(10.0, -0.3), (15.0, -0.5)],
///         &[(10.0, -0.5), (15.0, -0.5)],
///     ],
/// );
///
/// assert!(GRID.validate().is_ok());
/// assert_eq!(GRID.cell(0, 15.0).unwrap(), -0.5);
/// assert_eq!(GRID.ratio_domain(), (0.25, 0.5));
/// ```
#[derive(Debug)]
pub struct AnchorTable2D<V: 'static> {
    /// Table name, used in diagnostics
    name: &'static str,
    /// Row (ratio) anchors, ascending
    ratios: &'static [f64],
    /// Column anchors, ascending
    columns: &'static [f64],
    /// `rows[i]` holds the cells for `ratios[i]`
    rows: &'static [AnchorRow<V>],
}

impl<V: Copy + 'static> AnchorTable2D<V> {
    /// Declare a table from static anchor and cell data.
    ///
    /// No validation happens here so the constructor stays `const`; call
    /// [`validate`](Self::validate) to check the grid invariants.
    pub const fn new(
        name: &'static str,
        ratios: &'static [f64],
        columns: &'static [f64],
        rows: &'static [AnchorRow<V>],
    ) -> Self {
        Self {
            name,
            ratios,
            columns,
            rows,
        }
    }

    /// Check the grid invariants.
    ///
    /// * at least two ratio anchors and one column anchor
    /// * both axes strictly ascending
    /// * one row per ratio anchor
    /// * every row defines exactly the column anchors of the table
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InsufficientData` - Too few anchors on an axis
    /// * `InterpolationError::NonMonotonicData` - An axis is not strictly ascending
    /// * `InterpolationError::MissingCell` - A row lacks a column anchor
    /// * `InterpolationError::InvalidInput` - Row count mismatch or unexpected cell
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.ratios.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: self.ratios.len(),
                need: 2,
            });
        }
        if self.columns.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        check_ascending(self.ratios)?;
        check_ascending(self.columns)?;

        if self.rows.len() != self.ratios.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "{}: grid rows ({}) must match ratio anchors ({})",
                self.name,
                self.rows.len(),
                self.ratios.len()
            )));
        }

        for (i, row) in self.rows.iter().enumerate() {
            for &column in self.columns {
                self.cell(i, column)?;
            }
            if row.len() != self.columns.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "{}: row {} has {} cells, expected {}",
                    self.name,
                    self.ratios[i],
                    row.len(),
                    self.columns.len()
                )));
            }
        }

        Ok(())
    }

    /// Look up the stored value at ratio row `row` and column anchor `column`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::MissingCell` - The row has no entry for `column`
    /// * `InterpolationError::InvalidInput` - `row` is not a row index
    pub fn cell(&self, row: usize, column: f64) -> Result<V, InterpolationError> {
        let cells = self.rows.get(row).ok_or_else(|| {
            InterpolationError::InvalidInput(format!(
                "{}: row index {} out of range",
                self.name, row
            ))
        })?;
        cells
            .iter()
            .find(|(key, _)| (key - column).abs() < axis::ANCHOR_EPSILON)
            .map(|&(_, value)| value)
            .ok_or(InterpolationError::MissingCell {
                row: self.ratios.get(row).copied().unwrap_or(f64::NAN),
                column,
            })
    }

    /// Interpolate along the ratio axis at a fixed column anchor.
    ///
    /// `ratio` must already lie within [`ratio_domain`](Self::ratio_domain).
    /// When it matches a ratio anchor the stored value is returned as is.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::MissingCell` - A row lacks `column`
    pub fn interpolate_column(&self, column: f64, ratio: f64) -> Result<V, InterpolationError>
    where
        V: Blend,
    {
        match axis::locate(ratio, self.ratios)? {
            AxisPosition::Exact { index } => self.cell(index, column),
            AxisPosition::Between(bracket) => {
                let lower = self.cell(bracket.lower, column)?;
                let upper = self.cell(bracket.upper, column)?;
                Ok(lower.blend(upper, bracket.t))
            }
        }
    }

    /// Index of the column anchor equal to `column`, if any.
    #[inline]
    pub fn column_index(&self, column: f64) -> Option<usize> {
        match_exact(column, self.columns)
    }

    /// Returns the table name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the ratio (row) anchors.
    #[inline]
    pub fn ratio_anchors(&self) -> &'static [f64] {
        self.ratios
    }

    /// Returns the column anchors.
    #[inline]
    pub fn column_anchors(&self) -> &'static [f64] {
        self.columns
    }

    /// Return the `(min, max)` ratio anchors.
    #[inline]
    pub fn ratio_domain(&self) -> (f64, f64) {
        domain(self.ratios)
    }

    /// Return the `(min, max)` column anchors.
    #[inline]
    pub fn column_domain(&self) -> (f64, f64) {
        domain(self.columns)
    }
}

fn domain(anchors: &[f64]) -> (f64, f64) {
    match (anchors.first(), anchors.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (f64::NAN, f64::NAN),
    }
}

fn check_ascending(anchors: &[f64]) -> Result<(), InterpolationError> {
    for (i, pair) in anchors.windows(2).enumerate() {
        if pair[1] <= pair[0] || (pair[1] - pair[0]) < axis::ANCHOR_EPSILON {
            return Err(InterpolationError::NonMonotonicData { index: i + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    static GOOD: AnchorTable2D<f64> = AnchorTable2D::new(
        "good",
        &[0.0, 1.0, 2.0],
        &[10.0, 20.0],
        &[
            &[(10.0, 0.0), (20.0, 1.0)],
            &[(20.0, 3.0), (10.0, 2.0)],
            &[(10.0, 4.0), (20.0, 5.0)],
        ],
    );

    static RAGGED: AnchorTable2D<f64> = AnchorTable2D::new(
        "ragged",
        &[0.0, 1.0],
        &[10.0, 20.0],
        &[&[(10.0, 0.0), (20.0, 1.0)], &[(10.0, 2.0)]],
    );

    static UNSORTED: AnchorTable2D<f64> = AnchorTable2D::new(
        "unsorted",
        &[1.0, 0.5],
        &[10.0],
        &[&[(10.0, 0.0)], &[(10.0, 1.0)]],
    );

    static SINGLE_ROW: AnchorTable2D<f64> =
        AnchorTable2D::new("single", &[1.0], &[10.0], &[&[(10.0, 0.0)]]);

    static EXTRA_CELL: AnchorTable2D<f64> = AnchorTable2D::new(
        "extra",
        &[0.0, 1.0],
        &[10.0],
        &[&[(10.0, 0.0)], &[(10.0, 1.0), (30.0, 9.0)]],
    );

    #[test]
    fn test_validate_good_table() {
        assert!(GOOD.validate().is_ok());
    }

    #[test]
    fn test_cells_keyed_by_column_not_position() {
        assert_eq!(GOOD.cell(1, 10.0).unwrap(), 2.0);
        assert_eq!(GOOD.cell(1, 20.0).unwrap(), 3.0);
    }

    #[test]
    fn test_validate_ragged_table() {
        assert_eq!(
            RAGGED.validate().unwrap_err(),
            InterpolationError::MissingCell {
                row: 1.0,
                column: 20.0
            }
        );
    }

    #[test]
    fn test_validate_unsorted_table() {
        assert_eq!(
            UNSORTED.validate().unwrap_err(),
            InterpolationError::NonMonotonicData { index: 1 }
        );
    }

    #[test]
    fn test_validate_single_row() {
        assert_eq!(
            SINGLE_ROW.validate().unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_validate_extra_cell() {
        assert!(matches!(
            EXTRA_CELL.validate().unwrap_err(),
            InterpolationError::InvalidInput(msg) if msg.contains("row 1")
        ));
    }

    #[test]
    fn test_cell_row_out_of_range() {
        assert!(matches!(
            GOOD.cell(7, 10.0),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_interpolate_column_exact_and_between() {
        assert_eq!(GOOD.interpolate_column(20.0, 1.0).unwrap(), 3.0);
        assert_relative_eq!(
            GOOD.interpolate_column(10.0, 1.5).unwrap(),
            3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_interpolate_column_missing_cell() {
        assert_eq!(
            RAGGED.interpolate_column(20.0, 0.5).unwrap_err(),
            InterpolationError::MissingCell {
                row: 1.0,
                column: 20.0
            }
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(GOOD.name(), "good");
        assert_eq!(GOOD.ratio_anchors(), &[0.0, 1.0, 2.0]);
        assert_eq!(GOOD.column_anchors(), &[10.0, 20.0]);
        assert_eq!(GOOD.ratio_domain(), (0.0, 2.0));
        assert_eq!(GOOD.column_domain(), (10.0, 20.0));
        assert_eq!(GOOD.column_index(20.0), Some(1));
        assert_eq!(GOOD.column_index(15.0), None);
    }
}
