//! The [`GridField`] sample carrier.

use crate::axis::Axis;
use crate::error::{DiffError, GridError};

/// `(rows, cols)` of a grid.
pub type Shape = (usize, usize);

/// A rectangular, fixed-shape 2-D array of `f64` samples.
///
/// Storage is row-major with row 0 at the top (north). See [`Axis`] for
/// how axis selectors map onto the two storage dimensions.
///
/// Fields are value-like: operators borrow their input immutably and
/// return a freshly allocated output of the same shape.
///
/// # Examples
///
/// ```
/// use gridiff_core::{Axis, GridField};
///
/// let f = GridField::from_fn(2, 3, |r, c| (r * 10 + c) as f64).unwrap();
/// assert_eq!(f.shape(), (2, 3));
/// assert_eq!(f.get(1, 2), Some(12.0));
/// assert_eq!(f.len_along(Axis::X), 3);
/// assert_eq!(f.column(1), vec![1.0, 11.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl GridField {
    /// A grid of the given shape filled with `0.0`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::filled(rows, cols, 0.0)
    }

    /// A zero-filled grid with the same shape as `self`.
    ///
    /// Infallible: the shape was validated when `self` was built.
    pub fn zeros_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: vec![0.0; self.data.len()],
        }
    }

    /// A grid of the given shape with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// Wrap a row-major sample buffer.
    ///
    /// Returns `Err(GridError::LengthMismatch)` unless `data.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, GridError> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(checked_len(n_rows, n_cols)?);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, GridError> {
        let mut data = Vec::with_capacity(checked_len(rows, cols)?);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (extent along [`Axis::Y`]).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (extent along [`Axis::X`]).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of points along the given axis.
    pub fn len_along(&self, axis: Axis) -> usize {
        axis.extent(self.shape())
    }

    /// Whether `other` has the same `(rows, cols)`.
    pub fn same_shape(&self, other: &GridField) -> bool {
        self.shape() == other.shape()
    }

    /// Sample at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major samples.
    ///
    /// The shape is fixed; only values can change.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Samples of row `r`. Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Copy of column `c`, top to bottom. Panics if `c >= cols`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        assert!(c < self.cols, "column {c} out of range for {} columns", self.cols);
        (0..self.rows).map(|r| self.data[r * self.cols + c]).collect()
    }

    /// Consume the field, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Apply `f` to every sample, producing a new field of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> GridField {
        GridField {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Multiply every sample by `a`.
    pub fn scale(&self, a: f64) -> GridField {
        self.map(|v| a * v)
    }

    /// `a * x + b * y`, cell by cell.
    ///
    /// Returns `Err(DiffError::ShapeMismatch)` if `x` and `y` differ in shape.
    pub fn linear_combination(
        a: f64,
        x: &GridField,
        b: f64,
        y: &GridField,
    ) -> Result<GridField, DiffError> {
        if !x.same_shape(y) {
            return Err(DiffError::ShapeMismatch {
                expected: x.shape(),
                actual: y.shape(),
            });
        }
        Ok(GridField {
            rows: x.rows,
            cols: x.cols,
            data: x
                .data
                .iter()
                .zip(&y.data)
                .map(|(&xv, &yv)| a * xv + b * yv)
                .collect(),
        })
    }

    /// Largest absolute cell-wise difference between two same-shape fields.
    pub fn max_abs_diff(&self, other: &GridField) -> Result<f64, DiffError> {
        if !self.same_shape(other) {
            return Err(DiffError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid);
    }
    // A shape whose cell count overflows can never be backed by a buffer.
    rows.checked_mul(cols).ok_or(GridError::LengthMismatch {
        expected: usize::MAX,
        actual: 0,
    })
}
