//! The [`Scheme`] difference operator.

use gridiff_core::{Axis, DiffError, GridField, StepSize};

use crate::convention::RowConvention;
use crate::stencil::Stencil;
use crate::traversal::differentiate_into;

/// A finite-difference scheme: the difference operator variant.
///
/// Stateless and `Copy`. Every variant is evaluated through the same
/// traversal, differing only in its [`Stencil`].
///
/// # Contract
///
/// - The output has the same shape as the input.
/// - Cells whose neighbours fall outside the grid are exactly `0.0`:
///   one line for forward/backward, both end lines for centered.
/// - The input is never modified.
/// - Fewer than [`min_points`](Scheme::min_points) along the axis fails
///   with [`DiffError::GridTooSmall`].
///
/// # Examples
///
/// ```
/// use gridiff_core::{Axis, GridField, StepSize};
/// use gridiff_stencil::Scheme;
///
/// let f = GridField::from_fn(3, 4, |_, c| 2.0 * c as f64).unwrap();
/// let h = StepSize::new(2.0).unwrap();
/// let df = Scheme::Centered.apply(&f, Axis::X, h).unwrap();
/// assert_eq!(df.row(1), &[0.0, 1.0, 1.0, 0.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `(f[p+e] - f[p]) / h`.
    Forward,
    /// `(f[p] - f[p-e]) / h`.
    Backward,
    /// `(f[p+e] - f[p-e]) / 2h`.
    Centered,
}

impl Scheme {
    /// All schemes, in declaration order.
    pub const ALL: [Scheme; 3] = [Scheme::Forward, Scheme::Backward, Scheme::Centered];

    /// Lower-case scheme name used in errors and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Centered => "centered",
        }
    }

    /// Minimum points along the differencing axis: 2, or 3 for centered.
    pub fn min_points(self) -> usize {
        match self {
            Self::Forward | Self::Backward => 2,
            Self::Centered => 3,
        }
    }

    /// Number of boundary lines this scheme zero-fills.
    pub fn boundary_lines(self) -> usize {
        self.min_points() - 1
    }

    /// The stencil this scheme uses along `axis` under `convention`.
    pub fn stencil(self, axis: Axis, convention: RowConvention) -> Stencil {
        Stencil::for_scheme(self, axis, convention)
    }

    /// Differentiate `field` along `axis` with the default row convention.
    pub fn apply(
        self,
        field: &GridField,
        axis: Axis,
        step: StepSize,
    ) -> Result<GridField, DiffError> {
        self.apply_with(field, axis, step, RowConvention::default())
    }

    /// Differentiate `field` along `axis` with an explicit row convention.
    pub fn apply_with(
        self,
        field: &GridField,
        axis: Axis,
        step: StepSize,
        convention: RowConvention,
    ) -> Result<GridField, DiffError> {
        let stencil = self.checked_stencil(field, axis, convention)?;
        let mut out = field.zeros_like();
        differentiate_into(field, axis, step, &stencil, self.name(), &mut out);
        Ok(out)
    }

    /// Differentiate into caller-provided storage (default row convention).
    ///
    /// Every cell of `out` is written. Returns
    /// `Err(DiffError::ShapeMismatch)` if `out` differs in shape from `field`.
    pub fn apply_into(
        self,
        field: &GridField,
        axis: Axis,
        step: StepSize,
        out: &mut GridField,
    ) -> Result<(), DiffError> {
        self.apply_into_with(field, axis, step, RowConvention::default(), out)
    }

    /// Differentiate into caller-provided storage with an explicit row convention.
    pub fn apply_into_with(
        self,
        field: &GridField,
        axis: Axis,
        step: StepSize,
        convention: RowConvention,
        out: &mut GridField,
    ) -> Result<(), DiffError> {
        if !out.same_shape(field) {
            return Err(DiffError::ShapeMismatch {
                expected: field.shape(),
                actual: out.shape(),
            });
        }
        let stencil = self.checked_stencil(field, axis, convention)?;
        differentiate_into(field, axis, step, &stencil, self.name(), out);
        Ok(())
    }

    fn checked_stencil(
        self,
        field: &GridField,
        axis: Axis,
        convention: RowConvention,
    ) -> Result<Stencil, DiffError> {
        let stencil = self.stencil(axis, convention);
        let actual = field.len_along(axis);
        let required = stencil.required_points();
        if actual < required {
            return Err(DiffError::GridTooSmall {
                scheme: self.name(),
                axis: axis.index(),
                required,
                actual,
            });
        }
        Ok(stencil)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiff_test_utils::{assert_fields_close, quadratic_row};

    fn h(v: f64) -> StepSize {
        StepSize::new(v).unwrap()
    }

    #[test]
    fn squares_scenario() {
        let f = quadratic_row(5);
        let fwd = Scheme::Forward.apply(&f, Axis::X, h(1.0)).unwrap();
        let bwd = Scheme::Backward.apply(&f, Axis::X, h(1.0)).unwrap();
        let ctr = Scheme::Centered.apply(&f, Axis::X, h(1.0)).unwrap();
        assert_eq!(fwd.as_slice(), &[1.0, 3.0, 5.0, 7.0, 0.0]);
        assert_eq!(bwd.as_slice(), &[0.0, 1.0, 3.0, 5.0, 7.0]);
        assert_eq!(ctr.as_slice(), &[0.0, 2.0, 4.0, 6.0, 0.0]);
    }

    #[test]
    fn minimum_size_rejection() {
        let one = GridField::filled(1, 1, 3.0).unwrap();
        for s in Scheme::ALL {
            for axis in Axis::ALL {
                let err = s.apply(&one, axis, h(1.0)).unwrap_err();
                assert!(
                    matches!(err, DiffError::GridTooSmall { actual: 1, .. }),
                    "{s} on 1x1 along {axis:?}: {err:?}"
                );
            }
        }

        let two = GridField::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert_eq!(
            Scheme::Centered.apply(&two, Axis::X, h(1.0)),
            Err(DiffError::GridTooSmall {
                scheme: "centered",
                axis: 0,
                required: 3,
                actual: 2,
            })
        );
        assert_eq!(
            Scheme::Forward.apply(&two, Axis::X, h(1.0)).unwrap().as_slice(),
            &[1.0, 0.0]
        );
        assert_eq!(
            Scheme::Backward.apply(&two, Axis::X, h(1.0)).unwrap().as_slice(),
            &[0.0, 1.0]
        );
        // Only one row: axis 1 has a single point.
        assert!(Scheme::Forward.apply(&two, Axis::Y, h(1.0)).is_err());
    }

    #[test]
    fn legacy_row_axis_orientation_is_pinned() {
        // f[r][c] = r^2 on a 4x2 grid.
        let f = GridField::from_fn(4, 2, |r, _| (r * r) as f64).unwrap();

        // Forward on axis 1 reads toward row 0: (f[j-1] - f[j]) / h, row 0 zero.
        let fwd = Scheme::Forward.apply(&f, Axis::Y, h(1.0)).unwrap();
        assert_eq!(fwd.column(0), vec![0.0, -1.0, -3.0, -5.0]);

        // Backward on axis 1 is in index order: (f[j] - f[j-1]) / h, row 0 zero.
        let bwd = Scheme::Backward.apply(&f, Axis::Y, h(1.0)).unwrap();
        assert_eq!(bwd.column(1), vec![0.0, 1.0, 3.0, 5.0]);

        // Centered on axis 1 is sign-flipped: (f[j-1] - f[j+1]) / 2h.
        let ctr = Scheme::Centered.apply(&f, Axis::Y, h(1.0)).unwrap();
        assert_eq!(ctr.column(0), vec![0.0, -2.0, -4.0, 0.0]);
    }

    #[test]
    fn alternative_conventions() {
        let f = GridField::from_fn(4, 1, |r, _| (r * r) as f64).unwrap();

        let idx = RowConvention::IndexOrder;
        let fwd = Scheme::Forward.apply_with(&f, Axis::Y, h(1.0), idx).unwrap();
        assert_eq!(fwd.as_slice(), &[1.0, 3.0, 5.0, 0.0]);
        let ctr = Scheme::Centered.apply_with(&f, Axis::Y, h(1.0), idx).unwrap();
        assert_eq!(ctr.as_slice(), &[0.0, 2.0, 4.0, 0.0]);

        let north = RowConvention::NorthUp;
        let bwd = Scheme::Backward.apply_with(&f, Axis::Y, h(1.0), north).unwrap();
        assert_eq!(bwd.as_slice(), &[-1.0, -3.0, -5.0, 0.0]);
    }

    #[test]
    fn apply_into_checks_shape_and_overwrites() {
        let f = quadratic_row(5);
        let mut wrong = GridField::zeros(5, 1).unwrap();
        assert_eq!(
            Scheme::Forward.apply_into(&f, Axis::X, h(1.0), &mut wrong),
            Err(DiffError::ShapeMismatch {
                expected: (1, 5),
                actual: (5, 1),
            })
        );

        let mut out = GridField::filled(1, 5, 99.0).unwrap();
        Scheme::Backward
            .apply_into(&f, Axis::X, h(1.0), &mut out)
            .unwrap();
        assert_eq!(out.as_slice(), &[0.0, 1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn apply_into_reports_shape_before_extent() {
        // Centered on a 1x2 row is too small, but the output shape is
        // wrong as well; the shape error wins.
        let f = GridField::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let mut out = GridField::zeros(2, 1).unwrap();
        assert_eq!(
            Scheme::Centered.apply_into(&f, Axis::X, h(1.0), &mut out),
            Err(DiffError::ShapeMismatch {
                expected: (1, 2),
                actual: (2, 1),
            })
        );
        assert_eq!(out.as_slice(), &[0.0, 0.0]);

        let mut out = GridField::zeros(1, 2).unwrap();
        assert_eq!(
            Scheme::Centered.apply_into(&f, Axis::X, h(1.0), &mut out),
            Err(DiffError::GridTooSmall {
                scheme: "centered",
                axis: 0,
                required: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn apply_allocates_fresh_output() {
        // A constant field differentiates to zero everywhere.
        let f = GridField::filled(3, 3, 7.0).unwrap();
        for s in Scheme::ALL {
            for axis in Axis::ALL {
                let out = s.apply(&f, axis, h(1.0)).unwrap();
                assert!(out.as_slice().iter().all(|&v| v == 0.0), "{s} {axis:?}");
            }
        }
    }

    #[test]
    fn step_size_normalises() {
        let f = quadratic_row(5);
        let ctr = Scheme::Centered.apply(&f, Axis::X, h(0.5)).unwrap();
        let expected = GridField::from_vec(1, 5, vec![0.0, 4.0, 8.0, 12.0, 0.0]).unwrap();
        assert_fields_close(&ctr, &expected, 0.0);
    }
}
