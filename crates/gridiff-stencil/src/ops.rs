//! Free-function entry points taking raw axis selectors and step sizes.
//!
//! These validate `axis` and `h` before dispatching to [`Scheme::apply`],
//! so callers holding plain numbers get the same typed errors.

use gridiff_core::{Axis, DiffError, GridField, StepSize};

use crate::scheme::Scheme;

/// Forward difference of `field` along `axis` (0 = x/columns, 1 = y/rows).
///
/// Column `cols-1` (axis 0) or row 0 (axis 1) is zero.
pub fn forward(field: &GridField, axis: usize, h: f64) -> Result<GridField, DiffError> {
    dispatch(Scheme::Forward, field, axis, h)
}

/// Backward difference of `field` along `axis` (0 = x/columns, 1 = y/rows).
///
/// Column 0 (axis 0) or row 0 (axis 1) is zero.
pub fn backward(field: &GridField, axis: usize, h: f64) -> Result<GridField, DiffError> {
    dispatch(Scheme::Backward, field, axis, h)
}

/// Centered difference of `field` along `axis` (0 = x/columns, 1 = y/rows).
///
/// Both end columns (axis 0) or both end rows (axis 1) are zero.
pub fn centered(field: &GridField, axis: usize, h: f64) -> Result<GridField, DiffError> {
    dispatch(Scheme::Centered, field, axis, h)
}

fn dispatch(
    scheme: Scheme,
    field: &GridField,
    axis: usize,
    h: f64,
) -> Result<GridField, DiffError> {
    let axis = Axis::try_from(axis)?;
    let step = StepSize::new(h)?;
    scheme.apply(field, axis, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_arguments_are_validated_first() {
        let f = GridField::zeros(3, 3).unwrap();
        assert_eq!(forward(&f, 2, 1.0), Err(DiffError::InvalidAxis { value: 2 }));
        assert_eq!(
            backward(&f, 0, 0.0),
            Err(DiffError::NonPositiveStepSize { value: 0.0 })
        );
        assert_eq!(
            centered(&f, 1, f64::INFINITY),
            Err(DiffError::NonFiniteStepSize {
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn invalid_axis_wins_over_small_grid() {
        let tiny = GridField::zeros(1, 1).unwrap();
        assert_eq!(centered(&tiny, 5, 1.0), Err(DiffError::InvalidAxis { value: 5 }));
    }

    #[test]
    fn matches_scheme_dispatch() {
        let f = GridField::from_fn(4, 5, |r, c| (r as f64).sin() + (c as f64).cos()).unwrap();
        let h = StepSize::new(0.3).unwrap();
        for (axis_idx, axis) in [(0, Axis::X), (1, Axis::Y)] {
            assert_eq!(forward(&f, axis_idx, 0.3), Scheme::Forward.apply(&f, axis, h));
            assert_eq!(backward(&f, axis_idx, 0.3), Scheme::Backward.apply(&f, axis, h));
            assert_eq!(centered(&f, axis_idx, 0.3), Scheme::Centered.apply(&f, axis, h));
        }
    }
}
