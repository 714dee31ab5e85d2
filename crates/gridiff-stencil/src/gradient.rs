//! Two-component gradient built from a pair of axis derivatives.

use gridiff_core::{Axis, DiffError, GridField, StepSize};

use crate::convention::RowConvention;
use crate::scheme::Scheme;

/// `(d/dx, d/dy)` of a scalar field. Both components share one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    dx: GridField,
    dy: GridField,
}

impl Gradient {
    /// Pair two derivative fields.
    ///
    /// Returns `Err(DiffError::ShapeMismatch)` if `dy` differs in shape from `dx`.
    pub fn new(dx: GridField, dy: GridField) -> Result<Self, DiffError> {
        if !dx.same_shape(&dy) {
            return Err(DiffError::ShapeMismatch {
                expected: dx.shape(),
                actual: dy.shape(),
            });
        }
        Ok(Self { dx, dy })
    }

    /// Derivative along axis 0 (columns).
    pub fn dx(&self) -> &GridField {
        &self.dx
    }

    /// Derivative along axis 1 (rows).
    pub fn dy(&self) -> &GridField {
        &self.dy
    }

    /// Split into `(dx, dy)`.
    pub fn into_parts(self) -> (GridField, GridField) {
        (self.dx, self.dy)
    }

    /// Cell-wise Euclidean norm `sqrt(dx^2 + dy^2)`.
    pub fn magnitude(&self) -> GridField {
        let mut out = self.dx.clone();
        for (m, &y) in out.values_mut().iter_mut().zip(self.dy.as_slice()) {
            *m = m.hypot(y);
        }
        out
    }
}

/// Differentiate `field` along both axes with one scheme.
///
/// `step_x` is the column spacing, `step_y` the row spacing. Fails if
/// either axis is too short for `scheme`.
pub fn gradient(
    field: &GridField,
    scheme: Scheme,
    step_x: StepSize,
    step_y: StepSize,
    convention: RowConvention,
) -> Result<Gradient, DiffError> {
    Ok(Gradient {
        dx: scheme.apply_with(field, Axis::X, step_x, convention)?,
        dy: scheme.apply_with(field, Axis::Y, step_y, convention)?,
    })
}
