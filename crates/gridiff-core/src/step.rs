//! Validated grid spacing.

use crate::error::DiffError;

/// Physical distance between adjacent grid points along the differencing axis.
///
/// Always finite and strictly positive, so dividing by it never yields
/// `Inf` or `NaN`. Owned by the caller and passed by value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct StepSize(f64);

impl StepSize {
    /// Validate a raw spacing.
    ///
    /// Returns [`DiffError::NonPositiveStepSize`] for zero, negative, or NaN
    /// values and [`DiffError::NonFiniteStepSize`] for infinities.
    pub fn new(value: f64) -> Result<Self, DiffError> {
        if value.is_nan() || value <= 0.0 {
            return Err(DiffError::NonPositiveStepSize { value });
        }
        if value.is_infinite() {
            return Err(DiffError::NonFiniteStepSize { value });
        }
        Ok(Self(value))
    }

    /// The spacing as a plain `f64`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StepSize {
    type Error = DiffError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_finite() {
        assert_eq!(StepSize::new(0.25).unwrap().get(), 0.25);
        assert!(StepSize::new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert!(matches!(
            StepSize::new(0.0),
            Err(DiffError::NonPositiveStepSize { .. })
        ));
        assert!(matches!(
            StepSize::new(-1.5),
            Err(DiffError::NonPositiveStepSize { .. })
        ));
        assert!(matches!(
            StepSize::new(f64::NAN),
            Err(DiffError::NonPositiveStepSize { .. })
        ));
    }

    #[test]
    fn rejects_infinity() {
        assert_eq!(
            StepSize::new(f64::INFINITY),
            Err(DiffError::NonFiniteStepSize {
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            StepSize::new(f64::NEG_INFINITY),
            Err(DiffError::NonPositiveStepSize { .. })
        ));
    }
}
