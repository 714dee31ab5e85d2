//! Error type for the thermodynamics crate.

use std::error::Error;
use std::fmt;

use gridiff_core::Shape;

/// Errors from saturation calculations.
#[derive(Clone, Debug, PartialEq)]
pub enum ThermoError {
    /// Absolute temperature is zero, negative, or not finite.
    InvalidTemperature {
        /// The temperature after conversion to kelvin.
        kelvin: f64,
    },
    /// Pressure is zero, negative, or not finite.
    InvalidPressure {
        /// The rejected pressure, in the caller's unit.
        pressure: f64,
    },
    /// Total pressure does not exceed the saturation vapour pressure,
    /// so the mixing ratio is undefined.
    PressureBelowVapor {
        /// Total pressure, in the caller's unit.
        pressure: f64,
        /// Saturation vapour pressure, in the same unit.
        vapor_pressure: f64,
    },
    /// A [`ThermoConstants`](crate::ThermoConstants) value is unusable.
    InvalidConstants {
        /// Which constant and why.
        reason: String,
    },
    /// Temperature and pressure fields differ in shape.
    ShapeMismatch {
        /// Shape of the temperature field.
        expected: Shape,
        /// Shape of the pressure field.
        actual: Shape,
    },
    /// A grid evaluation failed at one cell.
    AtCell {
        /// Row of the failing cell.
        row: usize,
        /// Column of the failing cell.
        col: usize,
        /// The per-value failure.
        reason: Box<ThermoError>,
    },
}

impl fmt::Display for ThermoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemperature { kelvin } => {
                write!(f, "temperature must be a positive finite kelvin value, got {kelvin}")
            }
            Self::InvalidPressure { pressure } => {
                write!(f, "pressure must be positive and finite, got {pressure}")
            }
            Self::PressureBelowVapor {
                pressure,
                vapor_pressure,
            } => write!(
                f,
                "pressure {pressure} does not exceed saturation vapour pressure {vapor_pressure}"
            ),
            Self::InvalidConstants { reason } => write!(f, "invalid constants: {reason}"),
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "pressure field is {}x{}, temperature field is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::AtCell { row, col, reason } => write!(f, "cell ({row},{col}): {reason}"),
        }
    }
}

impl Error for ThermoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AtCell { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}
