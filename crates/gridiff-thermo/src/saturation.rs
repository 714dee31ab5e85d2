//! Scalar saturation formulas.

use crate::constants::ThermoConstants;
use crate::error::ThermoError;
use crate::units::{PressureUnit, TemperatureUnit};

/// Saturation mixing ratio together with the vapour pressure it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationState {
    /// Dimensionless ratio (kg/kg, not g/kg).
    pub mixing_ratio: f64,
    /// Saturation vapour pressure, in the requested pressure unit.
    pub vapor_pressure: f64,
}

/// Saturation vapour pressure `A exp(-B / T)` at temperature `t`.
///
/// `t` is interpreted in `t_unit`; the result is in `p_unit`.
///
/// ```
/// use gridiff_thermo::{
///     saturation_vapor_pressure, PressureUnit, TemperatureUnit, ThermoConstants,
/// };
///
/// let c = ThermoConstants::default();
/// let (celsius, kelvin) = (TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
/// let pa = saturation_vapor_pressure(0.0, celsius, PressureUnit::Pascal, &c).unwrap();
/// let hpa = saturation_vapor_pressure(273.15, kelvin, PressureUnit::Hectopascal, &c).unwrap();
/// assert!((pa / 100.0 - hpa).abs() < 1e-12);
/// ```
pub fn saturation_vapor_pressure(
    t: f64,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<f64, ThermoError> {
    constants.validate()?;
    vapor_pressure_unchecked(t, t_unit, p_unit, constants)
}

/// Saturation mixing ratio `eps * e_s / (P - e_s)` at temperature `t` and
/// total pressure `p`.
///
/// `p` and the returned vapour pressure are both in `p_unit`. Fails when
/// `p <= e_s`.
pub fn saturation_mixing_ratio(
    t: f64,
    p: f64,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<SaturationState, ThermoError> {
    constants.validate()?;
    mixing_ratio_unchecked(t, p, t_unit, p_unit, constants)
}

pub(crate) fn vapor_pressure_unchecked(
    t: f64,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<f64, ThermoError> {
    let kelvin = t_unit.to_kelvin(t);
    if !kelvin.is_finite() || kelvin <= 0.0 {
        return Err(ThermoError::InvalidTemperature { kelvin });
    }
    let e_s = constants.a * (-constants.b / kelvin).exp();
    Ok(p_unit.from_pascal(e_s))
}

pub(crate) fn mixing_ratio_unchecked(
    t: f64,
    p: f64,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<SaturationState, ThermoError> {
    if !p.is_finite() || p <= 0.0 {
        return Err(ThermoError::InvalidPressure { pressure: p });
    }
    let e_s = vapor_pressure_unchecked(t, t_unit, p_unit, constants)?;
    if p <= e_s {
        return Err(ThermoError::PressureBelowVapor {
            pressure: p,
            vapor_pressure: e_s,
        });
    }
    Ok(SaturationState {
        mixing_ratio: constants.epsilon() * e_s / (p - e_s),
        vapor_pressure: e_s,
    })
}
