//! Cell-wise saturation fields.

use gridiff_core::GridField;

use crate::constants::ThermoConstants;
use crate::error::ThermoError;
use crate::saturation::{mixing_ratio_unchecked, vapor_pressure_unchecked};
use crate::units::{PressureUnit, TemperatureUnit};

/// Saturation vapour pressure at every cell of `temperature`.
///
/// Fails on the first invalid cell in row-major order, reporting its
/// position in [`ThermoError::AtCell`].
pub fn vapor_pressure_field(
    temperature: &GridField,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<GridField, ThermoError> {
    constants.validate()?;
    let cols = temperature.cols();
    let mut out = temperature.clone();
    for (i, v) in out.values_mut().iter_mut().enumerate() {
        *v = vapor_pressure_unchecked(*v, t_unit, p_unit, constants)
            .map_err(|e| at_cell(i, cols, e))?;
    }
    Ok(out)
}

/// Saturation mixing ratio at every cell, pairing `temperature` and
/// `pressure` by position.
///
/// Pressures are in `p_unit`. The two fields must share a shape.
pub fn mixing_ratio_field(
    temperature: &GridField,
    pressure: &GridField,
    t_unit: TemperatureUnit,
    p_unit: PressureUnit,
    constants: &ThermoConstants,
) -> Result<GridField, ThermoError> {
    constants.validate()?;
    if !temperature.same_shape(pressure) {
        return Err(ThermoError::ShapeMismatch {
            expected: temperature.shape(),
            actual: pressure.shape(),
        });
    }
    let cols = temperature.cols();
    let mut out = temperature.clone();
    for (i, (v, &p)) in out
        .values_mut()
        .iter_mut()
        .zip(pressure.as_slice())
        .enumerate()
    {
        *v = mixing_ratio_unchecked(*v, p, t_unit, p_unit, constants)
            .map_err(|e| at_cell(i, cols, e))?
            .mixing_ratio;
    }
    Ok(out)
}

fn at_cell(index: usize, cols: usize, reason: ThermoError) -> ThermoError {
    ThermoError::AtCell {
        row: index / cols,
        col: index % cols,
        reason: Box::new(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::{saturation_mixing_ratio, saturation_vapor_pressure};

    const C: TemperatureUnit = TemperatureUnit::Celsius;
    const HPA: PressureUnit = PressureUnit::Hectopascal;

    #[test]
    fn field_matches_scalar() {
        let c = ThermoConstants::default();
        let t = GridField::from_fn(3, 4, |r, col| -5.0 + 3.0 * r as f64 + col as f64).unwrap();
        let e = vapor_pressure_field(&t, C, HPA, &c).unwrap();
        assert_eq!(e.shape(), t.shape());
        for r in 0..3 {
            for col in 0..4 {
                let want =
                    saturation_vapor_pressure(t.get(r, col).unwrap(), C, HPA, &c).unwrap();
                assert_eq!(e.get(r, col), Some(want));
            }
        }
    }

    #[test]
    fn mixing_ratio_field_matches_scalar() {
        let c = ThermoConstants::default();
        let t = GridField::from_fn(2, 3, |r, col| 10.0 + r as f64 + col as f64).unwrap();
        let p = GridField::from_fn(2, 3, |r, _| 1000.0 - 100.0 * r as f64).unwrap();
        let w = mixing_ratio_field(&t, &p, C, HPA, &c).unwrap();
        for r in 0..2 {
            for col in 0..3 {
                let want = saturation_mixing_ratio(
                    t.get(r, col).unwrap(),
                    p.get(r, col).unwrap(),
                    C,
                    HPA,
                    &c,
                )
                .unwrap();
                assert_eq!(w.get(r, col), Some(want.mixing_ratio));
            }
        }
    }

    #[test]
    fn reports_failing_cell() {
        let c = ThermoConstants::default();
        let t = GridField::from_rows(vec![vec![10.0, 10.0], vec![10.0, -400.0]]).unwrap();
        let err = vapor_pressure_field(&t, C, HPA, &c).unwrap_err();
        match err {
            ThermoError::AtCell { row, col, reason } => {
                assert_eq!((row, col), (1, 1));
                assert!(matches!(*reason, ThermoError::InvalidTemperature { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shape_mismatch() {
        let c = ThermoConstants::default();
        let t = GridField::filled(2, 3, 15.0).unwrap();
        let p = GridField::filled(3, 2, 1000.0).unwrap();
        assert_eq!(
            mixing_ratio_field(&t, &p, C, HPA, &c),
            Err(ThermoError::ShapeMismatch {
                expected: (2, 3),
                actual: (3, 2),
            })
        );
    }
}
