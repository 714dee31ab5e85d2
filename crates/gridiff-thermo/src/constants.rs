//! Physical constants for the saturation formulas.

use crate::error::ThermoError;

/// Immutable constants for the saturation formulas.
///
/// Defaults follow the Clausius–Clapeyron fit `e_s = 2.53e11 exp(-5420 / T)` Pa
/// and standard molar masses for dry air and water.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermoConstants {
    /// Pre-exponential factor `A`, Pa. Default: 2.53e11.
    pub a: f64,
    /// Exponential temperature scale `B`, K. Default: 5.42e3.
    pub b: f64,
    /// Universal gas constant `R`, J/(mol K). Default: 8.314.
    pub gas_constant: f64,
    /// Molar mass of dry air, g/mol. Default: 28.97.
    pub dry_air_molar_mass: f64,
    /// Molar mass of water, g/mol. Default: 18.016.
    pub water_molar_mass: f64,
}

impl Default for ThermoConstants {
    fn default() -> Self {
        Self {
            a: 2.53e11,
            b: 5.42e3,
            gas_constant: 8.314,
            dry_air_molar_mass: 28.97,
            water_molar_mass: 18.016,
        }
    }
}

impl ThermoConstants {
    /// Specific gas constant for dry air, J/(kg K).
    pub fn dry_air_gas_constant(&self) -> f64 {
        1000.0 * self.gas_constant / self.dry_air_molar_mass
    }

    /// Specific gas constant for water vapour, J/(kg K).
    pub fn water_vapor_gas_constant(&self) -> f64 {
        1000.0 * self.gas_constant / self.water_molar_mass
    }

    /// Ratio `R_d / R_v` (about 0.622 with the defaults).
    pub fn epsilon(&self) -> f64 {
        self.dry_air_gas_constant() / self.water_vapor_gas_constant()
    }

    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> Result<(), ThermoError> {
        let named = [
            ("a", self.a),
            ("b", self.b),
            ("gas_constant", self.gas_constant),
            ("dry_air_molar_mass", self.dry_air_molar_mass),
            ("water_molar_mass", self.water_molar_mass),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThermoError::InvalidConstants {
                    reason: format!("{name} must be finite and positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}
