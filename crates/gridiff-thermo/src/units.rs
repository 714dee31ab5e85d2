//! Temperature and pressure units.

/// Unit of an input temperature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Kelvin.
    #[default]
    Kelvin,
    /// Degrees Celsius.
    Celsius,
}

impl TemperatureUnit {
    /// Offset between the Celsius and Kelvin scales.
    pub const CELSIUS_OFFSET: f64 = 273.15;

    /// Convert a temperature in this unit to kelvin.
    pub fn to_kelvin(self, t: f64) -> f64 {
        match self {
            Self::Kelvin => t,
            Self::Celsius => t + Self::CELSIUS_OFFSET,
        }
    }
}

/// Unit of pressures, both inputs and outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressureUnit {
    /// Pascal.
    #[default]
    Pascal,
    /// Hectopascal (100 Pa).
    Hectopascal,
}

impl PressureUnit {
    /// Convert a pressure in pascal to this unit.
    pub fn from_pascal(self, p: f64) -> f64 {
        match self {
            Self::Pascal => p,
            Self::Hectopascal => p / 100.0,
        }
    }

    /// Convert a pressure in this unit to pascal.
    pub fn to_pascal(self, p: f64) -> f64 {
        match self {
            Self::Pascal => p,
            Self::Hectopascal => p * 100.0,
        }
    }
}
