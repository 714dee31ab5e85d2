//! Closed-form moist thermodynamics for gridiff fields.
//!
//! Saturation vapour pressure `e_s = A exp(-B / T)` and saturation mixing
//! ratio `w_s = eps * e_s / (P - e_s)`, evaluated per value or per grid
//! cell. All physical constants travel in an explicit [`ThermoConstants`]
//! value; nothing is read from process-wide state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod grid;
pub mod saturation;
pub mod units;

pub use constants::ThermoConstants;
pub use error::ThermoError;
pub use grid::{mixing_ratio_field, vapor_pressure_field};
pub use saturation::{saturation_mixing_ratio, saturation_vapor_pressure, SaturationState};
pub use units::{PressureUnit, TemperatureUnit};
