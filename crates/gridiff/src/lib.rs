//! gridiff: finite-difference derivatives over 2-D gridded fields.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridiff sub-crates. Most users only need `gridiff` as a single dependency.
//!
//! # Quick start
//!
//! ```rust
//! use gridiff::prelude::*;
//!
//! // Three rows of a north-up grid: row 0 is the northern edge.
//! let f = GridField::from_rows(vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 2.0],
//! ])
//! .unwrap();
//!
//! // Axis 1 differences read toward row 0, so an increasing row index
//! // gives a negative slope.
//! let dy = forward(&f, 1, 1.0).unwrap();
//! assert_eq!(dy.as_slice(), &[0.0, 0.0, -1.0, -1.0, -1.0, -1.0]);
//!
//! // Plain index order is one convention away.
//! let dy = Scheme::Forward
//!     .apply_with(&f, Axis::Y, StepSize::new(1.0).unwrap(), RowConvention::IndexOrder)
//!     .unwrap();
//! assert_eq!(dy.as_slice(), &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
//!
//! // Invalid requests are rejected, never clamped.
//! assert_eq!(centered(&f, 2, 1.0), Err(DiffError::InvalidAxis { value: 2 }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridiff-core` | `GridField`, `Axis`, `StepSize`, error types |
//! | [`stencil`] | `gridiff-stencil` | Schemes, stencils, row conventions, gradient |
//! | [`engine`] | `gridiff-engine` | Validated configs and the batch worker pool |
//! | [`thermo`] | `gridiff-thermo` | Saturation vapour pressure and mixing ratio |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid fields, axes, step sizes and errors (`gridiff-core`).
pub use gridiff_core as types;

/// Difference schemes and their evaluation (`gridiff-stencil`).
///
/// [`stencil::Scheme`] is the main entry point; [`stencil::forward`],
/// [`stencil::backward`] and [`stencil::centered`] accept raw axis
/// indices and step sizes.
pub use gridiff_stencil as stencil;

/// Configuration and batch evaluation (`gridiff-engine`).
///
/// Evaluate many labelled requests on a fixed pool of threads with
/// [`engine::BatchEvaluator`].
pub use gridiff_engine as engine;

/// Moist thermodynamics over fields (`gridiff-thermo`).
pub use gridiff_thermo as thermo;

/// Common imports for typical gridiff usage.
///
/// ```rust
/// use gridiff::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridiff_core::{Axis, DiffError, GridError, GridField, Shape, StepSize};

    // Operators
    pub use gridiff_stencil::{
        backward, centered, forward, gradient, Gradient, RowConvention, Scheme,
    };

    // Engine
    pub use gridiff_engine::{BatchConfig, BatchEvaluator, ConfigError, DiffConfig, DiffRequest};

    // Thermodynamics
    pub use gridiff_thermo::{PressureUnit, TemperatureUnit, ThermoConstants, ThermoError};
}
