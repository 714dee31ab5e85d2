//! Core types for the gridiff finite-difference workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data carried through every derivative operator: the row-major
//! [`GridField`], the [`Axis`] selector, the validated [`StepSize`], and
//! the error enums shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod field;
pub mod step;

pub use axis::Axis;
pub use error::{DiffError, GridError};
pub use field::{GridField, Shape};
pub use step::StepSize;
