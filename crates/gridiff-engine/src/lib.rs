//! Request configuration and batch evaluation for gridiff.
//!
//! [`DiffConfig`] bundles a scheme, raw axis selector, raw step size and
//! row convention, validating them into typed values before any work is
//! done. [`BatchEvaluator`] runs many independent requests across a pool
//! of worker threads and returns the results in submission order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;

pub use batch::{BatchEvaluator, BatchResults, DiffRequest, ShutdownReport};
pub use config::{BatchConfig, ConfigError, DiffConfig};
