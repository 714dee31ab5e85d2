//! Request and pool configuration, validation, and error types.
//!
//! [`DiffConfig`] describes one derivative request in raw caller terms;
//! [`validate()`](DiffConfig::validate) checks it before any field is
//! touched. [`BatchConfig`] sizes the [`BatchEvaluator`](crate::BatchEvaluator)
//! worker pool.

use std::error::Error;
use std::fmt;

use gridiff_core::{Axis, DiffError, GridField, StepSize};
use gridiff_stencil::{RowConvention, Scheme};

// ── DiffConfig ─────────────────────────────────────────────────────

/// One derivative request: which scheme, which axis, what spacing.
///
/// `axis` and `step` are kept raw so that configurations assembled from
/// untyped sources are validated in one place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffConfig {
    /// Difference scheme. Default: centered.
    pub scheme: Scheme,
    /// Axis selector, 0 (x/columns) or 1 (y/rows). Default: 0.
    pub axis: usize,
    /// Grid spacing along the axis. Default: 1.0.
    pub step: f64,
    /// Row-axis orientation. Default: [`RowConvention::Legacy`].
    pub convention: RowConvention,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Centered,
            axis: 0,
            step: 1.0,
            convention: RowConvention::Legacy,
        }
    }
}

impl DiffConfig {
    /// Shorthand for a request with the default row convention.
    pub fn new(scheme: Scheme, axis: usize, step: f64) -> Self {
        Self {
            scheme,
            axis,
            step,
            convention: RowConvention::default(),
        }
    }

    /// Check the axis selector and step size.
    ///
    /// Grid-size preconditions depend on the field and are checked by
    /// [`run`](Self::run).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ()).map_err(ConfigError::Diff)
    }

    /// Typed axis and step size, or the first precondition violated.
    pub fn resolve(&self) -> Result<(Axis, StepSize), DiffError> {
        let axis = Axis::try_from(self.axis)?;
        let step = StepSize::new(self.step)?;
        Ok((axis, step))
    }

    /// Differentiate `field` according to this configuration.
    pub fn run(&self, field: &GridField) -> Result<GridField, DiffError> {
        let (axis, step) = self.resolve()?;
        self.scheme.apply_with(field, axis, step, self.convention)
    }
}

// ── BatchConfig ────────────────────────────────────────────────────

/// Configuration for [`BatchEvaluator`](crate::BatchEvaluator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Task queue slots per worker. Default: 4.
    pub queue_depth_per_worker: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            queue_depth_per_worker: 4,
        }
    }
}

impl BatchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }

    /// Capacity of the shared task channel.
    pub fn queue_capacity(&self) -> usize {
        self.resolved_worker_count() * self.queue_depth_per_worker
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_depth_per_worker == 0 {
            return Err(ConfigError::QueueDepthZero);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors from configuration validation and the batch evaluator itself.
///
/// Per-request derivative failures are not `ConfigError`s; they are
/// returned alongside each request's label in
/// [`BatchResults`](crate::BatchResults).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A [`DiffConfig`] failed validation.
    Diff(DiffError),
    /// `queue_depth_per_worker` is zero.
    QueueDepthZero,
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// Every worker exited before all replies arrived.
    WorkerDisconnected,
    /// Two requests in one batch share a label.
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diff(e) => write!(f, "invalid derivative request: {e}"),
            Self::QueueDepthZero => write!(f, "queue_depth_per_worker must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn worker thread: {reason}")
            }
            Self::WorkerDisconnected => write!(f, "batch workers disconnected"),
            Self::DuplicateLabel { label } => write!(f, "duplicate request label '{label}'"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Diff(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DiffError> for ConfigError {
    fn from(e: DiffError) -> Self {
        Self::Diff(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiff_test_utils::quadratic_row;

    #[test]
    fn default_is_valid() {
        assert!(DiffConfig::default().validate().is_ok());
        assert!(BatchConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_reports_axis_then_step() {
        let cfg = DiffConfig::new(Scheme::Forward, 3, -1.0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Diff(DiffError::InvalidAxis { value: 3 }))
        );
        let cfg = DiffConfig::new(Scheme::Forward, 1, -1.0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Diff(DiffError::NonPositiveStepSize { value: -1.0 }))
        );
        let err = cfg.validate().unwrap_err();
        assert!(err.source().is_some());
    }

    #[test]
    fn run_matches_direct_call() {
        let f = quadratic_row(5);
        let cfg = DiffConfig::new(Scheme::Backward, 0, 1.0);
        assert_eq!(cfg.run(&f).unwrap().as_slice(), &[0.0, 1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn worker_count_clamped() {
        let cfg = BatchConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 1);
        let cfg = BatchConfig {
            worker_count: Some(1000),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
        assert_eq!(cfg.queue_capacity(), 256);
        let auto = BatchConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto));
    }

    #[test]
    fn zero_queue_depth_rejected() {
        let cfg = BatchConfig {
            worker_count: Some(2),
            queue_depth_per_worker: 0,
        };
        assert_eq!(cfg.validate(), Err(ConfigError::QueueDepthZero));
    }

    proptest::proptest! {
        #[test]
        fn run_rejects_exactly_the_invalid_configs(axis in 0usize..4, step in -2.0f64..2.0) {
            let f = quadratic_row(6);
            let cfg = DiffConfig::new(Scheme::Backward, axis, step);
            let valid = axis < 2 && step > 0.0;
            proptest::prop_assert_eq!(cfg.validate().is_ok(), valid);
            if !valid {
                proptest::prop_assert!(cfg.run(&f).is_err());
            }
        }

        #[test]
        fn explicit_worker_count_is_clamped(n in 0usize..1000, depth in 1usize..16) {
            let cfg = BatchConfig { worker_count: Some(n), queue_depth_per_worker: depth };
            let w = cfg.resolved_worker_count();
            proptest::prop_assert!((1..=64).contains(&w));
            proptest::prop_assert_eq!(cfg.queue_capacity(), w * depth);
        }
    }
}
