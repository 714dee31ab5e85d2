//! Worker pool evaluating independent derivative requests in parallel.
//!
//! ```text
//!   caller                         workers (N threads)
//!     |  evaluate(requests)              |
//!     |---[task_tx: bounded(N*depth)]--->| task_rx.recv()
//!     |                                  | config.run(&field)
//!     |<--[reply_tx: bounded(batch)]-----| reply
//!     |  reorder by submission index     |
//! ```
//!
//! Each worker allocates its own output field and never writes into an
//! input, so requests need no locking. Fields are shared via `Arc` to
//! avoid copying large inputs into every task.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use gridiff_core::{DiffError, GridField};
use indexmap::IndexMap;

use crate::config::{BatchConfig, ConfigError, DiffConfig};

/// Per-label results in submission order.
pub type BatchResults = IndexMap<String, Result<GridField, DiffError>>;

/// One labelled request in a batch.
#[derive(Clone, Debug)]
pub struct DiffRequest {
    /// Key the result is returned under. Unique within a batch.
    pub label: String,
    /// Input field, shared read-only with the worker.
    pub field: Arc<GridField>,
    /// What to compute.
    pub config: DiffConfig,
}

impl DiffRequest {
    /// Build a request.
    pub fn new(label: impl Into<String>, field: Arc<GridField>, config: DiffConfig) -> Self {
        Self {
            label: label.into(),
            field,
            config,
        }
    }
}

struct Task {
    index: usize,
    field: Arc<GridField>,
    config: DiffConfig,
    reply: Sender<(usize, Result<GridField, DiffError>)>,
}

/// Outcome of [`BatchEvaluator::shutdown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Worker threads that were running at shutdown.
    pub workers: usize,
    /// Worker threads joined without panicking.
    pub workers_joined: usize,
}

/// A fixed pool of threads that evaluates [`DiffRequest`]s.
///
/// Workers run until the evaluator is shut down or dropped.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gridiff_core::GridField;
/// use gridiff_engine::{BatchConfig, BatchEvaluator, DiffConfig, DiffRequest};
/// use gridiff_stencil::Scheme;
///
/// let pool = BatchEvaluator::new(BatchConfig {
///     worker_count: Some(2),
///     ..Default::default()
/// })
/// .unwrap();
/// let f = Arc::new(GridField::from_rows(vec![vec![0.0, 1.0, 4.0, 9.0, 16.0]]).unwrap());
/// let results = pool
///     .evaluate(vec![
///         DiffRequest::new("fwd", f.clone(), DiffConfig::new(Scheme::Forward, 0, 1.0)),
///         DiffRequest::new("bad", f, DiffConfig::new(Scheme::Forward, 9, 1.0)),
///     ])
///     .unwrap();
/// assert_eq!(results["fwd"].as_ref().unwrap().as_slice(), &[1.0, 3.0, 5.0, 7.0, 0.0]);
/// assert!(results["bad"].is_err());
/// ```
pub struct BatchEvaluator {
    task_tx: Option<Sender<Task>>,
    workers: Vec<JoinHandle<()>>,
}

impl BatchEvaluator {
    /// Validate `config` and spawn the worker threads.
    pub fn new(config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let worker_count = config.resolved_worker_count();
        let (task_tx, task_rx) = crossbeam_channel::bounded(config.queue_capacity());

        let mut workers = Vec::with_capacity(worker_count);
        for i in 0..worker_count {
            let rx = task_rx.clone();
            let handle = thread::Builder::new()
                .name(format!("gridiff-worker-{i}"))
                .spawn(move || worker_loop(rx))
                .map_err(|e| ConfigError::ThreadSpawnFailed {
                    reason: format!("worker {i}: {e}"),
                })?;
            workers.push(handle);
        }

        Ok(Self {
            task_tx: Some(task_tx),
            workers,
        })
    }

    /// Number of worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Evaluate every request, blocking until all replies arrive.
    ///
    /// Results are keyed by label in submission order. A request whose
    /// derivative fails carries its [`DiffError`]; other requests are
    /// unaffected. Returns `Err` only for batch-level problems: duplicate
    /// labels or a pool that can no longer reply.
    pub fn evaluate(&self, requests: Vec<DiffRequest>) -> Result<BatchResults, ConfigError> {
        check_unique_labels(&requests)?;

        let task_tx = self.task_tx.as_ref().ok_or(ConfigError::WorkerDisconnected)?;
        let n = requests.len();
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(n.max(1));

        let mut labels = Vec::with_capacity(n);
        for (index, req) in requests.into_iter().enumerate() {
            labels.push(req.label);
            task_tx
                .send(Task {
                    index,
                    field: req.field,
                    config: req.config,
                    reply: reply_tx.clone(),
                })
                .map_err(|_| ConfigError::WorkerDisconnected)?;
        }
        // Only in-flight tasks hold reply senders now.
        drop(reply_tx);

        let mut slots: Vec<Option<Result<GridField, DiffError>>> = (0..n).map(|_| None).collect();
        for _ in 0..n {
            let (index, result) = reply_rx
                .recv()
                .map_err(|_| ConfigError::WorkerDisconnected)?;
            slots[index] = Some(result);
        }

        let mut results = IndexMap::with_capacity(n);
        for (label, slot) in labels.into_iter().zip(slots) {
            let result = slot.ok_or(ConfigError::WorkerDisconnected)?;
            results.insert(label, result);
        }
        Ok(results)
    }

    /// Close the task channel and join every worker.
    pub fn shutdown(mut self) -> ShutdownReport {
        self.shutdown_inner()
    }

    fn shutdown_inner(&mut self) -> ShutdownReport {
        drop(self.task_tx.take());
        let workers = self.workers.len();
        let workers_joined = self
            .workers
            .drain(..)
            .map(JoinHandle::join)
            .filter(Result::is_ok)
            .count();
        ShutdownReport {
            workers,
            workers_joined,
        }
    }
}

impl Drop for BatchEvaluator {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

fn check_unique_labels(requests: &[DiffRequest]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(requests.len());
    for req in requests {
        if !seen.insert(req.label.as_str()) {
            return Err(ConfigError::DuplicateLabel {
                label: req.label.clone(),
            });
        }
    }
    Ok(())
}

/// Runs until the task channel is closed (sender dropped).
fn worker_loop(task_rx: Receiver<Task>) {
    while let Ok(task) = task_rx.recv() {
        let result = task.config.run(&task.field);
        // The caller may have given up on this batch; nothing to do then.
        let _ = task.reply.send((task.index, result));
    }
}
