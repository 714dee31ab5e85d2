//! Benchmark profiles for the gridiff derivative engine.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`reference_batch`]: every scheme, axis and convention over one field

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use gridiff_core::GridField;
use gridiff_engine::{DiffConfig, DiffRequest};
use gridiff_stencil::{RowConvention, Scheme};
use rand::prelude::*;
use rand::rngs::ChaCha8Rng;

/// Build a 100x100 benchmark field seeded by `seed`.
pub fn reference_profile(seed: u64) -> GridField {
    profile_field(100, 100, seed)
}

/// Build a 316x316 benchmark field seeded by `seed`.
pub fn stress_profile(seed: u64) -> GridField {
    profile_field(316, 316, seed)
}

/// Every scheme on both axes under all three row conventions, over one
/// shared field. Eighteen requests, labelled `scheme/axis/convention`.
pub fn reference_batch(field: Arc<GridField>, step: f64) -> Vec<DiffRequest> {
    let mut requests = Vec::with_capacity(18);
    for scheme in Scheme::ALL {
        for axis in 0..2 {
            for convention in [
                RowConvention::Legacy,
                RowConvention::IndexOrder,
                RowConvention::NorthUp,
            ] {
                let config = DiffConfig {
                    scheme,
                    axis,
                    step,
                    convention,
                };
                requests.push(DiffRequest::new(
                    format!("{scheme}/{axis}/{convention:?}"),
                    Arc::clone(&field),
                    config,
                ));
            }
        }
    }
    requests
}

/// Smooth surface with a small ripple drawn from a ChaCha8 stream seeded
/// by `seed`.
fn profile_field(rows: usize, cols: usize, seed: u64) -> GridField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|i| {
            let (r, c) = ((i / cols) as f64, (i % cols) as f64);
            let base = (0.05 * r).sin() * (0.07 * c).cos();
            base + 1e-3 * rng.random_range(-1.0..1.0)
        })
        .collect();
    match GridField::from_vec(rows, cols, data) {
        Ok(field) => field,
        Err(e) => panic!("profile dimensions {rows}x{cols} rejected: {e}"),
    }
}
