//! Test fixtures and assertions for gridiff development.
//!
//! Provides canned [`GridField`]s with known derivatives, deterministic
//! noise fields, and approximate-equality assertions used by the unit,
//! integration and property tests across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{column_ramp, noise_field, quadratic_row, row_ramp};

use gridiff_core::GridField;

/// Assert two fields have the same shape and differ by at most `tol` per cell.
///
/// Pass `tol = 0.0` for exact equality.
#[track_caller]
pub fn assert_fields_close(actual: &GridField, expected: &GridField, tol: f64) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "shape mismatch: actual {:?}, expected {:?}",
        actual.shape(),
        expected.shape()
    );
    for (i, (a, e)) in actual.as_slice().iter().zip(expected.as_slice()).enumerate() {
        let (r, c) = (i / actual.cols(), i % actual.cols());
        assert!(
            (a - e).abs() <= tol,
            "cell ({r},{c}): got {a}, expected {e} (tol {tol})"
        );
    }
}

/// Indices of rows whose every cell is exactly `0.0`.
pub fn zero_rows(field: &GridField) -> Vec<usize> {
    (0..field.rows())
        .filter(|&r| field.row(r).iter().all(|&v| v == 0.0))
        .collect()
}

/// Indices of columns whose every cell is exactly `0.0`.
pub fn zero_columns(field: &GridField) -> Vec<usize> {
    (0..field.cols())
        .filter(|&c| field.column(c).iter().all(|&v| v == 0.0))
        .collect()
}
