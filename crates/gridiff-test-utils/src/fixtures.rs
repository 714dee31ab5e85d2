//! Reusable grid fixtures.
//!
//! - [`quadratic_row`]: `1 x n` row of squares `[0, 1, 4, 9, ...]`.
//! - [`column_ramp`]: `f[r][c] = c`, slope 1 along axis 0.
//! - [`row_ramp`]: `f[r][c] = r`, slope 1 along axis 1 in index order.
//! - [`noise_field`]: deterministic pseudo-random samples in `[-1, 1)`.

use gridiff_core::GridField;
use rand::prelude::*;
use rand::rngs::ChaCha8Rng;

/// `1 x n` field holding `i^2` in column `i`.
pub fn quadratic_row(n: usize) -> GridField {
    GridField::from_fn(1, n, |_, c| (c * c) as f64).expect("fixture shape must be non-empty")
}

/// `rows x cols` field with `f[r][c] = c`.
pub fn column_ramp(rows: usize, cols: usize) -> GridField {
    GridField::from_fn(rows, cols, |_, c| c as f64).expect("fixture shape must be non-empty")
}

/// `rows x cols` field with `f[r][c] = r`.
pub fn row_ramp(rows: usize, cols: usize) -> GridField {
    GridField::from_fn(rows, cols, |r, _| r as f64).expect("fixture shape must be non-empty")
}

/// `rows x cols` field of samples in `[-1, 1)` from a ChaCha8 stream.
///
/// The same `seed` always yields the same field.
pub fn noise_field(rows: usize, cols: usize, seed: u64) -> GridField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    GridField::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0))
        .expect("fixture shape must be non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_row_values() {
        assert_eq!(quadratic_row(5).as_slice(), &[0.0, 1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn ramps() {
        let c = column_ramp(2, 3);
        assert_eq!(c.as_slice(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        let r = row_ramp(2, 3);
        assert_eq!(r.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn noise_is_deterministic_and_bounded() {
        let a = noise_field(4, 6, 42);
        let b = noise_field(4, 6, 42);
        let c = noise_field(4, 6, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_slice().iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn noise_matches_seeded_stream() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let expected: Vec<f64> = (0..6).map(|_| rng.random_range(-1.0..1.0)).collect();
        assert_eq!(noise_field(2, 3, 7).as_slice(), expected.as_slice());
    }

    #[test]
    fn noise_spans_both_signs() {
        let f = noise_field(16, 16, 1);
        assert!(f.as_slice().iter().any(|&v| v < 0.0));
        assert!(f.as_slice().iter().any(|&v| v > 0.0));
    }
}
