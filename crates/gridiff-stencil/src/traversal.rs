//! Shared traversal for every stencil.
//!
//! Walks the interior of each line parallel to the differencing axis and
//! writes `sum(w * f[p + o]) / (divisor * h)`. Boundary cells stay at the
//! zero written up front. Preconditions (axis extent, output shape) are
//! checked by the caller in [`crate::scheme`].

use gridiff_core::{Axis, GridField, StepSize};

use crate::guard::CoverageGuard;
use crate::stencil::{Stencil, Tap};

/// Evaluate `stencil` over `field` along `axis`, writing every cell of `out`.
pub(crate) fn differentiate_into(
    field: &GridField,
    axis: Axis,
    step: StepSize,
    stencil: &Stencil,
    scheme: &'static str,
    out: &mut GridField,
) {
    let shape = field.shape();
    let len = axis.extent(shape);
    let lines = axis.lines(shape);
    let stride = axis_stride(axis, shape.1);
    let interior = stencil.interior(len);
    let n = interior.len();
    let denom = stencil.divisor() * step.get();
    let downward = stencil.reads_downward();
    let taps = stencil.taps();
    let src = field.as_slice();

    let dst = out.values_mut();
    dst.fill(0.0);
    let mut guard = CoverageGuard::new(dst, n * lines, scheme, axis.index());

    let pos_at = |k: usize| {
        if downward {
            interior.end - 1 - k
        } else {
            interior.start + k
        }
    };

    // Keep the inner loop on the contiguous dimension.
    match axis {
        Axis::X => {
            for line in 0..lines {
                for k in 0..n {
                    let i = axis.flat_index(shape, line, pos_at(k));
                    guard.write_at(i, apply_taps(src, i, stride, taps) / denom);
                }
            }
        }
        Axis::Y => {
            for k in 0..n {
                let pos = pos_at(k);
                for line in 0..lines {
                    let i = axis.flat_index(shape, line, pos);
                    guard.write_at(i, apply_taps(src, i, stride, taps) / denom);
                }
            }
        }
    }
}

/// Flat-index distance between neighbouring points along `axis`.
fn axis_stride(axis: Axis, cols: usize) -> isize {
    match axis {
        Axis::X => 1,
        Axis::Y => cols as isize,
    }
}

/// Weighted tap sum at flat index `i`, accumulated in tap order.
///
/// The first tap seeds the accumulator so that a `[+1, -1]` stencil
/// evaluates to exactly `a - b`.
#[inline]
fn apply_taps(src: &[f64], i: usize, stride: isize, taps: &[Tap]) -> f64 {
    let at = |t: &Tap| src[(i as isize + t.offset * stride) as usize];
    let mut iter = taps.iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let mut acc = first.weight * at(first);
    for t in iter {
        acc += t.weight * at(t);
    }
    acc
}
