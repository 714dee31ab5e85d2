//! Two- and three-point stencils along one axis.

use std::ops::Range;

use gridiff_core::Axis;
use smallvec::{smallvec, SmallVec};

use crate::convention::RowConvention;
use crate::scheme::Scheme;

/// One stencil tap: read the sample `offset` points along the axis and
/// multiply by `weight`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Signed offset along the differencing axis, in grid points.
    pub offset: isize,
    /// Coefficient applied to the sample.
    pub weight: f64,
}

/// A finite-difference stencil along one axis.
///
/// The derivative at position `p` is
/// `(w0*f[p+o0] + w1*f[p+o1] + ...) / (divisor * h)`, summed in tap order.
/// A position is interior when every tap lands inside the grid; all other
/// positions are boundary and receive `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil {
    taps: SmallVec<[Tap; 2]>,
    divisor: f64,
}

impl Stencil {
    /// Build a stencil from explicit taps.
    ///
    /// `taps` must be non-empty; `divisor` scales the step size.
    pub fn new(taps: SmallVec<[Tap; 2]>, divisor: f64) -> Self {
        debug_assert!(!taps.is_empty(), "stencil needs at least one tap");
        Self { taps, divisor }
    }

    /// The stencil `scheme` uses along `axis` under `convention`.
    ///
    /// Taps are listed minuend first so that evaluation order matches
    /// `(a - b) / h` exactly.
    pub fn for_scheme(scheme: Scheme, axis: Axis, convention: RowConvention) -> Self {
        let base = match scheme {
            Scheme::Forward => Self::new(smallvec![tap(1, 1.0), tap(0, -1.0)], 1.0),
            Scheme::Backward => Self::new(smallvec![tap(0, 1.0), tap(-1, -1.0)], 1.0),
            Scheme::Centered => Self::new(smallvec![tap(1, 1.0), tap(-1, -1.0)], 2.0),
        };
        if axis == Axis::Y && convention.mirrors(scheme) {
            base.mirrored()
        } else {
            base
        }
    }

    /// Negate every offset, keeping weights and divisor.
    pub fn mirrored(&self) -> Self {
        Self {
            taps: self
                .taps
                .iter()
                .map(|t| Tap {
                    offset: -t.offset,
                    weight: t.weight,
                })
                .collect(),
            divisor: self.divisor,
        }
    }

    /// The taps, in evaluation order.
    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    /// Multiplier on the step size in the denominator.
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    fn min_offset(&self) -> isize {
        self.taps.iter().map(|t| t.offset).min().unwrap_or(0).min(0)
    }

    fn max_offset(&self) -> isize {
        self.taps.iter().map(|t| t.offset).max().unwrap_or(0).max(0)
    }

    /// Minimum number of points along the axis for at least one interior cell.
    pub fn required_points(&self) -> usize {
        (self.max_offset() - self.min_offset()) as usize + 1
    }

    /// Positions along an axis of length `len` where every tap is in bounds.
    ///
    /// Empty when `len < required_points()`.
    pub fn interior(&self, len: usize) -> Range<usize> {
        let lo = self.min_offset().unsigned_abs();
        let hi = len.saturating_sub(self.max_offset() as usize);
        lo..hi.max(lo)
    }

    /// Whether the leading tap points toward lower indices.
    ///
    /// Such stencils are traversed from the high end of the interior down.
    pub fn reads_downward(&self) -> bool {
        self.taps.first().is_some_and(|t| t.offset < 0)
    }
}

fn tap(offset: isize, weight: f64) -> Tap {
    Tap { offset, weight }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_x_ignores_convention() {
        for s in Scheme::ALL {
            let a = Stencil::for_scheme(s, Axis::X, RowConvention::Legacy);
            let b = Stencil::for_scheme(s, Axis::X, RowConvention::NorthUp);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn interior_ranges() {
        let fwd = Stencil::for_scheme(Scheme::Forward, Axis::X, RowConvention::Legacy);
        let bwd = Stencil::for_scheme(Scheme::Backward, Axis::X, RowConvention::Legacy);
        let ctr = Stencil::for_scheme(Scheme::Centered, Axis::X, RowConvention::Legacy);
        assert_eq!(fwd.interior(5), 0..4);
        assert_eq!(bwd.interior(5), 1..5);
        assert_eq!(ctr.interior(5), 1..4);
        assert_eq!(ctr.interior(2), 1..1);
        assert!(ctr.interior(0).is_empty());
    }

    #[test]
    fn legacy_row_forward_reads_north() {
        let fwd = Stencil::for_scheme(Scheme::Forward, Axis::Y, RowConvention::Legacy);
        assert_eq!(fwd.taps()[0].offset, -1);
        assert_eq!(fwd.taps()[1].offset, 0);
        // Row 0 has no northern neighbour.
        assert_eq!(fwd.interior(4), 1..4);
        assert!(fwd.reads_downward());
    }

    #[test]
    fn required_points_per_scheme() {
        for conv in [
            RowConvention::Legacy,
            RowConvention::IndexOrder,
            RowConvention::NorthUp,
        ] {
            for axis in Axis::ALL {
                assert_eq!(Stencil::for_scheme(Scheme::Forward, axis, conv).required_points(), 2);
                assert_eq!(Stencil::for_scheme(Scheme::Backward, axis, conv).required_points(), 2);
                assert_eq!(Stencil::for_scheme(Scheme::Centered, axis, conv).required_points(), 3);
            }
        }
    }

    #[test]
    fn centered_divides_by_two_steps() {
        let ctr = Stencil::for_scheme(Scheme::Centered, Axis::Y, RowConvention::Legacy);
        assert_eq!(ctr.divisor(), 2.0);
        assert_eq!(ctr.mirrored().mirrored(), ctr);
    }
}
