//! Row-axis orientation for axis-1 stencils.

use crate::scheme::Scheme;

/// How axis-1 (row) stencils are oriented relative to the row index.
///
/// Row index grows southward, so a physical y that grows northward
/// increases toward row 0. Axis 0 is never affected.
///
/// | Convention | Forward on axis 1 | Backward on axis 1 | Centered on axis 1 |
/// |------------|-------------------|--------------------|--------------------|
/// | `Legacy` | `(f[j-1]-f[j])/h`, row 0 zero | `(f[j]-f[j-1])/h`, row 0 zero | `(f[j-1]-f[j+1])/2h` |
/// | `IndexOrder` | `(f[j+1]-f[j])/h`, last row zero | `(f[j]-f[j-1])/h`, row 0 zero | `(f[j+1]-f[j-1])/2h` |
/// | `NorthUp` | `(f[j-1]-f[j])/h`, row 0 zero | `(f[j]-f[j+1])/h`, last row zero | `(f[j-1]-f[j+1])/2h` |
///
/// `Legacy` mixes the two orientations: forward and centered read north,
/// backward reads in index order. It is the default because existing
/// derived products were computed that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowConvention {
    /// Forward and centered mirrored, backward in index order.
    #[default]
    Legacy,
    /// Every scheme in index-increasing orientation (y grows southward).
    IndexOrder,
    /// Every scheme mirrored (y grows northward).
    NorthUp,
}

impl RowConvention {
    /// Whether `scheme`'s axis-1 stencil is mirrored (offsets negated).
    pub fn mirrors(self, scheme: Scheme) -> bool {
        match self {
            Self::Legacy => matches!(scheme, Scheme::Forward | Scheme::Centered),
            Self::IndexOrder => false,
            Self::NorthUp => true,
        }
    }
}
