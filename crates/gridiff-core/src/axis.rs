//! Differencing axis selector.

use crate::error::DiffError;
use crate::field::Shape;

/// The grid axis a derivative is taken along.
///
/// The numbering is inverted relative to storage order: axis 0 walks
/// **columns** (the second array dimension, physical x) and axis 1 walks
/// **rows** (the first array dimension, physical y). Grids are stored
/// row-major with row 0 at the top (north).
///
/// ```
/// use gridiff_core::Axis;
///
/// assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
/// assert_eq!(Axis::try_from(1).unwrap(), Axis::Y);
/// assert!(Axis::try_from(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Axis 0: varies the column index.
    X,
    /// Axis 1: varies the row index.
    Y,
}

impl Axis {
    /// Both axes, in selector order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Numeric selector (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    /// Number of points along this axis for a grid of the given shape.
    pub fn extent(self, shape: Shape) -> usize {
        match self {
            Self::X => shape.1,
            Self::Y => shape.0,
        }
    }

    /// Number of independent lines perpendicular to this axis.
    ///
    /// For [`Axis::X`] each row is one line; for [`Axis::Y`] each column is.
    pub fn lines(self, shape: Shape) -> usize {
        match self {
            Self::X => shape.0,
            Self::Y => shape.1,
        }
    }

    /// Row-major flat index of the `pos`-th point on the `line`-th line.
    #[inline]
    pub fn flat_index(self, shape: Shape, line: usize, pos: usize) -> usize {
        match self {
            Self::X => line * shape.1 + pos,
            Self::Y => pos * shape.1 + line,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = DiffError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            _ => Err(DiffError::InvalidAxis { value }),
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis.index()
    }
}
