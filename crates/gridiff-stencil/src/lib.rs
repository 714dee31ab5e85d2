//! Finite-difference derivative operators over 2-D grid fields.
//!
//! Three schemes share one traversal contract:
//!
//! | Scheme | Interior formula | Zeroed boundary |
//! |--------|------------------|-----------------|
//! | [`Scheme::Forward`] | `(f[p+e] - f[p]) / h` | last line |
//! | [`Scheme::Backward`] | `(f[p] - f[p-e]) / h` | first line |
//! | [`Scheme::Centered`] | `(f[p+e] - f[p-e]) / 2h` | first and last line |
//!
//! Each scheme is expressed as a [`Stencil`] (taps plus a divisor) and
//! evaluated by a single traversal routine, so the shape and boundary
//! invariants hold identically for every variant. Row-axis orientation is
//! selected by [`RowConvention`]; the default reproduces the north-up grid
//! convention where forward and centered differences on axis 1 read toward
//! row 0.
//!
//! ```
//! use gridiff_core::GridField;
//! use gridiff_stencil::{backward, centered, forward};
//!
//! let f = GridField::from_rows(vec![vec![0.0, 1.0, 4.0, 9.0, 16.0]]).unwrap();
//! assert_eq!(forward(&f, 0, 1.0).unwrap().as_slice(), &[1.0, 3.0, 5.0, 7.0, 0.0]);
//! assert_eq!(backward(&f, 0, 1.0).unwrap().as_slice(), &[0.0, 1.0, 3.0, 5.0, 7.0]);
//! assert_eq!(centered(&f, 0, 1.0).unwrap().as_slice(), &[0.0, 2.0, 4.0, 6.0, 0.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convention;
pub mod gradient;
pub mod guard;
pub mod ops;
pub mod scheme;
pub mod stencil;
pub(crate) mod traversal;

pub use convention::RowConvention;
pub use gradient::{gradient, Gradient};
pub use guard::CoverageGuard;
pub use ops::{backward, centered, forward};
pub use scheme::Scheme;
pub use stencil::{Stencil, Tap};
