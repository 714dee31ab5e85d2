//! Debug-mode interior coverage tracking for derivative outputs.
//!
//! [`CoverageGuard`] wraps an output buffer and, in debug builds, records
//! which cells the stencil wrote. On drop it logs a diagnostic if fewer
//! cells were written than the stencil's interior holds. Release builds
//! pay zero overhead.

/// Guard that tracks stencil write coverage of an output buffer.
///
/// The traversal zero-fills the buffer before handing it to the guard,
/// so unwritten cells are boundary zeros. The guard only checks that the
/// interior count matches.
pub struct CoverageGuard<'a> {
    data: &'a mut [f64],
    #[cfg(debug_assertions)]
    written: Vec<bool>,
    #[cfg(debug_assertions)]
    expected: usize,
    #[cfg(debug_assertions)]
    scheme: &'static str,
    #[cfg(debug_assertions)]
    axis: usize,
}

impl<'a> CoverageGuard<'a> {
    /// Wrap `data`, expecting `expected` interior writes.
    ///
    /// `scheme` and `axis` appear in diagnostics only.
    pub fn new(
        data: &'a mut [f64],
        #[cfg_attr(not(debug_assertions), allow(unused_variables))] expected: usize,
        #[cfg_attr(not(debug_assertions), allow(unused_variables))] scheme: &'static str,
        #[cfg_attr(not(debug_assertions), allow(unused_variables))] axis: usize,
    ) -> Self {
        Self {
            #[cfg(debug_assertions)]
            written: vec![false; data.len()],
            #[cfg(debug_assertions)]
            expected,
            #[cfg(debug_assertions)]
            scheme,
            #[cfg(debug_assertions)]
            axis,
            data,
        }
    }

    /// Write a single value at the given flat index.
    #[inline]
    pub fn write_at(&mut self, index: usize, value: f64) {
        self.data[index] = value;
        #[cfg(debug_assertions)]
        {
            self.written[index] = true;
        }
    }

    /// Number of cells in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cells written so far (always `len()` in release builds).
    pub fn written(&self) -> usize {
        #[cfg(debug_assertions)]
        {
            self.written.iter().filter(|&&b| b).count()
        }
        #[cfg(not(debug_assertions))]
        {
            self.data.len()
        }
    }
}

#[cfg(debug_assertions)]
impl Drop for CoverageGuard<'_> {
    fn drop(&mut self) {
        let count = self.written.iter().filter(|&&b| b).count();
        if count != self.expected {
            eprintln!(
                "gridiff: CoverageGuard mismatch: {} difference on axis {}: {}/{} interior cells written",
                self.scheme, self.axis, count, self.expected,
            );
        }
    }
}
