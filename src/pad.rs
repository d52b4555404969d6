// src/pad.rs

//! Zero-padding to power-of-two extents, as required by the recursive transforms.

use crate::common::DomainError;
use crate::grid::ComplexGrid;

/// How far an extent is rounded up.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PadPolicy {
    /// Smallest power of two that is at least the extent. Exact powers of two are kept.
    #[default]
    NextPowerOfTwo,
    /// `2^(floor(log2 n) + 1)`: always strictly larger than the extent, so a 64-wide
    /// image is padded to 128. Spectrum dimensions differ from `NextPowerOfTwo`
    /// exactly when an extent is already a power of two.
    AlwaysGrow,
}

impl PadPolicy {
    /// Padded length for an extent of `n`, or `None` if it does not fit in a `usize`.
    /// Zero stays zero.
    pub fn checked_padded_len(self, n: usize) -> Option<usize> {
        if n == 0 {
            return Some(0);
        }
        match self {
            PadPolicy::NextPowerOfTwo => n.checked_next_power_of_two(),
            PadPolicy::AlwaysGrow => 1usize.checked_shl(usize::BITS - n.leading_zeros()),
        }
    }

    /// Padded length for an extent of `n`. Zero stays zero.
    ///
    /// # Panics
    ///
    /// If the padded length overflows `usize`: `n` above `2^(usize::BITS - 1)` for
    /// `NextPowerOfTwo`, at or above it for `AlwaysGrow`. Use
    /// [`checked_padded_len`](Self::checked_padded_len) to handle that case.
    pub fn padded_len(self, n: usize) -> usize {
        match self.checked_padded_len(n) {
            Some(len) => len,
            None => panic!("padded length of {} overflows usize under {:?}", n, self),
        }
    }
}

/// Copies `grid` into the top-left corner of a zero grid with power-of-two extents.
pub fn normalize_size(grid: &ComplexGrid, policy: PadPolicy) -> ComplexGrid {
    let (rows, cols) = grid.shape();
    let padded_rows = policy.padded_len(rows);
    let padded_cols = policy.padded_len(cols);

    if policy == PadPolicy::AlwaysGrow && (rows.is_power_of_two() || cols.is_power_of_two()) {
        tracing::debug!(rows, cols, "padding grows an extent that is already a power of two");
    }
    tracing::debug!(rows, cols, padded_rows, padded_cols, ?policy, "normalize size");

    let mut padded = ComplexGrid::zeros(padded_rows, padded_cols);
    for r in 0..rows {
        padded.row_mut(r)[..cols].copy_from_slice(grid.row(r));
    }
    padded
}

/// Same as [`normalize_size`] for a row-major real buffer, cast to complex.
pub fn normalize_real(
    data: &[f64],
    rows: usize,
    cols: usize,
    policy: PadPolicy,
) -> Result<ComplexGrid, DomainError> {
    let grid = ComplexGrid::from_real(rows, cols, data)?;
    Ok(normalize_size(&grid, policy))
}

#[cfg(test)]
#[path = "pad_tests.rs"]
mod tests;
