// src/two_dim.rs

//! Separable 2D transforms: 1D transforms down every column, then along every row.

use crate::common::{DomainError, FftConfig};
use crate::complex::fft_recursive;
use crate::grid::ComplexGrid;
use crate::kernel::{ensure_reducible, map_indices};
use alloc::vec::Vec;
use num_complex::Complex64;

/// 2D FFT with the default base case threshold.
pub fn forward_2d(grid: &ComplexGrid) -> Result<ComplexGrid, DomainError> {
    forward_2d_with(grid, &FftConfig::default())
}

/// 2D inverse FFT with the default base case threshold.
pub fn inverse_2d(spectrum: &ComplexGrid) -> Result<ComplexGrid, DomainError> {
    inverse_2d_with(spectrum, &FftConfig::default())
}

pub fn forward_2d_with(
    grid: &ComplexGrid,
    config: &FftConfig,
) -> Result<ComplexGrid, DomainError> {
    transform_2d::<false>(grid, config)
}

pub fn inverse_2d_with(
    spectrum: &ComplexGrid,
    config: &FftConfig,
) -> Result<ComplexGrid, DomainError> {
    transform_2d::<true>(spectrum, config)
}

fn transform_2d<const INVERSE: bool>(
    grid: &ComplexGrid,
    config: &FftConfig,
) -> Result<ComplexGrid, DomainError> {
    let (rows, cols) = grid.shape();
    let threshold = config.base_case_threshold;

    // Both extents are validated up front so neither pass starts on a bad grid
    ensure_reducible(rows, threshold)?;
    ensure_reducible(cols, threshold)?;

    tracing::debug!(rows, cols, inverse = INVERSE, threshold, "2d transform");

    // Column pass
    let columns = map_indices(cols, |c| fft_recursive::<INVERSE>(&grid.column(c), threshold));
    let mut intermediate = ComplexGrid::zeros(rows, cols);
    for (c, column) in columns.iter().enumerate() {
        intermediate.set_column(c, column);
    }

    // Row pass over the column-transformed grid
    let transformed_rows = map_indices(rows, |r| {
        fft_recursive::<INVERSE>(intermediate.row(r), threshold)
    });
    let data: Vec<Complex64> = transformed_rows.into_iter().flatten().collect();

    ComplexGrid::from_vec(rows, cols, data)
}

#[cfg(test)]
#[path = "two_dim_tests.rs"]
mod tests;
