// src/filter.rs

//! Spectrum post-processing for image analysis: magnitude display data,
//! low-pass denoising and percentile compression.

use crate::common::DomainError;
use crate::grid::ComplexGrid;
use crate::kernel::ln;
use alloc::vec::Vec;
use num_complex::Complex64;

/// Fraction of the spectrum kept on each side by [`denoise`].
pub const DEFAULT_KEEP_RATIO: f64 = 0.08;

/// Compression levels, in percent of discarded coefficients.
pub const COMPRESSION_LEVELS: [u8; 6] = [0, 10, 30, 60, 80, 95];

/// Lower clamp for [`log_magnitude`], matching the usual log-scaled display.
pub const DEFAULT_LOG_FLOOR: f64 = 5.0;

/// `|X|` for every bin, row-major.
pub fn magnitude(grid: &ComplexGrid) -> Vec<f64> {
    grid.as_slice().iter().map(|v| v.norm()).collect()
}

/// `ln(max(|X|, floor))` for every bin. `floor` must be positive.
pub fn log_magnitude(grid: &ComplexGrid, floor: f64) -> Vec<f64> {
    grid.as_slice().iter().map(|v| ln(v.norm().max(floor))).collect()
}

/// Low-pass filter: zeroes the high-frequency band of a spectrum.
///
/// Rows `[R·ratio, R·(1−ratio))` and columns `[C·ratio, C·(1−ratio))` are
/// cleared (bounds truncated). Since bin 0 is DC and the upper bins alias the
/// negative frequencies, what survives is the low frequencies in each corner.
pub fn denoise(spectrum: &ComplexGrid, keep_ratio: f64) -> Result<ComplexGrid, DomainError> {
    if !(0.0..=0.5).contains(&keep_ratio) {
        return Err(DomainError::InvalidRatio);
    }

    let (rows, cols) = spectrum.shape();
    let row_band = band(rows, keep_ratio);
    let col_band = band(cols, keep_ratio);

    tracing::debug!(
        keep_ratio,
        kept_rows = rows - (row_band.1 - row_band.0),
        kept_cols = cols - (col_band.1 - col_band.0),
        rows,
        cols,
        "denoise"
    );

    let zero = Complex64::new(0.0, 0.0);
    let mut filtered = spectrum.clone();
    for r in 0..rows {
        let row = filtered.row_mut(r);
        if (row_band.0..row_band.1).contains(&r) {
            row.fill(zero);
        } else {
            row[col_band.0..col_band.1].fill(zero);
        }
    }
    Ok(filtered)
}

fn band(len: usize, keep_ratio: f64) -> (usize, usize) {
    let start = (len as f64 * keep_ratio) as usize;
    let end = (len as f64 * (1.0 - keep_ratio)) as usize;
    (start, end.max(start))
}

/// Value at percentile `p` (0..=100) with linear interpolation between the
/// closest ranks. Returns `None` for an empty slice or a `p` that is NaN.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || p.is_nan() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// A thresholded spectrum and how many non-zero coefficients it kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub spectrum: ComplexGrid,
    pub retained: usize,
}

/// Discards the smallest coefficients of a spectrum.
///
/// Every bin whose magnitude is below the `compression_percent`-th percentile
/// of all magnitudes is set to zero. At 0 % nothing is discarded.
pub fn compress(
    spectrum: &ComplexGrid,
    compression_percent: f64,
) -> Result<Compressed, DomainError> {
    if !(0.0..=100.0).contains(&compression_percent) {
        return Err(DomainError::InvalidRatio);
    }

    let magnitudes = magnitude(spectrum);
    let Some(threshold) = percentile(&magnitudes, compression_percent) else {
        return Ok(Compressed {
            spectrum: spectrum.clone(),
            retained: 0,
        });
    };

    let zero = Complex64::new(0.0, 0.0);
    let mut compressed = spectrum.clone();
    let mut retained = 0;
    for (value, &mag) in compressed.as_mut_slice().iter_mut().zip(&magnitudes) {
        if mag < threshold {
            *value = zero;
        } else if mag > 0.0 {
            retained += 1;
        }
    }

    tracing::debug!(
        compression_percent,
        threshold,
        retained,
        total = magnitudes.len(),
        "compress"
    );

    Ok(Compressed {
        spectrum: compressed,
        retained,
    })
}

/// Real parts of the top-left `rows x cols` block, row-major.
///
/// Undoes the padding after an inverse transform. Extents larger than the
/// grid are clamped.
pub fn crop_real(grid: &ComplexGrid, rows: usize, cols: usize) -> Vec<f64> {
    let rows = rows.min(grid.rows());
    let cols = cols.min(grid.cols());

    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        out.extend(grid.row(r)[..cols].iter().map(|v| v.re));
    }
    out
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
