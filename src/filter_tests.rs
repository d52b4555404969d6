use super::*;
use alloc::vec;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn test_magnitude_and_log() {
    let grid = ComplexGrid::from_vec(1, 3, vec![c(3.0, 4.0), c(0.0, 0.0), c(0.0, -100.0)]).unwrap();

    assert_eq!(magnitude(&grid), vec![5.0, 0.0, 100.0]);

    let logs = log_magnitude(&grid, DEFAULT_LOG_FLOOR);
    assert!((logs[0] - 5.0f64.ln()).abs() < 1e-12);
    // Zero bins are clamped to the floor instead of going to -inf
    assert!((logs[1] - 5.0f64.ln()).abs() < 1e-12);
    assert!((logs[2] - 100.0f64.ln()).abs() < 1e-12);
}

#[test]
fn test_percentile_interpolates() {
    let values = [4.0, 1.0, 3.0, 2.0, 5.0];
    assert_eq!(percentile(&values, 0.0), Some(1.0));
    assert_eq!(percentile(&values, 50.0), Some(3.0));
    assert_eq!(percentile(&values, 100.0), Some(5.0));
    // rank 0.1 * 4 = 0.4 -> 1.0 + 0.4 * (2.0 - 1.0)
    let p10 = percentile(&values, 10.0).unwrap();
    assert!((p10 - 1.4).abs() < 1e-12);

    assert_eq!(percentile(&[7.5], 30.0), Some(7.5));
    assert_eq!(percentile(&[], 30.0), None);
}

#[test]
fn test_denoise_keeps_low_frequencies() {
    let spectrum = ComplexGrid::from_fn(100, 50, |_, _| c(1.0, 1.0));
    let filtered = denoise(&spectrum, 0.1).unwrap();

    // Rows 10..90 and columns 5..45 are cleared
    for r in 0..100 {
        for col in 0..50 {
            let low_row = r < 10 || r >= 90;
            let low_col = col < 5 || col >= 45;
            let expected = if low_row && low_col { c(1.0, 1.0) } else { c(0.0, 0.0) };
            assert_eq!(filtered[(r, col)], expected, "at ({}, {})", r, col);
        }
    }
}

#[test]
fn test_denoise_edge_ratios() {
    let spectrum = ComplexGrid::from_fn(8, 8, |r, col| c(r as f64, col as f64));

    // Zero ratio clears everything
    let cleared = denoise(&spectrum, 0.0).unwrap();
    assert!(cleared.as_slice().iter().all(|&v| v == c(0.0, 0.0)));

    // Half ratio keeps everything
    assert_eq!(denoise(&spectrum, 0.5).unwrap(), spectrum);

    assert_eq!(denoise(&spectrum, 0.6), Err(DomainError::InvalidRatio));
    assert_eq!(denoise(&spectrum, -0.1), Err(DomainError::InvalidRatio));
    assert_eq!(denoise(&spectrum, f64::NAN), Err(DomainError::InvalidRatio));
}

#[test]
fn test_compress_zero_keeps_everything() {
    let spectrum = ComplexGrid::from_fn(4, 4, |r, col| c((r * 4 + col) as f64, 0.0));
    let result = compress(&spectrum, 0.0).unwrap();

    assert_eq!(result.spectrum, spectrum);
    // The single zero coefficient does not count as retained
    assert_eq!(result.retained, 15);
}

#[test]
fn test_compress_drops_small_coefficients() {
    // Magnitudes 1..=100
    let spectrum = ComplexGrid::from_fn(10, 10, |r, col| c(0.0, (r * 10 + col + 1) as f64));

    let mut previous = usize::MAX;
    for &level in &COMPRESSION_LEVELS {
        let result = compress(&spectrum, level as f64).unwrap();
        assert!(result.retained <= previous);
        previous = result.retained;

        let threshold = percentile(&magnitude(&spectrum), level as f64).unwrap();
        for (kept, original) in result.spectrum.as_slice().iter().zip(spectrum.as_slice()) {
            if original.norm() < threshold {
                assert_eq!(*kept, c(0.0, 0.0));
            } else {
                assert_eq!(kept, original);
            }
        }
    }

    // 80th percentile of 1..=100 is 80.2, so 81..=100 survive
    assert_eq!(compress(&spectrum, 80.0).unwrap().retained, 20);
}

#[test]
fn test_compress_rejects_bad_percent() {
    let spectrum = ComplexGrid::zeros(2, 2);
    assert_eq!(compress(&spectrum, 101.0), Err(DomainError::InvalidRatio));
    assert_eq!(compress(&spectrum, -1.0), Err(DomainError::InvalidRatio));
}

#[test]
fn test_compress_empty_grid() {
    let result = compress(&ComplexGrid::zeros(0, 0), 50.0).unwrap();
    assert_eq!(result.retained, 0);
}

#[test]
fn test_crop_real() {
    let grid = ComplexGrid::from_fn(4, 4, |r, col| c((r * 4 + col) as f64, 99.0));

    assert_eq!(crop_real(&grid, 2, 3), vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0]);
    assert_eq!(crop_real(&grid, 10, 1), vec![0.0, 4.0, 8.0, 12.0]);
}

#[test]
fn test_percentile_rejects_nan() {
    let values = [1.0, 2.0, 3.0];
    assert_eq!(percentile(&values, f64::NAN), None);
    // Out-of-range but ordered values are clamped
    assert_eq!(percentile(&values, 250.0), Some(3.0));
    assert_eq!(percentile(&values, f64::NEG_INFINITY), Some(1.0));
}

#[test]
fn test_compress_rejects_nan_percent() {
    let spectrum = ComplexGrid::from_fn(2, 2, |r, col| c(r as f64, col as f64));
    assert_eq!(compress(&spectrum, f64::NAN), Err(DomainError::InvalidRatio));
}
