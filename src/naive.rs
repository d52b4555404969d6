// src/naive.rs

//! Quadratic-time reference transforms.
//!
//! These evaluate the DFT sums directly. They accept any length, are used as
//! the base case of the recursive transforms, and serve as the reference the
//! fast path is checked against.

use crate::common::{DomainError, FftProcess};
use crate::kernel::kernel;
use alloc::vec::Vec;
use num_complex::Complex64;

/// Forward DFT: `X[k] = Σ x[n]·e^(-2πi·k·n/N)`, accumulated with k outer and n inner.
pub fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let len = input.len();
    let mut output = Vec::with_capacity(len);

    for k in 0..len {
        let mut acc = Complex64::new(0.0, 0.0);
        for (n, &sample) in input.iter().enumerate() {
            acc += sample * kernel::<false>(k, n, len);
        }
        output.push(acc);
    }

    output
}

/// Inverse DFT: `x[n] = (1/N)·Σ X[k]·e^(+2πi·k·n/N)`, accumulated with n outer and k inner.
pub fn idft(input: &[Complex64]) -> Vec<Complex64> {
    let len = input.len();
    let mut output = Vec::with_capacity(len);

    for n in 0..len {
        let mut acc = Complex64::new(0.0, 0.0);
        for (k, &bin) in input.iter().enumerate() {
            acc += bin * kernel::<true>(k, n, len);
        }
        output.push(acc.unscale(len as f64));
    }

    output
}

/// The naive transform behind the [`FftProcess`] interface. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveDft;

impl FftProcess<Complex64> for NaiveDft {
    fn process(&self, input: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, DomainError> {
        Ok(if inverse { idft(input) } else { dft(input) })
    }
}

#[cfg(test)]
#[path = "naive_tests.rs"]
mod tests;
