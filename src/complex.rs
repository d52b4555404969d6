use crate::common::{DomainError, FftConfig, FftProcess};
use crate::kernel::{ensure_reducible, join, twiddle};
use crate::naive::{dft, idft};
use alloc::vec::Vec;
use num_complex::Complex64;

/// Recursive radix-2 transform that bottoms out in the naive DFT.
///
/// Holds only its configuration; every call allocates its own output.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveFft {
    config: FftConfig,
}

impl RecursiveFft {
    pub fn new(config: FftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FftConfig {
        self.config
    }

    /// Forward transform of `input`.
    ///
    /// Fails with [`DomainError`] if the length is zero or cannot be halved
    /// down to the base case threshold.
    pub fn forward(&self, input: &[Complex64]) -> Result<Vec<Complex64>, DomainError> {
        let threshold = self.config.base_case_threshold;
        ensure_reducible(input.len(), threshold)?;
        tracing::trace!(len = input.len(), threshold, "forward fft");
        Ok(fft_recursive::<false>(input, threshold))
    }

    /// Inverse transform of `input`, normalized by its length.
    pub fn inverse(&self, input: &[Complex64]) -> Result<Vec<Complex64>, DomainError> {
        let threshold = self.config.base_case_threshold;
        ensure_reducible(input.len(), threshold)?;
        tracing::trace!(len = input.len(), threshold, "inverse fft");
        Ok(fft_recursive::<true>(input, threshold))
    }

    pub fn process(
        &self,
        input: &[Complex64],
        inverse: bool,
    ) -> Result<Vec<Complex64>, DomainError> {
        if inverse {
            self.inverse(input)
        } else {
            self.forward(input)
        }
    }
}

impl FftProcess<Complex64> for RecursiveFft {
    fn process(&self, input: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, DomainError> {
        self.process(input, inverse)
    }
}

/// Forward FFT of `sequence` with an explicit base case threshold
/// (use [`DEFAULT_BASE_CASE_THRESHOLD`](crate::DEFAULT_BASE_CASE_THRESHOLD) for the usual one).
pub fn forward_1d(
    sequence: &[Complex64],
    base_case_threshold: usize,
) -> Result<Vec<Complex64>, DomainError> {
    let config = FftConfig::new().with_base_case_threshold(base_case_threshold);
    RecursiveFft::new(config).forward(sequence)
}

/// Inverse FFT of `spectrum`; see [`forward_1d`].
pub fn inverse_1d(
    spectrum: &[Complex64],
    base_case_threshold: usize,
) -> Result<Vec<Complex64>, DomainError> {
    let config = FftConfig::new().with_base_case_threshold(base_case_threshold);
    RecursiveFft::new(config).inverse(spectrum)
}

/// Even/odd decimation down to `threshold`.
///
/// The caller must have validated the length with `ensure_reducible`.
/// The butterfly runs over the full output range and picks the half results
/// with `n % half`; it does not use the `X[n + N/2] = E - W·O` symmetry, so
/// the rounding follows the naive sum term by term.
///
/// The inverse scales each half back up by `N/2` before dividing by `N`,
/// because the recursive calls have already normalized by their own length.
pub(crate) fn fft_recursive<const INVERSE: bool>(
    input: &[Complex64],
    threshold: usize,
) -> Vec<Complex64> {
    let len = input.len();

    if len <= threshold {
        return if INVERSE { idft(input) } else { dft(input) };
    }

    let evens: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odds: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();

    let (even, odd) = join(
        || fft_recursive::<INVERSE>(&evens, threshold),
        || fft_recursive::<INVERSE>(&odds, threshold),
    );

    let half = len / 2;
    let mut output = Vec::with_capacity(len);

    for n in 0..len {
        let w = twiddle::<INVERSE>(n, len);
        let e = even[n % half];
        let o = odd[n % half];

        // The compiler drops the untaken branch since INVERSE is a constant
        let value = if INVERSE {
            let scale = half as f64;
            (e.scale(scale) + w.scale(scale) * o).unscale(len as f64)
        } else {
            e + w * o
        };
        output.push(value);
    }

    output
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
