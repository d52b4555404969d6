// src/kernel.rs

use crate::common::DomainError;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;

/// Rotation factor e^(∓2πi·k/n). `INVERSE` flips the sign of the exponent.
#[inline]
pub(crate) fn twiddle<const INVERSE: bool>(k: usize, n: usize) -> Complex64 {
    let sign = if INVERSE { 2.0 } else { -2.0 };
    let angle = sign * PI * (k as f64) / (n as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Rotation factor for the naive kernels, where the exponent is k·n/N.
#[inline]
pub(crate) fn kernel<const INVERSE: bool>(k: usize, n: usize, len: usize) -> Complex64 {
    let sign = if INVERSE { 2.0 } else { -2.0 };
    let angle = sign * PI * (k as f64) * (n as f64) / (len as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Checks that `len` can be halved until it is at or below `threshold`,
/// without ever meeting an odd length on the way.
///
/// Runs before any recursive work, so a bad length aborts the whole call.
pub(crate) fn ensure_reducible(len: usize, threshold: usize) -> Result<(), DomainError> {
    if len == 0 {
        return Err(DomainError::EmptySequence);
    }

    let mut n = len;
    while n > threshold {
        if n % 2 != 0 {
            return Err(DomainError::NotPowerOfTwo { len, threshold });
        }
        n /= 2;
    }
    Ok(())
}

/// Agnostic sin/cos helper
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

pub(crate) fn ln(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.ln();

    #[cfg(not(feature = "std"))]
    return libm::log(value);
}

/// Runs two independent computations, on separate threads when "parallel" is on.
#[cfg(feature = "parallel")]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Evaluates `f` for every index in `0..count`, keeping the output in index order.
#[cfg(feature = "parallel")]
pub(crate) fn map_indices<T, F>(count: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_indices<T, F>(count: usize, f: F) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..count).map(f).collect()
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
