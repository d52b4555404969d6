#![no_std]

// Vectors are needed for the out-of-place transforms, so `alloc` is always linked.
// The standard library is only pulled in for the "std" feature and for tests.
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod common;
pub mod complex;
mod kernel;
pub mod filter;
pub mod grid;
pub mod naive;
pub mod pad;
pub mod two_dim;

pub use num_complex::Complex64;

pub use crate::common::{DEFAULT_BASE_CASE_THRESHOLD, DomainError, FftConfig, FftProcess};
pub use complex::{RecursiveFft, forward_1d, inverse_1d};
pub use filter::{Compressed, compress, crop_real, denoise, log_magnitude, magnitude, percentile};
pub use grid::ComplexGrid;
pub use naive::{NaiveDft, dft, idft};
pub use pad::{PadPolicy, normalize_real, normalize_size};
pub use two_dim::{forward_2d, forward_2d_with, inverse_2d, inverse_2d_with};
