// src/common.rs

use alloc::vec::Vec;
use core::fmt;

/// Sequence length at or below which the recursive transforms fall back to the naive DFT.
pub const DEFAULT_BASE_CASE_THRESHOLD: usize = 16;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DomainError {
    EmptySequence,
    NotPowerOfTwo { len: usize, threshold: usize },
    ShapeMismatch { expected: usize, actual: usize },
    InvalidRatio,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::EmptySequence => write!(f, "Sequence must not be empty"),
            DomainError::NotPowerOfTwo { len, threshold } => write!(
                f,
                "Length {len} cannot be halved down to the base case of {threshold}; \
                 use a power of 2"
            ),
            DomainError::ShapeMismatch { expected, actual } => {
                write!(f, "Buffer holds {actual} values but the shape needs {expected}")
            }
            DomainError::InvalidRatio => write!(f, "Ratio or percentage is out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

/// Anything that can turn a sequence into its spectrum and back.
pub trait FftProcess<T> {
    fn process(&self, input: &[T], inverse: bool) -> Result<Vec<T>, DomainError>;
}

/// Tuning knobs for the recursive transforms.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FftConfig {
    pub base_case_threshold: usize,
}

impl FftConfig {
    pub const fn new() -> Self {
        Self {
            base_case_threshold: DEFAULT_BASE_CASE_THRESHOLD,
        }
    }

    pub const fn with_base_case_threshold(mut self, threshold: usize) -> Self {
        self.base_case_threshold = threshold;
        self
    }
}

impl Default for FftConfig {
    fn default() -> Self {
        Self::new()
    }
}
