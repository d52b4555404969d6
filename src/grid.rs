// src/grid.rs

use crate::common::DomainError;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use num_complex::Complex64;

/// Row-major `rows x cols` grid of complex values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl ComplexGrid {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        }
    }

    /// Wraps a row-major buffer. The buffer must hold exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self, DomainError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(DomainError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Casts a row-major real buffer to complex.
    pub fn from_real(rows: usize, cols: usize, data: &[f64]) -> Result<Self, DomainError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(DomainError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let data = data.iter().map(|&re| Complex64::new(re, 0.0)).collect();
        Ok(Self { rows, cols, data })
    }

    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Outer product `u ⊗ v`: element (r, c) is `u[r] * v[c]`.
    pub fn outer(u: &[Complex64], v: &[Complex64]) -> Self {
        Self::from_fn(u.len(), v.len(), |r, c| u[r] * v[c])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    pub fn row(&self, r: usize) -> &[Complex64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [Complex64] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Copies column `c` out; columns are strided in row-major storage.
    pub fn column(&self, c: usize) -> Vec<Complex64> {
        self.check_col(c);
        self.data.iter().skip(c).step_by(self.cols).copied().collect()
    }

    pub fn set_column(&mut self, c: usize, values: &[Complex64]) {
        self.check_col(c);
        assert_eq!(values.len(), self.rows, "column length must match the row count");
        for (r, &value) in values.iter().enumerate() {
            self.data[r * self.cols + c] = value;
        }
    }

    /// Checked access; `None` when either index is out of range.
    pub fn get(&self, r: usize, c: usize) -> Option<&Complex64> {
        if r < self.rows && c < self.cols {
            self.data.get(r * self.cols + c)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, r: usize, c: usize) -> Option<&mut Complex64> {
        if r < self.rows && c < self.cols {
            self.data.get_mut(r * self.cols + c)
        } else {
            None
        }
    }

    // Row-major storage would otherwise wrap an out-of-range column into the next row
    #[inline]
    fn check_col(&self, c: usize) {
        assert!(c < self.cols, "column {} out of range for {} columns", c, self.cols);
    }
}

impl Index<(usize, usize)> for ComplexGrid {
    type Output = Complex64;

    fn index(&self, (r, c): (usize, usize)) -> &Complex64 {
        self.check_col(c);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for ComplexGrid {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Complex64 {
        self.check_col(c);
        &mut self.data[r * self.cols + c]
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
