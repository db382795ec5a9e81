//! Dense row-major matrix buffer.
//!
//! The buffer always travels with its dimensions, so a kernel can never be
//! handed a length that disagrees with the shape it was told.

use crate::rng::Randn;

/// A dense, row-major f32 matrix. Element (i, j) lives at `data[i * cols + j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Zero-filled matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "degenerate shape {}x{}", rows, cols);
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Matrix drawn element-by-element from a Gaussian stream.
    pub fn randn(rows: usize, cols: usize, rng: &mut Randn) -> Self {
        let mut m = Self::zeros(rows, cols);
        rng.fill(&mut m.data);
        m
    }

    /// Wrap an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols` or either dimension is zero.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        assert!(rows > 0 && cols > 0, "degenerate shape {}x{}", rows, cols);
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements, got {}",
            rows,
            cols,
            rows * cols,
            data.len()
        );
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
