// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense row-major matrices.
//!
//! # Invariants
//!
//! - `from_rows` rejects ragged input with `Error::ShapeMismatch` rather than
//!   padding or truncating.
//! - `matmul` and `mul_vec` check inner dimensions and fail rather than
//!   silently reading out of bounds.

use crate::error::{Error, Result};
use crate::linalg::vector::Vector;
use serde::{Deserialize, Serialize};

/// A dense matrix stored row-major as a flat `Vec<f64>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a sequence of rows. Fails with
    /// `Error::ShapeMismatch` unless every row has equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::ShapeMismatch {
                    operation: "Matrix::from_rows",
                    lhs: (i, n_cols),
                    rhs: (i, row.len()),
                });
            }
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// A square matrix with `v` along the diagonal, zero elsewhere.
    pub fn diagonal(v: &Vector) -> Self {
        let n = v.len();
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.set(i, i, v.get(i).unwrap_or(0.0));
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    pub fn set(&mut self, r: usize, c: usize, value: f64) {
        self.data[r * self.cols + c] = value;
    }

    /// Column `c` as a standalone vector.
    pub fn column(&self, c: usize) -> Vector {
        Vector::from_vec((0..self.rows).map(|r| self.get(r, c)).collect())
    }

    /// Row `r` as a standalone vector.
    pub fn row(&self, r: usize) -> Vector {
        Vector::from_vec((0..self.cols).map(|c| self.get(r, c)).collect())
    }

    /// Overwrite column `c` in place with `v`.
    pub fn set_column(&mut self, c: usize, v: &Vector) {
        for r in 0..self.rows {
            self.set(r, c, v.get(r).unwrap_or(0.0));
        }
    }

    /// A new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Scalar multiplication, returning a new matrix.
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Matrix product. `Error::ShapeMismatch` when `self.cols != other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                operation: "matrix multiply",
                lhs: (self.rows, self.cols),
                rhs: (other.rows, other.cols),
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(r, k);
                if a == 0.0 {
                    continue;
                }
                for c in 0..other.cols {
                    out.set(r, c, out.get(r, c) + a * other.get(k, c));
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product. `Error::ShapeMismatch` when `self.cols != v.len()`.
    pub fn mul_vec(&self, v: &Vector) -> Result<Vector> {
        if self.cols != v.len() {
            return Err(Error::ShapeMismatch {
                operation: "matrix-vector multiply",
                lhs: (self.rows, self.cols),
                rhs: (v.len(), 1),
            });
        }
        let mut out = Vector::zeros(self.rows);
        for r in 0..self.rows {
            let mut acc = 0.0;
            for c in 0..self.cols {
                acc += self.get(r, c) * v.get(c).unwrap_or(0.0);
            }
            out.set(r, acc);
        }
        Ok(out)
    }
}
