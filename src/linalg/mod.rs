// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! The dense linear-algebra kernel: vectors, matrices, and the Jacobi SVD.
//!
//! Everything here is deliberately simple dense arithmetic - no sparse
//! representation, no SIMD, no GPU. The crate targets term-document matrices
//! up to a few thousand documents; a from-scratch `O(n^3)`-per-sweep Jacobi
//! SVD is a fine trade for that scale, and it has none of the build-time
//! dependency weight of a BLAS/LAPACK binding.

pub mod matrix;
pub mod svd;
pub mod vector;

pub use matrix::Matrix;
pub use svd::{jacobi_svd, reconstruct, JacobiConfig, SvdResult};
pub use vector::{Vector, EPSILON};
