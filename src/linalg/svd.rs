// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! One-sided Jacobi SVD.
//!
//! Decomposes a matrix `A` (shape `m x n`) into `U * diag(s) * V^T` by running
//! Jacobi plane rotations on the smaller Gram matrix (`k x k`, `k = min(m, n)`)
//! instead of on `A` directly. This is the textbook one-sided Jacobi scheme:
//! slower than a production bidiagonalization-based SVD, but simple and
//! numerically stable for the small/medium dense matrices this crate targets
//! (indexes up to a few thousand documents, per the size budget).
//!
//! # Orientation
//!
//! When `m < n` we decompose `A A^T` instead of `A^T A`, because that Gram
//! matrix is the smaller of the two (`m x m` vs `n x n`). The caller needs to
//! know which orientation was used to interpret `u`/`v` correctly; that's
//! `SvdResult::transposed`.
//!
//! # Convergence
//!
//! Runs for at most `MAX_SWEEPS` sweeps (each sweep visits every off-diagonal
//! pair once) and stops early once the sum of diagonal deltas exceeding
//! `0.001` falls below `CONV_TOL`. Non-convergence within `MAX_SWEEPS` is
//! accepted silently - the result is whatever the last sweep produced, never
//! an error. There is no numerical exception surfaced by this routine.
//!
//! Singular values come out **unsorted**; sorting (and the accompanying
//! permutation of `u`/`v`) is the caller's job, because different callers
//! want different things done with the permutation (the LSI index wants a
//! descending spectrum; the incremental update wants to preserve rank order
//! relative to the existing basis).

use crate::linalg::matrix::Matrix;
use crate::linalg::vector::{Vector, EPSILON};

/// Maximum number of Jacobi sweeps before giving up and returning the
/// best-so-far decomposition.
pub const MAX_SWEEPS: usize = 20;

/// Convergence threshold on the sum of "significant" diagonal deltas
/// (deltas that themselves exceed 0.001) between consecutive sweeps.
pub const CONV_TOL: f64 = 0.001;

/// Per-delta significance threshold used by the convergence check.
const DELTA_SIGNIFICANCE: f64 = 0.001;

/// Tunable knobs for a single SVD run. Exposing the sweep count lets callers
/// targeting very large corpora trade accuracy for speed.
#[derive(Debug, Clone, Copy)]
pub struct JacobiConfig {
    pub max_sweeps: usize,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            max_sweeps: MAX_SWEEPS,
        }
    }
}

/// The result of a Jacobi SVD run.
#[derive(Debug, Clone)]
pub struct SvdResult {
    /// Column-orthonormal `U`.
    pub u: Matrix,
    /// Orthonormal `V`.
    pub v: Matrix,
    /// Non-negative singular values, in the order the Jacobi sweeps left
    /// them (not sorted).
    pub s: Vector,
    /// `true` when the Gram matrix was formed as `A A^T` (the `m < n` case),
    /// meaning `source` in the `U` recovery step was `A^T`, not `A`.
    pub transposed: bool,
}

/// Decompose `a` (shape `m x n`) into `u * diag(s) * v^T`.
pub fn jacobi_svd(a: &Matrix, config: JacobiConfig) -> SvdResult {
    let m = a.rows();
    let n = a.cols();
    let transposed = m < n;

    let source = if transposed { a.transpose() } else { a.clone() };
    // `source` is always the "tall" orientation (rows >= cols); its Gram
    // matrix A^T A is k x k with k = min(m, n).
    let gram = source
        .transpose()
        .matmul(&source)
        .expect("source^T * source is always shape-compatible");
    let k = gram.rows();

    let mut q = gram;
    let mut v = Matrix::identity(k);

    let mut prev_diagonal: Option<Vec<f64>> = None;
    for _sweep in 0..config.max_sweeps {
        for p in 0..k {
            for r in (p + 1)..k {
                let qpr = q.get(p, r);
                if qpr.abs() <= EPSILON {
                    continue;
                }
                let numerator = 2.0 * qpr;
                let denominator = q.get(p, p) - q.get(r, r);
                let theta = if denominator.abs() < EPSILON {
                    std::f64::consts::FRAC_PI_4 * numerator.signum()
                } else {
                    0.5 * (numerator / denominator).atan()
                };
                apply_jacobi_rotation(&mut q, &mut v, p, r, theta);
            }
        }

        let diagonal: Vec<f64> = (0..k).map(|i| q.get(i, i)).collect();
        if let Some(prev) = &prev_diagonal {
            let delta: f64 = diagonal
                .iter()
                .zip(prev.iter())
                .map(|(cur, old)| (cur - old).abs())
                .filter(|d| *d > DELTA_SIGNIFICANCE)
                .sum();
            if delta <= CONV_TOL {
                prev_diagonal = Some(diagonal);
                break;
            }
        }
        prev_diagonal = Some(diagonal);
    }

    let s = Vector::from_vec((0..k).map(|i| q.get(i, i).max(0.0).sqrt()).collect());

    // Recover U = source * V * S^-1 (S^-1 zero wherever s_i is ~0, per the
    // epsilon guard shared with Vector::normalize).
    let mut s_inv = Matrix::zeros(k, k);
    for i in 0..k {
        let si = s.get(i).unwrap_or(0.0);
        if si > EPSILON {
            s_inv.set(i, i, 1.0 / si);
        }
    }
    let u = source
        .matmul(&v)
        .and_then(|sv| sv.matmul(&s_inv))
        .expect("source, V, S^-1 shapes are constructed to be compatible");

    SvdResult {
        u,
        v,
        s,
        transposed,
    }
}

/// Apply the plane rotation `R_{p,r}(theta)` to `Q` (as `Q <- R^T Q R`) and
/// accumulate it into `V` (as `V <- V R`).
fn apply_jacobi_rotation(q: &mut Matrix, v: &mut Matrix, p: usize, r: usize, theta: f64) {
    let c = theta.cos();
    let s = theta.sin();
    let k = q.rows();

    // Q <- R^T Q R, but R only touches rows/columns p and r, so update those
    // directly instead of materializing the full rotation matrix.
    for i in 0..k {
        let qip = q.get(i, p);
        let qir = q.get(i, r);
        q.set(i, p, c * qip - s * qir);
        q.set(i, r, s * qip + c * qir);
    }
    for i in 0..k {
        let qpi = q.get(p, i);
        let qri = q.get(r, i);
        q.set(p, i, c * qpi - s * qri);
        q.set(r, i, s * qpi + c * qri);
    }

    for i in 0..v.rows() {
        let vip = v.get(i, p);
        let vir = v.get(i, r);
        v.set(i, p, c * vip - s * vir);
        v.set(i, r, s * vip + c * vir);
    }
}

/// Reconstruct `U * diag(s) * V^T`, transposing back when `transposed` is
/// set (the `m < n` orientation, where `U`/`V` decompose `A^T` rather than
/// `A`). `s` is passed separately from `result.s` so callers can apply a
/// rank cutoff (zeroing small singular values) before reconstructing.
pub fn reconstruct(u: &Matrix, s: &Vector, v: &Matrix, transposed: bool) -> Matrix {
    let diag = Matrix::diagonal(s);
    let product = u
        .matmul(&diag)
        .and_then(|ud| ud.matmul(&v.transpose()))
        .expect("reconstruction shapes are compatible by construction");
    if transposed {
        product.transpose()
    } else {
        product
    }
}

/// Frobenius norm of `A - U * diag(s) * V^T`, useful in tests that check the
/// reconstruction bound.
pub fn reconstruction_error(a: &Matrix, result: &SvdResult) -> f64 {
    let reconstructed = reconstruct(&result.u, &result.s, &result.v, result.transposed);

    let mut acc = 0.0;
    for r in 0..a.rows() {
        for c in 0..a.cols() {
            let d = a.get(r, c) - reconstructed.get(r, c);
            acc += d * d;
        }
    }
    acc.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svd_of_identity_is_identity() {
        let a = Matrix::identity(3);
        let result = jacobi_svd(&a, JacobiConfig::default());
        let err = reconstruction_error(&a, &result);
        assert!(err < 1e-6, "reconstruction error too large: {err}");
    }

    #[test]
    fn svd_shape_2x3_has_at_most_two_nonzero_singular_values() {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]).unwrap();
        let result = jacobi_svd(&a, JacobiConfig::default());
        let nonzero = result.s.as_slice().iter().filter(|v| **v > 1e-6).count();
        assert!(nonzero <= 2);
        let err = reconstruction_error(&a, &result);
        assert!(err < 1e-6, "reconstruction error too large: {err}");
    }

    #[test]
    fn svd_reconstruction_within_loose_bound() {
        // A small, slightly asymmetric matrix; checks the loose bound from
        // the testable-properties list (CONV_TOL = 0.001 Jacobi).
        let a = Matrix::from_rows(vec![
            vec![4.0, 0.0, 1.0],
            vec![2.0, 3.0, 0.0],
            vec![0.0, 1.0, 5.0],
        ])
        .unwrap();
        let result = jacobi_svd(&a, JacobiConfig::default());
        let err = reconstruction_error(&a, &result);
        let frob_a: f64 = (0..a.rows())
            .flat_map(|r| (0..a.cols()).map(move |c| (r, c)))
            .map(|(r, c)| a.get(r, c).powi(2))
            .sum::<f64>()
            .sqrt();
        assert!(err <= 1e-2 * frob_a.max(1.0));
    }

    #[test]
    fn singular_values_are_non_negative() {
        let a = Matrix::from_rows(vec![vec![-2.0, 1.0], vec![1.0, -3.0]]).unwrap();
        let result = jacobi_svd(&a, JacobiConfig::default());
        assert!(result.s.as_slice().iter().all(|v| *v >= 0.0));
    }
}
