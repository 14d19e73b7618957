//! Reconstruction-bound property: for any dense matrix, the full-rank Jacobi
//! SVD reconstructs it to within a loose relative tolerance. A tight bound
//! isn't promised (`MAX_SWEEPS = 20`, `CONV_TOL = 0.001` accept best-so-far
//! on non-convergence); a loose one is.

use noema::{jacobi_svd, reconstruct, JacobiConfig, Matrix};
use proptest::prelude::*;

fn matrix_strategy(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Matrix> {
    (2..=max_rows, 2..=max_cols).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-10.0..10.0f64, rows * cols)
            .prop_map(move |data| {
                let mut m = Matrix::zeros(rows, cols);
                for r in 0..rows {
                    for c in 0..cols {
                        m.set(r, c, data[r * cols + c]);
                    }
                }
                m
            })
    })
}

fn frobenius_norm(m: &Matrix) -> f64 {
    (0..m.rows())
        .flat_map(|r| (0..m.cols()).map(move |c| (r, c)))
        .map(|(r, c)| m.get(r, c).powi(2))
        .sum::<f64>()
        .sqrt()
}

proptest! {
    #[test]
    fn full_rank_reconstruction_stays_within_a_loose_bound(a in matrix_strategy(5, 5)) {
        let result = jacobi_svd(&a, JacobiConfig::default());
        let reconstructed = reconstruct(&result.u, &result.s, &result.v, result.transposed);

        let mut diff = Matrix::zeros(a.rows(), a.cols());
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                diff.set(r, c, a.get(r, c) - reconstructed.get(r, c));
            }
        }
        let err = frobenius_norm(&diff);
        let scale = frobenius_norm(&a).max(1.0);
        prop_assert!(err <= 0.05 * scale, "reconstruction error {err} exceeds 5% of {scale}");
    }

    #[test]
    fn singular_values_are_always_non_negative(a in matrix_strategy(5, 5)) {
        let result = jacobi_svd(&a, JacobiConfig::default());
        prop_assert!(result.s.as_slice().iter().all(|v| *v >= 0.0));
    }
}
