// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! Brand's rank-1 thin-SVD update: add a document to an existing
//! decomposition without re-running the full Jacobi SVD.
//!
//! This is an alternative build path for `LsiIndex`, not a replacement for
//! `build_index`: it only ever sees service once a full build has succeeded
//! at least once, and a large enough vocabulary shift still forces a full
//! rebuild (`vocabulary_growth_exceeds`). The hot loop is
//! `ThinSvdState::project_batch`, used to re-project a batch of term vectors
//! against the current basis - it stays a single tight pass over `U^T *
//! c_j`. `LsiIndex::bootstrap_incremental`/`try_add_item_incremental` are the
//! integration points: the former seeds a `ThinSvdState` from an index's
//! last full build, the latter feeds it one new document at a time.

use crate::error::{Error, Result};
use crate::linalg::svd::jacobi_svd;
use crate::linalg::{JacobiConfig, Matrix, Vector, EPSILON};

/// Vocabulary growth (relative to the vocabulary size at the last full
/// build) beyond which incremental updates are abandoned in favor of a full
/// rebuild.
pub const DEFAULT_VOCAB_GROWTH_THRESHOLD: f64 = 0.20;

/// A thin (rank-bounded) `U, s` pair maintained incrementally by
/// `update_with_column`, alongside enough bookkeeping to know when it has
/// drifted too far from the vocabulary it was built against.
#[derive(Debug, Clone)]
pub struct ThinSvdState {
    u: Matrix,
    s: Vector,
    max_rank: usize,
    vocab_size_at_build: usize,
}

impl ThinSvdState {
    /// Seed incremental state from a full build's `(U, s)`, keeping at most
    /// `max_rank` singular values/vectors. `s` is expected sorted descending
    /// (as `LsiIndex::build_index` leaves `singular_values`); this invariant
    /// is maintained by every subsequent `update_with_column`.
    pub fn new(u: Matrix, s: Vector, max_rank: usize, vocab_size_at_build: usize) -> Self {
        let mut state = Self {
            u,
            s,
            max_rank,
            vocab_size_at_build,
        };
        state.truncate_to_max_rank();
        state
    }

    pub fn rank(&self) -> usize {
        self.s.len()
    }

    pub fn max_rank(&self) -> usize {
        self.max_rank
    }

    pub fn u(&self) -> &Matrix {
        &self.u
    }

    pub fn s(&self) -> &Vector {
        &self.s
    }

    /// `true` when `current_vocab_size` has grown beyond `threshold` (a
    /// fraction, e.g. `DEFAULT_VOCAB_GROWTH_THRESHOLD`) relative to the
    /// vocabulary size this state was last fully rebuilt against. Callers
    /// should tear down incremental state and run a full `build_index` when
    /// this returns `true`.
    pub fn vocabulary_growth_exceeds(&self, current_vocab_size: usize, threshold: f64) -> bool {
        if self.vocab_size_at_build == 0 {
            return false;
        }
        let growth = (current_vocab_size as f64 - self.vocab_size_at_build as f64)
            / self.vocab_size_at_build as f64;
        growth > threshold
    }

    /// Grow `u`'s row count to `new_row_count` by appending zero rows - e.g.
    /// when the word list has picked up new vocabulary since this state was
    /// last built or updated, but not enough to cross
    /// `vocabulary_growth_exceeds`'s threshold. A no-op when `new_row_count
    /// <= u.rows()`. Leaves `s` and the column count untouched; only the
    /// dimensionality `u` projects *from* grows.
    pub fn grow_to_vocab(&mut self, new_row_count: usize) {
        if new_row_count <= self.u.rows() {
            return;
        }
        let mut grown = Matrix::zeros(new_row_count, self.u.cols());
        for r in 0..self.u.rows() {
            for c in 0..self.u.cols() {
                grown.set(r, c, self.u.get(r, c));
            }
        }
        self.u = grown;
    }

    /// Extend the decomposition with one new column `c` (a raw term vector
    /// in the same vocabulary space as `U`'s rows), per Brand's rank-1
    /// update. `Error::ShapeMismatch` if `c`'s length disagrees with the
    /// vocabulary size `U` was built against.
    pub fn update_with_column(&mut self, c: &Vector) -> Result<()> {
        if c.len() != self.u.rows() {
            return Err(Error::ShapeMismatch {
                operation: "ThinSvdState::update_with_column",
                lhs: (self.u.rows(), 1),
                rhs: (c.len(), 1),
            });
        }

        let k = self.s.len();
        let m = self.u.transpose().mul_vec(c)?;
        let projected = self.u.mul_vec(&m)?;
        let p = c.sub(&projected)?;
        let rho = p.magnitude();

        if rho > EPSILON {
            // A genuinely new direction: solve the small (k+1)x(k+1)
            // bordered system and fold it back into U via the augmented
            // basis [U | p_hat].
            let mut k_mat = Matrix::zeros(k + 1, k + 1);
            for i in 0..k {
                k_mat.set(i, i, self.s.get(i).unwrap_or(0.0));
                k_mat.set(i, k, m.get(i).unwrap_or(0.0));
            }
            k_mat.set(k, k, rho);

            let small = jacobi_svd(&k_mat, JacobiConfig::default());
            let (sorted_s, permuted_u) = sort_descending(&small.s, &small.u);

            let p_hat = p.scale(1.0 / rho);
            let mut augmented = Matrix::zeros(self.u.rows(), k + 1);
            for r in 0..self.u.rows() {
                for c_idx in 0..k {
                    augmented.set(r, c_idx, self.u.get(r, c_idx));
                }
                augmented.set(r, k, p_hat.get(r).unwrap_or(0.0));
            }

            self.u = augmented.matmul(&permuted_u)?;
            self.s = sorted_s;
        }
        // else: c lies in the existing column space. diag(s) is already
        // sorted descending by this invariant, so its own SVD is the
        // identity rotation - U and s are left untouched.

        self.truncate_to_max_rank();
        Ok(())
    }

    fn truncate_to_max_rank(&mut self) {
        if self.s.len() <= self.max_rank {
            return;
        }
        let mut truncated_u = Matrix::zeros(self.u.rows(), self.max_rank);
        for c in 0..self.max_rank {
            let col = self.u.column(c);
            truncated_u.set_column(c, &col);
        }
        self.u = truncated_u;
        self.s = Vector::from_vec(self.s.as_slice()[..self.max_rank].to_vec());
    }

    /// Re-project a batch of term vectors (`U^T * c_j`) against the current
    /// basis. Used to refresh every document's LSI vector after a rank
    /// change; this is the hottest path in the incremental build, so it's
    /// one tight loop over `mul_vec` rather than anything fancier.
    pub fn project_batch(&self, columns: &[Vector]) -> Result<Vec<Vector>> {
        let ut = self.u.transpose();
        columns.iter().map(|c| ut.mul_vec(c)).collect()
    }
}

/// Sort a small SVD's singular values descending, permuting `u`'s columns
/// to match. `s`/`u` come straight out of `jacobi_svd`, which leaves
/// singular values in whatever order the sweeps produced them.
fn sort_descending(s: &Vector, u: &Matrix) -> (Vector, Matrix) {
    let mut order: Vec<usize> = (0..s.len()).collect();
    order.sort_by(|&a, &b| {
        s.get(b)
            .unwrap_or(0.0)
            .partial_cmp(&s.get(a).unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut sorted_s = Vec::with_capacity(order.len());
    let mut permuted_u = Matrix::zeros(u.rows(), u.cols());
    for (new_col, &old_col) in order.iter().enumerate() {
        sorted_s.push(s.get(old_col).unwrap_or(0.0));
        let col = u.column(old_col);
        permuted_u.set_column(new_col, &col);
    }
    (Vector::from_vec(sorted_s), permuted_u)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_state(max_rank: usize) -> ThinSvdState {
        let a = Matrix::from_rows(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ])
        .unwrap();
        let result = jacobi_svd(&a, JacobiConfig::default());
        ThinSvdState::new(result.u, result.s, max_rank, 3)
    }

    #[test]
    fn update_with_column_in_span_leaves_rank_unchanged() {
        let mut state = seed_state(5);
        let rank_before = state.rank();
        let c = Vector::from_vec(vec![1.0, 0.0, 0.0]);
        state.update_with_column(&c).unwrap();
        assert_eq!(state.rank(), rank_before);
    }

    #[test]
    fn update_with_column_grows_rank_up_to_max() {
        let mut state = seed_state(2);
        let c = Vector::from_vec(vec![0.0, 0.0, 1.0]);
        state.update_with_column(&c).unwrap();
        assert!(state.rank() <= 2);
    }

    #[test]
    fn update_rejects_wrong_length_column() {
        let mut state = seed_state(5);
        let bad = Vector::from_vec(vec![1.0, 2.0]);
        assert!(matches!(
            state.update_with_column(&bad),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn vocabulary_growth_is_detected() {
        let state = seed_state(5);
        assert!(!state.vocabulary_growth_exceeds(3, DEFAULT_VOCAB_GROWTH_THRESHOLD));
        assert!(state.vocabulary_growth_exceeds(10, DEFAULT_VOCAB_GROWTH_THRESHOLD));
    }

    #[test]
    fn grow_to_vocab_extends_rows_with_zeros_and_keeps_rank() {
        let mut state = seed_state(5);
        let rank_before = state.rank();
        state.grow_to_vocab(6);
        assert_eq!(state.u().rows(), 6);
        assert_eq!(state.rank(), rank_before);
        for c in 0..state.u().cols() {
            assert_eq!(state.u().get(5, c), 0.0);
        }
    }

    #[test]
    fn grow_to_vocab_is_a_no_op_when_not_growing() {
        let mut state = seed_state(5);
        let rows_before = state.u().rows();
        state.grow_to_vocab(rows_before);
        state.grow_to_vocab(rows_before - 1);
        assert_eq!(state.u().rows(), rows_before);
    }

    #[test]
    fn project_batch_matches_row_count_of_each_vector() {
        let state = seed_state(5);
        let columns = vec![
            Vector::from_vec(vec![1.0, 0.0, 0.0]),
            Vector::from_vec(vec![0.0, 1.0, 0.0]),
        ];
        let projected = state.project_batch(&columns).unwrap();
        assert_eq!(projected.len(), 2);
        for v in projected {
            assert_eq!(v.len(), state.rank());
        }
    }
}
