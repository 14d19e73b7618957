// Copyright 2025-present noema contributors
// SPDX-License-Identifier: Apache-2.0

//! The singular spectrum exposed for cutoff tuning.

/// One entry of the singular-value spectrum from the last successful build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumEntry {
    /// Position in the descending-sorted spectrum (0 = largest).
    pub dimension: usize,
    /// The singular value itself.
    pub value: f64,
    /// `value / sum(all values)`.
    pub share: f64,
    /// Running sum of `share` up to and including this entry. Non-decreasing,
    /// ending at `1.0` (within floating-point tolerance) at the last entry.
    pub cumulative_share: f64,
}

/// Build the spectrum from a descending-sorted slice of singular values.
pub fn spectrum_from_sorted(values: &[f64]) -> Vec<SpectrumEntry> {
    let total: f64 = values.iter().sum();
    let mut cumulative = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(dimension, &value)| {
            let share = if total > 0.0 { value / total } else { 0.0 };
            cumulative += share;
            SpectrumEntry {
                dimension,
                value,
                share,
                cumulative_share: cumulative,
            }
        })
        .collect()
}
