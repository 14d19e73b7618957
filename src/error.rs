//! The error taxonomy.
//!
//! Every error the core can raise is a variant of a single closed enum.
//! There's no `thiserror` here - the set of errors is small and stable
//! enough that a hand-written `Display` impl is less ceremony than a derive.
//!
//! # Taxonomy
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `ShapeMismatch` | linear-algebra kernel | arithmetic on incompatible shapes |
//! | `InvalidCutoff` | `build_index`/`classify` | cutoff outside `(0, 1)` |
//! | `NotIndexed` | `highest_ranked_stems` | document not in the index |
//! | `InvalidPayload` | `load` | JSON missing/invalid `type`, version, or items shape |
//!
//! `NumericUnderflow` never appears here: it's handled internally by
//! epsilon-substitution in the linear-algebra kernel and the term-weight
//! transform, and never escapes as an error.

use std::fmt;

/// Errors surfaced by the public API.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Arithmetic attempted on matrices/vectors with incompatible shapes.
    ShapeMismatch {
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// A cutoff fraction outside the open interval `(0, 1)`.
    InvalidCutoff { cutoff: f64 },
    /// `highest_ranked_stems` called on an item with no `lsi_vector`.
    NotIndexed,
    /// A persisted payload whose `type` field is not `"lsi"`, or whose shape
    /// doesn't match the documented format.
    InvalidPayload { reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch {
                operation,
                lhs,
                rhs,
            } => write!(
                f,
                "shape mismatch in {operation}: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Error::InvalidCutoff { cutoff } => {
                write!(f, "cutoff {cutoff} is outside the open interval (0, 1)")
            }
            Error::NotIndexed => write!(f, "document has no lsi_vector; index was never built for it"),
            Error::InvalidPayload { reason } => write!(f, "invalid persisted payload: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
