use thiserror::Error;

/// Failures surfaced by the matchers and the matrix utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Inputs are not square, or their dimensions disagree.
    ///
    /// `right` is the second operand's shape; for [`permute`](crate::permute)
    /// it is the `n`×`n` shape an `n`-element permutation expects.
    #[error("shape mismatch: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Index sequence is not a bijection on `0..expected`.
    #[error("not a permutation of 0..{expected} (got {len} indices)")]
    InvalidPermutation { len: usize, expected: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
