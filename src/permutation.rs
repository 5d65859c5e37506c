//! Lexicographic permutation enumeration and simultaneous row/column relabeling.

use nalgebra::{DMatrix, Scalar};

use crate::error::{Error, Result};

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns `false` once `perm` was the last permutation, leaving it sorted
/// ascending again so enumeration can restart from the identity.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    // longest non-increasing suffix starts at `i`
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        perm.reverse();
        return false;
    }

    let pivot = i - 1;
    let mut j = n - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// Iterator over every permutation of `0..n` in lexicographic order.
///
/// `n = 0` yields a single empty permutation.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }
}

/// Number of permutations of `n` elements, `None` if it overflows `u64`.
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Whether `perm` is a bijection on `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Relabels both rows and columns of `matrix`: `out[(i, j)] = matrix[(perm[i], perm[j])]`.
///
/// A non-square `matrix` is reported as a [`Error::ShapeMismatch`] against the
/// square shape `perm` expects.
pub fn permute<T: Scalar>(matrix: &DMatrix<T>, perm: &[usize]) -> Result<DMatrix<T>> {
    if !matrix.is_square() {
        return Err(Error::ShapeMismatch {
            left: matrix.shape(),
            right: (perm.len(), perm.len()),
        });
    }
    if !is_permutation(perm, matrix.nrows()) {
        return Err(Error::InvalidPermutation {
            len: perm.len(),
            expected: matrix.nrows(),
        });
    }

    Ok(matrix.select_rows(perm).select_columns(perm))
}
