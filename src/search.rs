//! Exhaustive search kernels shared by the matchers.

use nalgebra::{DMatrix, RealField};
use rayon::prelude::*;

use crate::distance::{permuted_distance_squared, permuted_distance_squared_below};
use crate::matcher::Match;
use crate::permutation::next_permutation;

/// Best candidate of a (partial) search, kept in squared form so branch
/// results compare exactly the way the sequential scan would.
#[derive(Debug, Clone)]
struct Best<T> {
    squared: T,
    permutation: Vec<usize>,
}

impl<T: RealField + Copy> Best<T> {
    /// Smaller distance wins; ties go to the lexicographically smaller permutation.
    fn better(self, other: Self) -> Self {
        if other.squared < self.squared
            || (other.squared == self.squared && other.permutation < self.permutation)
        {
            other
        } else {
            self
        }
    }

    fn into_match(self) -> Match<T> {
        Match {
            distance: self.squared.sqrt(),
            permutation: self.permutation,
        }
    }
}

/// Builds every `B_π` and takes the norm of `A − B_π`.
pub(crate) fn materialized<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> Match<T>
where
    T: RealField + Copy,
{
    let mut perm: Vec<usize> = (0..a.nrows()).collect();
    let mut best = Match {
        distance: (a - b).norm(),
        permutation: perm.clone(),
    };

    while next_permutation(&mut perm) {
        let permuted = b.select_rows(&perm).select_columns(&perm);
        let d = (a - &permuted).norm();
        if d < best.distance {
            best.distance = d;
            best.permutation.copy_from_slice(&perm);
        }
    }

    best
}

/// Enumerates every ordering of `perm[fixed..]` with `perm[..fixed]` held in
/// place, reading `B_π` by index and abandoning candidates early.
fn pruned_suffix<T>(a: &DMatrix<T>, b: &DMatrix<T>, mut perm: Vec<usize>, fixed: usize) -> Best<T>
where
    T: RealField + Copy,
{
    perm[fixed..].sort_unstable();
    let mut best = Best {
        squared: permuted_distance_squared(a, b, &perm),
        permutation: perm.clone(),
    };

    while next_permutation(&mut perm[fixed..]) {
        if let Some(squared) = permuted_distance_squared_below(a, b, &perm, best.squared) {
            best.squared = squared;
            best.permutation.copy_from_slice(&perm);
        }
    }

    best
}

pub(crate) fn pruned<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> Match<T>
where
    T: RealField + Copy,
{
    pruned_suffix(a, b, (0..a.nrows()).collect(), 0).into_match()
}

/// Splits the search by the image of index 0 and runs the branches on the
/// rayon pool.
pub(crate) fn parallel<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> Match<T>
where
    T: RealField + Copy,
{
    let n = a.nrows();
    if n < 2 {
        return pruned(a, b);
    }

    (0..n)
        .into_par_iter()
        .map(|first| {
            let mut perm = Vec::with_capacity(n);
            perm.push(first);
            perm.extend((0..n).filter(|&i| i != first));
            pruned_suffix(a, b, perm, 1)
        })
        .reduce_with(Best::better)
        .map_or_else(|| pruned(a, b), Best::into_match)
}
