//! Interchangeable brute-force matchers behind one trait.
//!
//! Every implementation returns the global minimum of `‖A − B_π‖_F` over all
//! `N!` simultaneous row/column permutations `B_π[(i, j)] = B[(π(i), π(j))]`.
//! They differ only in how fast they get there:
//!
//! - [`Reference`] materializes each `B_π` and lets nalgebra take the norm.
//! - [`Pruned`] reads `B_π` by index and abandons a candidate as soon as its
//!   partial sum can no longer beat the best one.
//! - [`Parallel`] runs the pruned scan on the rayon pool, one branch per
//!   image of index 0.
//!
//! All three enumerate in lexicographic order and break ties toward the
//! smaller permutation.

use nalgebra::{DMatrix, RealField};

use crate::distance::check_square_pair;
use crate::error::Result;
use crate::permutation::factorial;
use crate::search;

/// Optimal relabeling of `B` found by a matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<T> {
    pub distance: T,
    pub permutation: Vec<usize>,
}

pub trait PermutationMatcher<T: RealField + Copy>: Send + Sync {
    /// Short identifier used in benchmark reports.
    fn name(&self) -> &'static str;

    /// Minimum distance together with the permutation achieving it.
    ///
    /// Fails with [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) unless
    /// both inputs are square with the same dimension.
    fn best_match(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> Result<Match<T>>;

    fn min_distance(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> Result<T> {
        self.best_match(a, b).map(|m| m.distance)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

#[derive(Debug, Clone, Copy, Default)]
pub struct Pruned;

#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel;

fn run<T>(
    name: &'static str,
    a: &DMatrix<T>,
    b: &DMatrix<T>,
    kernel: fn(&DMatrix<T>, &DMatrix<T>) -> Match<T>,
) -> Result<Match<T>>
where
    T: RealField + Copy,
{
    let n = check_square_pair(a, b)?;
    tracing::debug!(
        matcher = name,
        n,
        candidates = ?factorial(n),
        "searching permutations"
    );
    Ok(kernel(a, b))
}

impl<T: RealField + Copy> PermutationMatcher<T> for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn best_match(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> Result<Match<T>> {
        run(PermutationMatcher::<T>::name(self), a, b, search::materialized)
    }
}

impl<T: RealField + Copy> PermutationMatcher<T> for Pruned {
    fn name(&self) -> &'static str {
        "pruned"
    }

    fn best_match(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> Result<Match<T>> {
        run(PermutationMatcher::<T>::name(self), a, b, search::pruned)
    }
}

impl<T: RealField + Copy> PermutationMatcher<T> for Parallel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn best_match(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> Result<Match<T>> {
        run(PermutationMatcher::<T>::name(self), a, b, search::parallel)
    }
}

/// Every matcher the crate ships, reference first.
pub fn all<T: RealField + Copy>() -> Vec<Box<dyn PermutationMatcher<T>>> {
    vec![Box::new(Reference), Box::new(Pruned), Box::new(Parallel)]
}

#[cfg(test)]
mod test {
    use nalgebra::{Matrix2, Matrix4};

    use super::*;
    use crate::Error;

    fn dynamic<const N: usize>(m: nalgebra::SMatrix<f64, N, N>) -> DMatrix<f64> {
        DMatrix::from_iterator(N, N, m.iter().copied())
    }

    fn assert_min_distance(a: &DMatrix<f64>, b: &DMatrix<f64>, expected: f64, epsilon: f64) {
        for matcher in all::<f64>() {
            let got = matcher.min_distance(a, b).expect("square inputs");
            assert!(
                (got - expected).abs() < epsilon,
                "{}: {got} != {expected}",
                matcher.name()
            );
        }
    }

    #[test]
    fn single_element() {
        let a = DMatrix::from_element(1, 1, 0.25);
        let b = DMatrix::from_element(1, 1, -1.5);
        assert_min_distance(&a, &b, 1.75, f64::EPSILON);
    }

    #[test]
    fn empty() {
        let a = DMatrix::<f64>::zeros(0, 0);
        for matcher in all::<f64>() {
            let m = matcher.best_match(&a, &a).unwrap();
            assert_eq!(m.distance, 0.);
            assert!(m.permutation.is_empty());
        }
    }

    #[test]
    fn exchange_against_itself() {
        #[rustfmt::skip]
        let a = dynamic(Matrix2::new(
            0., 1.,
            1., 0.,
        ));
        assert_min_distance(&a, &a.clone(), 0., f64::EPSILON);
    }

    #[test]
    fn identity_against_exchange() {
        #[rustfmt::skip]
        let a = dynamic(Matrix2::new(
            1., 0.,
            0., 1.,
        ));
        #[rustfmt::skip]
        let b = dynamic(Matrix2::new(
            0., 1.,
            1., 0.,
        ));
        // conjugating the exchange matrix by the swap gives it back
        assert_min_distance(&a, &b, 2., 1e-12);
    }

    #[test]
    fn swap_recovers_relabeled_diagonal() {
        #[rustfmt::skip]
        let a = dynamic(Matrix2::new(
            1., 0.,
            0., 2.,
        ));
        #[rustfmt::skip]
        let b = dynamic(Matrix2::new(
            2., 0.,
            0., 1.,
        ));
        for matcher in all::<f64>() {
            let m = matcher.best_match(&a, &b).unwrap();
            assert_eq!(m.distance, 0.);
            assert_eq!(m.permutation, vec![1, 0]);
        }
    }

    #[test]
    fn recovers_hidden_relabeling() {
        #[rustfmt::skip]
        let a = dynamic(Matrix4::from_row_slice(
            &[
                0., 3., 1., 0.,
                3., 0., 5., 2.,
                1., 5., 0., 7.,
                0., 2., 7., 0.,
            ]
        ));
        let sigma = [2, 0, 3, 1];
        let b = DMatrix::from_fn(4, 4, |i, j| a[(sigma[i], sigma[j])]);
        for matcher in all::<f64>() {
            let m = matcher.best_match(&a, &b).unwrap();
            assert_eq!(m.distance, 0., "{}", matcher.name());
            let relabeled = crate::permute(&b, &m.permutation).unwrap();
            assert_eq!(relabeled, a);
        }
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let square = DMatrix::<f64>::zeros(3, 3);
        let smaller = DMatrix::<f64>::zeros(2, 2);
        let rect = DMatrix::<f64>::zeros(3, 2);
        for matcher in all::<f64>() {
            assert_eq!(
                matcher.min_distance(&square, &smaller),
                Err(Error::ShapeMismatch {
                    left: (3, 3),
                    right: (2, 2)
                })
            );
            assert!(matcher.min_distance(&rect, &rect).is_err());
            assert!(matcher.min_distance(&square, &rect).is_err());
        }
    }

    #[test]
    fn works_for_f32() {
        let a = DMatrix::<f32>::from_fn(3, 3, |i, j| (i + j) as f32);
        let b = DMatrix::<f32>::from_fn(3, 3, |i, j| (2 - i + 2 - j) as f32);
        for matcher in all::<f32>() {
            assert!(matcher.min_distance(&a, &b).unwrap().abs() < 1e-6);
        }
    }
}
