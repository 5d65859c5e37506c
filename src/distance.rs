//! Frobenius distance between matrices.

use nalgebra::{DMatrix, RealField, Scalar};

use crate::error::{Error, Result};

/// Checks that `a` and `b` are square with the same dimension and returns it.
pub fn check_square_pair<T: Scalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> Result<usize> {
    if !a.is_square() || !b.is_square() || a.nrows() != b.nrows() {
        return Err(Error::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(a.nrows())
}

/// `‖a − b‖_F` for two matrices of the same shape.
pub fn frobenius_distance<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> Result<T>
where
    T: RealField + Copy,
{
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok((a - b).norm())
}

/// Squared distance between `a` and `b` relabeled by `perm`, read by index.
#[inline]
pub(crate) fn permuted_distance_squared<T>(a: &DMatrix<T>, b: &DMatrix<T>, perm: &[usize]) -> T
where
    T: RealField + Copy,
{
    let mut sum = T::zero();
    for (j, &pj) in perm.iter().enumerate() {
        for (i, &pi) in perm.iter().enumerate() {
            let d = a[(i, j)] - b[(pi, pj)];
            sum += d * d;
        }
    }
    sum
}

/// Like [`permuted_distance_squared`], but gives up once the running sum
/// reaches `bound` and returns `None`: the candidate can then no longer be
/// strictly better than the best seen so far.
#[inline]
pub(crate) fn permuted_distance_squared_below<T>(
    a: &DMatrix<T>,
    b: &DMatrix<T>,
    perm: &[usize],
    bound: T,
) -> Option<T>
where
    T: RealField + Copy,
{
    let mut sum = T::zero();
    // column-major: walk columns outermost
    for (j, &pj) in perm.iter().enumerate() {
        for (i, &pi) in perm.iter().enumerate() {
            let d = a[(i, j)] - b[(pi, pj)];
            sum += d * d;
        }
        if sum >= bound {
            return None;
        }
    }
    (sum < bound).then_some(sum)
}
