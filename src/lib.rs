//! Brute-force graph matching.
//!
//! Given two `N`×`N` matrices `A` and `B` (for instance weighted adjacency
//! matrices), find the relabeling of `B`'s vertices that brings it closest to
//! `A` in Frobenius norm by trying all `N!` permutations. Exhaustive search is
//! exact but factorial, so it is only practical up to `N ≈ 10`.
//!
//! ```
//! use graph_match::{PermutationMatcher, Pruned};
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_row_slice(2, 2, &[1., 0., 0., 2.]);
//! let b = DMatrix::from_row_slice(2, 2, &[2., 0., 0., 1.]);
//! let best = Pruned.best_match(&a, &b).unwrap();
//! assert_eq!(best.distance, 0.);
//! assert_eq!(best.permutation, vec![1, 0]);
//! ```

mod distance;
mod error;
pub mod harness;
pub mod matcher;
mod permutation;
mod search;

pub use distance::{check_square_pair, frobenius_distance};
pub use error::{Error, Result};
pub use harness::{measure, random_pair, Benchmark, HarnessConfig, Measurement, Report};
pub use matcher::{Match, Parallel, PermutationMatcher, Pruned, Reference};
pub use permutation::{factorial, is_permutation, next_permutation, permute, Permutations};
