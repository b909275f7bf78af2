//! The array of values being sorted and visualized
//!
//! A [`Sequence`] has a fixed length for its whole lifetime. The only mutation
//! it exposes is [`Sequence::swap_adjacent`], which is what the sort engine uses
//! to make progress. Reordering never changes the length or the multiset of
//! values.

use crate::engine::Direction;
use rand::Rng;

/// Ordered, fixed-length list of integer values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    /// Wrap an existing list of values
    pub fn new(values: Vec<i64>) -> Self {
        Sequence { values }
    }

    /// Draw `len` values uniformly from the inclusive range `[min, max]`.
    ///
    /// Callers validate `min <= max` before getting here (see
    /// [`Config`](crate::config::Config)); an inverted range yields an empty
    /// sequence rather than panicking inside `rand`.
    pub fn generate<R: Rng + ?Sized>(len: usize, min: i64, max: i64, rng: &mut R) -> Self {
        if min > max {
            return Sequence::new(Vec::new());
        }
        let values = (0..len).map(|_| rng.random_range(min..=max)).collect();
        Sequence { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value, or `None` for an empty sequence
    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    /// Largest value, or `None` for an empty sequence
    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }

    /// Swap the elements at `j` and `j + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `j + 1` is out of bounds. The engine only swaps pairs it has
    /// already compared, so this indicates a handle used on the wrong sequence.
    pub fn swap_adjacent(&mut self, j: usize) {
        self.values.swap(j, j + 1);
    }

    /// Check whether every adjacent pair respects `direction` (ties allowed)
    pub fn is_sorted(&self, direction: Direction) -> bool {
        self.values
            .windows(2)
            .all(|w| !direction.should_swap(w[0], w[1]))
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Sequence::new(values)
    }
}
