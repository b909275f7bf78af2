//! Steppable sort engine
//!
//! A sort run is an explicit state machine rather than a loop that runs to
//! completion. Each call to [`SortStep::advance`] performs comparisons until one
//! of them produces a swap, applies that swap, and hands control back to the
//! caller. Comparisons that leave the pair in place are never reported, so the
//! caller only sees steps that change what is on screen.
//!
//! The handle does not borrow the [`Sequence`]: the host loop owns both and
//! passes the sequence in on every step, which leaves it free to render the
//! sequence between steps. A handle is bound to the length of the sequence it
//! was started on and must only be advanced with that sequence.
//!
//! Once [`StepResult::Done`] has been returned the handle is finished and should
//! be dropped. Abandoning a handle at any point (for example on reset) is
//! always safe; it holds no external resources.

mod bubble;
mod insertion;

pub use bubble::BubbleStep;
pub use insertion::InsertionStep;

use crate::sequence::Sequence;
use std::fmt;

/// Requested ordering for a sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether the pair `(left, right)` violates this ordering. Ties never swap.
    pub fn should_swap(self, left: i64, right: i64) -> bool {
        match self {
            Direction::Ascending => left > right,
            Direction::Descending => left < right,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one resumption of a sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The pair at `left` and `right` (always `left + 1`) was swapped
    Swapped { left: usize, right: usize },
    /// No work remains
    Done,
}

impl StepResult {
    pub fn is_done(self) -> bool {
        matches!(self, StepResult::Done)
    }
}

/// A sort algorithm decomposed into single-swap steps
pub trait SortStep {
    /// Run comparisons until one swap is made or the run is exhausted.
    ///
    /// `Done` is returned exactly once. Calling again after that is a misuse;
    /// implementations keep returning `Done` without touching the sequence.
    fn advance(&mut self, seq: &mut Sequence) -> StepResult;

    /// Comparisons performed so far, including those that did not swap
    fn comparisons(&self) -> usize;

    /// Swaps performed so far
    fn swaps(&self) -> usize;
}

/// Available sort strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    /// Create a fresh run for `seq`. The sequence is not mutated until the
    /// first call to [`SortStep::advance`].
    pub fn start(self, seq: &Sequence, direction: Direction) -> Box<dyn SortStep> {
        match self {
            Algorithm::Bubble => Box::new(BubbleStep::new(seq, direction)),
            Algorithm::Insertion => Box::new(InsertionStep::new(seq, direction)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
