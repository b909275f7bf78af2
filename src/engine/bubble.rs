//! Bubble sort as a resumable state machine

use super::{Direction, SortStep, StepResult};
use crate::sequence::Sequence;

/// Cursor state for a bubble sort run.
///
/// Pass `pass` compares `j` against `j + 1` for `j` in `0..len - 1 - pass`, so a
/// sequence of length `n` always sees exactly `n * (n - 1) / 2` comparisons.
#[derive(Debug, Clone)]
pub struct BubbleStep {
    len: usize,
    direction: Direction,
    pass: usize,
    j: usize,
    finished: bool,
    comparisons: usize,
    swaps: usize,
}

impl BubbleStep {
    pub fn new(seq: &Sequence, direction: Direction) -> Self {
        BubbleStep {
            len: seq.len(),
            direction,
            pass: 0,
            j: 0,
            finished: false,
            comparisons: 0,
            swaps: 0,
        }
    }
}

impl SortStep for BubbleStep {
    fn advance(&mut self, seq: &mut Sequence) -> StepResult {
        if self.finished {
            return StepResult::Done;
        }

        while self.pass + 1 < self.len {
            while self.j + 1 < self.len - self.pass {
                let j = self.j;
                self.j += 1;
                self.comparisons += 1;

                let values = seq.values();
                if self.direction.should_swap(values[j], values[j + 1]) {
                    seq.swap_adjacent(j);
                    self.swaps += 1;
                    return StepResult::Swapped {
                        left: j,
                        right: j + 1,
                    };
                }
            }
            self.pass += 1;
            self.j = 0;
        }

        self.finished = true;
        StepResult::Done
    }

    fn comparisons(&self) -> usize {
        self.comparisons
    }

    fn swaps(&self) -> usize {
        self.swaps
    }
}
