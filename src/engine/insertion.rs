//! Insertion sort as a resumable state machine
//!
//! Element `i` is walked left one adjacent swap at a time until its left
//! neighbour no longer violates the ordering. That first non-violating
//! comparison ends the walk without being reported to the caller.

use super::{Direction, SortStep, StepResult};
use crate::sequence::Sequence;

#[derive(Debug, Clone)]
pub struct InsertionStep {
    len: usize,
    direction: Direction,
    /// Index of the element currently being inserted
    i: usize,
    /// Current position of that element
    j: usize,
    finished: bool,
    comparisons: usize,
    swaps: usize,
}

impl InsertionStep {
    pub fn new(seq: &Sequence, direction: Direction) -> Self {
        InsertionStep {
            len: seq.len(),
            direction,
            i: 1,
            j: 1,
            finished: false,
            comparisons: 0,
            swaps: 0,
        }
    }
}

impl SortStep for InsertionStep {
    fn advance(&mut self, seq: &mut Sequence) -> StepResult {
        if self.finished {
            return StepResult::Done;
        }

        while self.i < self.len {
            if self.j > 0 {
                let j = self.j;
                self.comparisons += 1;

                let values = seq.values();
                if self.direction.should_swap(values[j - 1], values[j]) {
                    seq.swap_adjacent(j - 1);
                    self.swaps += 1;
                    self.j -= 1;
                    return StepResult::Swapped {
                        left: j - 1,
                        right: j,
                    };
                }
            }
            self.i += 1;
            self.j = self.i;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_element_to_front() {
        let mut seq = Sequence::from(vec![2, 3, 1]);
        let mut step = InsertionStep::new(&seq, Direction::Ascending);

        // i = 1: 2 <= 3, nothing to report; i = 2: 1 walks left twice
        assert_eq!(
            step.advance(&mut seq),
            StepResult::Swapped { left: 1, right: 2 }
        );
        assert_eq!(seq.values(), &[2, 1, 3]);
        assert_eq!(
            step.advance(&mut seq),
            StepResult::Swapped { left: 0, right: 1 }
        );
        assert_eq!(seq.values(), &[1, 2, 3]);
        assert_eq!(step.advance(&mut seq), StepResult::Done);
        assert_eq!(step.swaps(), 2);
    }

    #[test]
    fn test_sorted_input_uses_one_comparison_per_element() {
        let mut seq = Sequence::from(vec![1, 2, 3, 4, 5]);
        let mut step = InsertionStep::new(&seq, Direction::Ascending);
        assert_eq!(step.advance(&mut seq), StepResult::Done);
        assert_eq!(step.comparisons(), 4);
        assert_eq!(step.swaps(), 0);
    }

    #[test]
    fn test_reverse_input_swaps_every_pair() {
        let mut seq = Sequence::from(vec![1, 2, 3, 4]);
        let mut step = InsertionStep::new(&seq, Direction::Descending);
        while !step.advance(&mut seq).is_done() {}
        assert_eq!(seq.values(), &[4, 3, 2, 1]);
        assert_eq!(step.swaps(), 6);
        assert_eq!(step.comparisons(), 6);
    }
}
