// Integration tests for the steppable sort engine

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::engine::{Algorithm, Direction, SortStep, StepResult};
use sortty::sequence::Sequence;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Insertion];
const DIRECTIONS: [Direction; 2] = [Direction::Ascending, Direction::Descending];

/// Advance until `Done`, returning the number of calls (the final `Done` included)
fn run_to_completion(step: &mut dyn SortStep, seq: &mut Sequence) -> usize {
    let mut calls = 1;
    while !step.advance(seq).is_done() {
        calls += 1;
    }
    calls
}

fn sorted_copy(values: &[i64], direction: Direction) -> Vec<i64> {
    let mut expected = values.to_vec();
    expected.sort();
    if direction == Direction::Descending {
        expected.reverse();
    }
    expected
}

fn test_inputs() -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut inputs = vec![
        vec![],
        vec![42],
        vec![5, 3],
        vec![5, 3, 1, 4, 2],
        (0..40).collect(),
        (0..40).rev().collect(),
        vec![7; 25],
        vec![3, -1, 3, 0, -1, 3, 2],
    ];
    for len in [10, 37, 100] {
        inputs.push((0..len).map(|_| rng.random_range(-50..=50)).collect());
    }
    inputs
}

#[test]
fn test_bubble_scenario_ascending() {
    let mut seq = Sequence::from(vec![5, 3, 1, 4, 2]);
    let mut step = Algorithm::Bubble.start(&seq, Direction::Ascending);
    run_to_completion(step.as_mut(), &mut seq);
    assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_bubble_scenario_descending() {
    let mut seq = Sequence::from(vec![5, 3, 1, 4, 2]);
    let mut step = Algorithm::Bubble.start(&seq, Direction::Descending);
    run_to_completion(step.as_mut(), &mut seq);
    assert_eq!(seq.values(), &[5, 4, 3, 2, 1]);
}

#[test]
fn test_every_algorithm_sorts_every_input() {
    for algorithm in ALGORITHMS {
        for direction in DIRECTIONS {
            for input in test_inputs() {
                let mut seq = Sequence::from(input.clone());
                let mut step = algorithm.start(&seq, direction);
                run_to_completion(step.as_mut(), &mut seq);

                assert!(
                    seq.is_sorted(direction),
                    "{} {} left {:?} unsorted",
                    algorithm,
                    direction,
                    seq.values()
                );
                assert_eq!(seq.values(), sorted_copy(&input, direction).as_slice());
            }
        }
    }
}

#[test]
fn test_trivial_inputs_complete_immediately() {
    for algorithm in ALGORITHMS {
        for input in [vec![], vec![1]] {
            let mut seq = Sequence::from(input.clone());
            let mut step = algorithm.start(&seq, Direction::Ascending);
            assert_eq!(step.advance(&mut seq), StepResult::Done);
            assert_eq!(step.swaps(), 0);
            assert_eq!(seq.values(), input.as_slice());
        }
    }
}

#[test]
fn test_bubble_comparison_count() {
    for input in test_inputs() {
        let n = input.len();
        let mut seq = Sequence::from(input);
        let mut step = Algorithm::Bubble.start(&seq, Direction::Ascending);
        let calls = run_to_completion(step.as_mut(), &mut seq);

        assert_eq!(step.comparisons(), n * n.saturating_sub(1) / 2);
        // Only swaps and the final Done reach the caller
        assert_eq!(calls, step.swaps() + 1);
    }
}

#[test]
fn test_bubble_reverse_input_reports_every_comparison() {
    let n = 12;
    let mut seq = Sequence::from((0..n as i64).collect::<Vec<_>>());
    let mut step = Algorithm::Bubble.start(&seq, Direction::Descending);
    let calls = run_to_completion(step.as_mut(), &mut seq);
    assert_eq!(calls, n * (n - 1) / 2 + 1);
}

#[test]
fn test_each_step_is_one_adjacent_swap() {
    for algorithm in ALGORITHMS {
        for direction in DIRECTIONS {
            for input in test_inputs() {
                let mut seq = Sequence::from(input.clone());
                let mut step = algorithm.start(&seq, direction);
                let mut multiset = input.clone();
                multiset.sort();

                loop {
                    let before = seq.clone();
                    match step.advance(&mut seq) {
                        StepResult::Swapped { left, right } => {
                            assert_eq!(right, left + 1);
                            assert!(direction.should_swap(
                                before.values()[left],
                                before.values()[right]
                            ));
                            let mut expected = before.values().to_vec();
                            expected.swap(left, right);
                            assert_eq!(seq.values(), expected.as_slice());
                        }
                        StepResult::Done => {
                            assert_eq!(seq, before);
                            break;
                        }
                    }

                    let mut current = seq.values().to_vec();
                    current.sort();
                    assert_eq!(current, multiset, "permutation invariant broken");
                }
            }
        }
    }
}

#[test]
fn test_advance_after_done_is_inert() {
    for algorithm in ALGORITHMS {
        let mut seq = Sequence::from(vec![3, 1, 2]);
        let mut step = algorithm.start(&seq, Direction::Ascending);
        run_to_completion(step.as_mut(), &mut seq);

        let comparisons = step.comparisons();
        assert_eq!(step.advance(&mut seq), StepResult::Done);
        assert_eq!(step.comparisons(), comparisons);
        assert_eq!(seq.values(), &[1, 2, 3]);
    }
}

#[test]
fn test_handles_are_independent() {
    let mut a = Sequence::from(vec![4, 3, 2, 1]);
    let mut b = a.clone();
    let mut first = Algorithm::Bubble.start(&a, Direction::Ascending);
    let mut second = Algorithm::Bubble.start(&b, Direction::Ascending);

    first.advance(&mut a);
    first.advance(&mut a);
    assert_eq!(second.advance(&mut b), StepResult::Swapped { left: 0, right: 1 });
    assert_eq!(first.swaps(), 2);
    assert_eq!(second.swaps(), 1);
}
