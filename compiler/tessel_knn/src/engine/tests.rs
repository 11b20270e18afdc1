use pretty_assertions::assert_eq;

use super::*;
use crate::{context_distance, Decision};

const NL: LabelCode = LabelCode(100 | (1 << 8));
const WS: LabelCode = LabelCode(200 | (1 << 8));

fn hamming(a: &[i32], b: &[i32]) -> f64 {
    context_distance(&[true; 4], a, b)
}

fn run(samples: &[([i32; 4], LabelCode)], query: [i32; 4], k: usize, max: f64) -> Vec<Neighbor> {
    nearest(
        samples.iter().map(|(f, l)| (f.as_slice(), *l)),
        &query,
        k,
        max,
        hamming,
    )
}

#[test]
fn threshold_gates_eligibility() {
    let samples = [([1, 2, 3, 4], NL), ([1, 2, 3, 9], WS), ([9, 9, 9, 9], WS)];
    let neighbors = run(&samples, [1, 2, 3, 4], 11, 0.25);
    let picked: Vec<usize> = neighbors.iter().map(|n| n.exemplar).collect();
    assert_eq!(picked, vec![0, 1]);
}

#[test]
fn keeps_k_closest_with_index_order_on_ties() {
    let samples = [
        ([0, 0, 0, 1], WS),
        ([0, 0, 0, 0], NL),
        ([0, 0, 0, 2], WS),
        ([0, 0, 0, 0], NL),
    ];
    let neighbors = run(&samples, [0, 0, 0, 0], 3, 1.0);
    let picked: Vec<usize> = neighbors.iter().map(|n| n.exemplar).collect();
    assert_eq!(picked, vec![1, 3, 0]);
}

#[test]
fn majority_wins() {
    let samples = [
        ([0, 0, 0, 0], NL),
        ([0, 0, 0, 1], NL),
        ([0, 0, 0, 0], WS),
    ];
    let neighbors = run(&samples, [0, 0, 0, 0], 11, 1.0);
    assert_eq!(majority(&neighbors), NL);
    let votes = tally(&neighbors);
    assert_eq!(votes[0].count, 2);
    assert_eq!(votes[1].label, WS);
}

#[test]
fn tie_goes_to_smaller_cumulative_distance() {
    let samples = [
        ([0, 0, 0, 1], NL),
        ([0, 0, 0, 0], WS),
    ];
    let neighbors = run(&samples, [0, 0, 0, 0], 11, 1.0);
    assert_eq!(majority(&neighbors), WS);
}

#[test]
fn exact_tie_goes_to_smaller_code() {
    let samples = [([0, 0, 0, 0], WS), ([0, 0, 0, 0], NL)];
    let neighbors = run(&samples, [0, 0, 0, 0], 11, 1.0);
    assert_eq!(majority(&neighbors), NL);
}

#[test]
fn no_neighbors_is_none() {
    let samples = [([9, 9, 9, 9], NL)];
    let neighbors = run(&samples, [0, 0, 0, 0], 11, 0.5);
    assert!(neighbors.is_empty());
    assert_eq!(majority(&neighbors).decode(), Decision::None);
    assert_eq!(majority(&run(&samples, [9, 9, 9, 9], 0, 1.0)), LabelCode::NONE);
}
