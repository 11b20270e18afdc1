//! Threshold-gated k-nearest-neighbour vote.
//!
//! The vote contract:
//! 1. An exemplar is eligible when its distance to the query is at most
//!    `max_distance`.
//! 2. Eligible exemplars are ordered by (distance, exemplar index); the
//!    first `k` are the neighbours.
//! 3. The label with the most neighbours wins. Ties go to the smaller
//!    cumulative distance, then to the smaller label code.
//! 4. No neighbours means [`LabelCode::NONE`].
//!
//! The threshold is a confidence gate: with a tight threshold fewer than `k`
//! neighbours may vote, or none at all.

use rustc_hash::FxHashMap;

use crate::LabelCode;

/// One eligible exemplar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// Index into the candidate sequence (the corpus).
    pub exemplar: usize,
    pub distance: f64,
    pub label: LabelCode,
}

/// Tally for one label among the neighbours.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vote {
    pub label: LabelCode,
    pub count: usize,
    pub cumulative_distance: f64,
}

/// The `k` nearest eligible candidates, closest first.
pub fn nearest<'a, I, D>(
    candidates: I,
    query: &[i32],
    k: usize,
    max_distance: f64,
    distance: D,
) -> Vec<Neighbor>
where
    I: IntoIterator<Item = (&'a [i32], LabelCode)>,
    D: Fn(&[i32], &[i32]) -> f64,
{
    let mut eligible: Vec<Neighbor> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(exemplar, (features, label))| {
            let distance = distance(query, features);
            (distance <= max_distance).then_some(Neighbor {
                exemplar,
                distance,
                label,
            })
        })
        .collect();
    eligible.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.exemplar.cmp(&b.exemplar))
    });
    eligible.truncate(k);
    eligible
}

/// Votes per label, winner first.
pub fn tally(neighbors: &[Neighbor]) -> Vec<Vote> {
    let mut by_label: FxHashMap<LabelCode, Vote> = FxHashMap::default();
    for neighbor in neighbors {
        let vote = by_label.entry(neighbor.label).or_insert(Vote {
            label: neighbor.label,
            count: 0,
            cumulative_distance: 0.0,
        });
        vote.count += 1;
        vote.cumulative_distance += neighbor.distance;
    }
    let mut votes: Vec<Vote> = by_label.into_values().collect();
    votes.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(a.cumulative_distance.total_cmp(&b.cumulative_distance))
            .then(a.label.cmp(&b.label))
    });
    votes
}

/// Winning label, or [`LabelCode::NONE`] when nobody voted.
pub fn majority(neighbors: &[Neighbor]) -> LabelCode {
    tally(neighbors)
        .first()
        .map_or(LabelCode::NONE, |vote| vote.label)
}

#[cfg(test)]
mod tests;
