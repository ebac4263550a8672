//! Canonical machine-load states shared by the DP solvers and Lookahead.
//!
//! A state is the per-machine job-count vector constrained to be
//! non-increasing. Machines are identical, so two load vectors that differ
//! only by a permutation describe the same situation; the canonical form
//! keeps exactly one representative and shrinks the reachable space from
//! mᴺ to the number of integer partitions into at most m parts.

use std::collections::HashMap;

use crate::models::{Cost, Weight};

/// Per-machine job counts, non-increasing.
pub(crate) type State = Vec<u32>;

/// The all-zero root state.
pub(crate) fn root(machines: usize) -> State {
    vec![0; machines]
}

/// All valid single-job extensions of a canonical state, in machine order.
///
/// Coordinate j may be incremented only if j = 0 or count[j] < count[j-1];
/// anything else would leave canonical form and duplicate a load multiset
/// already represented elsewhere. Returns the successor together with the
/// incremented coordinate's new value, the job's position on that machine.
pub(crate) fn extensions(state: &State) -> Vec<(State, u32)> {
    let mut out = Vec::with_capacity(state.len());
    for j in 0..state.len() {
        if j == 0 || state[j] < state[j - 1] {
            let mut successor = state.clone();
            successor[j] += 1;
            let position = successor[j];
            out.push((successor, position));
        }
    }
    out
}

/// One DP layer: extends every live state by one job of the given weight,
/// keeping the minimum cost per resulting state. The returned map's key set
/// is the next frontier.
pub(crate) fn expand_layer(current: &HashMap<State, Cost>, weight: Weight) -> HashMap<State, Cost> {
    let mut next: HashMap<State, Cost> = HashMap::with_capacity(current.len() * 2);
    for (state, &cost) in current {
        for (successor, position) in extensions(state) {
            let candidate = cost + Cost::from(position) * weight;
            next.entry(successor)
                .and_modify(|best| *best = (*best).min(candidate))
                .or_insert(candidate);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(root(3), vec![0, 0, 0]);
    }

    #[test]
    fn test_extensions_of_root() {
        // Only the first machine may receive the first job.
        let succ = extensions(&root(3));
        assert_eq!(succ, vec![(vec![1, 0, 0], 1)]);
    }

    #[test]
    fn test_extensions_keep_canonical_form() {
        let succ = extensions(&vec![2, 1, 1]);
        let states: Vec<State> = succ.iter().map(|(s, _)| s.clone()).collect();
        assert_eq!(states, vec![vec![3, 1, 1], vec![2, 2, 1]]);
        for state in &states {
            assert!(state.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_extension_positions() {
        let succ = extensions(&vec![2, 1]);
        assert_eq!(succ, vec![(vec![3, 1], 3), (vec![2, 2], 2)]);
    }

    #[test]
    fn test_expand_layer_relaxes_minimum() {
        // Two states meeting in (2,1) must keep the cheaper transition.
        let mut layer = HashMap::new();
        layer.insert(vec![2, 0], 10u64);
        layer.insert(vec![1, 1], 4u64);
        let next = expand_layer(&layer, 3);
        // (2,0) -> (2,1) costs 10 + 1·3 = 13; (1,1) -> (2,1) costs 4 + 2·3 = 10.
        assert_eq!(next[&vec![2, 1]], 10);
        // (2,0) -> (3,0) costs 10 + 3·3 = 19.
        assert_eq!(next[&vec![3, 0]], 19);
    }

    #[test]
    fn test_frontier_size_is_partition_count() {
        // After k jobs the frontier holds the partitions of k into ≤ m parts.
        let mut layer = HashMap::new();
        layer.insert(root(2), 0u64);
        for _ in 0..4 {
            layer = expand_layer(&layer, 1);
        }
        // Partitions of 4 into at most 2 parts: 4, 3+1, 2+2.
        assert_eq!(layer.len(), 3);
    }
}
