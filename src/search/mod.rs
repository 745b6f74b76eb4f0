//! State-space search over implicitly defined graphs.
//!
//! The engine side is problem-agnostic: a problem frontend implements
//! [`StateSpace`](space::StateSpace) (and [`Heuristic`](space::Heuristic) for
//! informed search), and the strategies in [`bfs`] and [`astar`] explore the
//! induced graph. All edges have unit cost; BFS is therefore optimal
//! unconditionally, A* whenever its heuristic never overestimates.

pub mod astar;
pub mod bfs;
pub mod frontier;
pub mod space;
pub mod stats;

use std::collections::HashMap;
use std::hash::Hash;

/// Walks the predecessor map back from `goal` and returns the start-to-goal
/// path. The start state is the only state without a predecessor entry, so
/// the walk terminates there.
pub(crate) fn reconstruct_path<T: Clone + Eq + Hash>(
    predecessors: &HashMap<T, T>,
    goal: &T,
) -> Vec<T> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(prev) = predecessors.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
