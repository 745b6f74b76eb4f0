use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::search::{reconstruct_path, space::StateSpace, stats::SearchStats};

/// Uninformed breadth-first search.
///
/// Explores the state graph in non-decreasing depth order from a FIFO
/// frontier, so with unit edge costs the first path that reaches the goal is
/// a shortest one. The goal test runs at generation time: a freshly produced
/// neighbour equal to the goal ends the search immediately.
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self
    }

    /// Searches from `start` to `goal`.
    ///
    /// Returns the start-to-goal path (both endpoints included) or `None` if
    /// the goal is unreachable, together with the run's [`SearchStats`].
    pub fn solve<S: StateSpace>(
        &self,
        space: &S,
        start: &S::State,
        goal: &S::State,
    ) -> (Option<Vec<S::State>>, SearchStats) {
        let mut stats = SearchStats::default();

        if start == goal {
            return (Some(vec![start.clone()]), stats);
        }

        let mut frontier = VecDeque::new();
        frontier.push_back(start.clone());
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut predecessors: HashMap<S::State, S::State> = HashMap::new();

        while let Some(state) = frontier.pop_front() {
            stats.expanded += 1;

            for neighbour in space.neighbors(&state) {
                if visited.contains(&neighbour) {
                    continue;
                }
                stats.generated += 1;
                visited.insert(neighbour.clone());
                predecessors.insert(neighbour.clone(), state.clone());

                if neighbour == *goal {
                    debug!(
                        expanded = stats.expanded,
                        generated = stats.generated,
                        "bfs reached the goal"
                    );
                    return (Some(reconstruct_path(&predecessors, goal)), stats);
                }
                frontier.push_back(neighbour);
            }
            stats.frontier_peak = stats.frontier_peak.max(frontier.len());
        }

        debug!(expanded = stats.expanded, "bfs exhausted the frontier");
        (None, stats)
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}
