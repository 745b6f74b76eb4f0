use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::search::{
    frontier::Frontier,
    reconstruct_path,
    space::{Heuristic, StateSpace},
    stats::SearchStats,
};

/// Best-first search ordered by f = g + h (A*).
///
/// The g table is the single source of truth for path costs. A state may sit
/// on the frontier several times with different costs; nothing is ever
/// removed eagerly. Instead each entry remembers the g it was pushed with,
/// and an entry whose g no longer matches the table is recognized as stale
/// and dropped when popped. The closed set only suppresses re-expansion of
/// states that already popped at their best cost, which is sound here
/// because neighbours are only ever re-pushed on a strict cost improvement
/// and the shipped heuristics are consistent (a closed state is never
/// rediscovered cheaper).
///
/// Returned paths are minimum-cost whenever the heuristic is admissible.
/// Tie-breaking is deterministic: see [`Frontier`].
pub struct AStarSearch<H> {
    heuristic: H,
}

impl<H> AStarSearch<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Searches from `start` to `goal`.
    ///
    /// Returns the start-to-goal path (both endpoints included) or `None` if
    /// the goal is unreachable, together with the run's [`SearchStats`].
    pub fn solve<S>(
        &self,
        space: &S,
        start: &S::State,
        goal: &S::State,
    ) -> (Option<Vec<S::State>>, SearchStats)
    where
        S: StateSpace,
        H: Heuristic<S>,
    {
        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();
        let mut g_costs: HashMap<S::State, u32> = HashMap::new();
        let mut predecessors: HashMap<S::State, S::State> = HashMap::new();
        let mut closed: HashSet<S::State> = HashSet::new();

        g_costs.insert(start.clone(), 0);
        frontier.push(self.heuristic.estimate(start), 0, start.clone());

        while let Some((g, state)) = frontier.pop() {
            // Superseded by a cheaper rediscovery that is already queued.
            if g_costs.get(&state).is_some_and(|&best| g > best) {
                stats.stale_skips += 1;
                continue;
            }

            if state == *goal {
                debug!(
                    cost = g,
                    expanded = stats.expanded,
                    "astar reached the goal"
                );
                return (Some(reconstruct_path(&predecessors, goal)), stats);
            }

            if !closed.insert(state.clone()) {
                stats.stale_skips += 1;
                continue;
            }
            stats.expanded += 1;

            for neighbour in space.neighbors(&state) {
                let tentative_g = g + 1;
                let improves = g_costs
                    .get(&neighbour)
                    .map_or(true, |&known| tentative_g < known);
                if improves {
                    g_costs.insert(neighbour.clone(), tentative_g);
                    predecessors.insert(neighbour.clone(), state.clone());
                    let f = tentative_g + self.heuristic.estimate(&neighbour);
                    frontier.push(f, tentative_g, neighbour);
                    stats.generated += 1;
                }
            }
            stats.frontier_peak = stats.frontier_peak.max(frontier.len());
        }

        debug!(expanded = stats.expanded, "astar exhausted the frontier");
        (None, stats)
    }
}
