//! The seam between the generic search strategies and a concrete problem.

use std::fmt::Debug;
use std::hash::Hash;

/// An implicitly defined graph of states.
///
/// Implementors supply the successor relation; the search strategies never
/// see the problem's internals beyond it. `neighbors` must be a pure function
/// of the state, and its ordering must be deterministic: it fixes exploration
/// order and therefore which of several equally short paths is returned.
pub trait StateSpace {
    type State: Clone + Eq + Hash + Debug;

    /// All states reachable from `state` in a single unit-cost move.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// An estimate of the remaining cost from a state to the goal.
///
/// A* returns minimum-cost paths as long as the estimate is admissible
/// (never exceeds the true remaining cost).
pub trait Heuristic<S: StateSpace> {
    fn estimate(&self, state: &S::State) -> u32;
}
