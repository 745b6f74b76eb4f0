use tracing::debug;

use crate::csp::{
    assignment::Assignment,
    heuristics::{SelectFirst, VariableSelection},
    model::{ColouringModel, RegionId},
    stats::SolveStats,
};

/// Depth-first chronological backtracking over a [`ColouringModel`].
///
/// The search walks partial assignments: pick an unbound region, try each
/// colour of its domain in order, bind and recurse on success of the
/// consistency check, undo and move on when the branch fails. The one
/// assignment is passed down as an explicit mutable context and restored on
/// every exit path, so after a failed solve it is exactly as it was before.
///
/// The search is complete — if a valid colouring exists, it is found — and
/// the first solution in (declaration order × domain order) wins; there is
/// no objective to optimize.
pub struct BacktrackingSolver {
    selection: Box<dyn VariableSelection>,
}

impl BacktrackingSolver {
    pub fn new(selection: Box<dyn VariableSelection>) -> Self {
        Self { selection }
    }

    /// Searches for a complete consistent colouring of `model`.
    ///
    /// Returns the colouring, or `None` if every branch was exhausted,
    /// together with the run's [`SolveStats`]. Never returns a partial
    /// assignment.
    pub fn solve(&self, model: &ColouringModel) -> (Option<Assignment>, SolveStats) {
        self.solve_from(model, Assignment::unassigned(model.region_count()))
    }

    /// Like [`BacktrackingSolver::solve`], but completes a caller-supplied
    /// partial assignment instead of starting from scratch. Pre-bound
    /// regions are kept as given; if they already conflict, the solve fails
    /// without searching.
    pub fn solve_from(
        &self,
        model: &ColouringModel,
        mut assignment: Assignment,
    ) -> (Option<Assignment>, SolveStats) {
        let mut stats = SolveStats::default();

        for region in 0..model.region_count() {
            if let Some(colour) = assignment.get(region) {
                if !model.is_consistent(&assignment, region, colour) {
                    debug!(region, "pre-bound assignment is already in conflict");
                    return (None, stats);
                }
            }
        }

        if self.backtrack(model, &mut assignment, &mut stats) {
            (Some(assignment), stats)
        } else {
            (None, stats)
        }
    }

    fn backtrack(
        &self,
        model: &ColouringModel,
        assignment: &mut Assignment,
        stats: &mut SolveStats,
    ) -> bool {
        stats.steps += 1;

        let Some(region) = self.selection.select(model, assignment) else {
            // No unbound region left; every binding was checked on entry.
            return true;
        };

        for &colour in model.domain(region) {
            if !model.is_consistent(assignment, region, colour) {
                continue;
            }
            assignment.bind(region, colour);
            debug!(region, colour, "bound");
            if self.backtrack(model, assignment, stats) {
                return true;
            }
            assignment.clear(region);
            stats.backtracks += 1;
        }

        false
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new(Box::new(SelectFirst))
    }
}
