//! Variable-selection policies for the backtracking solver.

use crate::csp::{assignment::Assignment, model::{ColouringModel, RegionId}};

/// Strategy for choosing which unbound region the solver branches on next.
///
/// Selection affects only the order the search space is explored, never
/// which assignments are solutions.
pub trait VariableSelection {
    /// The next region to branch on, or `None` when every region is bound.
    fn select(&self, model: &ColouringModel, assignment: &Assignment) -> Option<RegionId>;
}

/// Picks the first unbound region in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFirst;

impl VariableSelection for SelectFirst {
    fn select(&self, model: &ColouringModel, assignment: &Assignment) -> Option<RegionId> {
        (0..model.region_count()).find(|&region| assignment.get(region).is_none())
    }
}
