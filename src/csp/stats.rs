use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over a single solve attempt.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SolveStats {
    /// Variable-selection invocations (one per search node entered).
    pub steps: u64,
    /// Candidate values undone after a failed branch.
    pub backtracks: u64,
}

pub fn render_solve_stats_table(stats: &SolveStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Steps"), Cell::new("Backtracks")]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.steps.to_string()),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.to_string()
}
