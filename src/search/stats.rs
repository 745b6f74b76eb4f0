use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over a single search invocation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: u64,
    /// States generated and placed on the frontier.
    pub generated: u64,
    /// Frontier entries skipped because a cheaper rediscovery superseded them.
    pub stale_skips: u64,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

pub fn render_stats_table(label: &str, stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Search"),
        Cell::new("Expanded"),
        Cell::new("Generated"),
        Cell::new("Stale Skips"),
        Cell::new("Frontier Peak"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(label),
        Cell::new(&stats.expanded.to_string()),
        Cell::new(&stats.generated.to_string()),
        Cell::new(&stats.stale_skips.to_string()),
        Cell::new(&stats.frontier_peak.to_string()),
    ]));

    table.to_string()
}
