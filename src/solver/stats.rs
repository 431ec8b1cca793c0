//! Run statistics and their tabular rendering.

use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Statistics for a single attempt: one cycle from random reinitialization
/// through either a solution or a stall.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AttemptStats {
    /// Repair steps (single-variable reassignments) spent in this attempt.
    pub steps: u64,
    /// Whether the attempt reached a conflict-free assignment.
    pub solved: bool,
}

/// Statistics accumulated over a whole solve call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Repair steps in the final attempt. For a successful solve this is
    /// the step count of the attempt that found the solution.
    pub steps: u64,
    /// Repair steps summed over every attempt, including stalled ones.
    pub total_steps: u64,
    /// Number of attempts, i.e. one plus the number of restarts.
    pub attempts: u64,
    /// Per-attempt breakdown, in order.
    pub per_attempt: Vec<AttemptStats>,
    /// Wall-clock time for the whole solve call.
    pub elapsed: Duration,
}

/// Renders a per-attempt breakdown as a text table.
pub fn render_attempts_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Attempt"),
        Cell::new("Repair Steps"),
        Cell::new("Outcome"),
    ]));

    for (attempt, attempt_stats) in stats.per_attempt.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(attempt + 1).to_string()),
            Cell::new(&attempt_stats.steps.to_string()),
            Cell::new(if attempt_stats.solved {
                "solved"
            } else {
                "stalled"
            }),
        ]));
    }

    table.to_string()
}
