//! Output helpers for search results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use itertools::Itertools;

use crate::problem::Problem;
use crate::SearchResult;

/// Format a duration as hours, minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!(
        "{}h {:02}m {:02}s {:03}ms",
        hours,
        minutes,
        seconds,
        duration.subsec_millis()
    )
}

/// Write the result in the plain two-line format.
pub fn write_result<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "max profit: {}", result.best_profit)?;
    writeln!(out, "solution: {}", result.best)
}

/// The plain two-line result as a string.
pub fn format_result(result: &SearchResult) -> String {
    format!(
        "max profit: {}\nsolution: {}\n",
        result.best_profit, result.best
    )
}

/// Save a result to a file, including the selected item list.
pub fn save_result<P: AsRef<Path>>(
    result: &SearchResult,
    problem: &Problem,
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Knapsack solution for instance: {}", problem.name)?;
    write_result(&mut file, result)?;
    writeln!(
        file,
        "weight: {} / {}",
        result.best_weight, problem.capacity
    )?;
    writeln!(
        file,
        "items: {}",
        result.best.selected_indices().join(" ")
    )?;

    Ok(())
}

/// Statistics about a finished search.
pub struct SearchStatistics {
    pub items: usize,
    pub capacity: u64,
    pub iterations: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub runtime: Duration,
    pub initial_profit: u64,
    pub best_profit: u64,
    pub best_weight: u64,
    pub best_iteration: Option<u32>,
    pub selected_items: usize,
}

impl SearchStatistics {
    /// Collect statistics from a finished search.
    pub fn new(problem: &Problem, result: &SearchResult) -> Self {
        SearchStatistics {
            items: problem.item_count(),
            capacity: problem.capacity,
            iterations: result.iterations,
            accepted: result.accepted,
            rejected: result.rejected,
            runtime: result.run_time,
            initial_profit: result.initial_profit,
            best_profit: result.best_profit,
            best_weight: result.best_weight,
            best_iteration: result.best_iteration,
            selected_items: result.best.selected_count(),
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        let best_iteration = self
            .best_iteration
            .map_or_else(|| "initial".to_string(), |i| i.to_string());

        format!(
            "Search Statistics:
- Items: {}
- Capacity: {}
- Iterations: {} ({} accepted, {} rejected)
- Runtime: {}
- Initial Profit: {}
- Best Profit: {}
- Best Weight: {}
- Best Found At: {}
- Selected Items: {}",
            self.items,
            self.capacity,
            self.iterations,
            self.accepted,
            self.rejected,
            format_duration(self.runtime),
            self.initial_profit,
            self.best_profit,
            self.best_weight,
            best_iteration,
            self.selected_items
        )
    }
}
