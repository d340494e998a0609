//! Palette statistics and the match table.

use palette_match::{Decision, Palette};
use serde::Serialize;

/// Counts of literal and referenced colors in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteStats {
    pub defined: usize,
    pub referenced: usize,
}

impl PaletteStats {
    pub fn of(palette: &Palette) -> Self {
        Self {
            defined: palette.defined_count(),
            referenced: palette.aliased_count(),
        }
    }

    /// One-line human summary, e.g. `Original input has 3 defined colors and 1 referenced colors`.
    pub fn describe(&self, label: &str) -> String {
        format!(
            "{} has {} defined colors and {} referenced colors",
            label, self.defined, self.referenced
        )
    }
}

/// Share of literal colors removed by a run, in whole percent.
///
/// Rounds half up. An input without literal colors has nothing to remove and
/// reports 0.
pub fn kill_rate(initial_defined: usize, updated_defined: usize) -> i64 {
    if initial_defined == 0 {
        return 0;
    }
    let rate = 100.0 - 100.0 * updated_defined as f64 / initial_defined as f64;
    (rate + 0.5).floor() as i64
}

/// One row of the match table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    pub name: String,
    pub raw_token: String,
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Nearest comparable target, if any
    pub best_target: Option<String>,
    /// Distance to `best_target`; absent when nothing was comparable
    pub distance: Option<f64>,
    pub within_tolerance: bool,
}

impl From<&Decision<'_>> for MatchRow {
    fn from(decision: &Decision<'_>) -> Self {
        let input = decision.input;
        let best_target = decision.result.best_target_name().map(str::to_string);
        let distance = best_target
            .as_ref()
            .map(|_| decision.result.best_distance());
        Self {
            name: input.name().to_string(),
            raw_token: input.raw_token().to_string(),
            alpha: input.alpha(),
            red: input.red(),
            green: input.green(),
            blue: input.blue(),
            best_target,
            distance,
            within_tolerance: decision.is_replacement(),
        }
    }
}

/// Build the match table for a set of decisions, in input order.
pub fn match_rows(decisions: &[Decision<'_>]) -> Vec<MatchRow> {
    decisions.iter().map(MatchRow::from).collect()
}

/// Render the match table as pretty JSON.
pub fn rows_to_json(rows: &[MatchRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
