pub mod pipeline;
pub mod report;
pub mod rewriter;

pub use pipeline::{run, RunOptions, RunSummary};
pub use report::{kill_rate, match_rows, rows_to_json, MatchRow, PaletteStats};
pub use rewriter::{rewrite, Replacement, RewriteOutcome};
