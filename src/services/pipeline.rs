//! One debt-reduction run: read both palettes, match, rewrite, report.

use palette_match::{PaletteMatcher, Tolerance};
use std::path::Path;

use crate::error::AppError;
use crate::resources::{load_palette, read_document, read_palette};
use crate::services::report::{kill_rate, match_rows, MatchRow, PaletteStats};
use crate::services::rewriter::{rewrite, Replacement};

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    pub tolerance: Tolerance,
    /// Leave the input file untouched
    pub dry_run: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Input palette before rewriting
    pub before: PaletteStats,
    /// Input palette after rewriting (as written, or as it would be written)
    pub after: PaletteStats,
    pub replacements: Vec<Replacement>,
    pub kill_rate: i64,
    /// Match table, one row per literal input color
    pub rows: Vec<MatchRow>,
    /// Whether the input file was written
    pub written: bool,
}

/// Match the literal colors of `input` against `target` and rewrite `input`.
///
/// Both files are parsed before anything is written, so an unsupported entry
/// in either one aborts the run with the input file unchanged.
pub fn run(input: &Path, target: &Path, options: &RunOptions) -> Result<RunSummary, AppError> {
    let (document, input_palette) = read_palette(input)?;
    let (_, target_palette) = read_palette(target)?;

    let before = PaletteStats::of(&input_palette);
    tracing::info!("{}", before.describe("Original input"));
    tracing::info!("{}", PaletteStats::of(&target_palette).describe("Target"));

    let matcher = PaletteMatcher::new(&target_palette).tolerance(options.tolerance);
    let decisions = matcher.decide_all(input_palette.defined());
    let rows = match_rows(&decisions);
    let outcome = rewrite(&document, &decisions, options.tolerance);

    let written = !options.dry_run && outcome.text != document;
    let updated = if written {
        std::fs::write(input, &outcome.text).map_err(|source| AppError::Write {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %input.display(), "Updated input file");
        load_palette(&read_document(input)?)?
    } else {
        if options.dry_run {
            tracing::info!(path = %input.display(), "Dry run, input file left unchanged");
        }
        load_palette(&outcome.text)?
    };

    let after = PaletteStats::of(&updated);
    tracing::info!("{}", after.describe("Updated file"));

    Ok(RunSummary {
        before,
        after,
        replacements: outcome.replacements,
        kill_rate: kill_rate(before.defined, after.defined),
        rows,
        written,
    })
}
