//! Textual substitution of matched colors.
//!
//! Every decision with a `Replace` verdict turns `>{raw_token}<` into
//! `>@color/{target}<` everywhere in the document. The match is literal and
//! covers every element carrying the same token, not just the one the
//! decision came from.

use palette_match::{Decision, Tolerance, Verdict, ALIAS_MARKER};

/// One applied substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Token that was replaced, as written in the document
    pub raw_token: String,
    /// Target color name now referenced instead
    pub target: String,
    /// Number of places the token was replaced
    pub occurrences: usize,
}

/// Rewritten document text plus what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    pub replacements: Vec<Replacement>,
}

/// Apply `decisions` to `document`.
///
/// `tolerance` is only used for log messages; the verdicts already carry the
/// tolerance gate.
pub fn rewrite(document: &str, decisions: &[Decision<'_>], tolerance: Tolerance) -> RewriteOutcome {
    let mut text = document.to_string();
    let mut replacements = Vec::new();

    for decision in decisions {
        let input = decision.input;
        match &decision.verdict {
            Verdict::Replace { target } => {
                let needle = format!(">{}<", input.raw_token());
                let occurrences = text.matches(&needle).count();
                if occurrences > 0 {
                    text = text.replace(&needle, &format!(">{}{}<", ALIAS_MARKER, target));
                }

                if input.is_opaque() {
                    tracing::info!(
                        distance = decision.result.best_distance(),
                        occurrences,
                        "Replacing {} by {}{}",
                        input.raw_token(),
                        ALIAS_MARKER,
                        target
                    );
                } else {
                    // Translucent colors deserve a second look
                    tracing::warn!(
                        distance = decision.result.best_distance(),
                        occurrences,
                        "Replacing {} by {}{}",
                        input.raw_token(),
                        ALIAS_MARKER,
                        target
                    );
                }

                replacements.push(Replacement {
                    raw_token: input.raw_token().to_string(),
                    target: target.clone(),
                    occurrences,
                });
            }
            Verdict::Keep => {
                let message = match decision.result.best_target_name() {
                    Some(name) => format!(
                        "{} is too far from {} (Distance {} > {})",
                        input.raw_token(),
                        name,
                        decision.result.best_distance(),
                        tolerance
                    ),
                    None => format!("{} has no comparable target color", input.raw_token()),
                };
                if input.is_opaque() {
                    tracing::info!(name = input.name(), "{}", message);
                } else {
                    tracing::warn!(name = input.name(), "{}", message);
                }
            }
        }
    }

    RewriteOutcome { text, replacements }
}
