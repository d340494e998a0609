//! Nearest-target scan.
//!
//! A plain linear scan: palettes are tens to low hundreds of entries, and a
//! spatial index would have to reproduce the first-wins tie-break exactly.

use super::result::MatchResult;
use crate::color::Lab;
use crate::difference::distance_lab;
use crate::palette::ColorValue;

/// Find the nearest target for every input, in input order.
///
/// Targets are scanned in the order given; on equal distances the earlier
/// target wins. Pairs the distance policy marks incomparable are skipped.
///
/// # Example
///
/// ```
/// use palette_match::{match_all, Palette};
///
/// let inputs = Palette::parse([("c1", "#FF0000")]).unwrap();
/// let targets = Palette::parse([("t1", "#FE0100"), ("t2", "#00FF00")]).unwrap();
///
/// let results = match_all(inputs.defined(), targets.defined());
/// assert_eq!(results[0].best_target_name(), Some("t1"));
/// ```
pub fn match_all(inputs: &[ColorValue], targets: &[ColorValue]) -> Vec<MatchResult> {
    let target_labs: Vec<Lab> = targets.iter().map(ColorValue::to_lab).collect();
    inputs
        .iter()
        .map(|input| nearest(input, input.to_lab(), targets, &target_labs))
        .collect()
}

/// Find the nearest target for a single input.
pub fn match_one(input: &ColorValue, targets: &[ColorValue]) -> MatchResult {
    let target_labs: Vec<Lab> = targets.iter().map(ColorValue::to_lab).collect();
    nearest(input, input.to_lab(), targets, &target_labs)
}

/// Scan with precomputed Lab values; `target_labs[i]` belongs to `targets[i]`.
pub(crate) fn nearest(
    input: &ColorValue,
    input_lab: Lab,
    targets: &[ColorValue],
    target_labs: &[Lab],
) -> MatchResult {
    debug_assert_eq!(targets.len(), target_labs.len());

    let mut result = MatchResult::unmatched();
    for (target, &target_lab) in targets.iter().zip(target_labs) {
        if let Some(d) = distance_lab(input, input_lab, target, target_lab) {
            result.offer(target.name(), d);
        }
    }
    result
}
