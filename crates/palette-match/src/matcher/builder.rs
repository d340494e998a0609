//! PaletteMatcher builder -- the primary ergonomic entry point for the crate.
//!
//! [`PaletteMatcher`] owns a target palette with precomputed Lab values and a
//! tolerance, and turns input colors into [`Decision`]s.

use super::result::MatchResult;
use super::scan::nearest;
use super::tolerance::Tolerance;
use crate::color::Lab;
use crate::palette::{ColorValue, Palette};

/// What the host should do with an input color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Replace the input's token with a reference to `target`
    Replace {
        /// Name of the chosen target color
        target: String,
    },
    /// Leave the input untouched (too far, or nothing comparable)
    Keep,
}

/// Outcome for one input color.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<'a> {
    /// The input color the decision is about
    pub input: &'a ColorValue,
    /// Nearest target and its distance
    pub result: MatchResult,
    /// Tolerance-gated verdict
    pub verdict: Verdict,
}

impl Decision<'_> {
    /// True when the verdict is [`Verdict::Replace`].
    #[inline]
    pub fn is_replacement(&self) -> bool {
        matches!(self.verdict, Verdict::Replace { .. })
    }
}

/// Nearest-color matcher against a fixed target palette.
///
/// # Design
///
/// - Constructor requires the target palette (no invalid states)
/// - Target Lab values are computed once at construction
/// - [`decide_all()`](Self::decide_all) takes `&self`, so the matcher is
///   reusable across input palettes
///
/// # Example
///
/// ```
/// use palette_match::{Palette, PaletteMatcher, Tolerance, Verdict};
///
/// let targets = Palette::parse([("t1", "#FE0100"), ("t2", "#00FF00")]).unwrap();
/// let inputs = Palette::parse([("c1", "#FF0000")]).unwrap();
///
/// let matcher = PaletteMatcher::new(&targets).tolerance(Tolerance::new(5.0).unwrap());
/// let decisions = matcher.decide_all(inputs.defined());
///
/// assert_eq!(decisions[0].verdict, Verdict::Replace { target: "t1".to_string() });
/// ```
#[derive(Debug, Clone)]
pub struct PaletteMatcher {
    targets: Vec<ColorValue>,
    target_labs: Vec<Lab>,
    tolerance: Tolerance,
}

impl PaletteMatcher {
    /// Create a matcher over the defined colors of `targets`.
    ///
    /// Default tolerance is zero (exact color matches only).
    pub fn new(targets: &Palette) -> Self {
        Self::from_colors(targets.defined().to_vec())
    }

    /// Create a matcher over an explicit, ordered list of target colors.
    pub fn from_colors(targets: Vec<ColorValue>) -> Self {
        let target_labs = targets.iter().map(ColorValue::to_lab).collect();
        Self {
            targets,
            target_labs,
            tolerance: Tolerance::ZERO,
        }
    }

    /// Set the tolerance used for verdicts.
    #[inline]
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The configured tolerance.
    #[inline]
    pub fn current_tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Target colors in scan order.
    #[inline]
    pub fn targets(&self) -> &[ColorValue] {
        &self.targets
    }

    /// Nearest target for one input, without a verdict.
    pub fn find_nearest(&self, input: &ColorValue) -> MatchResult {
        nearest(input, input.to_lab(), &self.targets, &self.target_labs)
    }

    /// Match one input and apply the tolerance gate.
    pub fn decide<'a>(&self, input: &'a ColorValue) -> Decision<'a> {
        let result = self.find_nearest(input);
        let verdict = match result.best_target_name() {
            Some(target) if result.is_within(self.tolerance) => Verdict::Replace {
                target: target.to_string(),
            },
            _ => Verdict::Keep,
        };
        Decision {
            input,
            result,
            verdict,
        }
    }

    /// Match every input, in input order.
    pub fn decide_all<'a>(&self, inputs: &'a [ColorValue]) -> Vec<Decision<'a>> {
        inputs.iter().map(|input| self.decide(input)).collect()
    }
}
