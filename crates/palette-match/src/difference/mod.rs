//! Perceptual distance between palette colors
//!
//! The color part of the distance is CIEDE2000 on CIE Lab. Transparency is
//! layered on top by a fixed policy:
//!
//! | input alpha | target alpha | result |
//! |-------------|--------------|--------|
//! | equal | equal | `ciede2000` |
//! | translucent | translucent (different) | `ciede2000 + abs(alpha_in - alpha_target)` |
//! | opaque | translucent (or the reverse) | `None` (incomparable) |
//!
//! The additive alpha term is an ad hoc heuristic, not color science. It is
//! kept as is because downstream tolerances were tuned against its output.

mod ciede2000;

pub use ciede2000::ciede2000;

use crate::color::Lab;
use crate::palette::{ColorValue, OPAQUE};

/// Perceptual distance from `input` to `target`.
///
/// Returns `None` when exactly one of the two colors is opaque: such a pair
/// is incomparable, which is neither "identical" nor "infinitely far".
///
/// # Example
///
/// ```
/// use palette_match::{distance, ColorValue};
///
/// let opaque = ColorValue::parse("a", "#FF336699").unwrap();
/// let translucent = ColorValue::parse("b", "#80336699").unwrap();
/// assert_eq!(distance(&opaque, &opaque), Some(0.0));
/// assert_eq!(distance(&opaque, &translucent), None);
/// ```
pub fn distance(input: &ColorValue, target: &ColorValue) -> Option<f64> {
    distance_lab(input, input.to_lab(), target, target.to_lab())
}

/// [`distance`] with Lab values already computed by the caller.
#[inline]
pub(crate) fn distance_lab(
    input: &ColorValue,
    input_lab: Lab,
    target: &ColorValue,
    target_lab: Lab,
) -> Option<f64> {
    apply_alpha_policy(
        ciede2000(input_lab, target_lab),
        input.alpha(),
        target.alpha(),
    )
}

/// Combine a pure color distance with the alpha channels of both colors.
#[inline]
pub fn apply_alpha_policy(rgb_distance: f64, input_alpha: u8, target_alpha: u8) -> Option<f64> {
    if input_alpha == target_alpha {
        Some(rgb_distance)
    } else if input_alpha != OPAQUE && target_alpha != OPAQUE {
        Some(rgb_distance + f64::from(input_alpha.abs_diff(target_alpha)))
    } else {
        // One side opaque, the other translucent. Both opaque would have
        // taken the first branch.
        None
    }
}
