//! CIE L*a*b* color space
//!
//! CIE Lab is the space the CIEDE2000 difference formula is defined on.
//! Conversion follows the standard sRGB pipeline: gamma decode, the sRGB
//! primaries matrix into CIE XYZ, then the cube-root/linear lightness curve
//! relative to the D65 reference white.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB), CIE 15:2004 (colorimetry)

use super::linear_rgb::LinearRgb;

/// D65 reference white in CIE XYZ (Y normalized to 1.0).
pub const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Lower bound of the cube-root segment of the lightness curve, (6/29)^3.
const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the linear segment of the lightness curve, (29/3)^3.
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE L*a*b* color space (D65).
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: roughly -128 to 127 for sRGB colors
    pub a: f64,
    /// Blue-yellow axis: roughly -128 to 127 for sRGB colors
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma (distance from the neutral axis).
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Convert 8-bit gamma-encoded sRGB channels to CIE Lab.
///
/// Alpha is deliberately absent: transparency is a concern of the distance
/// policy, never of the color space transform.
///
/// # Example
///
/// ```
/// use palette_match::to_lab;
///
/// let white = to_lab(255, 255, 255);
/// assert!((white.l - 100.0).abs() < 1e-3);
/// assert!(white.a.abs() < 1e-2 && white.b.abs() < 1e-2);
/// ```
#[inline]
pub fn to_lab(r: u8, g: u8, b: u8) -> Lab {
    Lab::from(LinearRgb::from_u8(r, g, b))
}

/// The piecewise lightness transfer function `f(t)` of CIE 1976.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to XYZ (sRGB primaries, D65)
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        // Step 2: Normalize by the reference white and apply the lightness curve
        let fx = lab_f(x / D65_WHITE[0]);
        let fy = lab_f(y / D65_WHITE[1]);
        let fz = lab_f(z / D65_WHITE[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the palette crate (it derives its own matrix from
    /// the sRGB primaries, so the last digits differ)
    const PALETTE_TOLERANCE: f64 = 1e-2;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::white_point::D65;
        use palette::{FromColor, Lab as PaletteLab, Srgb};

        let test_colors: [(u8, u8, u8); 9] = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (128, 128, 128),
            (255, 255, 255),
            (0, 0, 0),
            (3, 2, 1),
            (200, 120, 40),
        ];

        for (r, g, b) in test_colors {
            let ours = to_lab(r, g, b);
            let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
            let theirs: PaletteLab<D65, f64> = PaletteLab::from_color(srgb);

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_lab_known_values() {
        // Reference values for sRGB red under D65
        let red = to_lab(255, 0, 0);
        assert!(approx_eq(red.l, 53.2408, 1e-2), "red L = {}", red.l);
        assert!(approx_eq(red.a, 80.0925, 1e-2), "red a = {}", red.a);
        assert!(approx_eq(red.b, 67.2032, 1e-2), "red b = {}", red.b);

        let black = to_lab(0, 0, 0);
        assert!(black.l.abs() < 1e-9, "black L = {}", black.l);
        assert_eq!(black.a, 0.0);
        assert_eq!(black.b, 0.0);
    }

    #[test]
    fn test_grays_are_neutral() {
        for v in (0..=255u8).step_by(15) {
            let gray = to_lab(v, v, v);
            assert!(
                gray.chroma() < 1e-2,
                "gray {v} should have ~zero chroma, got {}",
                gray.chroma()
            );
        }
    }

    #[test]
    fn test_lightness_monotonic_in_gray() {
        let mut prev = to_lab(0, 0, 0).l;
        for v in 1..=255u8 {
            let l = to_lab(v, v, v).l;
            assert!(l > prev, "lightness not monotonic at {v}");
            prev = l;
        }
    }

    #[test]
    fn test_dark_values_use_linear_segment() {
        // sRGB 1 decodes far below EPSILON, where f(t) is linear
        let dark = to_lab(1, 1, 1);
        assert!(dark.l > 0.0 && dark.l < 1.0, "got L = {}", dark.l);
    }
}
