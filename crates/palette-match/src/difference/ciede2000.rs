//! CIEDE2000 color difference
//!
//! Implements the CIE 2000 color difference formula with unit parametric
//! factors (kL = kC = kH = 1), following the notation of Sharma, Wu and
//! Dalal, "The CIEDE2000 Color-Difference Formula: Implementation Notes,
//! Supplementary Test Data, and Mathematical Observations" (2005).

use crate::color::Lab;

/// 25^7, the chroma pivot of the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle in degrees, in `0.0..360.0`. Achromatic colors get hue 0.
#[inline]
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 difference between two Lab colors.
///
/// The result is symmetric in its arguments and zero for identical colors.
///
/// # Example
///
/// ```
/// use palette_match::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 0.0, 0.0);
/// let b = Lab::new(50.0, -1.0, 2.0);
/// assert!((ciede2000(a, b) - 2.3669).abs() < 1e-4);
/// assert_eq!(ciede2000(a, a), 0.0);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // Step 1: adjusted a' and chroma C'
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue_degrees(a1p, lab1.b);
    let h2p = hue_degrees(a2p, lab2.b);

    // Step 2: differences in lightness, chroma and hue
    let delta_lp = lab2.l - lab1.l;
    let delta_cp = c2p - c1p;
    let chroma_product = c1p * c2p;

    let delta_hp = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_big_hp = 2.0 * chroma_product.sqrt() * (delta_hp / 2.0).to_radians().sin();

    // Step 3: weighting functions
    let l_bar_p = (lab1.l + lab2.l) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;

    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();

    let l_offset = (l_bar_p - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let dl = delta_lp / s_l;
    let dc = delta_cp / s_c;
    let dh = delta_big_hp / s_h;

    // |R_T| <= 2 keeps the sum non-negative; max() absorbs rounding
    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).max(0.0).sqrt()
}
