//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs and holds the exact
//! IEC 61966-2-1 decode for every 8-bit channel value.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}
