//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate,
//! and the only space the sRGB-to-XYZ matrix may be applied in.

use super::lut::srgb8_to_linear;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0 for colors decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode gamma-encoded 8-bit sRGB channels into linear light.
    ///
    /// # Example
    /// ```
    /// use palette_match::LinearRgb;
    ///
    /// let white = LinearRgb::from_u8(255, 255, 255);
    /// assert!((white.r - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb8_to_linear(r),
            g: srgb8_to_linear(g),
            b: srgb8_to_linear(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_black_and_white() {
        assert_eq!(LinearRgb::from_u8(0, 0, 0), LinearRgb::new(0.0, 0.0, 0.0));
        let white = LinearRgb::from_u8(255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-12);
        assert!((white.g - 1.0).abs() < 1e-12);
        assert!((white.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_channels_are_independent() {
        let red = LinearRgb::from_u8(255, 0, 0);
        assert!((red.r - 1.0).abs() < 1e-12);
        assert_eq!(red.g, 0.0);
        assert_eq!(red.b, 0.0);
    }
}
