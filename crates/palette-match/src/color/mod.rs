//! Color types and conversion utilities
//!
//! This module converts 8-bit sRGB channels into CIE Lab, the space the
//! distance metric operates in.
//!
//! # Color Spaces
//!
//! - **LinearRgb**: Linear light intensity, decoded from sRGB via a lookup table.
//! - **Lab**: CIE L*a*b* relative to D65, used for perceptual differences.
//!
//! # Example
//!
//! ```
//! use palette_match::{to_lab, Lab, LinearRgb};
//!
//! let linear = LinearRgb::from_u8(128, 64, 32);
//! let lab = Lab::from(linear);
//! assert_eq!(lab, to_lab(128, 64, 32));
//! ```

mod lab;
mod linear_rgb;
mod lut;

pub use lab::{to_lab, Lab, D65_WHITE};
pub use linear_rgb::LinearRgb;
