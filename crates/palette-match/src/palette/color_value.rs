//! Literal palette colors normalized to 8-bit ARGB.

use std::fmt;

use super::error::ParseColorError;
use crate::color::{to_lab, Lab};

/// Marker that starts a literal color token.
pub const LITERAL_MARKER: char = '#';

/// Alpha value of a fully opaque color.
pub const OPAQUE: u8 = 255;

/// A named color defined by a literal token, resolved to ARGB channels.
///
/// The original token is kept verbatim so a caller can later find and
/// substitute it in the document it came from. Channels are always fully
/// resolved: shorthand tokens are expanded and 6-digit tokens are opaque.
///
/// # Example
///
/// ```
/// use palette_match::ColorValue;
///
/// let color = ColorValue::parse("accent", "#8F00").unwrap();
/// assert_eq!(color.argb(), [0x88, 0xFF, 0x00, 0x00]);
/// assert_eq!(color.raw_token(), "#8F00");
/// assert!(!color.is_opaque());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorValue {
    name: String,
    raw_token: String,
    alpha: u8,
    red: u8,
    green: u8,
    blue: u8,
}

impl ColorValue {
    /// Parse a literal color token (`#RGB`, `#ARGB`, `#RRGGBB` or
    /// `#AARRGGBB`, case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`ParseColorError::UnsupportedFormat`] if the token does not start
    ///   with `#` or has a digit count other than 3, 4, 6 or 8
    /// - [`ParseColorError::InvalidDigit`] if a digit is not hexadecimal
    pub fn parse(name: impl Into<String>, token: &str) -> Result<Self, ParseColorError> {
        let name = name.into();
        let Some(digits) = token.strip_prefix(LITERAL_MARKER) else {
            return Err(ParseColorError::UnsupportedFormat {
                name,
                token: token.to_string(),
            });
        };

        // Normalize everything to AARRGGBB
        let expanded = match digits.len() {
            3 => format!("FF{}", duplicate_digits(digits)),
            4 => duplicate_digits(digits),
            6 => format!("FF{}", digits),
            8 => digits.to_string(),
            _ => {
                return Err(ParseColorError::UnsupportedFormat {
                    name,
                    token: token.to_string(),
                })
            }
        };

        // from_str_radix alone would accept a leading '+'
        if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit {
                name,
                token: token.to_string(),
            });
        }
        let [alpha, red, green, blue] = match u32::from_str_radix(&expanded, 16) {
            Ok(value) => value.to_be_bytes(),
            Err(_) => {
                return Err(ParseColorError::InvalidDigit {
                    name,
                    token: token.to_string(),
                })
            }
        };

        Ok(Self {
            name,
            raw_token: token.to_string(),
            alpha,
            red,
            green,
            blue,
        })
    }

    /// Build a color directly from ARGB channels.
    ///
    /// The raw token is synthesized as uppercase `#AARRGGBB`.
    pub fn from_argb(name: impl Into<String>, argb: [u8; 4]) -> Self {
        let [alpha, red, green, blue] = argb;
        Self {
            name: name.into(),
            raw_token: format!("#{:02X}{:02X}{:02X}{:02X}", alpha, red, green, blue),
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Entry name, unique within its palette by convention only.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token exactly as it appeared in the source.
    #[inline]
    pub fn raw_token(&self) -> &str {
        &self.raw_token
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels as `[alpha, red, green, blue]`.
    #[inline]
    pub fn argb(&self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }

    /// True when alpha is exactly 255.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha == OPAQUE
    }

    /// CIE Lab of the color channels (alpha is ignored).
    #[inline]
    pub fn to_lab(&self) -> Lab {
        to_lab(self.red, self.green, self.blue)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.raw_token)
    }
}

/// Expand shorthand by writing every digit twice (`F0A` -> `FF00AA`).
fn duplicate_digits(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}
