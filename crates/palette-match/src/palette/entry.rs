//! Palette entries: literal colors and references to other colors.

use super::color_value::{ColorValue, LITERAL_MARKER};
use super::error::ParseColorError;

/// Marker that starts a reference to another named color.
pub const ALIAS_MARKER: &str = "@color/";

/// A color defined as a reference to another named color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    /// Name of this entry
    pub name: String,
    /// Name of the referenced color (the token without `@color/`)
    pub target: String,
}

/// One parsed palette record.
///
/// Only [`PaletteEntry::Defined`] colors carry channel data and take part in
/// matching; aliases are kept for counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaletteEntry {
    /// A color given by a literal `#...` token
    Defined(ColorValue),
    /// A color given by an `@color/...` reference
    Aliased(Alias),
}

impl PaletteEntry {
    /// Parse a `(name, token)` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError::UnsupportedFormat`] if the token starts with
    /// neither `#` nor `@color/`, and propagates literal parse failures.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_match::PaletteEntry;
    ///
    /// let entry = PaletteEntry::parse("link", "@color/primary").unwrap();
    /// assert_eq!(entry.name(), "link");
    /// assert!(entry.as_defined().is_none());
    /// ```
    pub fn parse(name: impl Into<String>, token: &str) -> Result<Self, ParseColorError> {
        let name = name.into();
        if token.starts_with(LITERAL_MARKER) {
            ColorValue::parse(name, token).map(PaletteEntry::Defined)
        } else if let Some(target) = token.strip_prefix(ALIAS_MARKER) {
            Ok(PaletteEntry::Aliased(Alias {
                name,
                target: target.to_string(),
            }))
        } else {
            Err(ParseColorError::UnsupportedFormat {
                name,
                token: token.to_string(),
            })
        }
    }

    /// Entry name.
    pub fn name(&self) -> &str {
        match self {
            PaletteEntry::Defined(color) => color.name(),
            PaletteEntry::Aliased(alias) => &alias.name,
        }
    }

    /// The literal color, if this entry is one.
    pub fn as_defined(&self) -> Option<&ColorValue> {
        match self {
            PaletteEntry::Defined(color) => Some(color),
            PaletteEntry::Aliased(_) => None,
        }
    }
}
