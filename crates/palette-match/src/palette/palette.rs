//! Palette: an ordered set of parsed color records.

use super::color_value::ColorValue;
use super::entry::{Alias, PaletteEntry};
use super::error::PaletteError;

/// A parsed palette, split into literal colors and aliases.
///
/// Source order is preserved within each group. Order of the defined colors
/// matters: the matcher breaks distance ties in favor of the earlier target.
///
/// # Example
///
/// ```
/// use palette_match::Palette;
///
/// let palette = Palette::parse([
///     ("primary", "#3F51B5"),
///     ("accent", "#80FF4081"),
///     ("button", "@color/primary"),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.defined_count(), 2);
/// assert_eq!(palette.aliased_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    defined: Vec<ColorValue>,
    aliased: Vec<Alias>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a batch of `(name, token)` records.
    ///
    /// # Errors
    ///
    /// Fails on the first record that does not parse; no partial palette is
    /// returned, because later entries cannot be trusted once one is wrong.
    pub fn parse<I, N, T>(records: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut palette = Self::new();
        for (index, (name, token)) in records.into_iter().enumerate() {
            let entry = PaletteEntry::parse(name, token.as_ref())
                .map_err(|source| PaletteError::ParseColor { index, source })?;
            palette.push(entry);
        }
        Ok(palette)
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PaletteEntry) {
        match entry {
            PaletteEntry::Defined(color) => self.defined.push(color),
            PaletteEntry::Aliased(alias) => self.aliased.push(alias),
        }
    }

    /// Literal colors in source order.
    #[inline]
    pub fn defined(&self) -> &[ColorValue] {
        &self.defined
    }

    /// Alias entries in source order.
    #[inline]
    pub fn aliased(&self) -> &[Alias] {
        &self.aliased
    }

    #[inline]
    pub fn defined_count(&self) -> usize {
        self.defined.len()
    }

    #[inline]
    pub fn aliased_count(&self) -> usize {
        self.aliased.len()
    }

    /// Total number of entries of both kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.defined.len() + self.aliased.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a literal color by name (first match wins).
    pub fn find(&self, name: &str) -> Option<&ColorValue> {
        self.defined.iter().find(|c| c.name() == name)
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        let mut palette = Self::new();
        for entry in iter {
            palette.push(entry);
        }
        palette
    }
}
