//! Palette types and utilities
//!
//! This module turns raw `(name, token)` records into typed palette entries,
//! including error types for parsing.

mod color_value;
mod entry;
mod error;
mod palette;

pub use color_value::{ColorValue, LITERAL_MARKER, OPAQUE};
pub use entry::{Alias, PaletteEntry, ALIAS_MARKER};
pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
