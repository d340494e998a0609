//! Error types for palette operations
//!
//! This module provides error types for color token parsing and for
//! building a palette out of a batch of records.

use std::fmt;

/// Error type for parsing color tokens.
///
/// Carries the entry name and the offending token verbatim so the host can
/// point at the exact resource entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Token is neither a `#` literal with 3, 4, 6 or 8 digits nor a
    /// `@color/` reference
    UnsupportedFormat {
        /// Name of the entry holding the token
        name: String,
        /// The token as encountered
        token: String,
    },
    /// Literal token has the right length but contains a non-hex character
    InvalidDigit {
        /// Name of the entry holding the token
        name: String,
        /// The token as encountered
        token: String,
    },
}

impl ParseColorError {
    /// Name of the entry that failed to parse.
    pub fn name(&self) -> &str {
        match self {
            ParseColorError::UnsupportedFormat { name, .. }
            | ParseColorError::InvalidDigit { name, .. } => name,
        }
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            ParseColorError::UnsupportedFormat { token, .. }
            | ParseColorError::InvalidDigit { token, .. } => token,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::UnsupportedFormat { name, token } => {
                write!(f, "unsupported color format for '{}': '{}'", name, token)
            }
            ParseColorError::InvalidDigit { name, token } => {
                write!(f, "invalid hex digit in color '{}': '{}'", name, token)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
///
/// Palette parsing is fail-fast: the first bad record aborts the whole
/// batch, and its position is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A record's token could not be parsed
    ParseColor {
        /// Zero-based position of the record in the batch
        index: usize,
        /// The underlying parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::ParseColor { index, source } => {
                write!(f, "record {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
        }
    }
}
