//! Android color resource reader.
//!
//! Pulls `<color name="...">value</color>` records out of a `<resources>`
//! document in document order. This is a scanner, not an XML parser: the
//! rewriter later substitutes text in place, so values are kept exactly as
//! written (no trimming, no entity decoding).

use palette_match::{Palette, PaletteError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Error type for reading color resource documents
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a resources document: missing <resources> element")]
    MissingRoot,

    #[error("Color element #{index} has no name attribute")]
    MissingName { index: usize },

    #[error("Cannot support <color name=\"{name}\">{value}</color>")]
    Unsupported {
        name: String,
        value: String,
        #[source]
        source: PaletteError,
    },
}

/// One `<color>` element: its name attribute and verbatim text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    pub name: String,
    pub value: String,
}

fn root_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<resources\b").expect("root pattern is valid"))
}

fn comment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"))
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<color\b([^>]*)>([^<]*)</color\s*>").expect("color pattern is valid")
    })
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"\bname\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("name pattern is valid")
    })
}

/// Extract every color record from a resources document, in order.
///
/// Commented-out elements are ignored. Self-closing `<color/>` elements have
/// no value and are skipped.
pub fn parse_resources(xml: &str) -> Result<Vec<ColorRecord>, ResourceError> {
    let without_comments = comment_pattern().replace_all(xml, "");
    if !root_pattern().is_match(&without_comments) {
        return Err(ResourceError::MissingRoot);
    }

    color_pattern()
        .captures_iter(&without_comments)
        .enumerate()
        .map(|(index, caps)| -> Result<ColorRecord, ResourceError> {
            let name = name_pattern()
                .captures(&caps[1])
                .and_then(|n| n.get(1).or_else(|| n.get(2)))
                .ok_or(ResourceError::MissingName { index })?;
            Ok(ColorRecord {
                name: name.as_str().to_string(),
                value: caps[2].to_string(),
            })
        })
        .collect()
}

/// Parse a resources document into a palette.
///
/// Fails on the first entry whose value is neither a `#` literal nor a
/// `@color/` reference.
pub fn load_palette(xml: &str) -> Result<Palette, ResourceError> {
    let records = parse_resources(xml)?;
    Palette::parse(records.iter().map(|r| (r.name.as_str(), r.value.as_str()))).map_err(
        |source| {
            let PaletteError::ParseColor { index, .. } = &source;
            let record = &records[*index];
            ResourceError::Unsupported {
                name: record.name.clone(),
                value: record.value.clone(),
                source,
            }
        },
    )
}

/// Read a resources file from disk.
pub fn read_document(path: &Path) -> Result<String, ResourceError> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a resources file into a palette.
pub fn read_palette(path: &Path) -> Result<(String, Palette), ResourceError> {
    let document = read_document(path)?;
    let palette = load_palette(&document)?;
    tracing::debug!(
        path = %path.display(),
        defined = palette.defined_count(),
        referenced = palette.aliased_count(),
        "Loaded palette"
    );
    Ok((document, palette))
}
