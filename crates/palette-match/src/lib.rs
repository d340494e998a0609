// Generated LUT tables carry more digits than f64 can hold
#![allow(clippy::excessive_precision, clippy::module_inception)]

//! palette-match: perceptual nearest-color matching between two palettes
//!
//! This library maps every literal color of an input palette onto the
//! perceptually closest color of a target palette, and decides whether the
//! pair is close enough to be treated as interchangeable.
//!
//! # Quick Start
//!
//! The [`PaletteMatcher`] builder is the primary entry point:
//!
//! ```
//! use palette_match::{Palette, PaletteMatcher, Tolerance};
//!
//! let targets = Palette::parse([("t1", "#FE0100"), ("t2", "#00FF00")]).unwrap();
//! let inputs = Palette::parse([("c1", "#FF0000")]).unwrap();
//!
//! let matcher = PaletteMatcher::new(&targets).tolerance(Tolerance::new(5.0).unwrap());
//! let decision = matcher.decide(&inputs.defined()[0]);
//!
//! assert!(decision.is_replacement());
//! assert!(decision.result.best_distance() > 0.0);
//! ```
//!
//! # Records In, Decisions Out
//!
//! The crate knows nothing about resource files. Hosts feed it ordered
//! `(name, token)` records and act on the returned decisions:
//!
//! - `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` (case-insensitive) become
//!   [`ColorValue`]s with resolved ARGB channels
//! - `@color/<name>` becomes an [`Alias`], counted but never matched
//! - anything else is [`ParseColorError::UnsupportedFormat`], and aborts the
//!   whole batch in [`Palette::parse`]
//!
//! # Distance
//!
//! Color channels are compared with CIEDE2000 on CIE Lab (D65); see
//! [`ciede2000`]. Alpha never enters the color transform. Instead
//! [`distance`] applies a fixed policy on top:
//!
//! ```text
//! alpha equal                    -> ciede2000
//! both translucent, different    -> ciede2000 + |alpha_in - alpha_target|
//! one opaque, one translucent    -> None (incomparable)
//! ```
//!
//! `None` is a first-class outcome. It is neither a zero distance nor an
//! infinite one, and the matcher simply skips such pairs.
//!
//! # Matching
//!
//! [`match_all`] scans every target for every input (O(n*m), fine for
//! human-authored palettes). Only a strictly smaller distance replaces the
//! current best, so among equally distant targets the first one in target
//! order wins. A [`MatchResult`] is within a [`Tolerance`] when a target was
//! found and `best_distance <= tolerance`.

pub mod color;
pub mod difference;
pub mod matcher;
pub mod palette;


pub use color::{to_lab, Lab, LinearRgb};
pub use difference::{apply_alpha_policy, ciede2000, distance};
pub use matcher::{
    match_all, match_one, Decision, MatchResult, PaletteMatcher, Tolerance, ToleranceError,
    Verdict, UNMATCHED_DISTANCE,
};
pub use palette::{
    Alias, ColorValue, Palette, PaletteEntry, PaletteError, ParseColorError, ALIAS_MARKER,
    LITERAL_MARKER, OPAQUE,
};
