//! Nearest-color matching and tolerance-gated decisions.

mod builder;
mod result;
mod scan;
mod tolerance;

pub use builder::{Decision, PaletteMatcher, Verdict};
pub use result::{MatchResult, UNMATCHED_DISTANCE};
pub use scan::{match_all, match_one};
pub use tolerance::{Tolerance, ToleranceError};
