//! Per-input outcome of a nearest-target scan.

use super::tolerance::Tolerance;

/// Distance reported when no target was comparable.
pub const UNMATCHED_DISTANCE: f64 = f64::MAX;

/// Best target found for one input color.
///
/// `best_distance` starts at [`UNMATCHED_DISTANCE`] and only ever decreases
/// while targets are scanned. When no target yields a comparable distance,
/// the name stays `None` and the distance stays at the sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    best_target_name: Option<String>,
    best_distance: f64,
}

impl MatchResult {
    /// A result with no comparable target yet.
    pub fn unmatched() -> Self {
        Self {
            best_target_name: None,
            best_distance: UNMATCHED_DISTANCE,
        }
    }

    #[inline]
    pub fn best_target_name(&self) -> Option<&str> {
        self.best_target_name.as_deref()
    }

    #[inline]
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// True once any target produced a comparable distance.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.best_target_name.is_some()
    }

    /// Inclusive tolerance gate. An unmatched result never passes,
    /// whatever the numeric value of the sentinel.
    #[inline]
    pub fn is_within(&self, tolerance: Tolerance) -> bool {
        self.is_matched() && tolerance.admits(self.best_distance)
    }

    /// Offer a candidate. Only a strictly smaller distance replaces the
    /// current best, so the first of several equal candidates is kept.
    #[inline]
    pub(crate) fn offer(&mut self, target_name: &str, distance: f64) {
        if distance < self.best_distance {
            self.best_distance = distance;
            self.best_target_name = Some(target_name.to_string());
        }
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::unmatched()
    }
}
