use palette_match::Tolerance;
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Run settings loaded from an optional YAML file.
///
/// ```yaml
/// tolerance: 2.5
/// dry_run: false
/// report: json
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Maximum CIEDE2000 distance for a replacement
    pub tolerance: Option<f64>,

    /// Compute and log replacements without writing the input file
    pub dry_run: bool,

    /// How the per-color match table is reported
    pub report: ReportFormat,
}

/// Output format for the match table.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Log lines and summary only
    #[default]
    Text,
    /// Additionally print the match table as JSON
    Json,
}

impl Settings {
    /// Parse settings from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load settings from a file, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(settings) => {
                    tracing::info!(
                        path = %path.display(),
                        tolerance = ?settings.tolerance,
                        dry_run = settings.dry_run,
                        "Loaded configuration"
                    );
                    settings
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Pick the tolerance: the command line wins over the config file.
    pub fn resolve_tolerance(&self, cli: Option<Tolerance>) -> Result<Tolerance, AppError> {
        match (cli, self.tolerance) {
            (Some(tolerance), _) => Ok(tolerance),
            (None, Some(value)) => Tolerance::new(value).map_err(AppError::from),
            (None, None) => Err(AppError::MissingTolerance),
        }
    }
}
