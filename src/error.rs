use palette_match::ToleranceError;
use std::path::PathBuf;
use thiserror::Error;

use crate::resources::ResourceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Invalid tolerance: {0}")]
    Tolerance(#[from] ToleranceError),

    #[error("Missing tolerance: pass it on the command line or set `tolerance` in the config")]
    MissingTolerance,

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
