use std::path::PathBuf;

use thiserror::Error;

/// No catalog entry matches the requested identifier.
///
/// This is the only lookup failure. Callers translate it into their own
/// transport error; [`NotFound::STATUS`] gives the HTTP classification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Part not found")]
pub struct NotFound;

impl NotFound {
    /// HTTP status equivalent of a missing part.
    pub const STATUS: u16 = 404;

    pub fn status_code(&self) -> u16 {
        Self::STATUS
    }
}

/// Failure while building a catalog from its data directory.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid part '{id}': {reason}")]
    Invalid { id: String, reason: String },
}
