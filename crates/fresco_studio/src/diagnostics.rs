//! Extraction failure diagnostics.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writes unparsable model responses to timestamped files for offline
/// inspection.
///
/// Recording is best-effort: a diagnostics write failure is logged and
/// swallowed so it never masks the extraction error being reported.
#[derive(Debug, Clone)]
pub struct FileDiagnostics {
    dir: PathBuf,
}

impl FileDiagnostics {
    /// Creates a recorder writing into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The diagnostics directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record one raw response, returning the file path when the write
    /// succeeded.
    pub fn record(&self, raw: &str) -> Option<PathBuf> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
        let path = self.dir.join(format!("extraction-failure-{stamp}.txt"));
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "Could not create diagnostics directory");
            return None;
        }
        match std::fs::write(&path, raw) {
            Ok(()) => {
                info!(path = %path.display(), "Recorded unparsable response");
                Some(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not record unparsable response");
                None
            }
        }
    }
}
