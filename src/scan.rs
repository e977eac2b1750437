use crate::error::ScanError;
use std::path::PathBuf;

pub const DEFAULT_PATTERN: &str = "*.tcx";

/// Supplies the candidate source-file identifiers for a batch.
pub trait CandidateSource {
    fn candidates(&self) -> Result<Vec<String>, ScanError>;
}

impl CandidateSource for Vec<String> {
    fn candidates(&self) -> Result<Vec<String>, ScanError> {
        Ok(self.clone())
    }
}

/// Files in `folder` matching `pattern`. Identifiers are the joined paths as
/// strings, so they stay stable as long as the same folder argument is used.
#[derive(Debug, Clone)]
pub struct GlobSource {
    pub folder: PathBuf,
    pub pattern: String,
}

impl GlobSource {
    pub fn new(folder: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            pattern: pattern.into(),
        }
    }

    fn full_pattern(&self) -> String {
        let folder = glob::Pattern::escape(&self.folder.to_string_lossy());
        PathBuf::from(folder)
            .join(&self.pattern)
            .to_string_lossy()
            .into_owned()
    }
}

impl CandidateSource for GlobSource {
    fn candidates(&self) -> Result<Vec<String>, ScanError> {
        let pattern = self.full_pattern();
        tracing::info!("Scanning {} for .tcx files", self.folder.display());

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path.to_string_lossy().into_owned());
            }
        }
        Ok(files)
    }
}
