use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid XML: {0}")]
    InvalidXml(String),
    #[error("Document has no root element")]
    EmptyDocument,
    #[error("Expected a TrainingCenterDatabase root in the TCX namespace, found {0}")]
    UnexpectedRoot(String),
    #[error("Document ended with {0} unclosed element(s)")]
    Truncated(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

impl FileError {
    pub fn path(&self) -> &str {
        match self {
            FileError::Read { path, .. } | FileError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Could not read path while scanning: {0}")]
    Entry(#[from] glob::GlobError),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Existing dataset not found at {0}")]
    MissingDataset(PathBuf),
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Manifest error in {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error("Failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
