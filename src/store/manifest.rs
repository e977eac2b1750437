use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use uuid::Uuid;

/// Source files recorded as processed, independent of how many rows each
/// produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub tcx_file: String,
    pub records: usize,
    pub processed_at: DateTime<Utc>,
    pub run_id: Uuid,
}

impl Manifest {
    pub fn files(&self) -> BTreeSet<String> {
        self.entries.iter().map(|e| e.tcx_file.clone()).collect()
    }

    pub fn record(&mut self, tcx_file: &str, records: usize, run_id: Uuid) {
        self.entries.push(ManifestEntry {
            tcx_file: tcx_file.to_string(),
            records,
            processed_at: Utc::now(),
            run_id,
        });
    }

    /// A missing file is an empty manifest.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| StoreError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
