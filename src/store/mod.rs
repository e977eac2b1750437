pub mod dataset;
pub mod manifest;

use crate::error::StoreError;
use crate::types::record::Dataset;
use manifest::Manifest;
use std::path::PathBuf;

/// Persistence for the flattened dataset and its processed-file manifest.
pub trait Storage {
    /// Where the dataset lives, for log messages.
    fn describe(&self) -> String;
    fn load_dataset(&self) -> Result<Dataset, StoreError>;
    fn save_dataset(&self, dataset: &Dataset) -> Result<(), StoreError>;
    fn load_manifest(&self) -> Result<Manifest, StoreError>;
    fn save_manifest(&self, manifest: &Manifest) -> Result<(), StoreError>;
}

/// CSV dataset on disk, with an optional JSON manifest beside it. Without a
/// manifest path the dataset's `tcx_file` column is the only ledger.
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub dataset_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
}

impl FileStorage {
    pub fn new(dataset_path: impl Into<PathBuf>, manifest_path: Option<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            manifest_path,
        }
    }
}

impl Storage for FileStorage {
    fn describe(&self) -> String {
        self.dataset_path.display().to_string()
    }

    fn load_dataset(&self) -> Result<Dataset, StoreError> {
        dataset::read_dataset(&self.dataset_path)
    }

    fn save_dataset(&self, dataset: &Dataset) -> Result<(), StoreError> {
        dataset::write_dataset(&self.dataset_path, dataset)
    }

    fn load_manifest(&self) -> Result<Manifest, StoreError> {
        match &self.manifest_path {
            Some(path) => Manifest::load(path),
            None => Ok(Manifest::default()),
        }
    }

    fn save_manifest(&self, manifest: &Manifest) -> Result<(), StoreError> {
        match &self.manifest_path {
            Some(path) => manifest.save(path),
            None => Ok(()),
        }
    }
}
