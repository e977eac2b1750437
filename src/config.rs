use crate::pipeline::batch::{BatchOptions, FailurePolicy};
use crate::scan::{GlobSource, DEFAULT_PATTERN};
use crate::store::FileStorage;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    /// `<output stem>.manifest.json` beside whatever the output ends up being.
    NextToOutput,
    At(PathBuf),
    Off,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub folder: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub keep_existing: bool,
    pub jobs: Option<usize>,
    pub failure_policy: FailurePolicy,
    pub manifest: ManifestLocation,
}

impl Config {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values fall
    /// back to the defaults. The default folder is the absolute working
    /// directory, so `tcx_file` identifiers stay comparable with datasets
    /// written by earlier runs from another directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let folder = match lookup("TCX_FOLDER") {
            Some(folder) => PathBuf::from(folder),
            None => std::env::current_dir()?,
        };

        let output = lookup("TCX_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output.csv"));

        let pattern = lookup("TCX_PATTERN").unwrap_or_else(|| DEFAULT_PATTERN.to_string());

        let keep_existing = lookup("TCX_KEEP")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(false);

        let jobs = lookup("TCX_JOBS")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0);

        let failure_policy = lookup("TCX_SKIP_INVALID")
            .and_then(|s| parse_bool(&s))
            .map(|skip| if skip { FailurePolicy::Skip } else { FailurePolicy::Abort })
            .unwrap_or_default();

        let manifest = match lookup("TCX_MANIFEST") {
            Some(value) if value.eq_ignore_ascii_case("off") => ManifestLocation::Off,
            Some(value) if !value.is_empty() => ManifestLocation::At(PathBuf::from(value)),
            _ => ManifestLocation::NextToOutput,
        };

        Ok(Self {
            folder,
            output,
            pattern,
            keep_existing,
            jobs,
            failure_policy,
            manifest,
        })
    }

    pub fn manifest_path(&self) -> Option<PathBuf> {
        match &self.manifest {
            ManifestLocation::NextToOutput => Some(default_manifest_path(&self.output)),
            ManifestLocation::At(path) => Some(path.clone()),
            ManifestLocation::Off => None,
        }
    }

    pub fn source(&self) -> GlobSource {
        GlobSource::new(&self.folder, &self.pattern)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.output, self.manifest_path())
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            keep_existing: self.keep_existing,
            failure_policy: self.failure_policy,
            jobs: self.jobs,
        }
    }
}

/// `output.csv` -> `output.manifest.json`, next to the output.
pub fn default_manifest_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}.manifest.json"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
