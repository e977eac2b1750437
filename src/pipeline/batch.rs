use crate::error::{BatchError, FileError};
use crate::pipeline::file;
use crate::scan::CandidateSource;
use crate::store::manifest::Manifest;
use crate::store::Storage;
use crate::types::record::{Dataset, Record};
use rayon::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

/// What to do when a single source file cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole run and persist nothing.
    #[default]
    Abort,
    /// Log the file, leave it out of the manifest and carry on.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub keep_existing: bool,
    pub failure_policy: FailurePolicy,
    /// Worker threads; `None` uses one per core.
    pub jobs: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    pub tcx_file: String,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedFile {
    pub tcx_file: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub scanned: usize,
    pub skipped: Vec<String>,
    pub processed: Vec<ProcessedFile>,
    pub failed: Vec<FailedFile>,
    pub dropped_untimed: usize,
    pub rows_written: usize,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub dataset: Dataset,
    pub report: BatchReport,
}

/// Flattens every not-yet-processed candidate, merges with the existing data
/// when `keep_existing` is set, drops rows without a timestamp and persists
/// the result.
pub fn run_batch<S, T>(source: &S, storage: &T, options: &BatchOptions) -> Result<BatchOutcome, BatchError>
where
    S: CandidateSource + ?Sized,
    T: Storage + ?Sized,
{
    let run_id = Uuid::new_v4();
    let candidates = dedup(source.candidates()?);
    let mut report = BatchReport {
        run_id,
        scanned: candidates.len(),
        ..BatchReport::default()
    };

    let (mut dataset, mut manifest) = if options.keep_existing {
        tracing::info!("Loading existing data from {}", storage.describe());
        (storage.load_dataset()?, storage.load_manifest()?)
    } else {
        (Dataset::new(), Manifest::default())
    };

    let mut done: HashSet<String> = dataset.source_files().into_iter().collect();
    done.extend(manifest.files());

    let (pending, skipped): (Vec<String>, Vec<String>) =
        candidates.into_iter().partition(|c| !done.contains(c));
    if !skipped.is_empty() {
        tracing::info!("Removing {} already loaded files from file list", skipped.len());
    }
    report.skipped = skipped;

    for (path, result) in extract_all(&pending, options.jobs)? {
        match result {
            Ok(records) => {
                manifest.record(&path, records.len(), run_id);
                report.processed.push(ProcessedFile {
                    tcx_file: path,
                    records: records.len(),
                });
                dataset.extend(records);
            }
            Err(e) => match options.failure_policy {
                FailurePolicy::Abort => return Err(e.into()),
                FailurePolicy::Skip => {
                    tracing::warn!("Skipping {}: {}", e.path(), e);
                    report.failed.push(FailedFile {
                        tcx_file: path,
                        error: e.to_string(),
                    });
                }
            },
        }
    }

    report.dropped_untimed = dataset.retain_timestamped();
    report.rows_written = dataset.len();

    tracing::info!(
        processed = report.processed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        dropped = report.dropped_untimed,
        "Writing {} rows to {}",
        report.rows_written,
        storage.describe()
    );
    storage.save_dataset(&dataset)?;
    storage.save_manifest(&manifest)?;

    Ok(BatchOutcome { dataset, report })
}

type Extracted = (String, Result<Vec<Record>, FileError>);

/// Runs the file processor over `paths` on a worker pool. Results come back in
/// input order.
fn extract_all(paths: &[String], jobs: Option<usize>) -> Result<Vec<Extracted>, BatchError> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()?;
    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                tracing::info!("Processing {}", path);
                (path.clone(), file::process_file(path))
            })
            .collect::<Vec<_>>()
    }))
}

fn dedup(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
