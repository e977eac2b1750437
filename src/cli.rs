use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, ManifestLocation};
use crate::pipeline::batch::FailurePolicy;

#[derive(Parser, Debug)]
#[command(
    name = "tcx-flatten",
    author,
    version,
    about = "Convert a folder of .tcx files to a single .csv, optionally merging with existing output"
)]
pub struct Cli {
    /// Folder to scan for .tcx files (default: current directory)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// CSV file to write (default: output.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep existing output data and only process new files
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub keep: bool,

    /// File pattern inside the folder
    #[arg(long)]
    pub pattern: Option<String>,

    /// Worker threads (default: one per core)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Skip files that fail to parse instead of aborting the run
    #[arg(long, action = ArgAction::SetTrue)]
    pub skip_invalid: bool,

    /// Manifest of processed files (default: <output>.manifest.json)
    #[arg(long, conflicts_with = "no_manifest")]
    pub manifest: Option<PathBuf>,

    /// Track processed files only through the CSV's tcx_file column
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_manifest: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "tcx_flatten=debug"
        } else {
            "tcx_flatten=info"
        }
    }

    /// Flags given on the command line win over the environment.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(folder) = self.folder {
            config.folder = folder;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if self.keep {
            config.keep_existing = true;
        }
        if let Some(jobs) = self.jobs.filter(|&n| n > 0) {
            config.jobs = Some(jobs);
        }
        if self.skip_invalid {
            config.failure_policy = FailurePolicy::Skip;
        }
        if let Some(manifest) = self.manifest {
            config.manifest = ManifestLocation::At(manifest);
        }
        if self.no_manifest {
            config.manifest = ManifestLocation::Off;
        }
        config
    }
}
