pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scan;
pub mod store;
pub mod types;

pub use pipeline::batch::{run_batch, BatchOptions, BatchOutcome, BatchReport, FailurePolicy};
