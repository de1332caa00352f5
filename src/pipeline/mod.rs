// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod job;
mod progress;
mod row_filter;
mod runner;
mod worker;

pub use job::{EmailJob, default_output_path};
pub use progress::{NoopProgress, ProgressSink, ProgressTracker, WatchProgressSink};
pub use row_filter::{ColumnMapping, FilteredInput, RowFilter};
pub use runner::BatchRunner;
pub use worker::{BatchHandle, BatchWorker};
