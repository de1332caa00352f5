// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{ColumnConfig, Config, DirectoryConfig, OutputConfig};
pub use directory::{DirectoryClient, DirectoryLookup};
pub use error::{PipelineError, Result};
pub use models::{LookupResult, MalformedRow, ProgressSnapshot, Record, RunState, RunSummary};
pub use pipeline::{
    BatchHandle, BatchRunner, BatchWorker, ColumnMapping, EmailJob, ProgressSink,
    ProgressTracker, RowFilter,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _client = DirectoryClient::new(&config.directory).unwrap();
        let _filter = RowFilter::new(ColumnMapping::from(&config.columns));
    }
}
