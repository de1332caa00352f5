// file: src/pipeline/job.rs
// description: one input file to one output file, from path resolution to summary
// reference: coordinates filtering, sink creation and the batch runner

use crate::config::Config;
use crate::directory::DirectoryLookup;
use crate::error::{PipelineError, Result};
use crate::models::RunSummary;
use crate::pipeline::progress::ProgressSink;
use crate::pipeline::row_filter::{ColumnMapping, RowFilter};
use crate::pipeline::runner::BatchRunner;
use crate::utils::Validator;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug, Clone)]
pub struct EmailJob {
    input: PathBuf,
    output: PathBuf,
    mapping: ColumnMapping,
}

impl EmailJob {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>, config: &Config) -> Result<Self> {
        let input = input.into();
        Validator::validate_file_path(&input)?;

        let output = output.unwrap_or_else(|| default_output_path(&input, &config.output.suffix));
        Validator::validate_distinct_paths(&input, &output)?;

        Ok(Self {
            input,
            output,
            mapping: ColumnMapping::from(&config.columns),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The input is fully read and validated before the output file is created.
    ///
    /// Reading the input and creating the output run on the blocking pool. Row
    /// writes stay on the worker task: each is one small record followed by a
    /// flush, and the next lookup must not start before it lands on disk.
    pub async fn execute(
        &self,
        lookup: &dyn DirectoryLookup,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<RunSummary> {
        info!("Reading {}", self.input.display());
        let filter = RowFilter::new(self.mapping.clone());
        let input = self.input.clone();
        let output = self.output.clone();

        let (filtered, file) = tokio::task::spawn_blocking(move || {
            let filtered = filter.read_path(&input)?;
            let file =
                File::create(&output).map_err(|e| PipelineError::file_operation(&output, e))?;
            Ok::<_, PipelineError>((filtered, file))
        })
        .await
        .map_err(|e| PipelineError::Worker(format!("Input reading task failed: {}", e)))??;

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        info!("Writing {}", self.output.display());
        let mut runner = BatchRunner::new(lookup, self.mapping.name_index);
        let mut summary = runner
            .run(filtered.header, filtered.rows, &mut writer, progress, cancel)
            .await?;

        let mut malformed = filtered.malformed;
        malformed.append(&mut summary.malformed);
        summary.malformed = malformed;
        summary.output = Some(self.output.clone());

        Ok(summary)
    }
}

/// `<dir>/<stem><suffix>.<ext>` next to the input, e.g. `people_processed.csv`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    input.with_file_name(file_name)
}
