// file: src/pipeline/runner.rs
// description: sequential per-row lookups with immediate, flushed csv output
// reference: drives filtered rows through the directory client

use crate::directory::DirectoryLookup;
use crate::error::{PipelineError, Result};
use crate::models::{MalformedRow, ProgressSnapshot, Record, RunState, RunSummary};
use crate::pipeline::progress::ProgressSink;
use std::io::Write;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub struct BatchRunner<'a> {
    lookup: &'a dyn DirectoryLookup,
    name_index: usize,
    state: RunState,
}

impl<'a> BatchRunner<'a> {
    pub fn new(lookup: &'a dyn DirectoryLookup, name_index: usize) -> Self {
        Self {
            lookup,
            name_index,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Writes `header`, then each row with its lookup result appended.
    ///
    /// Every row is flushed before the next lookup starts, so a failure part
    /// way through leaves a valid csv of everything processed so far.
    pub async fn run<W: Write>(
        &mut self,
        header: Record,
        rows: Vec<Record>,
        sink: &mut csv::Writer<W>,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<RunSummary> {
        let total = rows.len();
        let mut summary = RunSummary::new(total);
        let start = Instant::now();

        info!("Looking up {} rows", total);

        let outcome = self
            .process(header, rows, sink, progress, cancel, &mut summary)
            .await;

        summary.duration_secs = start.elapsed().as_secs_f64();
        summary.state = self.state;

        match outcome {
            Ok(()) => {
                log_summary(&summary);
                Ok(summary)
            }
            Err(e) => {
                error!(
                    "Batch failed after {} of {} rows: {}",
                    summary.processed, total, e
                );
                Err(e)
            }
        }
    }

    async fn process<W: Write>(
        &mut self,
        header: Record,
        rows: Vec<Record>,
        sink: &mut csv::Writer<W>,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let total = summary.total;
        self.state = RunState::Running;

        if let Err(e) = write_row(sink, &header) {
            self.state = RunState::Failed;
            return Err(e);
        }

        for mut row in rows {
            if cancel.is_cancelled() {
                warn!(
                    "Batch cancelled after {} of {} rows",
                    summary.processed, total
                );
                self.state = RunState::Cancelled;
                return Ok(());
            }

            match row.get(self.name_index) {
                Some(name) => {
                    let result = self.lookup.lookup(name).await;
                    debug!("Line {}: {} -> {}", row.line(), name, result);

                    if result.is_found() {
                        summary.found += 1;
                    } else {
                        summary.not_found += 1;
                    }
                    row.push(result.as_field());

                    if let Err(e) = write_row(sink, &row) {
                        self.state = RunState::Failed;
                        return Err(e);
                    }
                }
                None => {
                    let skipped = MalformedRow {
                        line: row.line(),
                        fields: row.len(),
                        required: self.name_index + 1,
                    };
                    warn!("Skipping malformed row: {}", skipped);
                    summary.malformed.push(skipped);
                }
            }

            summary.processed += 1;
            progress.on_progress(ProgressSnapshot::new(summary.processed, total));
        }

        self.state = RunState::Completed;
        Ok(())
    }
}

fn write_row<W: Write>(sink: &mut csv::Writer<W>, row: &Record) -> Result<()> {
    sink.write_record(row.fields())?;
    sink.flush().map_err(PipelineError::Io)
}

fn log_summary(summary: &RunSummary) {
    info!("=== Batch Summary ===");
    info!("State: {:?}", summary.state);
    info!("Rows processed: {} of {}", summary.processed, summary.total);
    info!("Found: {}", summary.found);
    info!("Not found: {}", summary.not_found);
    info!("Hit rate: {:.2}%", summary.hit_rate());
    info!("Duration: {:.2}s", summary.duration_secs);
    info!("Throughput: {:.2} rows/sec", summary.rows_per_second());
    info!("=====================");
}
