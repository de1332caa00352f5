// file: src/pipeline/worker.rs
// description: runs an email job on a background task with progress and cancellation
// reference: tokio task handles and tokio-util cancellation tokens

use crate::directory::DirectoryLookup;
use crate::error::{PipelineError, Result};
use crate::models::{ProgressSnapshot, RunSummary};
use crate::pipeline::job::EmailJob;
use crate::pipeline::progress::WatchProgressSink;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct BatchWorker;

impl BatchWorker {
    /// Spawns `job` on the tokio runtime. Must be called from within a runtime.
    pub fn start(job: EmailJob, lookup: Arc<dyn DirectoryLookup>) -> BatchHandle {
        let cancel = CancellationToken::new();
        let (sink, progress) = WatchProgressSink::channel();

        let token = cancel.clone();
        let task = tokio::spawn(async move {
            debug!("Batch worker started for {}", job.input().display());
            job.execute(lookup.as_ref(), &sink, &token).await
        });

        BatchHandle {
            task,
            cancel,
            progress,
        }
    }
}

pub struct BatchHandle {
    task: JoinHandle<Result<RunSummary>>,
    cancel: CancellationToken,
    progress: watch::Receiver<ProgressSnapshot>,
}

impl BatchHandle {
    /// A receiver that observes every snapshot the worker publishes; closed
    /// once the worker finishes.
    pub fn progress(&self) -> watch::Receiver<ProgressSnapshot> {
        self.progress.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn wait(self) -> Result<RunSummary> {
        self.task
            .await
            .map_err(|e| PipelineError::Worker(e.to_string()))?
    }
}
