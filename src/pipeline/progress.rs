// file: src/pipeline/progress.rs
// description: progress delivery from the batch runner to its observers
// reference: uses indicatif for progress bars and a watch channel for cross-task updates

use crate::models::ProgressSnapshot;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tokio::sync::watch;

/// Receives a snapshot after every processed row. May be called from a
/// worker task, so implementations must not touch UI state directly.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, snapshot: ProgressSnapshot);
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressSnapshot) + Send + Sync,
{
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self(snapshot)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn on_progress(&self, _snapshot: ProgressSnapshot) {}
}

/// Single-writer side of a watch channel; the reader always sees the latest snapshot.
#[derive(Debug)]
pub struct WatchProgressSink {
    sender: watch::Sender<ProgressSnapshot>,
}

impl WatchProgressSink {
    pub fn new(sender: watch::Sender<ProgressSnapshot>) -> Self {
        Self { sender }
    }

    pub fn channel() -> (Self, watch::Receiver<ProgressSnapshot>) {
        let (sender, receiver) = watch::channel(ProgressSnapshot::default());
        (Self::new(sender), receiver)
    }
}

impl ProgressSink for WatchProgressSink {
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self.sender.send_replace(snapshot);
    }
}

/// Terminal rendering of progress: a bar with percentage and a count line.
pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_color(true)
    }

    pub fn with_color(colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
        }
    }

    pub fn hidden() -> Self {
        Self {
            main_bar: ProgressBar::hidden(),
            detail_bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.main_bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.main_bar.length()
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Processing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn abandon(&self, message: &str) {
        self.main_bar.abandon_with_message(message.to_string());
        self.detail_bar.finish_and_clear();
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressTracker {
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self.main_bar.set_length(snapshot.total as u64);
        self.main_bar.set_position(snapshot.processed as u64);
        self.main_bar
            .set_message(format!("{:.2}%", snapshot.percent()));
        self.detail_bar
            .set_message(format!("Rows processed: {}", snapshot.label()));
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}"
    };
    let chars = if colored { "█▓▒░" } else { "=>-" };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(chars)),
        Err(e) => tracing::warn!("Invalid progress bar template: {}", e),
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    match ProgressStyle::default_bar().template("{msg}") {
        Ok(style) => bar.set_style(style),
        Err(e) => tracing::warn!("Invalid detail bar template: {}", e),
    }
    bar
}
