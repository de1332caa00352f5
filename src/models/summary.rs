// file: src/models/summary.rs
// description: batch run state and final statistics
// reference: pipeline statistics reporting

use crate::models::MalformedRow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub state: RunState,
    pub processed: usize,
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub malformed: Vec<MalformedRow>,
    pub output: Option<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub duration_secs: f64,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            state: RunState::Idle,
            processed: 0,
            total,
            found: 0,
            not_found: 0,
            malformed: Vec::new(),
            output: None,
            started_at: Utc::now(),
            duration_secs: 0.0,
        }
    }

    pub fn hit_rate(&self) -> f64 {
        if self.processed == 0 {
            return 0.0;
        }
        (self.found as f64 / self.processed as f64) * 100.0
    }

    pub fn rows_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.processed as f64 / self.duration_secs
    }
}
