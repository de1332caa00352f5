// file: src/models/progress.rs
// description: immutable progress snapshot handed to observers

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub processed: usize,
    pub total: usize,
}

impl ProgressSnapshot {
    pub fn new(processed: usize, total: usize) -> Self {
        Self { processed, total }
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.processed as f64 / self.total as f64) * 100.0
    }

    pub fn label(&self) -> String {
        format!("{} of {}", self.processed, self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.processed == self.total
    }
}
