// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod lookup;
pub mod progress;
pub mod record;
pub mod summary;

pub use lookup::{LookupResult, NOT_FOUND};
pub use progress::ProgressSnapshot;
pub use record::{MalformedRow, Record};
pub use summary::{RunState, RunSummary};
