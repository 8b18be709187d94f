// src/models.rs
pub mod batch;
pub mod summary;
pub mod text_stats;

pub use batch::{BatchInfo, BatchReport, FileOutcome, RunSummary, WorkerId};
pub use summary::{Summary, WordCount};
pub use text_stats::TextStats;
