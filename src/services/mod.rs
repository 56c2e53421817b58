//! Service layer for work that sits behind a UI action.

pub mod submission;

pub use submission::{LogSink, MemorySink, SubmissionSink};
