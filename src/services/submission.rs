//! Contact submission sinks.
//!
//! The showcase has no submission endpoint: the production sink writes the
//! submission to the diagnostic log. A real endpoint would implement
//! [`SubmissionSink`] and be swapped in at startup.

use tracing::info;

use crate::models::Submission;

/// Receives submitted contact forms.
pub trait SubmissionSink {
    /// Deliver one submission. Delivery cannot fail from the form's point of view.
    fn deliver(&mut self, submission: &Submission);
}

/// Sink that records submissions in the tracing log.
#[derive(Debug, Default)]
pub struct LogSink {
    delivered: usize,
}

impl LogSink {
    /// Create a new log sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { delivered: 0 }
    }

    /// Number of submissions delivered so far.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }
}

impl SubmissionSink for LogSink {
    fn deliver(&mut self, submission: &Submission) {
        self.delivered += 1;
        info!(
            id = %submission.id,
            at = %submission.submitted_at.to_rfc3339(),
            name = %submission.form.name,
            email = %submission.form.email,
            company = %submission.form.company,
            message_len = submission.form.message.chars().count(),
            "Contact form submitted"
        );
    }
}

/// Sink that keeps every submission in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Submissions in delivery order
    pub received: Vec<Submission>,
}

impl SubmissionSink for MemorySink {
    fn deliver(&mut self, submission: &Submission) {
        self.received.push(submission.clone());
    }
}
