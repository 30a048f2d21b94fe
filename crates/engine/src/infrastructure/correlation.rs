//! Per-request correlation ids.

use uuid::Uuid;

/// Identifies one inbound request across all of its log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits of the id.
    pub fn short(&self) -> String {
        let mut short = self.0.simple().to_string();
        short.truncate(8);
        short
    }

    /// Span that every log line of one handler is recorded under.
    pub fn request_span(&self, operation: &'static str) -> tracing::Span {
        tracing::info_span!("request", operation, correlation_id = %self.short())
    }
}
