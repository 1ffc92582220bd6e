use tracing::{error, warn, Span};

use crate::core::{RejectionReason, RunStatistics};

/// Run-scoped state handed to the resolver: the statistics being accumulated
/// and the span that rejection log entries are recorded under.
#[derive(Debug)]
pub struct RunContext {
    stats: RunStatistics,
    span: Span,
}

impl RunContext {
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            stats: RunStatistics::new(),
            span,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> RunStatistics {
        self.stats
    }

    pub fn record_resolved(&mut self) {
        self.stats.record_resolved();
    }

    /// Count a rejection and log it with its line number and `chrom:pos:id` locus.
    pub fn record_rejection(&mut self, line_number: usize, locus: &str, reason: &RejectionReason) {
        self.stats.record_rejection(reason);

        let _entered = self.span.enter();
        if reason.is_expected() {
            warn!("Line {line_number} [{locus}]: {reason}. Record skipped.");
        } else {
            error!("Line {line_number} [{locus}]: {reason}. Record skipped.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_counts() {
        let mut ctx = RunContext::new(Span::none());
        ctx.record_rejection(2, "1:5:rs1", &RejectionReason::AlleleMismatch { reference: 'A' });
        ctx.record_rejection(3, "-", &RejectionReason::MalformedLine("x".to_string()));

        let stats = ctx.into_stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.mismatched, 1);
        assert_eq!(stats.malformed, 1);
    }
}
