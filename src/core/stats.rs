use serde::{Deserialize, Serialize};

use crate::core::rejection::RejectionReason;

/// Counters accumulated over one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Non-blank data lines seen
    pub total: u64,
    pub resolved: u64,

    /// Lines that could not be split into five fields
    pub malformed: u64,
    pub bad_position: u64,
    pub invalid_allele: u64,
    pub missing_reference: u64,
    pub reference_open_error: u64,
    pub out_of_bounds: u64,
    pub fetch_error: u64,

    /// Neither allele matched the reference base
    pub mismatched: u64,
}

impl RunStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolved(&mut self) {
        self.total += 1;
        self.resolved += 1;
    }

    pub fn record_rejection(&mut self, reason: &RejectionReason) {
        self.total += 1;
        let counter = match reason {
            RejectionReason::MalformedLine(_) => &mut self.malformed,
            RejectionReason::BadPosition(_) => &mut self.bad_position,
            RejectionReason::InvalidAllele { .. } => &mut self.invalid_allele,
            RejectionReason::MissingReferenceFile { .. } => &mut self.missing_reference,
            RejectionReason::ReferenceOpenError { .. } => &mut self.reference_open_error,
            RejectionReason::CoordinateOutOfBounds { .. } => &mut self.out_of_bounds,
            RejectionReason::FetchError { .. } => &mut self.fetch_error,
            RejectionReason::AlleleMismatch { .. } => &mut self.mismatched,
        };
        *counter += 1;
    }

    /// Total records skipped for any reason
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.total - self.resolved
    }
}
