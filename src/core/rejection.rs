use std::path::PathBuf;

use thiserror::Error;

/// Why a record was skipped instead of being written.
///
/// Every variant is recoverable: the record is dropped, counted and logged, and
/// processing continues with the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("malformed line: {0}")]
    MalformedLine(String),

    #[error("invalid position '{0}'")]
    BadPosition(String),

    #[error("invalid alleles '{allele1}', '{allele2}'")]
    InvalidAllele { allele1: String, allele2: String },

    #[error("no reference file for chromosome {chrom}: {} not found", .path.display())]
    MissingReferenceFile { chrom: String, path: PathBuf },

    #[error("failed to open reference {}: {message}", .path.display())]
    ReferenceOpenError { path: PathBuf, message: String },

    #[error("position {pos} is beyond the end of {chrom} (length {length})")]
    CoordinateOutOfBounds { chrom: String, pos: u64, length: u64 },

    #[error("failed to fetch {chrom}:{pos}: {message}")]
    FetchError {
        chrom: String,
        pos: u64,
        message: String,
    },

    #[error("neither allele matches reference base {reference}")]
    AlleleMismatch { reference: char },
}

impl RejectionReason {
    /// Expected data-quality outcomes are logged as warnings; the rest as errors.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::BadPosition(_)
                | Self::InvalidAllele { .. }
                | Self::MissingReferenceFile { .. }
                | Self::CoordinateOutOfBounds { .. }
                | Self::AlleleMismatch { .. }
        )
    }

    /// Short, stable name of the rejection category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedLine(_) => "malformed_line",
            Self::BadPosition(_) => "bad_position",
            Self::InvalidAllele { .. } => "invalid_allele",
            Self::MissingReferenceFile { .. } => "missing_reference_file",
            Self::ReferenceOpenError { .. } => "reference_open_error",
            Self::CoordinateOutOfBounds { .. } => "coordinate_out_of_bounds",
            Self::FetchError { .. } => "fetch_error",
            Self::AlleleMismatch { .. } => "allele_mismatch",
        }
    }
}
