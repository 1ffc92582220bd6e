//! Core data types for allele resolution.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Nucleotide`]: One of the five accepted single-base allele codes
//! - [`InputRecord`]: A parsed `#CHROM POS ID allele1 allele2` row
//! - [`ResolvedRecord`]: A `#CHROM POS ID REF ALT` row ready to be written
//! - [`RejectionReason`]: Why a record was skipped
//! - [`RunStatistics`]: Run-level counters reported at the end of a conversion
//!
//! A record is either resolved or rejected, never both. Coordinates are 1-based
//! everywhere in this module; the 0-based translation happens only at the
//! reference lookup boundary.

pub mod rejection;
pub mod stats;
pub mod types;

pub use rejection::RejectionReason;
pub use stats::RunStatistics;
pub use types::{InputRecord, Nucleotide, ResolvedRecord};
