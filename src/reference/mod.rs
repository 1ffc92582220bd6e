//! Sequence Provider: reference base lookups backed by per-chromosome FASTA files.
//!
//! - [`naming`]: maps a chromosome identifier to `chr<id>.fa` and to contig names
//! - [`fasta`]: one opened, indexed FASTA file ([`IndexedFasta`])
//! - [`provider`]: the run-scoped handle cache ([`SequenceProvider`])
//!
//! The resolver only depends on the [`ReferenceLookup`] trait, so it can run
//! against an in-memory reference in tests.

pub mod fasta;
pub mod naming;
pub mod provider;

pub use fasta::IndexedFasta;
pub use provider::{LookupError, SequenceProvider};

/// Single-base access to a reference genome, keyed by chromosome identifier.
pub trait ReferenceLookup {
    /// Total sequence length of `chrom`.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the chromosome's sequence cannot be found or opened.
    fn length(&mut self, chrom: &str) -> Result<u64, LookupError>;

    /// Uppercase base at 1-based position `pos` of `chrom`.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the sequence cannot be found, opened or read at `pos`.
    fn base_at(&mut self, chrom: &str, pos: u64) -> Result<u8, LookupError>;
}
