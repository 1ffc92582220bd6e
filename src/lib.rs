//! # refalt
//!
//! Convert variant lists given as two unordered alleles per site
//! (`#CHROM POS ID allele1 allele2`) into reference/alternate form
//! (`#CHROM POS ID REF ALT`).
//!
//! Genotyping arrays and many association-study exports report each site as a
//! pair of alleles with no indication of which one is the reference. `refalt`
//! looks up the base at each position in a per-chromosome reference genome
//! (`chr1.fa`, `chr2.fa`, ...) and orders the alleles accordingly.
//!
//! ## Features
//!
//! - **Lazy, cached reference access**: each `chr<N>.fa` is opened once, on first use
//! - **Indexed lookups**: uses `<file>.fai` when present, indexes in memory otherwise
//! - **Per-record rejection**: bad positions, invalid alleles, out-of-range coordinates,
//!   missing references and allele mismatches are counted and logged, never fatal
//! - **Run statistics**: per-category counts reported at the end of each run
//!
//! ## Example
//!
//! ```rust,no_run
//! use refalt::resolve::{convert, ConvertOptions};
//!
//! let options = ConvertOptions::new("variants.tsv", "variants.ref_alt.tsv", "/data/hg38/chroms");
//! let summary = convert(&options).unwrap();
//!
//! println!(
//!     "{} of {} records resolved, {} mismatched",
//!     summary.stats.resolved, summary.stats.total, summary.stats.mismatched
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, nucleotides, rejection reasons and run statistics
//! - [`parsing`]: Input opening, header validation and line parsing
//! - [`reference`]: Per-chromosome indexed FASTA access and handle cache
//! - [`resolve`]: Allele classification and the conversion driver
//! - [`output`]: `#CHROM POS ID REF ALT` writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod reference;
pub mod resolve;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{InputRecord, Nucleotide, RejectionReason, ResolvedRecord, RunStatistics};
pub use crate::reference::{ReferenceLookup, SequenceProvider};
pub use crate::resolve::{classify, convert, resolve_record, ConversionSummary, ConvertOptions};
