//! Parsers for the `#CHROM POS ID allele1 allele2` input format.
//!
//! - [`input`]: opening the input file, plain or gzip-compressed
//! - [`header`]: validation of the column header line
//! - [`record`]: splitting and validating one data line into an [`InputRecord`]
//!
//! ## Input format
//!
//! ```text
//! #CHROM  POS  ID   allele1  allele2
//! 1       100  rs1  A        G
//! ```
//!
//! Fields are separated by tabs (any run of whitespace is accepted). Positions
//! are 1-based. Alleles are single nucleotides from `{A, C, G, T, N}`, compared
//! without regard to case.
//!
//! [`InputRecord`]: crate::core::InputRecord

pub mod header;
pub mod input;
pub mod record;
