//! Writing resolved records in `#CHROM POS ID REF ALT` form.
//!
//! ```text
//! ##fileformat=VCFv4.2
//! #CHROM  POS  ID   REF  ALT
//! 1       100  rs1  A    G
//! ```
//!
//! The `##fileformat` meta-line is optional. Rows are written in input order.

pub mod writer;

pub use writer::VariantWriter;
