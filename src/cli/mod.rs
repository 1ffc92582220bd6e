//! Command-line interface for refalt.
//!
//! ## Usage
//!
//! ```text
//! # Convert a variant list using a directory of chr<N>.fa files
//! refalt -i variants.tsv -o variants.ref_alt.tsv -r /data/hg38/chroms/
//!
//! # Also keep a log file, and print the run summary as JSON
//! refalt -i variants.tsv -o out.tsv -r refs/ --log-file convert.log --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod convert;

#[derive(Parser)]
#[command(name = "refalt")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(
    about = "Convert '#CHROM POS ID allele1 allele2' variant lists to '#CHROM POS ID REF ALT'"
)]
#[command(
    long_about = "refalt determines which of the two alleles of each variant is the reference allele by looking up the base at that position in a per-chromosome reference genome (chr<N>.fa files).\n\nRecords whose alleles do not match the reference, whose position is invalid or out of range, or whose chromosome has no reference file are skipped and reported."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,

    /// Enable verbose (debug) logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Format of the end-of-run summary printed to stdout
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
