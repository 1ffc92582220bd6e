//! Chromosome identifier to file and contig name mapping.
//!
//! Reference directories use one UCSC-style file per chromosome
//! (`chr1.fa`, `chrX.fa`, `chrM.fa`), while input identifiers may follow either
//! the UCSC (`chr1`) or the NCBI/Ensembl (`1`) convention.

use std::path::{Path, PathBuf};

const CHR_PREFIX: &str = "chr";

/// File name holding the sequence for `chrom`: `chr<chrom>.fa`, or `<chrom>.fa`
/// if the identifier already carries the `chr` prefix.
#[must_use]
pub fn reference_file_name(chrom: &str) -> String {
    if chrom.starts_with(CHR_PREFIX) {
        format!("{chrom}.fa")
    } else {
        format!("{CHR_PREFIX}{chrom}.fa")
    }
}

/// Full path of the reference file for `chrom` inside `reference_dir`
#[must_use]
pub fn reference_path(reference_dir: &Path, chrom: &str) -> PathBuf {
    reference_dir.join(reference_file_name(chrom))
}

/// Contig names to try, in order, when looking `chrom` up inside a FASTA index:
/// the identifier itself, then the identifier with the `chr` prefix toggled.
#[must_use]
pub fn contig_aliases(chrom: &str) -> Vec<String> {
    let toggled = match chrom.strip_prefix(CHR_PREFIX) {
        Some(bare) if !bare.is_empty() => bare.to_string(),
        Some(_) => return vec![chrom.to_string()],
        None => format!("{CHR_PREFIX}{chrom}"),
    };
    vec![chrom.to_string(), toggled]
}
