//! Random access to single bases of an indexed FASTA file.
//!
//! The index is read from the `.fai` file next to the FASTA when present.
//! Without one, the FASTA is scanned once with the noodles indexer and the
//! index is kept in memory; nothing is written to disk.
//!
//! Format of an index entry: `name\tlength\toffset\tline_bases\tline_width`

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use noodles::core::{Position, Region};
use noodles::fasta;
use thiserror::Error;

use crate::reference::naming::contig_aliases;

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid FASTA index: {0}")]
    InvalidIndex(String),

    #[error("Contig '{0}' not found in FASTA index")]
    UnknownContig(String),

    #[error("Position {pos} outside contig '{contig}' of length {length}")]
    OutOfRange {
        contig: String,
        pos: u64,
        length: u64,
    },

    #[error("Unexpected byte 0x{byte:02x} at {contig}:{pos}; index does not match sequence data")]
    InvalidBase { contig: String, pos: u64, byte: u8 },

    #[error("No sequence data at {contig}:{pos}; index does not match sequence data")]
    MissingBase { contig: String, pos: u64 },
}

/// An open, read-only FASTA file with its index.
pub struct IndexedFasta {
    path: PathBuf,
    reader: fasta::io::IndexedReader<BufReader<File>>,
}

impl fmt::Debug for IndexedFasta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedFasta")
            .field("path", &self.path)
            .field("contigs", &self.contigs().len())
            .finish_non_exhaustive()
    }
}

impl IndexedFasta {
    /// Open a FASTA file, loading `<path>.fai` or indexing the file on the fly.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::Io` if the file cannot be read, `FastaError::Noodles`
    /// if the `.fai` cannot be parsed, or `FastaError::InvalidIndex` if the file
    /// cannot be indexed (no records, lines of unequal length or width) or the
    /// index points outside the file.
    pub fn open(path: &Path) -> Result<Self, FastaError> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();

        let fai_path = fai_path(path);
        let index = if fai_path.is_file() {
            read_fai(&fai_path)?
        } else {
            index_fasta(BufReader::new(File::open(path)?))?
        };

        if index.as_ref().is_empty() {
            return Err(FastaError::InvalidIndex(
                "No sequences found in FASTA file".to_string(),
            ));
        }
        for record in index.as_ref() {
            validate_record(record, file_len)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            reader: fasta::io::IndexedReader::new(BufReader::new(file), index),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn contigs(&self) -> &[fasta::fai::Record] {
        self.reader.index().as_ref()
    }

    /// Find the contig for a chromosome identifier.
    ///
    /// Tries the identifier as given, then with the `chr` prefix toggled. A file
    /// holding a single record serves any identifier.
    fn find_contig(&self, chrom: &str) -> Result<&fasta::fai::Record, FastaError> {
        let contigs = self.contigs();
        contig_aliases(chrom)
            .iter()
            .find_map(|name| contigs.iter().find(|c| c.name() == name.as_bytes()))
            .or(match contigs {
                [only] => Some(only),
                _ => None,
            })
            .ok_or_else(|| FastaError::UnknownContig(chrom.to_string()))
    }

    /// Total sequence length of the contig for `chrom`
    ///
    /// # Errors
    ///
    /// Returns `FastaError::UnknownContig` if no contig matches `chrom`.
    pub fn length(&self, chrom: &str) -> Result<u64, FastaError> {
        self.find_contig(chrom).map(fasta::fai::Record::length)
    }

    /// Fetch the uppercase base at 1-based position `pos`.
    ///
    /// # Errors
    ///
    /// Returns `FastaError::UnknownContig` if no contig matches `chrom`,
    /// `FastaError::OutOfRange` if `pos` is 0 or past the contig end,
    /// `FastaError::Io` on read failure, or `FastaError::InvalidBase` /
    /// `FastaError::MissingBase` if the indexed location holds no sequence letter.
    pub fn base_at(&mut self, chrom: &str, pos: u64) -> Result<u8, FastaError> {
        let contig = self.find_contig(chrom)?;
        let name = contig.name().to_vec();
        let length = contig.length();
        let contig_name = || String::from_utf8_lossy(&name).to_string();

        let position = usize::try_from(pos)
            .ok()
            .filter(|_| pos <= length)
            .and_then(Position::new)
            .ok_or_else(|| FastaError::OutOfRange {
                contig: contig_name(),
                pos,
                length,
            })?;

        let region = Region::new(name.clone(), position..=position);
        let record = self.reader.query(&region)?;

        let Some(&byte) = record.sequence().as_ref().first() else {
            return Err(FastaError::MissingBase {
                contig: contig_name(),
                pos,
            });
        };
        if !byte.is_ascii_alphabetic() {
            return Err(FastaError::InvalidBase {
                contig: contig_name(),
                pos,
                byte,
            });
        }

        Ok(byte.to_ascii_uppercase())
    }
}

fn fai_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".fai");
    PathBuf::from(s)
}

fn read_fai(path: &Path) -> Result<fasta::fai::Index, FastaError> {
    let reader = File::open(path).map(BufReader::new)?;

    fasta::fai::io::Reader::new(reader)
        .read_index()
        .map_err(|e| FastaError::Noodles(format!("Failed to parse FAI file: {e}")))
}

/// Scan a FASTA stream and build its index in memory.
///
/// # Errors
///
/// Returns `FastaError::InvalidIndex` if a definition line is missing or
/// malformed, a record has no sequence, or a record's lines (other than the
/// last) differ in base count or byte width.
pub fn index_fasta<R: BufRead>(reader: R) -> Result<fasta::fai::Index, FastaError> {
    let mut indexer = fasta::io::Indexer::new(reader);
    let mut records = Vec::new();

    while let Some(record) = indexer
        .index_record()
        .map_err(|e| FastaError::InvalidIndex(e.to_string()))?
    {
        records.push(record);
    }

    Ok(fasta::fai::Index::from(records))
}

/// Reject index entries whose layout cannot address every base inside the file.
fn validate_record(record: &fasta::fai::Record, file_len: u64) -> Result<(), FastaError> {
    let name = String::from_utf8_lossy(record.name());
    let invalid = |message: String| FastaError::InvalidIndex(format!("contig '{name}' {message}"));

    let (length, line_bases, line_width) =
        (record.length(), record.line_bases(), record.line_width());

    if length == 0 {
        return Ok(());
    }
    if line_bases == 0 {
        return Err(invalid("has zero bases per line".to_string()));
    }
    if line_width < line_bases {
        return Err(invalid(format!(
            "has line width {line_width} smaller than line bases {line_bases}"
        )));
    }

    // Offsets grow with position, so the last base bounds every lookup
    let last = length - 1;
    let last_offset = (last / line_bases)
        .checked_mul(line_width)
        .and_then(|n| n.checked_add(record.offset()))
        .and_then(|n| n.checked_add(last % line_bases))
        .ok_or_else(|| invalid("has an index entry that overflows".to_string()))?;

    if last_offset >= file_len {
        return Err(invalid(format!(
            "ends at byte {last_offset}, past the end of the file ({file_len} bytes)"
        )));
    }
    Ok(())
}
