use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::reference::fasta::{FastaError, IndexedFasta};
use crate::reference::naming::reference_path;
use crate::reference::ReferenceLookup;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Reference file for chromosome {chrom} not found: {}", .path.display())]
    MissingFile { chrom: String, path: PathBuf },

    #[error("Failed to open reference {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: FastaError,
    },

    #[error("Failed to read chromosome {chrom}: {source}")]
    Fetch {
        chrom: String,
        #[source]
        source: FastaError,
    },
}

/// Cached outcome of resolving a chromosome to a reference file
#[derive(Debug)]
enum CacheEntry {
    Open(IndexedFasta),
    /// The file did not exist when first probed
    Missing(PathBuf),
}

/// Lazily opens and caches one [`IndexedFasta`] per chromosome identifier.
///
/// Handles are opened on first reference and kept for the lifetime of the
/// provider. A missing file is remembered so the filesystem is probed once per
/// chromosome. A failed open is not cached: the next request for that
/// chromosome tries again.
#[derive(Debug)]
pub struct SequenceProvider {
    reference_dir: PathBuf,
    cache: HashMap<String, CacheEntry>,
    opened: usize,
}

impl SequenceProvider {
    #[must_use]
    pub fn new(reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference_dir: reference_dir.into(),
            cache: HashMap::new(),
            opened: 0,
        }
    }

    /// Number of successful file opens so far
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened
    }

    /// Number of handles currently held open
    #[must_use]
    pub fn open_handles(&self) -> usize {
        self.cache
            .values()
            .filter(|entry| matches!(entry, CacheEntry::Open(_)))
            .count()
    }

    /// Return the handle for `chrom`, opening it on first use.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingFile` if `chr<chrom>.fa` does not exist, or
    /// `LookupError::Open` if it exists but cannot be opened or indexed.
    pub fn handle(&mut self, chrom: &str) -> Result<&mut IndexedFasta, LookupError> {
        let entry = match self.cache.entry(chrom.to_string()) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                let path = reference_path(&self.reference_dir, chrom);
                if path.exists() {
                    let fasta = IndexedFasta::open(&path)
                        .map_err(|source| LookupError::Open { path, source })?;
                    self.opened += 1;
                    debug!(
                        "Opened reference {} for chromosome {chrom} ({} contigs)",
                        fasta.path().display(),
                        fasta.contigs().len()
                    );
                    vacant.insert(CacheEntry::Open(fasta))
                } else {
                    debug!("No reference file for chromosome {chrom}: {}", path.display());
                    vacant.insert(CacheEntry::Missing(path))
                }
            }
        };

        match entry {
            CacheEntry::Open(fasta) => Ok(fasta),
            CacheEntry::Missing(path) => Err(LookupError::MissingFile {
                chrom: chrom.to_string(),
                path: path.clone(),
            }),
        }
    }

    /// Release every cached handle. Returns the number of handles released.
    pub fn close(mut self) -> usize {
        let released = self.open_handles();
        self.cache.clear();
        debug!("Released {released} reference handles");
        released
    }
}

impl ReferenceLookup for SequenceProvider {
    fn length(&mut self, chrom: &str) -> Result<u64, LookupError> {
        self.handle(chrom)?
            .length(chrom)
            .map_err(|source| LookupError::Fetch {
                chrom: chrom.to_string(),
                source,
            })
    }

    fn base_at(&mut self, chrom: &str, pos: u64) -> Result<u8, LookupError> {
        self.handle(chrom)?
            .base_at(chrom, pos)
            .map_err(|source| LookupError::Fetch {
                chrom: chrom.to_string(),
                source,
            })
    }
}
