use crate::core::{InputRecord, Nucleotide, RejectionReason, ResolvedRecord};
use crate::reference::{LookupError, ReferenceLookup};

/// Decide which allele is the reference.
///
/// Returns `(ref, alt)`, or `None` when neither allele equals `reference_base`.
/// When both alleles equal the reference base, `allele1` is taken as `ref`.
#[must_use]
pub fn classify(
    allele1: Nucleotide,
    allele2: Nucleotide,
    reference_base: u8,
) -> Option<(Nucleotide, Nucleotide)> {
    let reference_base = reference_base.to_ascii_uppercase();
    if allele1.as_byte() == reference_base {
        Some((allele1, allele2))
    } else if allele2.as_byte() == reference_base {
        Some((allele2, allele1))
    } else {
        None
    }
}

/// Resolve a parsed record against the reference.
///
/// Steps run in order and stop at the first failure: bounds check against the
/// sequence length, base lookup, allele classification.
///
/// # Errors
///
/// Returns `RejectionReason::MissingReferenceFile`, `ReferenceOpenError` or
/// `FetchError` when the lookup fails, `CoordinateOutOfBounds` when `pos` lies
/// past the end of the sequence, and `AlleleMismatch` when neither allele
/// matches the reference base.
pub fn resolve_record<L: ReferenceLookup + ?Sized>(
    record: &InputRecord,
    reference: &mut L,
) -> Result<ResolvedRecord, RejectionReason> {
    let length = reference
        .length(&record.chrom)
        .map_err(|e| lookup_rejection(e, record.pos))?;
    if record.pos > length {
        return Err(RejectionReason::CoordinateOutOfBounds {
            chrom: record.chrom.clone(),
            pos: record.pos,
            length,
        });
    }

    let base = reference
        .base_at(&record.chrom, record.pos)
        .map_err(|e| lookup_rejection(e, record.pos))?;

    let (ref_allele, alt_allele) =
        classify(record.allele1, record.allele2, base).ok_or(RejectionReason::AlleleMismatch {
            reference: char::from(base),
        })?;

    Ok(ResolvedRecord {
        chrom: record.chrom.clone(),
        pos: record.pos,
        id: record.id.clone(),
        reference: ref_allele,
        alternate: alt_allele,
    })
}

fn lookup_rejection(err: LookupError, pos: u64) -> RejectionReason {
    match err {
        LookupError::MissingFile { chrom, path } => {
            RejectionReason::MissingReferenceFile { chrom, path }
        }
        LookupError::Open { path, source } => RejectionReason::ReferenceOpenError {
            path,
            message: source.to_string(),
        },
        LookupError::Fetch { chrom, source } => RejectionReason::FetchError {
            chrom,
            pos,
            message: source.to_string(),
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reference::fasta::FastaError;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory reference keyed by chromosome identifier
    #[derive(Default)]
    pub(crate) struct MemoryReference {
        pub sequences: HashMap<String, Vec<u8>>,
        pub broken: Vec<String>,
    }

    impl MemoryReference {
        pub(crate) fn with(chrom: &str, sequence: &str) -> Self {
            let mut reference = Self::default();
            reference
                .sequences
                .insert(chrom.to_string(), sequence.as_bytes().to_vec());
            reference
        }
    }

    impl ReferenceLookup for MemoryReference {
        fn length(&mut self, chrom: &str) -> Result<u64, LookupError> {
            if self.broken.iter().any(|b| b == chrom) {
                return Err(LookupError::Open {
                    path: PathBuf::from(format!("chr{chrom}.fa")),
                    source: FastaError::InvalidIndex("corrupt".to_string()),
                });
            }
            self.sequences
                .get(chrom)
                .map(|s| s.len() as u64)
                .ok_or_else(|| LookupError::MissingFile {
                    chrom: chrom.to_string(),
                    path: PathBuf::from(format!("chr{chrom}.fa")),
                })
        }

        fn base_at(&mut self, chrom: &str, pos: u64) -> Result<u8, LookupError> {
            let sequence = self.sequences.get(chrom).ok_or_else(|| LookupError::MissingFile {
                chrom: chrom.to_string(),
                path: PathBuf::from(format!("chr{chrom}.fa")),
            })?;
            usize::try_from(pos - 1)
                .ok()
                .and_then(|i| sequence.get(i))
                .map(u8::to_ascii_uppercase)
                .ok_or_else(|| LookupError::Fetch {
                    chrom: chrom.to_string(),
                    source: FastaError::UnknownContig(chrom.to_string()),
                })
        }
    }

    fn input(chrom: &str, pos: u64, id: &str, a1: Nucleotide, a2: Nucleotide) -> InputRecord {
        InputRecord {
            chrom: chrom.to_string(),
            pos,
            id: id.to_string(),
            allele1: a1,
            allele2: a2,
        }
    }

    #[test]
    fn test_classify() {
        use Nucleotide::{A, C, G, T};
        assert_eq!(classify(A, G, b'A'), Some((A, G)));
        assert_eq!(classify(G, A, b'A'), Some((A, G)));
        assert_eq!(classify(C, T, b'A'), None);
        assert_eq!(classify(A, A, b'A'), Some((A, A)));
        assert_eq!(classify(T, C, b'c'), Some((C, T)));
    }

    #[test]
    fn test_ambiguous_reference_base_never_matches() {
        use Nucleotide::{A, G, N};
        assert_eq!(classify(A, G, b'R'), None);
        assert_eq!(classify(N, A, b'N'), Some((N, A)));
    }

    #[test]
    fn test_resolve_ref_first_and_swapped() {
        let mut reference = MemoryReference::with("1", "CAGT");

        let resolved =
            resolve_record(&input("1", 2, "rs1", Nucleotide::A, Nucleotide::G), &mut reference)
                .unwrap();
        assert_eq!(resolved.to_string(), "1\t2\trs1\tA\tG");

        let resolved =
            resolve_record(&input("1", 3, "rs2", Nucleotide::A, Nucleotide::G), &mut reference)
                .unwrap();
        assert_eq!(resolved.reference, Nucleotide::G);
        assert_eq!(resolved.alternate, Nucleotide::A);
    }

    #[test]
    fn test_resolve_mismatch() {
        let mut reference = MemoryReference::with("1", "AAAA");
        let result =
            resolve_record(&input("1", 1, "rs2", Nucleotide::C, Nucleotide::T), &mut reference);
        assert_eq!(
            result,
            Err(RejectionReason::AlleleMismatch { reference: 'A' })
        );
    }

    #[test]
    fn test_resolve_bounds() {
        let mut reference = MemoryReference::with("1", "ACGT");

        // Last base is addressable
        assert!(
            resolve_record(&input("1", 4, "end", Nucleotide::T, Nucleotide::A), &mut reference)
                .is_ok()
        );

        assert_eq!(
            resolve_record(&input("1", 5, "past", Nucleotide::T, Nucleotide::A), &mut reference),
            Err(RejectionReason::CoordinateOutOfBounds {
                chrom: "1".to_string(),
                pos: 5,
                length: 4,
            })
        );
    }

    #[test]
    fn test_resolve_lookup_failures() {
        let mut reference = MemoryReference::with("1", "ACGT");
        reference.broken.push("2".to_string());

        assert!(matches!(
            resolve_record(&input("9", 1, "rs", Nucleotide::A, Nucleotide::C), &mut reference),
            Err(RejectionReason::MissingReferenceFile { .. })
        ));
        assert!(matches!(
            resolve_record(&input("2", 1, "rs", Nucleotide::A, Nucleotide::C), &mut reference),
            Err(RejectionReason::ReferenceOpenError { .. })
        ));
    }
}
