use serde::{Deserialize, Serialize};

/// A single-base allele code accepted in the input (`A`, `C`, `G`, `T` or `N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    N,
}

impl Nucleotide {
    /// Parse an allele field. The field must be exactly one character; case is ignored.
    #[must_use]
    pub fn from_allele(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [b] => Self::from_base(*b),
            _ => None,
        }
    }

    /// Interpret a single byte as a nucleotide, ignoring case.
    #[must_use]
    pub fn from_base(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
            Self::N => b'N',
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One validated input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub chrom: String,

    /// 1-based position, always > 0
    pub pos: u64,

    pub id: String,
    pub allele1: Nucleotide,
    pub allele2: Nucleotide,
}

impl InputRecord {
    /// `chrom:pos:id` label used in log messages
    #[must_use]
    pub fn locus(&self) -> String {
        format!("{}:{}:{}", self.chrom, self.pos, self.id)
    }
}

/// A record whose reference allele has been determined.
///
/// `reference` equals the genome base at `pos`, and `{reference, alternate}`
/// is a permutation of the input alleles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub chrom: String,
    pub pos: u64,
    pub id: String,
    pub reference: Nucleotide,
    pub alternate: Nucleotide,
}

impl std::fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chrom, self.pos, self.id, self.reference, self.alternate
        )
    }
}
