use crate::core::{InputRecord, Nucleotide, RejectionReason};

/// Parse one data line into an [`InputRecord`].
///
/// Checks run in a fixed order and stop at the first failure: field count,
/// then position, then alleles.
///
/// # Errors
///
/// Returns `RejectionReason::MalformedLine` if the line does not have exactly
/// five fields, `RejectionReason::BadPosition` if the position is not a
/// positive integer, or `RejectionReason::InvalidAllele` if either allele is
/// not one of `A`, `C`, `G`, `T`, `N`.
pub fn parse_line(line: &str) -> Result<InputRecord, RejectionReason> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [chrom, pos, id, allele1, allele2] = fields.as_slice() else {
        return Err(RejectionReason::MalformedLine(format!(
            "expected 5 fields, found {}",
            fields.len()
        )));
    };

    let pos = parse_position(pos)?;

    let (Some(a1), Some(a2)) = (Nucleotide::from_allele(allele1), Nucleotide::from_allele(allele2))
    else {
        return Err(RejectionReason::InvalidAllele {
            allele1: allele1.to_string(),
            allele2: allele2.to_string(),
        });
    };

    Ok(InputRecord {
        chrom: chrom.to_string(),
        pos,
        id: id.to_string(),
        allele1: a1,
        allele2: a2,
    })
}

fn parse_position(s: &str) -> Result<u64, RejectionReason> {
    match s.parse::<u64>() {
        Ok(pos) if pos > 0 => Ok(pos),
        _ => Err(RejectionReason::BadPosition(s.to_string())),
    }
}
