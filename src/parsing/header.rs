use thiserror::Error;

/// Columns the input header must contain, in order
pub const EXPECTED_COLUMNS: [&str; 5] = ["#CHROM", "POS", "ID", "allele1", "allele2"];

/// Columns written to the output header, in order
pub const OUTPUT_COLUMNS: [&str; 5] = ["#CHROM", "POS", "ID", "REF", "ALT"];

/// How strictly the input header line is checked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HeaderPolicy {
    /// The header must be exactly `#CHROM POS ID allele1 allele2`
    #[default]
    Strict,
    /// The header only has to start with `#CHROM`
    Lenient,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Input file is empty: expected header {:?}", EXPECTED_COLUMNS)]
    Missing,

    #[error("Unexpected header: expected {:?}, found {found:?}", EXPECTED_COLUMNS)]
    Mismatch { found: Vec<String> },
}

/// Check the first line of the input against the header policy.
///
/// # Errors
///
/// Returns `HeaderError::Missing` if the line is empty, or
/// `HeaderError::Mismatch` if it does not satisfy `policy`.
pub fn check_header(line: &str, policy: HeaderPolicy) -> Result<(), HeaderError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(HeaderError::Missing);
    }

    let ok = match policy {
        HeaderPolicy::Strict => line.split_whitespace().eq(EXPECTED_COLUMNS),
        HeaderPolicy::Lenient => line.starts_with("#CHROM"),
    };

    if ok {
        Ok(())
    } else {
        Err(HeaderError::Mismatch {
            found: line.split_whitespace().map(str::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_header_accepts_exact_columns() {
        assert!(check_header("#CHROM\tPOS\tID\tallele1\tallele2\n", HeaderPolicy::Strict).is_ok());
        assert!(check_header("#CHROM POS ID allele1 allele2", HeaderPolicy::Strict).is_ok());
    }

    #[test]
    fn test_strict_header_rejects_other_columns() {
        let err = check_header("#CHROM\tPOS\tID\tREF\tALT", HeaderPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            HeaderError::Mismatch {
                found: vec![
                    "#CHROM".to_string(),
                    "POS".to_string(),
                    "ID".to_string(),
                    "REF".to_string(),
                    "ALT".to_string(),
                ]
            }
        );

        // Column names are case-sensitive
        assert!(check_header("#CHROM\tPOS\tID\tALLELE1\tALLELE2", HeaderPolicy::Strict).is_err());
        // Extra columns are not allowed
        assert!(
            check_header("#CHROM\tPOS\tID\tallele1\tallele2\tQUAL", HeaderPolicy::Strict).is_err()
        );
    }

    #[test]
    fn test_lenient_header() {
        assert!(check_header("#CHROM\tPOS\tID\tREF\tALT", HeaderPolicy::Lenient).is_ok());
        assert!(check_header("CHROM\tPOS", HeaderPolicy::Lenient).is_err());
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(check_header("", HeaderPolicy::Lenient), Err(HeaderError::Missing));
        assert_eq!(check_header("  \n", HeaderPolicy::Strict), Err(HeaderError::Missing));
    }
}
