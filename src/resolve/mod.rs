//! Record Resolver: turns `allele1/allele2` rows into `REF/ALT` rows.
//!
//! Each line goes through a fixed sequence of checks and stops at the first
//! one that fails:
//!
//! ```text
//! Parsed -> PositionValid -> AllelesValid -> BoundsOk -> RefFetched -> Classified
//!                                                                       |
//!                                                       Emitted | Rejected(reason)
//! ```
//!
//! Rejections are final for that line; processing always moves on to the next.
//! The classification itself ([`engine::resolve_record`]) returns a `Result`
//! and performs no logging or output, which is left to [`Resolver::run`].

pub mod context;
pub mod convert;
pub mod engine;

use std::io::{self, BufRead, Write};

use thiserror::Error;

pub use context::RunContext;
pub use convert::{convert, ConversionSummary, ConvertError, ConvertOptions};
pub use engine::{classify, resolve_record};

use crate::core::RejectionReason;
use crate::output::VariantWriter;
use crate::parsing::record::parse_line;
use crate::reference::ReferenceLookup;

/// IO failure that stops a run, split by the side it happened on
#[derive(Error, Debug)]
pub enum RunError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Drives line-by-line resolution against a reference.
pub struct Resolver<L> {
    reference: L,
}

impl<L: ReferenceLookup> Resolver<L> {
    pub fn new(reference: L) -> Self {
        Self { reference }
    }

    pub fn into_reference(self) -> L {
        self.reference
    }

    /// Resolve every remaining line of `input`, writing resolved rows to `writer`
    /// and recording rejections in `ctx`.
    ///
    /// `first_line_number` is the 1-based file line number of the first line
    /// read, used in log messages. Blank lines are skipped and not counted.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Read` if reading the input fails, or `RunError::Write`
    /// if writing a resolved row fails. Per-record problems never produce an error.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        first_line_number: usize,
        writer: &mut VariantWriter<W>,
        ctx: &mut RunContext,
    ) -> Result<(), RunError> {
        let mut buf = Vec::new();

        for line_number in first_line_number.. {
            buf.clear();
            if input.read_until(b'\n', &mut buf).map_err(RunError::Read)? == 0 {
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                ctx.record_rejection(
                    line_number,
                    "-",
                    &RejectionReason::MalformedLine("line is not valid UTF-8".to_string()),
                );
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record = match parse_line(line) {
                Ok(record) => record,
                Err(reason) => {
                    ctx.record_rejection(line_number, &raw_locus(line), &reason);
                    continue;
                }
            };

            match resolve_record(&record, &mut self.reference) {
                Ok(resolved) => {
                    writer.write_record(&resolved).map_err(RunError::Write)?;
                    ctx.record_resolved();
                }
                Err(reason) => ctx.record_rejection(line_number, &record.locus(), &reason),
            }
        }

        Ok(())
    }
}

/// `chrom:pos:id` built from the raw fields of a line that failed to parse
fn raw_locus(line: &str) -> String {
    let fields: Vec<&str> = line.split_whitespace().take(3).collect();
    if fields.len() == 3 {
        fields.join(":")
    } else {
        "-".to_string()
    }
}
