use std::io::{self, Write};

use crate::core::ResolvedRecord;
use crate::parsing::header::OUTPUT_COLUMNS;

/// Meta-line written ahead of the column header
pub const FILEFORMAT_LINE: &str = "##fileformat=VCFv4.2";

/// Tab-separated sink for resolved records.
pub struct VariantWriter<W: Write> {
    inner: W,
    records_written: u64,
}

impl<W: Write> VariantWriter<W> {
    /// Create a writer and emit the header, preceded by the
    /// `##fileformat` meta-line when `fileformat_line` is set.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the header cannot be written.
    pub fn new(mut inner: W, fileformat_line: bool) -> io::Result<Self> {
        if fileformat_line {
            writeln!(inner, "{FILEFORMAT_LINE}")?;
        }
        writeln!(inner, "{}", OUTPUT_COLUMNS.join("\t"))?;
        Ok(Self {
            inner,
            records_written: 0,
        })
    }

    /// Write one row.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the row cannot be written.
    pub fn write_record(&mut self, record: &ResolvedRecord) -> io::Result<()> {
        writeln!(self.inner, "{record}")?;
        self.records_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an IO error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
