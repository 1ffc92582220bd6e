use std::fs::File;
use std::io::{self, BufRead, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, info_span};

use crate::core::RunStatistics;
use crate::output::VariantWriter;
use crate::parsing::header::{check_header, HeaderError, HeaderPolicy};
use crate::parsing::input::open_input;
use crate::reference::SequenceProvider;
use crate::resolve::{Resolver, RunContext, RunError};
use crate::utils::validation::{
    validate_input_file, validate_output_path, validate_reference_dir, ValidationError,
};

/// Fatal errors: any of these aborts the whole conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid header in {}: {source}", .path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What to convert and how
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub reference_dir: PathBuf,
    pub header_policy: HeaderPolicy,

    /// Emit `##fileformat=VCFv4.2` before the column header
    pub fileformat_line: bool,
}

impl ConvertOptions {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        reference_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            reference_dir: reference_dir.into(),
            header_policy: HeaderPolicy::Strict,
            fileformat_line: true,
        }
    }

    #[must_use]
    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    #[must_use]
    pub fn with_fileformat_line(mut self, enabled: bool) -> Self {
        self.fileformat_line = enabled;
        self
    }
}

/// Result of a completed conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: RunStatistics,

    /// Reference files opened during the run
    pub reference_files_opened: usize,
}

/// Convert `options.input` into `options.output`.
///
/// Preconditions and the header are checked before the output file is created,
/// so a fatal failure at that stage leaves no output behind. Reference handles
/// are released before returning, on success and on error alike.
///
/// # Errors
///
/// Returns `ConvertError::Validation` if a path precondition fails,
/// `ConvertError::Header` if the header does not satisfy the header policy, or
/// `ConvertError::Read`/`ConvertError::Write` on I/O failure.
pub fn convert(options: &ConvertOptions) -> Result<ConversionSummary, ConvertError> {
    validate_input_file(&options.input)?;
    validate_reference_dir(&options.reference_dir)?;
    validate_output_path(&options.input, &options.output)?;

    let span = info_span!("convert", input = %options.input.display());
    let _entered = span.enter();

    info!("Processing {}", options.input.display());

    let read_error = |source| ConvertError::Read {
        path: options.input.clone(),
        source,
    };
    let write_error = |source| ConvertError::Write {
        path: options.output.clone(),
        source,
    };

    let mut input = open_input(&options.input).map_err(read_error)?;
    let mut header = String::new();
    input.read_line(&mut header).map_err(read_error)?;
    check_header(&header, options.header_policy).map_err(|source| ConvertError::Header {
        path: options.input.clone(),
        source,
    })?;

    let file = File::create(&options.output).map_err(write_error)?;
    let mut writer =
        VariantWriter::new(BufWriter::new(file), options.fileformat_line).map_err(write_error)?;

    let mut resolver = Resolver::new(SequenceProvider::new(&options.reference_dir));
    let mut ctx = RunContext::new(span.clone());

    // Data starts on line 2, after the header
    let result = resolver.run(input, 2, &mut writer, &mut ctx);

    let provider = resolver.into_reference();
    let reference_files_opened = provider.opened();
    provider.close();

    result.map_err(|e| match e {
        RunError::Read(source) => read_error(source),
        RunError::Write(source) => write_error(source),
    })?;
    writer.finish().map_err(write_error)?;

    let stats = ctx.into_stats();
    info!(
        "Finished: {} records, {} resolved, {} mismatched, {} out of bounds, {} other rejections",
        stats.total,
        stats.resolved,
        stats.mismatched,
        stats.out_of_bounds,
        stats.rejected() - stats.mismatched - stats.out_of_bounds
    );
    info!("Output written to {}", options.output.display());

    Ok(ConversionSummary {
        input: options.input.clone(),
        output: options.output.clone(),
        stats,
        reference_files_opened,
    })
}

impl ConversionSummary {
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output
    }
}
