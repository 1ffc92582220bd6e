//! Centralized validation of run preconditions.
//!
//! These checks run before any record is read. A failure here is fatal: the
//! run aborts with a non-zero exit status and writes no output.

use std::path::{Path, PathBuf};

/// Precondition failures that abort a run
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input path is not a file: {}", .0.display())]
    InputNotAFile(PathBuf),

    #[error("Reference directory does not exist: {}", .0.display())]
    ReferenceDirNotFound(PathBuf),

    #[error("Reference path is not a directory: {}", .0.display())]
    ReferenceNotADirectory(PathBuf),

    #[error("Output path is the same file as the input: {}", .0.display())]
    OutputIsInput(PathBuf),
}

/// Validate that the input exists and is a regular file.
///
/// # Errors
///
/// Returns `ValidationError::InputNotFound` if nothing exists at `path`, or
/// `ValidationError::InputNotAFile` if it is a directory or other non-file.
pub fn validate_input_file(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ValidationError::InputNotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that the reference directory exists and is a directory.
///
/// # Errors
///
/// Returns `ValidationError::ReferenceDirNotFound` if nothing exists at `path`,
/// or `ValidationError::ReferenceNotADirectory` if it is not a directory.
pub fn validate_reference_dir(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::ReferenceDirNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ValidationError::ReferenceNotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that writing `output` will not truncate `input`.
///
/// # Errors
///
/// Returns `ValidationError::OutputIsInput` if both paths resolve to the same file.
pub fn validate_output_path(input: &Path, output: &Path) -> Result<(), ValidationError> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // Output does not exist yet
        _ => false,
    };
    if same {
        return Err(ValidationError::OutputIsInput(output.to_path_buf()));
    }
    Ok(())
}
