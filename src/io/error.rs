//! # Error reporting for reading of linear program files
//!
//! Anything that can go wrong between a file path and a validated problem.
use std::io;

use thiserror::Error;

use crate::error::SolveError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file are not a syntactically valid problem description.
    #[error("could not parse problem description: {0}")]
    Parse(#[from] serde_json::Error),
    /// The problem description is complete syntactically, but inconsistent.
    ///
    /// For example, the right-hand side might have a different length than the constraint matrix.
    #[error("inconsistent problem description: {0}")]
    Problem(#[from] SolveError),
}
