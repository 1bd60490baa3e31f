//! # Reading of linear programs
//!
//! Problems are described in JSON, in the shape that a web form or another program would post
//! them:
//!
//! ```json
//! {
//!     "c": [3, 2],
//!     "A": [[1, 1], [2, 1]],
//!     "b": [4, 5],
//!     "signs": ["<=", "<="],
//!     "objective_type": "max",
//!     "method": "two_phase"
//! }
//! ```
//!
//! `objective_type` defaults to `"max"`; `method` is optional.
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::algorithm::Method;
use crate::data::linear_program::general_form::Problem;
use crate::error::SolveError;
use crate::io::error::ImportError;

pub mod error;

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents are not a
/// problem description or the description is inconsistent.
pub fn import(file_path: &Path) -> Result<ProblemDescription, ImportError> {
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json") => {
                let program = fs::read_to_string(file_path)?;
                parse(&program)
            },
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}

/// Parse and validate a problem description.
///
/// # Errors
///
/// If the text is not a problem description, or the problem it describes is inconsistent.
pub fn parse(program: &str) -> Result<ProblemDescription, ImportError> {
    let raw: RawDescription = serde_json::from_str(program)?;
    let problem = raw.to_problem()?;

    Ok(ProblemDescription { problem, method: raw.method })
}

/// A validated problem, with the method that the description asks for, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemDescription {
    /// The linear program.
    pub problem: Problem<f64>,
    /// The method requested in the file.
    pub method: Option<Method>,
}

/// The problem description as it appears in the file.
#[derive(Deserialize, Debug)]
struct RawDescription {
    c: Vec<f64>,
    #[serde(rename = "A")]
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    signs: Vec<String>,
    #[serde(default = "default_objective_type")]
    objective_type: String,
    #[serde(default)]
    method: Option<Method>,
}

fn default_objective_type() -> String {
    "max".to_string()
}

impl RawDescription {
    /// Validate the description.
    ///
    /// Empty data is rejected here already, a problem without constraints is not accepted from
    /// files.
    fn to_problem(&self) -> Result<Problem<f64>, SolveError> {
        for (name, is_empty) in [
            ("c", self.c.is_empty()),
            ("A", self.a.is_empty()),
            ("b", self.b.is_empty()),
            ("signs", self.signs.is_empty()),
        ] {
            if is_empty {
                return Err(SolveError::IncompleteData { what: name.to_string() });
            }
        }

        Problem::from_tokens(&self.objective_type, self.c.clone(), self.a.clone(), self.b.clone(), &self.signs)
    }
}
