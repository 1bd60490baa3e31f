//! # Solutions
//!
//! Reading a solution out of a final tableau, and the representations of the outcome of a solve
//! that are handed to callers.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::Method;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::IterationTrace;
use crate::data::number_types::traits::Real;
use crate::error::{ErrorKind, SolveError};

/// Read the values of the original variables from a tableau.
///
/// A variable that is basic takes the right-hand side value of the row it is basic in. All other
/// variables are zero. Looking at the columns alone is not enough: a nonbasic column can be a unit
/// vector as well, and two equal columns would then both claim the same row.
///
/// # Arguments
///
/// * `tableau`: Tableau representing a basic feasible solution.
/// * `nr_variables`: Number of original variables, which are the first columns of the tableau.
pub fn extract_solution<F: Real>(tableau: &Tableau<F>, nr_variables: usize) -> Vec<F> {
    debug_assert!(nr_variables <= tableau.nr_columns());

    let mut x = vec![F::zero(); nr_variables];
    for (row, &column) in tableau.basis().iter().enumerate() {
        if column < nr_variables {
            x[column] = tableau.rhs(row);
        }
    }

    x
}

/// An optimal solution of a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Values of the original variables.
    x: Vec<F>,
    /// Objective function value, in the direction of the problem.
    objective_value: F,
    /// Pivots performed over all phases.
    iterations: usize,
    method: Method,
    trace: IterationTrace<F>,
}

impl<F: Real> Solution<F> {
    pub(crate) fn new(
        x: Vec<F>,
        objective_value: F,
        iterations: usize,
        method: Method,
        trace: IterationTrace<F>,
    ) -> Self {
        Self { x, objective_value, iterations, method, trace }
    }

    /// Values of the original variables.
    pub fn x(&self) -> &[F] {
        &self.x
    }

    /// Optimal objective function value, in the direction of the problem.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Number of pivots performed over all phases.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The method that found this solution.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Tableaus visited, if recording was requested.
    pub fn trace(&self) -> &IterationTrace<F> {
        &self.trace
    }
}

impl<F: Real> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Optimal value: {}", self.objective_value)?;
        for (j, value) in self.x.iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, value)?;
        }
        write!(f, "Iterations: {} ({})", self.iterations, self.method)
    }
}

/// The outcome of a solve, as reported to an outer layer.
///
/// Serializes to `{"success", "solution", "optimal_value", "iterations", "method", "error",
/// "message"}`, where the solution and optimal value are only present on success and the error
/// kind only on failure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolveReport<F> {
    /// Whether an optimal solution was found.
    pub success: bool,
    /// Values of the original variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<F>>,
    /// Optimal objective function value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_value: Option<F>,
    /// Pivots performed over all phases.
    pub iterations: usize,
    /// The method used.
    pub method: Method,
    /// What went wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    /// Human readable status.
    pub message: String,
}

impl<F: Real> SolveReport<F> {
    /// Summarize the result of a solve.
    pub fn new(method: Method, result: &Result<Solution<F>, SolveError>) -> Self {
        match result {
            Ok(solution) => Self {
                success: true,
                solution: Some(solution.x.clone()),
                optimal_value: Some(solution.objective_value),
                iterations: solution.iterations,
                method,
                error: None,
                message: format!(
                    "optimal solution found: [{}]",
                    solution.x.iter().map(|v| format!("{:.6}", v)).join(", "),
                ),
            },
            Err(error) => Self {
                success: false,
                solution: None,
                optimal_value: None,
                iterations: error.iterations(),
                method,
                error: Some(error.kind()),
                message: error.to_string(),
            },
        }
    }
}
