//! # Algorithms
//!
//! Linear programs are solved with the tableau Simplex method. Two ways of finding an initial basic
//! feasible solution are provided: the two-phase method (the default) and the Big-M method. Both
//! drive the same primal engine, they only differ in the objective rows they feed it.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::algorithm::objective::CostVector;
use crate::algorithm::two_phase::strategy::pivot_rule::{Dantzig, FirstProfitable, PivotRule};
use crate::algorithm::two_phase::SolveContext;
use crate::data::linear_program::general_form::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

pub mod big_m;
pub mod objective;
pub mod two_phase;

/// Solve a linear program.
///
/// The problem is normalized and brought into standard form, after which the configured method
/// computes an optimal basic feasible solution.
///
/// # Arguments
///
/// * `problem`: Validated problem in general form.
/// * `options`: Tolerance, iteration cap and strategy choices.
///
/// # Return value
///
/// The values of the original variables at an optimum, together with the optimal value in the
/// direction of the problem. If there is no such solution, the reason why not.
pub fn solve<F: Real>(problem: &Problem<F>, options: &SolverOptions<F>) -> Result<Solution<F>, SolveError> {
    debug!(
        variables = problem.nr_variables(),
        constraints = problem.nr_constraints(),
        method = %options.method,
        pivot_rule = %options.pivot_rule,
        "solving linear program"
    );

    let normalized = problem.normalize();
    let standard_form = StandardForm::from(&normalized);

    let result = match options.pivot_rule {
        PivotRuleKind::Dantzig => solve_with::<F, Dantzig>(&standard_form, normalized.cost(), options),
        PivotRuleKind::FirstProfitable => solve_with::<F, FirstProfitable>(&standard_form, normalized.cost(), options),
    };

    match result {
        Ok((x, minimum, context)) => {
            let objective_value = normalized.reported_value(minimum);
            debug!(iterations = context.iterations(), %objective_value, "optimal solution found");
            Ok(Solution::new(x, objective_value, context.iterations(), options.method, context.into_trace()))
        },
        Err(error) => {
            debug!(iterations = error.iterations(), %error, "no optimal solution");
            Err(error)
        },
    }
}

/// Dispatch on the method, with the pivot rule fixed.
fn solve_with<F, PR>(
    standard_form: &StandardForm<F>,
    cost: &[F],
    options: &SolverOptions<F>,
) -> Result<(Vec<F>, F, SolveContext<F>), SolveError>
where
    F: Real,
    PR: PivotRule<F>,
{
    let mut context = SolveContext::new(options);
    let (x, minimum) = match options.method {
        Method::TwoPhase => two_phase::solve::<F, PR>(standard_form, cost, &mut context)?,
        Method::BigM => {
            let penalty = options.big_m_penalty.unwrap_or_else(|| CostVector::default_penalty(cost));
            big_m::solve::<F, PR>(standard_form, cost, penalty, &mut context)?
        },
    };

    Ok((x, minimum, context))
}

/// Stage of the solve process, used to label errors, log lines and recorded tableaus.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Minimizing the sum of the artificial variables.
    PhaseOne,
    /// Minimizing the original objective from a basic feasible solution.
    PhaseTwo,
    /// The single pass of the Big-M method.
    BigM,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::PhaseOne => "phase one",
            Phase::PhaseTwo => "phase two",
            Phase::BigM => "big-m",
        })
    }
}

/// How an initial basic feasible solution is found.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Find a feasible basis by minimizing the artificial variables first.
    #[default]
    TwoPhase,
    /// Penalize the artificial variables in the objective and optimize once.
    BigM,
}

impl FromStr for Method {
    type Err = UnknownOption;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "two_phase" | "two-phase" => Ok(Method::TwoPhase),
            "big_m" | "big-m" => Ok(Method::BigM),
            other => Err(UnknownOption { what: "method", token: other.to_string() }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::TwoPhase => "two_phase",
            Method::BigM => "big_m",
        })
    }
}

/// Which pivot rule selects the entering column, see the `strategy::pivot_rule` module.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotRuleKind {
    /// Most negative reduced cost.
    #[default]
    Dantzig,
    /// First column with a negative reduced cost.
    FirstProfitable,
}

impl FromStr for PivotRuleKind {
    type Err = UnknownOption;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "dantzig" => Ok(PivotRuleKind::Dantzig),
            "first_profitable" | "first-profitable" => Ok(PivotRuleKind::FirstProfitable),
            other => Err(UnknownOption { what: "pivot rule", token: other.to_string() }),
        }
    }
}

impl fmt::Display for PivotRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PivotRuleKind::Dantzig => "dantzig",
            PivotRuleKind::FirstProfitable => "first_profitable",
        })
    }
}

/// A solver option token that is not recognized.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown {what} \"{token}\"")]
pub struct UnknownOption {
    what: &'static str,
    token: String,
}

/// Parameters of a single solve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverOptions<F> {
    /// Tolerance of every comparison that decides what the algorithm does next.
    pub epsilon: F,
    /// Maximum number of pivots per phase.
    pub max_iterations: usize,
    /// How to find an initial basic feasible solution.
    pub method: Method,
    /// How to select entering columns.
    pub pivot_rule: PivotRuleKind,
    /// Whether to keep a copy of every tableau visited.
    pub record_trace: bool,
    /// Penalty of the artificial variables in the Big-M method. Derived from the cost vector when
    /// absent.
    pub big_m_penalty: Option<F>,
}

impl<F: Real> Default for SolverOptions<F> {
    fn default() -> Self {
        Self {
            epsilon: F::cast(1e-8),
            max_iterations: 1000,
            method: Method::default(),
            pivot_rule: PivotRuleKind::default(),
            record_trace: false,
            big_m_penalty: None,
        }
    }
}

impl<F: Real> SolverOptions<F> {
    /// Options with a different method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Options with a different pivot rule.
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Options that record every tableau visited.
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }
}
