//! # The two-phase Simplex method
//!
//! This module contains the data structures and logic of the primal Simplex method on a dense
//! tableau. The first phase finds a basic feasible solution by minimizing the sum of the
//! artificial variables, the second phase starts from that solution and minimizes the original
//! objective.
use tracing::{debug, trace};

use crate::algorithm::{Phase, SolverOptions};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::trace::IterationTrace;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;
pub mod trace;


/// Find an optimal basic feasible solution using the two-phase method.
///
/// The first phase is skipped when the standard form has no artificial columns, because the slack
/// columns then provide a basic feasible solution.
///
/// # Return value
///
/// The values of the original variables and the minimal objective value.
pub(crate) fn solve<F, PR>(
    standard_form: &StandardForm<F>,
    cost: &[F],
    context: &mut SolveContext<F>,
) -> Result<(Vec<F>, F), SolveError>
where
    F: Real,
    PR: PivotRule<F>,
{
    let tableau = if standard_form.has_artificial_columns() {
        match phase_one::primal::<F, PR>(standard_form, context)? {
            FeasibilityResult::Feasible(tableau) => phase_two::from_artificial(tableau, standard_form, cost),
            FeasibilityResult::Infeasible { residual } => {
                return Err(SolveError::Infeasible {
                    residual: residual.to_f64().unwrap_or(f64::NAN),
                    iterations: context.iterations(),
                });
            },
        }
    } else {
        debug!("no artificial columns, skipping phase one");
        phase_two::initial_tableau(standard_form, cost, context.epsilon())
    };

    phase_two::primal::<F, PR>(tableau, standard_form, cost, context)
}

/// Everything that belongs to a single solve, besides the tableau.
///
/// Shared by the phases of one solve, and never between solves.
#[derive(Debug)]
pub(crate) struct SolveContext<F> {
    epsilon: F,
    max_iterations: usize,
    /// Pivots performed over all phases.
    iterations: usize,
    trace: IterationTrace<F>,
}

impl<F: Real> SolveContext<F> {
    pub(crate) fn new(options: &SolverOptions<F>) -> Self {
        Self {
            epsilon: options.epsilon,
            max_iterations: options.max_iterations,
            iterations: 0,
            trace: IterationTrace::new(options.record_trace),
        }
    }

    pub(crate) fn epsilon(&self) -> F {
        self.epsilon
    }

    pub(crate) fn iterations(&self) -> usize {
        self.iterations
    }

    pub(crate) fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub(crate) fn into_trace(self) -> IterationTrace<F> {
        self.trace
    }
}

/// How a run of the primal engine ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Termination {
    /// No eligible column has a negative reduced cost.
    Optimal,
    /// The entering column has no positive coefficient in any constraint row.
    Unbounded {
        /// Index of the entering column.
        column: usize,
    },
    /// The maximum number of pivots for one phase was reached.
    IterationLimit,
}

/// Reduce the cost of the basic feasible solution as far as possible.
///
/// The iteration cap is checked before the optimality test, such that a phase that needs exactly
/// the maximum number of pivots is reported as not converging.
///
/// # Arguments
///
/// * `tableau`: Tableau in canonical form, representing a basic feasible solution.
/// * `phase`: Label for logging and the iteration trace.
/// * `context`: Counts pivots and records the tableaus visited.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    phase: Phase,
    context: &mut SolveContext<F>,
) -> Termination
where
    F: Real,
    PR: PivotRule<F>,
{
    debug_assert!(tableau.is_in_basic_feasible_solution_state());

    let mut rule = PR::new(tableau);
    let mut nr_pivots = 0;
    let termination = loop {
        context.trace.record(phase, context.iterations, tableau);

        if nr_pivots >= context.max_iterations {
            break Termination::IterationLimit;
        }

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => match tableau.select_primal_pivot_row(column_index) {
                Some(row_index) => {
                    trace!(
                        %phase,
                        iteration = context.iterations,
                        column = column_index,
                        row = row_index,
                        leaving = tableau.basis()[row_index],
                        %cost,
                        "pivot"
                    );
                    tableau.bring_into_basis(column_index, row_index);
                    nr_pivots += 1;
                    context.iterations += 1;
                },
                None => break Termination::Unbounded { column: column_index },
            },
            None => break Termination::Optimal,
        }
    };

    debug_assert!(tableau.is_in_basic_feasible_solution_state());
    termination
}
