//! # Phase one: finding a basic feasible solution
use tracing::debug;

use crate::algorithm::Phase;
use crate::algorithm::objective::CostVector;
use crate::algorithm::two_phase::{primal as primal_engine, SolveContext, Termination};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `standard_form`: Problem with at least one artificial column.
/// * `context`: Counts pivots and records the tableaus visited.
///
/// # Return value
///
/// A tableau representing a basic feasible solution with artificial variables at zero, or the
/// smallest sum of artificial variables that could be attained.
///
/// # Errors
///
/// When the iteration cap is reached, or when the artificial objective appears unbounded. The
/// latter can't happen for a correctly constructed tableau, as the objective is bounded by zero.
pub(crate) fn primal<F, PR>(
    standard_form: &StandardForm<F>,
    context: &mut SolveContext<F>,
) -> Result<FeasibilityResult<F>, SolveError>
where
    F: Real,
    PR: PivotRule<F>,
{
    debug_assert!(standard_form.has_artificial_columns());

    let costs = CostVector::PhaseOne.build(standard_form, &vec![F::zero(); standard_form.nr_variables()]);
    let mut tableau = Tableau::new(standard_form, &costs, Kind::Artificial, context.epsilon());
    debug!(
        artificial_columns = standard_form.artificial_columns().len(),
        initial_sum = %tableau.objective_function_value(),
        "starting phase one"
    );

    match primal_engine::<F, PR>(&mut tableau, Phase::PhaseOne, context) {
        Termination::Optimal => {},
        Termination::Unbounded { column } => return Err(SolveError::Internal {
            phase: Phase::PhaseOne,
            message: format!("artificial objective unbounded in column {}", column),
            iterations: context.iterations(),
        }),
        Termination::IterationLimit => return Err(SolveError::IterationLimitExceeded {
            phase: Phase::PhaseOne,
            limit: context.max_iterations(),
            iterations: context.iterations(),
        }),
    }

    let residual = tableau.objective_function_value();
    if residual.is_positive_beyond(context.epsilon()) {
        debug!(%residual, "phase one ended with artificial variables at positive level");
        return Ok(FeasibilityResult::Infeasible { residual });
    }

    let nr_removed = tableau.remove_artificial_basis_columns();
    debug!(
        iterations = context.iterations(),
        removed_artificial_columns = nr_removed,
        redundant_rows = tableau.basic_artificial_values().len(),
        "phase one found a basic feasible solution"
    );

    Ok(FeasibilityResult::Feasible(tableau))
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
#[derive(Debug, PartialEq)]
pub(crate) enum FeasibilityResult<F> {
    /// Tableau representing a basic feasible solution. Artificial columns are basic only in
    /// redundant rows.
    Feasible(Tableau<F>),
    /// The artificial variables can't all be zero.
    Infeasible {
        /// Minimal sum of the artificial variables.
        residual: F,
    },
}
