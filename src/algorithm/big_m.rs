//! # The Big-M method
//!
//! Instead of first searching for a feasible solution, the artificial variables are given a large
//! cost and the problem is optimized in one pass of the primal engine. If an artificial variable is
//! still positive at the optimum, no feasible solution exists, provided that the penalty is large
//! enough.
//!
//! Unboundedness is reported as soon as an improving ray is found, also while artificial variables
//! are still positive. An infeasible problem whose constraint matrix admits such a ray is then
//! reported as unbounded, where the two-phase method reports it as infeasible. The artificial sum
//! at that moment is logged.
use tracing::debug;

use crate::algorithm::Phase;
use crate::algorithm::objective::CostVector;
use crate::algorithm::two_phase::{primal, SolveContext, Termination};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::extract_solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// Find an optimal basic feasible solution using the Big-M method.
///
/// # Arguments
///
/// * `standard_form`: Problem to solve.
/// * `cost`: Minimization costs of the original variables.
/// * `penalty`: Cost of every artificial variable.
/// * `context`: Counts pivots and records the tableaus visited.
///
/// # Return value
///
/// The values of the original variables and the minimal objective value.
pub(crate) fn solve<F, PR>(
    standard_form: &StandardForm<F>,
    cost: &[F],
    penalty: F,
    context: &mut SolveContext<F>,
) -> Result<(Vec<F>, F), SolveError>
where
    F: Real,
    PR: PivotRule<F>,
{
    let costs = CostVector::BigM { penalty }.build(standard_form, cost);
    let mut tableau = Tableau::new(standard_form, &costs, Kind::Artificial, context.epsilon());
    debug!(%penalty, artificial_columns = standard_form.artificial_columns().len(), "starting big-m");

    match primal::<F, PR>(&mut tableau, Phase::BigM, context) {
        Termination::Optimal => {},
        Termination::Unbounded { column } => {
            debug!(
                column,
                residual = %artificial_sum(&tableau, context.epsilon()),
                "improving ray found before the artificial variables reached zero level"
            );
            return Err(SolveError::Unbounded {
                phase: Phase::BigM,
                column,
                iterations: context.iterations(),
            });
        },
        Termination::IterationLimit => return Err(SolveError::IterationLimitExceeded {
            phase: Phase::BigM,
            limit: context.max_iterations(),
            iterations: context.iterations(),
        }),
    }

    let residual = artificial_sum(&tableau, context.epsilon());
    if residual > F::zero() {
        debug!(%residual, "artificial variables remain positive at the optimum");
        return Err(SolveError::Infeasible {
            residual: residual.to_f64().unwrap_or(f64::NAN),
            iterations: context.iterations(),
        });
    }

    let x = extract_solution(&tableau, standard_form.nr_variables());
    let minimum = x.iter().zip(cost).map(|(&v, &c)| v * c).sum();

    Ok((x, minimum))
}

/// Sum of the basic artificial variables that are positive beyond the tolerance.
fn artificial_sum<F: Real>(tableau: &Tableau<F>, epsilon: F) -> F {
    tableau.basic_artificial_values().into_iter()
        .map(|(_, value)| value)
        .filter(|value| value.is_positive_beyond(epsilon))
        .fold(F::zero(), |total, value| total + value)
}
