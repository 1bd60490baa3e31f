//! # Phase two: improving a basic feasible solution
use tracing::debug;

use crate::algorithm::Phase;
use crate::algorithm::objective::CostVector;
use crate::algorithm::two_phase::{primal as primal_engine, SolveContext, Termination};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::extract_solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// Tableau for a problem whose slack columns form a basic feasible solution.
pub(crate) fn initial_tableau<F: Real>(standard_form: &StandardForm<F>, cost: &[F], epsilon: F) -> Tableau<F> {
    debug_assert!(!standard_form.has_artificial_columns());

    let costs = CostVector::Original.build(standard_form, cost);
    Tableau::new(standard_form, &costs, Kind::NonArtificial, epsilon)
}

/// Place the original objective over the basis found in phase one.
///
/// Artificial columns are kept, but can't enter the basis anymore.
pub(crate) fn from_artificial<F: Real>(tableau: Tableau<F>, standard_form: &StandardForm<F>, cost: &[F]) -> Tableau<F> {
    let costs = CostVector::Original.build(standard_form, cost);
    tableau.with_objective(&costs, Kind::NonArtificial)
}

/// Optimize the original objective from a basic feasible solution.
///
/// # Arguments
///
/// * `tableau`: Tableau with the original objective in canonical form.
/// * `standard_form`: Problem the tableau was derived from.
/// * `cost`: Minimization costs of the original variables.
/// * `context`: Counts pivots and records the tableaus visited.
///
/// # Return value
///
/// The values of the original variables and the minimal objective value.
///
/// # Errors
///
/// If the problem is unbounded, the iteration cap is reached or an artificial variable ends up in
/// the basis at a positive value.
pub(crate) fn primal<F, PR>(
    mut tableau: Tableau<F>,
    standard_form: &StandardForm<F>,
    cost: &[F],
    context: &mut SolveContext<F>,
) -> Result<(Vec<F>, F), SolveError>
where
    F: Real,
    PR: PivotRule<F>,
{
    debug_assert_eq!(tableau.kind(), Kind::NonArtificial);
    debug!(objective_value = %tableau.objective_function_value(), "starting phase two");

    match primal_engine::<F, PR>(&mut tableau, Phase::PhaseTwo, context) {
        Termination::Optimal => {},
        Termination::Unbounded { column } => return Err(SolveError::Unbounded {
            phase: Phase::PhaseTwo,
            column,
            iterations: context.iterations(),
        }),
        Termination::IterationLimit => return Err(SolveError::IterationLimitExceeded {
            phase: Phase::PhaseTwo,
            limit: context.max_iterations(),
            iterations: context.iterations(),
        }),
    }

    let positive_artificial = tableau.basic_artificial_values().into_iter()
        .find(|&(_, value)| value.is_positive_beyond(context.epsilon()));
    if let Some((column, value)) = positive_artificial {
        return Err(SolveError::DegenerateExtraction {
            column,
            value: value.to_f64().unwrap_or(f64::NAN),
            iterations: context.iterations(),
        });
    }

    let x = extract_solution(&tableau, standard_form.nr_variables());
    debug_assert_eq!(x.len(), cost.len());

    Ok((x, tableau.objective_function_value()))
}
