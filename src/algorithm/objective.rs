//! # Objective rows
//!
//! The two-phase and Big-M methods share the tableau and the primal engine. What sets them apart
//! is the cost vector that the objective row of the tableau is built from.
use crate::data::linear_program::standard_form::{ColumnType, StandardForm};
use crate::data::number_types::traits::Real;

/// Cost vector over all columns of a standard form problem.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CostVector<F> {
    /// Cost `1` for every artificial column, `0` elsewhere.
    PhaseOne,
    /// The minimization costs for the original variables, `0` elsewhere.
    Original,
    /// Original costs plus a penalty on every artificial column.
    BigM {
        /// Cost of each artificial variable.
        penalty: F,
    },
}

impl<F: Real> CostVector<F> {
    /// Build the cost vector.
    ///
    /// # Arguments
    ///
    /// * `standard_form`: Problem that determines the column layout.
    /// * `cost`: Minimization costs of the original variables.
    ///
    /// # Return value
    ///
    /// One value per column of `standard_form`.
    pub fn build(&self, standard_form: &StandardForm<F>, cost: &[F]) -> Vec<F> {
        debug_assert_eq!(cost.len(), standard_form.nr_variables());

        (0..standard_form.nr_columns())
            .map(|j| match (self, standard_form.column_type(j)) {
                (CostVector::PhaseOne, (ColumnType::Artificial, _)) => F::one(),
                (CostVector::PhaseOne, _) => F::zero(),
                (CostVector::Original | CostVector::BigM { .. }, (ColumnType::Original, index)) => cost[index],
                (CostVector::BigM { penalty }, (ColumnType::Artificial, _)) => *penalty,
                (_, _) => F::zero(),
            })
            .collect()
    }

    /// Penalty used by the Big-M method when none is configured.
    ///
    /// Large relative to the cost coefficients: `max |c| * 1000 + 1000`.
    pub fn default_penalty(cost: &[F]) -> F {
        let largest = cost.iter().map(|c| c.abs()).fold(F::zero(), F::max);
        let thousand = F::cast(1000f64);

        largest * thousand + thousand
    }
}
