//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only columns that the tableau marks as eligible are considered.
    ///
    /// # Return value
    ///
    /// The index of the column to bring into the basis and its reduced cost. `None` if no
    /// reduced cost is below minus the tolerance, that is, if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Pivot on the column with the most negative reduced cost.
///
/// Of equally negative reduced costs, the one with the lowest column index is chosen.
pub struct Dantzig;
impl<F: Real> PivotRule<F> for Dantzig {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&j| tableau.is_eligible(j))
            .map(|j| (j, tableau.relative_cost(j)))
            .filter(|&(_, cost)| cost.is_negative_beyond(tableau.epsilon()))
            .fold(None, |most_negative, (j, cost)| match most_negative {
                Some((_, lowest)) if lowest <= cost => most_negative,
                _ => Some((j, cost)),
            })
    }
}

/// Simply pivot on the first column which has a negative relative cost.
pub struct FirstProfitable;
impl<F: Real> PivotRule<F> for FirstProfitable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&j| tableau.is_eligible(j) && !tableau.is_in_basis(j))
            .map(|j| (j, tableau.relative_cost(j)))
            .find(|&(_, cost)| cost.is_negative_beyond(tableau.epsilon()))
    }
}
