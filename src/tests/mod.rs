//! # Shared problems for the tests inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn standard_form()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::objective::CostVector;
use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::linear_program::general_form::Problem;
use crate::data::linear_program::standard_form::StandardForm;

pub mod problem_2;

/// Minimize `x1 + x2` subject to `x1 + x2 <= 4`, `x1 >= 1`, `x1 + 2 x2 = 3` and `x2 <= 2`.
///
/// The optimum is `2`, at `(1, 1)`.
pub fn mixed_relations() -> Problem<f64> {
    Problem::new(
        Objective::Minimize,
        vec![1f64, 1f64],
        vec![
            vec![1f64, 1f64],
            vec![1f64, 0f64],
            vec![1f64, 2f64],
            vec![0f64, 1f64],
        ],
        vec![4f64, 1f64, 3f64, 2f64],
        vec![
            ConstraintRelation::Less,
            ConstraintRelation::Greater,
            ConstraintRelation::Equal,
            ConstraintRelation::Less,
        ],
    ).unwrap()
}

/// `x1 + x2 = 3` and `x1 + x2 = 10` can't both hold.
pub fn contradicting_equalities() -> Problem<f64> {
    Problem::new(
        Objective::Minimize,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![3f64, 10f64],
        vec![ConstraintRelation::Equal, ConstraintRelation::Equal],
    ).unwrap()
}

/// Maximize `x1` subject to `-x1 + x2 <= 1`.
pub fn unbounded() -> Problem<f64> {
    Problem::new(
        Objective::Maximize,
        vec![1f64, 0f64],
        vec![vec![-1f64, 1f64]],
        vec![1f64],
        vec![ConstraintRelation::Less],
    ).unwrap()
}

/// Phase one tableau of `x1 + x2 = 2` and `2 x1 + 2 x2 = 4`, of which the second row is redundant.
pub fn redundant_tableau_form() -> Tableau<f64> {
    let problem = Problem::new(
        Objective::Minimize,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64], vec![2f64, 2f64]],
        vec![2f64, 4f64],
        vec![ConstraintRelation::Equal, ConstraintRelation::Equal],
    ).unwrap();
    let standard_form = StandardForm::from(&problem.normalize());
    let costs = CostVector::PhaseOne.build(&standard_form, &[0f64, 0f64]);

    Tableau::new(&standard_form, &costs, Kind::Artificial, 1e-8)
}
