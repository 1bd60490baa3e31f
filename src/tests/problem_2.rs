//! Minimize `2 x1 + 3 x2` subject to `x1 + 2 x2 >= 6` and `2 x1 + x2 >= 5`.
//!
//! Both rows need an artificial variable. The optimum is `29 / 3`, at `(4 / 3, 7 / 3)`.
use approx::assert_abs_diff_eq;

use crate::algorithm::{Method, solve, SolverOptions};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::linear_program::general_form::Problem;
use crate::data::linear_program::standard_form::StandardForm;

#[test]
fn solve_general_form() {
    let solution = solve(&general_form(), &SolverOptions::default()).unwrap();

    assert_abs_diff_eq!(solution.x()[0], 4f64 / 3f64, epsilon = 1e-8);
    assert_abs_diff_eq!(solution.x()[1], 7f64 / 3f64, epsilon = 1e-8);
    assert_abs_diff_eq!(solution.objective_value(), 29f64 / 3f64, epsilon = 1e-8);
    // Both pivots happen in phase one
    assert_eq!(solution.iterations(), 2);
}

#[test]
fn trace() {
    let options = SolverOptions::default().with_trace();
    let solution = solve(&general_form(), &options).unwrap();

    let snapshots = solution.trace().snapshots();
    // Three tableaus in phase one (two pivots), one in phase two (already optimal)
    assert_eq!(snapshots.len(), 4);
    assert_eq!(snapshots[0].tableau, artificial_tableau_form());
    assert_eq!(snapshots.iter().map(|s| s.iteration).collect::<Vec<_>>(), vec![0, 1, 2, 2]);

    let untraced = solve(&general_form(), &SolverOptions::default().with_method(Method::TwoPhase)).unwrap();
    assert!(untraced.trace().snapshots().is_empty());
}

pub fn general_form() -> Problem<f64> {
    Problem::new(
        Objective::Minimize,
        vec![2f64, 3f64],
        vec![vec![1f64, 2f64], vec![2f64, 1f64]],
        vec![6f64, 5f64],
        vec![ConstraintRelation::Greater, ConstraintRelation::Greater],
    ).unwrap()
}

pub fn standard_form() -> StandardForm<f64> {
    StandardForm::from(&general_form().normalize())
}

/// Phase one tableau, with the artificial columns as the basis.
pub fn artificial_tableau_form() -> Tableau<f64> {
    Tableau::new(&standard_form(), &[0f64, 0f64, 0f64, 0f64, 1f64, 1f64], Kind::Artificial, 1e-8)
}

/// Phase two tableau, at the optimum that phase one happens to find.
pub fn tableau_form() -> Tableau<f64> {
    let mut tableau = artificial_tableau_form();
    tableau.bring_into_basis(0, 1);
    tableau.bring_into_basis(1, 0);

    tableau.with_objective(&[2f64, 3f64, 0f64, 0f64, 0f64, 0f64], Kind::NonArtificial)
}
