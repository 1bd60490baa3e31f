//! Property-based tests on random, bounded problems in two variables.
//!
//! Every problem has the box `x1 <= u1`, `x2 <= u2` and one or two random constraints. The optimum
//! is cross-checked against the best feasible vertex, found by intersecting all pairs of
//! constraint lines.
use proptest::prelude::*;

use rdlp::algorithm::{Method, PivotRuleKind, solve, SolverOptions};
use rdlp::data::linear_program::elements::{ConstraintRelation, Objective};
use rdlp::data::linear_program::general_form::Problem;
use rdlp::error::ErrorKind;

/// Constraint row `a1 x1 + a2 x2 (relation) b`, with integer data.
type Row = (i32, i32, i32, usize);

const RELATIONS: [ConstraintRelation; 3] = [
    ConstraintRelation::Less,
    ConstraintRelation::Greater,
    ConstraintRelation::Equal,
];

fn build(maximize: bool, cost: (i32, i32), bounds: (i32, i32), rows: &[Row]) -> Problem<f64> {
    let mut constraints = vec![vec![1f64, 0f64], vec![0f64, 1f64]];
    let mut b = vec![f64::from(bounds.0), f64::from(bounds.1)];
    let mut relations = vec![ConstraintRelation::Less, ConstraintRelation::Less];
    for &(a1, a2, rhs, relation) in rows {
        constraints.push(vec![f64::from(a1), f64::from(a2)]);
        b.push(f64::from(rhs));
        relations.push(RELATIONS[relation]);
    }

    let objective = if maximize { Objective::Maximize } else { Objective::Minimize };
    Problem::new(objective, vec![f64::from(cost.0), f64::from(cost.1)], constraints, b, relations).unwrap()
}

/// Best objective value over all feasible vertices, `None` if there are none.
fn vertex_enumeration(problem: &Problem<f64>) -> Option<f64> {
    let mut lines = problem.constraints().rows()
        .zip(problem.b())
        .map(|(row, &b)| (row[0], row[1], b))
        .collect::<Vec<_>>();
    // The nonnegativity bounds
    lines.push((1f64, 0f64, 0f64));
    lines.push((0f64, 1f64, 0f64));

    let mut best: Option<f64> = None;
    for (i, &(a1, a2, b)) in lines.iter().enumerate() {
        for &(c1, c2, d) in &lines[(i + 1)..] {
            let determinant = a1 * c2 - a2 * c1;
            if determinant == 0f64 {
                continue;
            }
            let x = [(b * c2 - a2 * d) / determinant, (a1 * d - b * c1) / determinant];
            if !problem.is_satisfied_by(&x, 1e-9) {
                continue;
            }

            let value = problem.objective_value(&x);
            best = Some(match (best, problem.objective()) {
                (None, _) => value,
                (Some(current), Objective::Maximize) => current.max(value),
                (Some(current), Objective::Minimize) => current.min(value),
            });
        }
    }

    best
}

fn row() -> impl Strategy<Value = Row> {
    (-5i32..=5, -5i32..=5, -10i32..=10, 0usize..3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn agrees_with_vertex_enumeration(
        maximize in any::<bool>(),
        cost in (-5i32..=5, -5i32..=5),
        bounds in (1i32..=10, 1i32..=10),
        rows in prop::collection::vec(row(), 1..=2),
        method_index in 0usize..2,
        pivot_rule_index in 0usize..2,
    ) {
        let problem = build(maximize, cost, bounds, &rows);
        let options = SolverOptions::default()
            .with_method([Method::TwoPhase, Method::BigM][method_index])
            .with_pivot_rule([PivotRuleKind::Dantzig, PivotRuleKind::FirstProfitable][pivot_rule_index]);

        let result = solve(&problem, &options);
        match vertex_enumeration(&problem) {
            Some(reference) => {
                let solution = result.unwrap();
                prop_assert!((solution.objective_value() - reference).abs() < 1e-4);
            },
            None => {
                prop_assert_eq!(result.map_err(|e| e.kind()).err(), Some(ErrorKind::Infeasible));
            },
        }
    }

    #[test]
    fn solutions_are_feasible(
        maximize in any::<bool>(),
        cost in (-5i32..=5, -5i32..=5),
        bounds in (1i32..=10, 1i32..=10),
        rows in prop::collection::vec(row(), 1..=2),
    ) {
        let problem = build(maximize, cost, bounds, &rows);

        if let Ok(solution) = solve(&problem, &SolverOptions::default()) {
            prop_assert_eq!(solution.x().len(), 2);
            prop_assert!(problem.is_satisfied_by(solution.x(), 1e-6));
            prop_assert!((problem.objective_value(solution.x()) - solution.objective_value()).abs() < 1e-6);
        }
    }

    #[test]
    fn maximization_is_negated_minimization(
        cost in (-5i32..=5, -5i32..=5),
        bounds in (1i32..=10, 1i32..=10),
        rows in prop::collection::vec(row(), 1..=2),
    ) {
        let maximization = build(true, cost, bounds, &rows);
        let minimization = build(false, (-cost.0, -cost.1), bounds, &rows);
        let options = SolverOptions::default();

        match (solve(&maximization, &options), solve(&minimization, &options)) {
            (Ok(maximum), Ok(minimum)) => {
                prop_assert!((maximum.objective_value() + minimum.objective_value()).abs() < 1e-6);
            },
            (Err(first), Err(second)) => prop_assert_eq!(first.kind(), second.kind()),
            _ => prop_assert!(false, "only one of the two problems was solved"),
        }
    }
}
