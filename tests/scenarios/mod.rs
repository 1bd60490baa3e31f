//! Small problems with a known outcome, solved through the public interface.
use std::thread;

use approx::assert_abs_diff_eq;

use rdlp::algorithm::{Method, PivotRuleKind, solve, SolverOptions};
use rdlp::data::linear_program::general_form::Problem;
use rdlp::data::linear_program::solution::{Solution, SolveReport};
use rdlp::error::{ErrorKind, SolveError};

mod test;

const METHODS: [Method; 2] = [Method::TwoPhase, Method::BigM];
const PIVOT_RULES: [PivotRuleKind; 2] = [PivotRuleKind::Dantzig, PivotRuleKind::FirstProfitable];

fn problem(objective: &str, c: &[f64], a: &[&[f64]], b: &[f64], signs: &[&str]) -> Problem<f64> {
    Problem::from_tokens(
        objective,
        c.to_vec(),
        a.iter().map(|row| row.to_vec()).collect(),
        b.to_vec(),
        signs,
    ).unwrap()
}

/// Solve with every combination of method and pivot rule.
fn solve_all(problem: &Problem<f64>) -> Vec<(Method, PivotRuleKind, Result<Solution<f64>, SolveError>)> {
    METHODS.iter()
        .flat_map(|&method| PIVOT_RULES.iter().map(move |&pivot_rule| (method, pivot_rule)))
        .map(|(method, pivot_rule)| {
            let options = SolverOptions::default().with_method(method).with_pivot_rule(pivot_rule);
            (method, pivot_rule, solve(problem, &options))
        })
        .collect()
}

fn scenario_1() -> Problem<f64> {
    problem("max", &[3f64, 2f64], &[&[1f64, 1f64], &[2f64, 1f64]], &[4f64, 5f64], &["<=", "<="])
}

fn scenario_2() -> Problem<f64> {
    problem("min", &[2f64, 3f64], &[&[1f64, 2f64], &[2f64, 1f64]], &[6f64, 5f64], &[">=", ">="])
}

fn scenario_3() -> Problem<f64> {
    problem("max", &[1f64, 2f64], &[&[1f64, 1f64], &[2f64, 1f64]], &[3f64, 4f64], &["=", "<="])
}

fn scenario_4() -> Problem<f64> {
    problem("min", &[1f64, 1f64], &[&[1f64, 1f64], &[1f64, 0f64]], &[5f64, 2f64], &["=", ">="])
}

fn scenario_5() -> Problem<f64> {
    problem("max", &[1f64], &[&[1f64]], &[0f64], &[">="])
}

fn scenario_6() -> Problem<f64> {
    problem("min", &[1f64, 1f64], &[&[1f64, 1f64], &[1f64, 1f64]], &[3f64, 10f64], &["=", "="])
}
