use super::*;

#[test]
fn only_upper_bounds() {
    for (method, pivot_rule, result) in solve_all(&scenario_1()) {
        let solution = result.unwrap();
        assert_abs_diff_eq!(solution.x()[0], 1f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x()[1], 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.objective_value(), 9f64, epsilon = 1e-6);
        assert_eq!(solution.method(), method, "{:?}", pivot_rule);
    }
}

#[test]
fn only_lower_bounds() {
    let problem = scenario_2();
    for (_, _, result) in solve_all(&problem) {
        let solution = result.unwrap();
        assert!(problem.is_satisfied_by(solution.x(), 1e-8));
        assert_abs_diff_eq!(solution.objective_value(), 29f64 / 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(problem.objective_value(solution.x()), 29f64 / 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x()[0], 4f64 / 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x()[1], 7f64 / 3f64, epsilon = 1e-6);
    }
}

#[test]
fn equality_and_upper_bound() {
    for (_, _, result) in solve_all(&scenario_3()) {
        let solution = result.unwrap();
        assert_abs_diff_eq!(solution.x()[0], 0f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x()[1], 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.objective_value(), 6f64, epsilon = 1e-6);
    }
}

#[test]
fn equality_and_lower_bound() {
    for (_, _, result) in solve_all(&scenario_4()) {
        let solution = result.unwrap();
        assert_abs_diff_eq!(solution.x()[0], 2f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.x()[1], 3f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.objective_value(), 5f64, epsilon = 1e-6);
    }
}

#[test]
fn unbounded() {
    for (method, _, result) in solve_all(&scenario_5()) {
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unbounded);
        match error {
            // The slack of x1 >= 0 can increase without limit once x1 is basic
            SolveError::Unbounded { column, .. } => assert_eq!(column, 1, "{}", method),
            _ => unreachable!(),
        }
    }
}

#[test]
fn infeasible() {
    for (_, _, result) in solve_all(&scenario_6()) {
        match result {
            Err(SolveError::Infeasible { residual, .. }) => assert_abs_diff_eq!(residual, 7f64, epsilon = 1e-6),
            other => panic!("expected infeasibility, got {:?}", other),
        }
    }
}

#[test]
fn nonbasic_unit_columns() {
    // The columns of x1 and x2 are unit vectors, but they are not basic at the optimum
    let boxed = problem("min", &[1f64, 1f64], &[&[1f64, 0f64], &[0f64, 1f64]], &[2f64, 3f64], &["<=", "<="]);
    let sign_row = problem(
        "min",
        &[0f64, 1f64],
        &[&[1f64, 0f64], &[0f64, 1f64], &[-2f64, 0f64]],
        &[1f64, 1f64, 0f64],
        &["<=", "<=", "<="],
    );

    for problem in [boxed, sign_row] {
        for (method, _, result) in solve_all(&problem) {
            let solution = result.unwrap();
            assert_eq!(solution.x(), &[0f64, 0f64], "{}", method);
            assert_abs_diff_eq!(solution.objective_value(), 0f64, epsilon = 1e-8);
        }
    }
}

#[test]
fn duplicate_columns() {
    let problem = problem("max", &[1f64, 1f64], &[&[1f64, 1f64]], &[4f64], &["<="]);
    for (method, _, result) in solve_all(&problem) {
        let solution = result.unwrap();
        assert!(problem.is_satisfied_by(solution.x(), 1e-8), "{}", method);
        assert_eq!(solution.x(), &[4f64, 0f64]);
        assert_abs_diff_eq!(solution.objective_value(), 4f64, epsilon = 1e-8);
        assert_abs_diff_eq!(problem.objective_value(solution.x()), 4f64, epsilon = 1e-8);
    }
}

#[test]
fn invalid_input() {
    let result = Problem::<f64>::from_tokens("max", vec![1f64, 2f64], vec![vec![1f64, 1f64]], vec![1f64, 2f64], &["<="]);
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::DimensionMismatch));

    let result = Problem::<f64>::from_tokens("max", vec![1f64], vec![vec![1f64]], vec![1f64], &["=>"]);
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidRelation));

    let result = Problem::<f64>::from_tokens("maximum", vec![1f64], vec![vec![1f64]], vec![1f64], &["<="]);
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::InvalidObjective));
}

#[test]
fn negative_right_hand_side() {
    // -x1 - x2 <= -2 is x1 + x2 >= 2
    let flipped = problem("min", &[1f64, 2f64], &[&[-1f64, -1f64]], &[-2f64], &["<="]);
    let direct = problem("min", &[1f64, 2f64], &[&[1f64, 1f64]], &[2f64], &[">="]);

    let options = SolverOptions::default();
    let flipped = solve(&flipped, &options).unwrap();
    let direct = solve(&direct, &options).unwrap();
    assert_eq!(flipped.x(), direct.x());
    assert_abs_diff_eq!(flipped.objective_value(), 2f64, epsilon = 1e-8);
}

#[test]
fn iteration_limit() {
    let mut options = SolverOptions::default();
    options.max_iterations = 1;

    let error = solve(&scenario_1(), &options).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::IterationLimitExceeded);
    assert_eq!(error.iterations(), 1);
}

#[test]
fn idempotence() {
    for problem in [scenario_1(), scenario_2(), scenario_3(), scenario_4()] {
        for method in METHODS {
            let options = SolverOptions::default().with_method(method);
            assert_eq!(solve(&problem, &options), solve(&problem, &options));
        }
    }

    let options = SolverOptions::default();
    assert_eq!(solve(&scenario_5(), &options), solve(&scenario_5(), &options));
    assert_eq!(solve(&scenario_6(), &options), solve(&scenario_6(), &options));
}

#[test]
fn concurrent_solves() {
    let problems = [scenario_1(), scenario_2(), scenario_3(), scenario_4(), scenario_5(), scenario_6()];
    let options = SolverOptions::default().with_trace();
    let sequential = problems.iter().map(|problem| solve(problem, &options)).collect::<Vec<_>>();

    let concurrent = thread::scope(|scope| {
        let handles = problems.iter()
            .map(|problem| scope.spawn(move || solve(problem, &options)))
            .collect::<Vec<_>>();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn report() {
    let options = SolverOptions::default();

    let report = SolveReport::new(options.method, &solve(&scenario_1(), &options));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["method"], "two_phase");
    assert_eq!(json["iterations"], 2);
    assert_eq!(json["solution"].as_array().map(Vec::len), Some(2));
    assert!(json.get("error").is_none());

    let report = SolveReport::new(options.method, &solve(&scenario_6(), &options));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "infeasible");
    assert!(json.get("solution").is_none());
    assert!(json.get("optimal_value").is_none());
}
