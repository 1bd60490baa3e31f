use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::Parser;

use rdlp::algorithm::{Method, PivotRuleKind, solve};
use rdlp::config::Config;
use rdlp::data::linear_program::solution::SolveReport;
use rdlp::io::import;

/// A dense linear program solver using the Simplex method.
#[derive(Parser, Debug)]
#[command(name = "rdlp", version, about, long_about = None)]
struct Opts {
    /// File containing the problem description (JSON)
    problem_file: PathBuf,
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Method used to find an initial basic feasible solution: two_phase or big_m
    #[arg(short, long)]
    method: Option<Method>,
    /// Rule for selecting entering columns: dantzig or first_profitable
    #[arg(short, long)]
    pivot_rule: Option<PivotRuleKind>,
    /// Print every tableau visited
    #[arg(short, long)]
    trace: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let config = match &opts.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Couldn't load configuration from {:?}", path))?,
        None => Config::default(),
    };
    config.logging.init();

    let description = import(&opts.problem_file)
        .with_context(|| format!("Couldn't read problem file {:?}", opts.problem_file))?;

    let mut options = config.solver.options::<f64>();
    if let Some(method) = opts.method.or(description.method) {
        options.method = method;
    }
    if let Some(pivot_rule) = opts.pivot_rule {
        options.pivot_rule = pivot_rule;
    }
    options.record_trace |= opts.trace;

    let result = solve(&description.problem, &options);

    if opts.trace {
        if let Ok(solution) = &result {
            for snapshot in solution.trace().snapshots() {
                println!("{}", snapshot);
            }
        }
    }

    if opts.json {
        let report = SolveReport::new(options.method, &result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &result {
            Ok(solution) => println!("{}", solution),
            Err(error) => println!("No solution: {}", error),
        }
    }

    if result.is_err() {
        exit(1);
    }

    Ok(())
}
