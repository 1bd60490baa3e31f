//! # A dense linear program solver
//!
//! Linear programs are solved using the tableau Simplex method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. A basic feasible
//! solution is found with either the two-phase method or the Big-M method.
//!
//! ```
//! use rdlp::algorithm::{solve, SolverOptions};
//! use rdlp::data::linear_program::general_form::Problem;
//!
//! let problem = Problem::from_tokens(
//!     "max",
//!     vec![3f64, 2f64],
//!     vec![vec![1f64, 1f64], vec![2f64, 1f64]],
//!     vec![4f64, 5f64],
//!     &["<=", "<="],
//! ).unwrap();
//! let solution = solve(&problem, &SolverOptions::default()).unwrap();
//! assert!((solution.objective_value() - 9f64).abs() < 1e-8);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;
pub mod io;

#[cfg(test)]
mod tests;
