//! # Strategies
//!
//! Decisions that can be made in more than one way while the Simplex method runs.
pub mod pivot_rule;
