//! # Number types
//!
//! Algorithms are written against the `Real` trait instead of a concrete float, such that the same
//! code can be run with `f64` for production use and with `f32` where memory matters.
pub mod traits;
