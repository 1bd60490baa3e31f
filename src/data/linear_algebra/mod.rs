//! # Linear algebra primitives
//!
//! Dense storage is all that is needed for the interactive problem sizes this crate targets.
pub mod matrix;
