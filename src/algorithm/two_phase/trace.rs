//! # Iteration trace
//!
//! A record of the tableaus visited during one solve. It is owned by that solve and handed back
//! with its solution, so concurrent solves never share one.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// Tableaus visited by the primal engine, in order.
///
/// Only records anything when enabled.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationTrace<F> {
    enabled: bool,
    snapshots: Vec<Snapshot<F>>,
}

/// A tableau as it was at the start of an iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F> {
    /// Phase in which the tableau was visited.
    pub phase: Phase,
    /// Number of pivots performed over all phases before this tableau was visited.
    pub iteration: usize,
    /// Copy of the tableau.
    pub tableau: Tableau<F>,
}

impl<F: Real> IterationTrace<F> {
    /// Create a new, empty trace.
    pub fn new(enabled: bool) -> Self {
        Self { enabled, snapshots: Vec::new() }
    }

    pub(crate) fn record(&mut self, phase: Phase, iteration: usize, tableau: &Tableau<F>) {
        if self.enabled {
            self.snapshots.push(Snapshot { phase, iteration, tableau: tableau.clone() });
        }
    }

    /// Whether tableaus are being recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// All recorded tableaus.
    pub fn snapshots(&self) -> &[Snapshot<F>] {
        &self.snapshots
    }
}

impl<F: Real> Display for Snapshot<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "--- {}, iteration {} ---", self.phase, self.iteration)?;
        Display::fmt(&self.tableau, f)
    }
}
