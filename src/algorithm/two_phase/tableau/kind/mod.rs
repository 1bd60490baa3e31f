//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They are used to find a feasible solution in the
//! first phase of the two-phase method, and are penalized in the Big-M method. Once a basic
//! feasible solution is known, they should no longer enter the basis.

/// Whether artificial columns may be selected as entering columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Kind {
    /// Every column is eligible to enter the basis.
    Artificial,
    /// Artificial columns are still present, but never enter the basis again.
    NonArtificial,
}

impl Kind {
    /// Whether column `j` may enter the basis.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index.
    /// * `artificial_start`: Index of the first artificial column.
    pub fn is_eligible(self, j: usize, artificial_start: usize) -> bool {
        match self {
            Kind::Artificial => true,
            Kind::NonArtificial => j < artificial_start,
        }
    }
}
