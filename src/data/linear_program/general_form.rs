//! # Linear programs in "general form"
//!
//! A linear program as it is handed to this crate: any mix of `<=`, `>=` and `=` constraints, any
//! sign of right-hand side and either direction of optimization. All variables are nonnegative.
//!
//! Before solving, a problem is normalized: right-hand sides are made nonnegative and the
//! objective is turned into a minimization, which is the only direction the algorithms know.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::number_types::traits::Real;
use crate::error::SolveError;

/// A linear program in general form.
///
/// Dimensions are validated on construction: `constraints` has `b.len()` rows of length
/// `cost.len()`, and there is one relation per row.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Objective function coefficients, one per variable.
    cost: Vec<F>,
    /// All constraint coefficients.
    constraints: DenseMatrix<F>,
    /// All right-hands sides of the constraints.
    b: Vec<F>,
    /// The (in)equality type of all rows, ordered by index.
    relations: Vec<ConstraintRelation>,
}

impl<F: Real> Problem<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to minimize or maximize.
    /// * `cost`: Objective function coefficients, length `n`.
    /// * `constraints`: Constraint matrix rows, `m` rows of length `n`.
    /// * `b`: Right-hand side, length `m`.
    /// * `relations`: Relation of each constraint row, length `m`.
    ///
    /// # Errors
    ///
    /// `IncompleteData` if there are no variables, `DimensionMismatch` if the lengths disagree.
    pub fn new(
        objective: Objective,
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        relations: Vec<ConstraintRelation>,
    ) -> Result<Self, SolveError> {
        check_dimensions(&cost, &constraints, &b, relations.len())?;

        let nr_variables = cost.len();
        Ok(Self {
            objective,
            cost,
            constraints: DenseMatrix::new(constraints, nr_variables),
            b,
            relations,
        })
    }

    /// Create a new linear program from the tokens used by the surrounding input layer.
    ///
    /// Relations are one of `"<="`, `">="` or `"="`, the objective is `"max"` or `"min"`.
    ///
    /// # Errors
    ///
    /// Dimensions are checked before the tokens, see `Problem::new`. An unknown token results in
    /// `InvalidRelation` or `InvalidObjective`.
    pub fn from_tokens<S: AsRef<str>>(
        objective: &str,
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
        relations: &[S],
    ) -> Result<Self, SolveError> {
        check_dimensions(&cost, &constraints, &b, relations.len())?;

        let relations = relations.iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        let objective = objective.parse()?;

        Self::new(objective, cost, constraints, b, relations)
    }

    /// Force nonnegative right-hand sides and a minimization objective.
    ///
    /// Every row with a negative right-hand side is multiplied by `-1`, reversing its relation.
    /// The solution set of the row stays the same. A maximization is turned into a minimization by
    /// negating the cost vector; `NormalizedProblem::reported_value` undoes that for the optimal
    /// value.
    pub fn normalize(&self) -> NormalizedProblem<F> {
        let mut constraints = self.constraints.clone();
        let mut b = self.b.clone();
        let mut relations = self.relations.clone();

        for i in 0..b.len() {
            if b[i] < F::zero() {
                constraints.multiply_row(i, -F::one());
                b[i] = -b[i];
                relations[i] = !relations[i];
            }
        }

        let cost = match self.objective {
            Objective::Minimize => self.cost.clone(),
            Objective::Maximize => self.cost.iter().map(|&c| -c).collect(),
        };

        NormalizedProblem { objective: self.objective, cost, constraints, b, relations }
    }

    /// Value of the objective function at `x`.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x).map(|(&c, &v)| c * v).sum()
    }

    /// Whether `x` is nonnegative and satisfies every constraint, up to the tolerance.
    pub fn is_satisfied_by(&self, x: &[F], epsilon: F) -> bool {
        if x.len() != self.nr_variables() || x.iter().any(|v| v.is_negative_beyond(epsilon)) {
            return false;
        }

        self.constraints.rows().zip(&self.b).zip(&self.relations)
            .all(|((row, &b), relation)| {
                let activation: F = row.iter().zip(x).map(|(&a, &v)| a * v).sum();
                let difference = activation - b;
                match relation {
                    ConstraintRelation::Less => !difference.is_positive_beyond(epsilon),
                    ConstraintRelation::Greater => !difference.is_negative_beyond(epsilon),
                    ConstraintRelation::Equal => difference.is_zero_within(epsilon),
                }
            })
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective function coefficients.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint coefficients.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Relation of each constraint.
    pub fn relations(&self) -> &[ConstraintRelation] {
        &self.relations
    }

    /// Number of (original) variables, `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints, `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

/// Verify that the problem data is of consistent size.
fn check_dimensions<F>(
    cost: &[F],
    constraints: &[Vec<F>],
    b: &[F],
    nr_relations: usize,
) -> Result<(), SolveError> {
    if cost.is_empty() {
        return Err(SolveError::IncompleteData { what: "objective".to_string() });
    }
    if constraints.len() != b.len() {
        return Err(SolveError::dimension_mismatch("constraint matrix rows", b.len(), constraints.len()));
    }
    if nr_relations != b.len() {
        return Err(SolveError::dimension_mismatch("relations", b.len(), nr_relations));
    }
    if let Some((i, row)) = constraints.iter().enumerate().find(|(_, row)| row.len() != cost.len()) {
        return Err(SolveError::dimension_mismatch(format!("constraint row {}", i), cost.len(), row.len()));
    }

    Ok(())
}

/// A linear program with nonnegative right-hand sides, to be minimized.
///
/// Created with `Problem::normalize`.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedProblem<F> {
    /// Direction of the problem this was derived from.
    objective: Objective,
    /// Minimization costs.
    cost: Vec<F>,
    constraints: DenseMatrix<F>,
    /// All values are nonnegative.
    b: Vec<F>,
    relations: Vec<ConstraintRelation>,
}

impl<F: Real> NormalizedProblem<F> {
    /// Translate the optimal value of the minimization back to the original direction.
    pub fn reported_value(&self, minimum: F) -> F {
        match self.objective {
            Objective::Minimize => minimum,
            Objective::Maximize => -minimum,
        }
    }

    /// Direction of the problem this was derived from.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Minimization costs.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint coefficients.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Nonnegative right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Relation of each constraint.
    pub fn relations(&self) -> &[ConstraintRelation] {
        &self.relations
    }

    /// Number of (original) variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}
