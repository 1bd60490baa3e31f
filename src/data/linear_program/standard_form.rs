//! # Linear programs in standard form
//!
//! Equality constraints only, nonnegative variables and nonnegative right-hand side. Each
//! inequality gets a slack column, and every row that has no natural initial basis column (the
//! `>=` and `=` rows) gets an artificial column. Together, the slacks of the `<=` rows and the
//! artificial columns form a basic feasible solution of the extended system.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::ConstraintRelation;
use crate::data::linear_program::general_form::NormalizedProblem;
use crate::data::number_types::traits::Real;

/// Equality constrained linear program with slack and artificial columns appended.
///
/// The indexing for the columns is as follows:
///
/// /               || Original variables | Slack variables | Artificial variables |     |
/// ================||====================||================||=====================||=====|
/// Inequality (<=) ||    coefficients    |     I  |   0    |           0          |     |
/// ----------------||--------------------||--------|-------||----------------------|  b  |
/// Inequality (>=) ||    coefficients    |     0  |  -I    |      I   |     0     |     |
/// ----------------||--------------------||--------|-------||----------|-----------|     |
/// Equality   (==) ||    coefficients    |        0        |      0   |     I     |     |
///
/// Rows are not actually sorted by type: they keep their original order, and the slack and
/// artificial columns within each group are numbered in that row order.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// All coefficients, `m` rows and `n + s + a` columns.
    constraints: DenseMatrix<F>,
    /// Nonnegative right-hand side.
    b: Vec<F>,
    /// Column indices of the slack variables, ordered by row.
    slack_columns: Vec<usize>,
    /// Column indices of the artificial variables, ordered by row.
    artificial_columns: Vec<usize>,
    /// For each row, the column that is basic in the trivial basic feasible solution.
    initial_basis: Vec<usize>,
    /// Indices that separate the different groups.
    column_group_end: EnumMap<ColumnType, usize>,
}

/// Indexing within the different column types (see struct description).
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which we want a solution.
    Original,
    /// Slacks `s` for an equation like `<a, x> + s = b` or `<a, x> - s = b`.
    Slack,
    /// Auxiliary variables that provide the initial basis for `>=` and `=` rows.
    Artificial,
}

impl<F: Real> From<&NormalizedProblem<F>> for StandardForm<F> {
    fn from(problem: &NormalizedProblem<F>) -> Self {
        debug_assert!(problem.b().iter().all(|&v| v >= F::zero()));

        let mut nr_per_relation = EnumMap::<ConstraintRelation, usize>::default();
        for &relation in problem.relations() {
            nr_per_relation[relation] += 1;
        }
        let nr_slacks = nr_per_relation[ConstraintRelation::Less] + nr_per_relation[ConstraintRelation::Greater];
        let nr_artificials = nr_per_relation[ConstraintRelation::Greater] + nr_per_relation[ConstraintRelation::Equal];

        let cumulative = cumsum_array_owned([problem.nr_variables(), nr_slacks, nr_artificials]);
        let column_group_end = enum_map! {
            ColumnType::Original   => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };

        let nr_rows = problem.nr_constraints();
        let mut constraints = DenseMatrix::zeros(nr_rows, column_group_end[ColumnType::Artificial]);
        let mut slack_columns = Vec::with_capacity(nr_slacks);
        let mut artificial_columns = Vec::with_capacity(nr_artificials);
        let mut initial_basis = Vec::with_capacity(nr_rows);

        let mut next_slack = column_group_end[ColumnType::Original];
        let mut next_artificial = column_group_end[ColumnType::Slack];
        for (i, (row, &relation)) in problem.constraints().rows().zip(problem.relations()).enumerate() {
            for (j, &value) in row.iter().enumerate() {
                constraints.set_value(i, j, value);
            }

            if matches!(relation, ConstraintRelation::Less | ConstraintRelation::Greater) {
                let coefficient = match relation {
                    ConstraintRelation::Less => F::one(),
                    _ => -F::one(),
                };
                constraints.set_value(i, next_slack, coefficient);
                slack_columns.push(next_slack);
                next_slack += 1;
            }

            match relation {
                ConstraintRelation::Less => initial_basis.push(next_slack - 1),
                ConstraintRelation::Greater | ConstraintRelation::Equal => {
                    constraints.set_value(i, next_artificial, F::one());
                    artificial_columns.push(next_artificial);
                    initial_basis.push(next_artificial);
                    next_artificial += 1;
                },
            }
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);
        debug_assert_eq!(next_artificial, column_group_end[ColumnType::Artificial]);

        Self {
            constraints,
            b: problem.b().to_vec(),
            slack_columns,
            artificial_columns,
            initial_basis,
            column_group_end,
        }
    }
}

impl<F: Real> StandardForm<F> {
    /// Classify a column by type using the column index.
    ///
    /// # Return value
    ///
    /// The type of the column and its index within that group.
    pub fn column_type(&self, j: usize) -> (ColumnType, usize) {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnType::Original] {
            (ColumnType::Original, j)
        } else if j < self.column_group_end[ColumnType::Slack] {
            (ColumnType::Slack, j - self.column_group_end[ColumnType::Original])
        } else {
            (ColumnType::Artificial, j - self.column_group_end[ColumnType::Slack])
        }
    }

    /// All coefficients, including those of the slack and artificial columns.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Nonnegative right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Column indices of the slack variables, ordered by row.
    pub fn slack_columns(&self) -> &[usize] {
        &self.slack_columns
    }

    /// Column indices of the artificial variables, ordered by row.
    pub fn artificial_columns(&self) -> &[usize] {
        &self.artificial_columns
    }

    /// For each row, the column that is basic in the trivial basic feasible solution.
    pub fn initial_basis(&self) -> &[usize] {
        &self.initial_basis
    }

    /// Index of the first artificial column; all columns from here on are artificial.
    pub fn artificial_start(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Whether a search for a feasible solution is needed before optimizing.
    pub fn has_artificial_columns(&self) -> bool {
        !self.artificial_columns.is_empty()
    }

    /// Number of original variables, `n`.
    pub fn nr_variables(&self) -> usize {
        self.column_group_end[ColumnType::Original]
    }

    /// Number of constraints, `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Total number of columns, `n + s + a`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }
}
