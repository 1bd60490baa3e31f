//! # Simplex tableau
//!
//! Contains the simplex tableau and logic to manipulate it. The tableau is stored densely: one row
//! per constraint followed by the objective row, one column per variable followed by the
//! right-hand side.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Real;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// The objective row holds the reduced costs `c_j - c_B B^-1 A_j` of all columns, and minus the
/// objective function value in the right-hand side column. The tableau is in canonical form at
/// all times: the basic columns are unit vectors with a zero reduced cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows followed by the objective row, variables followed by the right-hand side.
    matrix: DenseMatrix<F>,
    /// For each constraint row, the index of the column that is basic in that row.
    basis: Vec<usize>,
    /// Whether artificial columns may enter the basis.
    kind: Kind,
    /// Index of the first artificial column.
    artificial_start: usize,
    /// Tolerance of all decisions made on this tableau.
    epsilon: F,
}

impl<F: Real> Tableau<F> {
    /// Create a `Tableau` in canonical form from a standard form problem.
    ///
    /// The initial basis consists of the slack columns of the `<=` rows and the artificial columns
    /// of the other rows.
    ///
    /// # Arguments
    ///
    /// * `standard_form`: Problem to build the constraint rows from.
    /// * `costs`: Cost of each column of the standard form problem.
    /// * `kind`: Whether artificial columns may enter the basis.
    /// * `epsilon`: Tolerance for all decisions made on this tableau.
    pub fn new(standard_form: &StandardForm<F>, costs: &[F], kind: Kind, epsilon: F) -> Self {
        debug_assert_eq!(costs.len(), standard_form.nr_columns());

        let nr_columns = standard_form.nr_columns();
        let data = standard_form.constraints().rows()
            .zip(standard_form.b())
            .map(|(row, &b)| row.iter().copied().chain(Some(b)).collect())
            .chain(Some(costs.iter().copied().chain(Some(F::zero())).collect()))
            .collect();

        let mut tableau = Self {
            matrix: DenseMatrix::new(data, nr_columns + 1),
            basis: standard_form.initial_basis().to_vec(),
            kind,
            artificial_start: standard_form.artificial_start(),
            epsilon,
        };
        tableau.canonicalize();

        tableau
    }

    /// Replace the objective row, keeping the constraint rows and the basis.
    ///
    /// Used for the transition between the phases of the two-phase method.
    pub fn with_objective(mut self, costs: &[F], kind: Kind) -> Self {
        debug_assert_eq!(costs.len(), self.nr_columns());

        let objective_row = costs.iter().copied().chain(Some(F::zero())).collect();
        self.matrix.set_row(self.objective_row_index(), objective_row);
        self.kind = kind;
        self.canonicalize();

        self
    }

    /// Eliminate the basic columns from the objective row.
    ///
    /// Needed whenever a fresh objective row is placed over an existing basis.
    fn canonicalize(&mut self) {
        let objective_row = self.objective_row_index();
        for (row, &column) in self.basis.iter().enumerate() {
            let cost = self.matrix.get_value(objective_row, column);
            if cost != F::zero() {
                self.matrix.mul_add_rows(row, objective_row, -cost);
                self.matrix.set_value(objective_row, column, F::zero());
            }
        }
    }

    /// Brings a column into the basis by updating the whole tableau.
    ///
    /// The pivot row is scaled such that the pivot element becomes one, after which the pivot
    /// column is eliminated from every other row, including the objective row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Index of the column entering the basis.
    /// * `pivot_row_index`: Index of the row whose basic column leaves the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());

        let pivot_value = self.matrix.get_value(pivot_row_index, pivot_column_index);
        debug_assert!(!pivot_value.is_zero_within(self.epsilon));

        self.matrix.multiply_row(pivot_row_index, F::one() / pivot_value);
        self.matrix.set_value(pivot_row_index, pivot_column_index, F::one());
        for i in 0..self.matrix.nr_rows() {
            if i == pivot_row_index {
                continue;
            }

            let factor = self.matrix.get_value(i, pivot_column_index);
            if factor != F::zero() {
                self.matrix.mul_add_rows(pivot_row_index, i, -factor);
                self.matrix.set_value(i, pivot_column_index, F::zero());
            }
        }

        self.basis[pivot_row_index] = pivot_column_index;
    }

    /// Determine the row to pivot on, given the column to bring into the basis.
    ///
    /// This is the minimum ratio test. Only rows with a pivot element larger than the tolerance
    /// are considered; ties are broken by the lowest row index.
    ///
    /// # Return value
    ///
    /// The index of the row to pivot on. If `None`, the column can increase without bound.
    pub fn select_primal_pivot_row(&self, column_index: usize) -> Option<usize> {
        debug_assert!(column_index < self.nr_columns());

        let mut smallest: Option<(usize, F)> = None;
        for i in 0..self.nr_rows() {
            let value = self.matrix.get_value(i, column_index);
            if value.is_positive_beyond(self.epsilon) {
                let ratio = self.rhs(i) / value;
                match smallest {
                    Some((_, smallest_ratio)) if smallest_ratio <= ratio => {},
                    _ => smallest = Some((i, ratio)),
                }
            }
        }

        smallest.map(|(i, _)| i)
    }

    /// Pivot every artificial column that is basic at zero level out of the basis.
    ///
    /// Within the row of such a column, the eligible non-basic column with the largest coefficient
    /// in absolute value is brought in. Because the right-hand side is zero, the solution doesn't
    /// change. If all of these coefficients are zero, the row is redundant and the artificial
    /// column stays.
    ///
    /// # Return value
    ///
    /// The number of artificial columns that left the basis.
    pub fn remove_artificial_basis_columns(&mut self) -> usize {
        let mut nr_removed = 0;
        for row in 0..self.nr_rows() {
            if self.basis[row] < self.artificial_start {
                continue;
            }
            debug_assert!(self.rhs(row).is_zero_within(self.epsilon));

            let replacement = (0..self.artificial_start)
                .filter(|&j| !self.is_in_basis(j))
                .map(|j| (j, self.matrix.get_value(row, j).abs()))
                .filter(|&(_, value)| value.is_positive_beyond(self.epsilon))
                .fold(None, |best: Option<(usize, F)>, (j, value)| match best {
                    Some((_, best_value)) if best_value >= value => best,
                    _ => Some((j, value)),
                });

            if let Some((column, _)) = replacement {
                self.bring_into_basis(column, row);
                nr_removed += 1;
            }
        }

        nr_removed
    }

    /// Rows and values of artificial columns that are currently basic.
    pub fn basic_artificial_values(&self) -> Vec<(usize, F)> {
        self.basis.iter().enumerate()
            .filter(|&(_, &column)| column >= self.artificial_start)
            .map(|(row, &column)| (column, self.rhs(row)))
            .collect()
    }

    /// Reduced cost of a column.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(self.objective_row_index(), j)
    }

    /// Current value of the basic variable of row `i`.
    pub fn rhs(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i, self.nr_columns())
    }

    /// Coefficient of column `j` in constraint row `i`.
    pub fn coefficient(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(i, j)
    }

    /// The constraint row entries of column `j`.
    pub fn constraint_column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns());

        self.matrix.column(j).take(self.nr_rows())
    }

    /// Objective function value of the current basic solution.
    pub fn objective_function_value(&self) -> F {
        -self.matrix.get_value(self.objective_row_index(), self.nr_columns())
    }

    /// Whether column `j` may enter the basis.
    pub fn is_eligible(&self, j: usize) -> bool {
        self.kind.is_eligible(j, self.artificial_start)
    }

    /// Whether column `j` is currently basic.
    pub fn is_in_basis(&self, j: usize) -> bool {
        self.basis.contains(&j)
    }

    /// For each constraint row, the column that is basic in it.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Whether artificial columns may enter the basis.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Index of the first artificial column.
    pub fn artificial_start(&self) -> usize {
        self.artificial_start
    }

    /// Tolerance of all decisions made on this tableau.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Number of constraint rows, `m`.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    fn objective_row_index(&self) -> usize {
        self.nr_rows()
    }

    /// Whether the tableau represents a basic feasible solution in canonical form.
    ///
    /// Roundoff accumulates relative to the magnitude of the entries, so the tolerance is scaled
    /// by the largest absolute value in the tableau. Used in debug assertions.
    pub fn is_in_basic_feasible_solution_state(&self) -> bool {
        let scale = self.matrix.rows()
            .flat_map(|row| row.iter())
            .fold(F::one(), |largest, value| largest.max(value.abs()));
        let tolerance = self.epsilon * scale;

        let nonnegative = (0..self.nr_rows()).all(|i| !self.rhs(i).is_negative_beyond(tolerance));
        let canonical = self.basis.iter().enumerate().all(|(row, &column)| {
            self.relative_cost(column).is_zero_within(tolerance)
                && self.constraint_column(column).enumerate().all(|(i, value)| {
                    let expected = if i == row { F::one() } else { F::zero() };
                    value.is_close_to(expected, tolerance)
                })
        });

        nonnegative && canonical
    }
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = (-self.objective_function_value()).to_string();
        let cost = (0..self.nr_columns())
            .map(|j| self.relative_cost(j).to_string())
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| self.rhs(i).to_string())
            .collect::<Vec<_>>();
        let rows = (0..self.nr_rows())
            .map(|i| (0..self.nr_columns()).map(|j| self.coefficient(i, j).to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = (0..self.nr_columns())
            .map(|j| {
                rows.iter().map(|row| row[j].len())
                    .chain([j.to_string().len(), cost[j].len()])
                    .max()
                    .unwrap_or(1)
            })
            .collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len).chain(["b".len(), objective.len()]).max().unwrap_or(1);

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1
            + column_width.iter().map(|l| 1 + l).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for (i, row) in rows.iter().enumerate() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", row[j], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.basis.iter().copied().enumerate().collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}
