//! # Matrix implementations
//!
//! Problems solved by this crate are small enough to be stored densely. The `DenseMatrix` is used
//! both for the constraint matrix of a problem and for the simplex tableau itself.
use std::slice::Iter;

use crate::data::number_types::traits::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// The number of columns is stored explicitly, such that a matrix without rows still knows its
/// width.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, each of length `nr_columns`.
    /// * `nr_columns`: Width of the matrix, also when there are no rows.
    pub fn new(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(
            data.iter().all(|row| row.len() == nr_columns),
            "Row lengths not equal to {}", nr_columns,
        );

        Self { nr_rows: data.len(), data, nr_columns }
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::new(vec![vec![F::zero(); columns]; rows], columns)
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Change row `i` to the provided `row_values`.
    pub fn set_row(&mut self, i: usize, row_values: Vec<F>) {
        debug_assert!(i < self.nr_rows);
        debug_assert_eq!(row_values.len(), self.nr_columns);

        self.data[i] = row_values;
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let value = self.data[write_row][j] + factor * self.data[read_row][j];
            self.data[write_row][j] = value;
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}
