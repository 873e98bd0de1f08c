use std::ops::{Index, IndexMut};

use super::{Matrix, Storage};
use crate::backend::vector;
use crate::error::{DimensionError, MatrixError, Result};

impl<'a> Matrix<'a> {
    /// Fails with [`MatrixError::Index`] unless `row < rows` and `column < columns`.
    pub fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::Index {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Fails with a dimension error unless the matrix is square.
    pub fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(DimensionError::NotSquare { rows: self.rows, columns: self.columns }.into());
        }
        Ok(())
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn value_at(&self, row: usize, column: usize) -> Result<f64> {
        self.check_bounds(row, column)?;
        Ok(self.as_slice()[row * self.columns + column])
    }

    pub fn set_value(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_bounds(row, column)?;
        let columns = self.columns;
        self.as_mut_slice()[row * columns + column] = value;
        Ok(())
    }

    /// Independent snapshot of the buffer.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// The cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }

    /// A `min(rows, columns)` × 1 column vector holding cells `(i, i)`.
    ///
    /// This is rebuilt on every call; keep the result if you need it more
    /// than once.
    pub fn diagonal(&self) -> Matrix<'static> {
        let n = self.rows.min(self.columns);
        let data = self.as_slice();
        let diag: Vec<f64> = (0..n).map(|i| data[i * self.columns + i]).collect();
        Matrix::from_parts(n, 1, Storage::Copied(diag))
    }

    /// `rows * columns`
    pub fn count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn sum(&self) -> f64 {
        vector::sum(self.as_slice())
    }

    pub fn product(&self) -> f64 {
        vector::product(self.as_slice())
    }
}

/// `m[(row, column)]`, panicking when out of bounds like slice indexing.
/// Use [`Matrix::value_at`] for the checked form.
impl Index<(usize, usize)> for Matrix<'_> {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.as_slice()[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix<'_> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        let columns = self.columns;
        &mut self.as_mut_slice()[row * columns + column]
    }
}

impl<'a> From<Matrix<'a>> for Vec<f64> {
    fn from(m: Matrix<'a>) -> Self {
        m.into_vec()
    }
}
