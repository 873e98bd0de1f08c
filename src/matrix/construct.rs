use super::{Buffer, Matrix, Storage};
use crate::error::{DimensionError, Result};

fn check_dims(rows: usize, columns: usize) -> Result<usize> {
    if rows == 0 || columns == 0 {
        return Err(DimensionError::NonPositive { rows, columns }.into());
    }
    rows.checked_mul(columns)
        .ok_or_else(|| DimensionError::TooLarge { rows, columns }.into())
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(DimensionError::LengthMismatch { expected, got }.into());
    }
    Ok(())
}

impl Matrix<'static> {
    /// A `rows` × `columns` matrix of zeros.
    ///
    /// ```
    /// use densemat::{Matrix, RefMode};
    ///
    /// let m = Matrix::of_size(2, 3)?;
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.count(), 6);
    /// assert_eq!(m.mode(), RefMode::Copied);
    /// assert!(Matrix::of_size(0, 3).is_err());
    /// # Ok::<(), densemat::MatrixError>(())
    /// ```
    pub fn of_size(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, 0.0)
    }

    /// Every cell set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Result<Self> {
        let len = check_dims(rows, columns)?;
        Ok(Matrix::from_parts(rows, columns, Storage::Copied(vec![value; len])))
    }

    /// Off-diagonal cells set to `value`, cell `(i, i)` set to `diagonal[i]`
    /// for `i < min(rows, columns)`.
    ///
    /// `diagonal` must hold at least `min(rows, columns)` values; extra
    /// values are ignored.
    pub fn with_diagonal(rows: usize, columns: usize, diagonal: &[f64], value: f64) -> Result<Self> {
        let len = check_dims(rows, columns)?;
        let diag_len = rows.min(columns);
        if diagonal.len() < diag_len {
            return Err(DimensionError::LengthMismatch { expected: diag_len, got: diagonal.len() }.into());
        }

        let mut data = vec![value; len];
        for (i, &d) in diagonal.iter().take(diag_len).enumerate() {
            data[i * columns + i] = d;
        }
        Ok(Matrix::from_parts(rows, columns, Storage::Copied(data)))
    }

    /// 1.0 on the diagonal, 0.0 elsewhere. Rectangular shapes are allowed.
    pub fn identity(rows: usize, columns: usize) -> Result<Self> {
        let len = check_dims(rows, columns)?;
        let mut data = vec![0.0; len];
        for i in 0..rows.min(columns) {
            data[i * columns + i] = 1.0;
        }
        Ok(Matrix::from_parts(rows, columns, Storage::Copied(data)))
    }

    /// Copies a row-major slice.
    pub fn from_slice(data: &[f64], rows: usize, columns: usize) -> Result<Self> {
        let len = check_dims(rows, columns)?;
        check_len(len, data.len())?;
        Ok(Matrix::from_parts(rows, columns, Storage::Copied(data.to_vec())))
    }

    /// Adopts a row-major vector without copying. The matrix frees it.
    pub fn from_vec(data: Vec<f64>, rows: usize, columns: usize) -> Result<Self> {
        Matrix::from_buffer(Buffer::Owned(data), rows, columns)
    }

    /// Copies any ordered collection of numbers, row-major.
    ///
    /// Items must convert losslessly into `f64` (`f32`, `i8`..`i32`,
    /// `u8`..`u32`). `i64`, `u64` and `usize` don't, so map those with
    /// `as f64` first. At most `rows * columns + 1` items are pulled from the
    /// iterator, so an overlong or endless one fails without draining it.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_sequence([1u8, 2, 3, 4, 5, 6], 3, 2)?;
    /// assert_eq!(m.value_at(2, 1)?, 6.0);
    /// assert!(Matrix::from_sequence(vec![1.0_f32; 5], 2, 3).is_err());
    /// # Ok::<(), densemat::MatrixError>(())
    /// ```
    pub fn from_sequence<I>(values: I, rows: usize, columns: usize) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<f64>,
    {
        let len = check_dims(rows, columns)?;
        let data: Vec<f64> = values.into_iter().take(len.saturating_add(1)).map(Into::into).collect();
        check_len(len, data.len())?;
        Ok(Matrix::from_parts(rows, columns, Storage::Copied(data)))
    }

    /// Deep copy of `other`, whatever its mode.
    pub fn from_matrix(other: &Matrix<'_>) -> Self {
        Matrix::from_parts(other.rows, other.columns, Storage::Copied(other.as_slice().to_vec()))
    }

    // Output buffer for operations that fill every cell themselves.
    pub(crate) fn zeroed(rows: usize, columns: usize) -> Self {
        Matrix::from_parts(rows, columns, Storage::Copied(vec![0.0; rows * columns]))
    }
}

impl<'a> Matrix<'a> {
    /// Builds a matrix over `buffer`, taking it the way its tag says.
    ///
    /// ```
    /// use densemat::{Buffer, Matrix, RefMode};
    ///
    /// let mut data = [1.0, 2.0, 3.0, 4.0];
    /// {
    ///     let mut m = Matrix::from_buffer(Buffer::Borrowed(&mut data), 2, 2)?;
    ///     assert_eq!(m.mode(), RefMode::Borrowed);
    ///     m.negate();
    /// }
    /// assert_eq!(data, [-1.0, -2.0, -3.0, -4.0]);
    /// # Ok::<(), densemat::MatrixError>(())
    /// ```
    pub fn from_buffer(buffer: Buffer<'a>, rows: usize, columns: usize) -> Result<Self> {
        let len = check_dims(rows, columns)?;
        let storage = match buffer {
            Buffer::Borrowed(data) => {
                check_len(len, data.len())?;
                Storage::Borrowed(data)
            }
            Buffer::Owned(data) => {
                check_len(len, data.len())?;
                Storage::Owned(data)
            }
            Buffer::Copied(data) => {
                check_len(len, data.len())?;
                Storage::Copied(data.to_vec())
            }
        };
        Ok(Matrix::from_parts(rows, columns, storage))
    }

    /// References `data` in place. The matrix never frees it and can't
    /// outlive it.
    pub fn borrowing(data: &'a mut [f64], rows: usize, columns: usize) -> Result<Self> {
        Matrix::from_buffer(Buffer::Borrowed(data), rows, columns)
    }
}
