//! The dense matrix type.
//!
//! Storage is a flat row-major `f64` buffer: cell `(i, j)` lives at
//! `i * columns + j`. Every constructor, kernel call and codec uses this
//! layout.

mod access;
pub mod codec;
mod construct;
mod ops;

use std::fmt;

/// Who releases a matrix's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefMode {
    /// The caller's buffer is referenced and never freed by the matrix.
    Borrowed,
    /// A caller-allocated buffer was handed over and is freed with the matrix.
    Owned,
    /// The matrix allocated its own buffer.
    Copied,
}

/// A buffer handed to [`Matrix::from_buffer`], tagged with how it is taken.
#[derive(Debug)]
pub enum Buffer<'a> {
    /// Reference the slice in place. Writes through the matrix land in it.
    Borrowed(&'a mut [f64]),
    /// Adopt the vector without copying.
    Owned(Vec<f64>),
    /// Copy the slice into a fresh allocation.
    Copied(&'a [f64]),
}

#[derive(Debug)]
enum Storage<'a> {
    Borrowed(&'a mut [f64]),
    Owned(Vec<f64>),
    Copied(Vec<f64>),
}

/// A fixed-size, dense, row-major matrix of `f64`.
///
/// Dimensions are set at construction and never change. The lifetime `'a`
/// only matters for [`RefMode::Borrowed`] matrices, which can't outlive the
/// slice they were built over; everything an operation allocates is
/// `Matrix<'static>`.
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2)?;
/// let b = Matrix::identity(2, 2)?;
/// assert_eq!(a.by_multiplying_right(&b)?, a);
/// assert_eq!(a.value_at(1, 0)?, 3.0);
/// # Ok::<(), densemat::MatrixError>(())
/// ```
#[derive(Debug)]
pub struct Matrix<'a> {
    rows: usize,
    columns: usize,
    storage: Storage<'a>,
}

impl<'a> Matrix<'a> {
    // Callers have already checked `data.len() == rows * columns`.
    fn from_parts(rows: usize, columns: usize, storage: Storage<'a>) -> Self {
        let m = Matrix { rows, columns, storage };
        debug_assert_eq!(m.as_slice().len(), rows * columns);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn mode(&self) -> RefMode {
        match self.storage {
            Storage::Borrowed(_) => RefMode::Borrowed,
            Storage::Owned(_) => RefMode::Owned,
            Storage::Copied(_) => RefMode::Copied,
        }
    }

    /// The live buffer, row-major, no copy.
    pub fn as_slice(&self) -> &[f64] {
        match &self.storage {
            Storage::Borrowed(data) => &data[..],
            Storage::Owned(data) | Storage::Copied(data) => &data[..],
        }
    }

    /// The live buffer, mutably. For a borrowed matrix this is the caller's slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        match &mut self.storage {
            Storage::Borrowed(data) => &mut data[..],
            Storage::Owned(data) | Storage::Copied(data) => &mut data[..],
        }
    }

    /// Gives the buffer up. Owned and copied buffers move out as-is; a
    /// borrowed buffer is copied, since it was never ours.
    pub fn into_vec(self) -> Vec<f64> {
        match self.storage {
            Storage::Borrowed(data) => data.to_vec(),
            Storage::Owned(data) | Storage::Copied(data) => data,
        }
    }
}

impl Clone for Matrix<'_> {
    /// Deep copy into a fresh `Copied` buffer, whatever the source mode.
    fn clone(&self) -> Self {
        Matrix::from_parts(self.rows, self.columns, Storage::Copied(self.as_slice().to_vec()))
    }
}

/// Exact equality of shape and every cell. The ownership mode is ignored.
impl PartialEq<Matrix<'_>> for Matrix<'_> {
    fn eq(&self, other: &Matrix<'_>) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl fmt::Display for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix", self.rows, self.columns)?;
        for row in self.as_slice().chunks(self.columns) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
