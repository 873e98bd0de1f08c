//! Arithmetic on [`Matrix`].
//!
//! `by_*` methods leave their operands alone and return a fresh `Copied`
//! matrix. The bare-verb methods (`add`, `subtract`, `multiply_scalar`,
//! `negate`, `element_wise_multiply`) write into the receiver's buffer. Shape
//! checks always run first, so a failed call never leaves a half-written
//! result behind.

use std::ops::{Mul, MulAssign, Neg};

use super::Matrix;
use crate::backend::{self, vector, Transpose};
use crate::error::{DimensionError, Result};

impl<'a> Matrix<'a> {
    fn check_same_shape(&self, op: &'static str, other: &Matrix<'_>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(DimensionError::Mismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }
        Ok(())
    }

    // ── Additive ───────────────────────────────────────────────────

    pub fn by_adding(&self, addend: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.check_same_shape("add", addend)?;
        let mut out = Matrix::from_matrix(self);
        vector::axpy(1.0, addend.as_slice(), out.as_mut_slice());
        Ok(out)
    }

    pub fn by_subtracting(&self, subtrahend: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.check_same_shape("subtract", subtrahend)?;
        let mut out = Matrix::from_matrix(self);
        vector::axpy(-1.0, subtrahend.as_slice(), out.as_mut_slice());
        Ok(out)
    }

    pub fn add(&mut self, addend: &Matrix<'_>) -> Result<()> {
        self.check_same_shape("add", addend)?;
        vector::axpy(1.0, addend.as_slice(), self.as_mut_slice());
        Ok(())
    }

    pub fn subtract(&mut self, subtrahend: &Matrix<'_>) -> Result<()> {
        self.check_same_shape("subtract", subtrahend)?;
        vector::axpy(-1.0, subtrahend.as_slice(), self.as_mut_slice());
        Ok(())
    }

    // ── Matrix products ────────────────────────────────────────────

    /// `self · rhs`
    pub fn by_multiplying_right(&self, rhs: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.by_multiplying_right_with(rhs, false, None, 1.0)
    }

    /// `(self · rhs)ᵗ`
    pub fn by_multiplying_right_transposing(&self, rhs: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.by_multiplying_right_with(rhs, true, None, 1.0)
    }

    /// `self · rhs + addend`
    pub fn by_multiplying_right_and_adding(
        &self,
        rhs: &Matrix<'_>,
        addend: &Matrix<'_>,
    ) -> Result<Matrix<'static>> {
        self.by_multiplying_right_with(rhs, false, Some(addend), 1.0)
    }

    /// `factor · (self · rhs)`
    pub fn by_multiplying_right_with_factor(&self, rhs: &Matrix<'_>, factor: f64) -> Result<Matrix<'static>> {
        self.by_multiplying_right_with(rhs, false, None, factor)
    }

    /// `factor · op(self · rhs) + addend`, where `op` transposes when
    /// `transpose` is set.
    ///
    /// Needs `self.columns() == rhs.rows()`. The result is
    /// `self.rows() × rhs.columns()`, or the reverse when transposed, and
    /// `addend` must have that same shape. Transposition is folded into the
    /// kernel call; nothing is transposed in memory.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    /// let b = Matrix::from_slice(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2)?;
    /// let c = Matrix::filled(2, 2, 1.0)?;
    ///
    /// let r = a.by_multiplying_right_with(&b, true, Some(&c), 2.0)?;
    /// assert_eq!(r.to_vec(), [117.0, 279.0, 129.0, 309.0]);
    /// # Ok::<(), densemat::MatrixError>(())
    /// ```
    pub fn by_multiplying_right_with(
        &self,
        rhs: &Matrix<'_>,
        transpose: bool,
        addend: Option<&Matrix<'_>>,
        factor: f64,
    ) -> Result<Matrix<'static>> {
        if self.columns != rhs.rows {
            return Err(DimensionError::Mismatch {
                op: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            }
            .into());
        }
        let (m, n) = if transpose {
            (rhs.columns, self.rows)
        } else {
            (self.rows, rhs.columns)
        };
        if let Some(c) = addend {
            if c.shape() != (m, n) {
                return Err(DimensionError::Mismatch {
                    op: "multiply-add",
                    left: (m, n),
                    right: c.shape(),
                }
                .into());
            }
        }

        let (mut out, beta) = match addend {
            Some(c) => (Matrix::from_matrix(c), 1.0),
            None => (Matrix::zeroed(m, n), 0.0),
        };
        let k = self.columns;
        if transpose {
            // (A·B)ᵗ = Bᵗ·Aᵗ
            backend::gemm(
                Transpose::Yes,
                Transpose::Yes,
                m,
                n,
                k,
                factor,
                rhs.as_slice(),
                self.as_slice(),
                beta,
                out.as_mut_slice(),
            );
        } else {
            backend::gemm(
                Transpose::No,
                Transpose::No,
                m,
                n,
                k,
                factor,
                self.as_slice(),
                rhs.as_slice(),
                beta,
                out.as_mut_slice(),
            );
        }
        Ok(out)
    }

    /// `selfᵗ · rhs`. Needs `self.rows() == rhs.rows()`.
    pub fn by_transposing_and_multiplying_right(&self, rhs: &Matrix<'_>) -> Result<Matrix<'static>> {
        if self.rows != rhs.rows {
            return Err(DimensionError::Mismatch {
                op: "transpose-multiply",
                left: (self.columns, self.rows),
                right: rhs.shape(),
            }
            .into());
        }
        let (m, n, k) = (self.columns, rhs.columns, self.rows);
        let mut out = Matrix::zeroed(m, n);
        backend::gemm(
            Transpose::Yes,
            Transpose::No,
            m,
            n,
            k,
            1.0,
            self.as_slice(),
            rhs.as_slice(),
            0.0,
            out.as_mut_slice(),
        );
        Ok(out)
    }

    /// `lhs · selfᵗ`. Needs `lhs.columns() == self.columns()`.
    pub fn by_transposing_and_multiplying_left(&self, lhs: &Matrix<'_>) -> Result<Matrix<'static>> {
        if lhs.columns != self.columns {
            return Err(DimensionError::Mismatch {
                op: "multiply-transpose",
                left: lhs.shape(),
                right: (self.columns, self.rows),
            }
            .into());
        }
        let (m, n, k) = (lhs.rows, self.rows, self.columns);
        let mut out = Matrix::zeroed(m, n);
        backend::gemm(
            Transpose::No,
            Transpose::Yes,
            m,
            n,
            k,
            1.0,
            lhs.as_slice(),
            self.as_slice(),
            0.0,
            out.as_mut_slice(),
        );
        Ok(out)
    }

    // ── Scalar ─────────────────────────────────────────────────────

    pub fn by_multiplying_scalar(&self, factor: f64) -> Matrix<'static> {
        let mut out = Matrix::from_matrix(self);
        vector::scal(factor, out.as_mut_slice());
        out
    }

    /// `factor · self + addend`
    pub fn by_multiplying_scalar_and_adding(&self, factor: f64, addend: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.check_same_shape("scale-add", addend)?;
        let mut out = Matrix::from_matrix(addend);
        vector::axpy(factor, self.as_slice(), out.as_mut_slice());
        Ok(out)
    }

    pub fn multiply_scalar(&mut self, factor: f64) {
        vector::scal(factor, self.as_mut_slice());
    }

    pub fn by_negating(&self) -> Matrix<'static> {
        self.by_multiplying_scalar(-1.0)
    }

    pub fn negate(&mut self) {
        self.multiply_scalar(-1.0);
    }

    // ── Shape and elementwise ──────────────────────────────────────

    pub fn by_transposing(&self) -> Matrix<'static> {
        let mut out = Matrix::zeroed(self.columns, self.rows);
        backend::transpose(self.as_slice(), out.as_mut_slice(), self.rows, self.columns);
        out
    }

    pub fn by_element_wise_multiplying(&self, other: &Matrix<'_>) -> Result<Matrix<'static>> {
        self.check_same_shape("element-wise multiply", other)?;
        let mut out = Matrix::from_matrix(self);
        vector::mul(other.as_slice(), out.as_mut_slice());
        Ok(out)
    }

    pub fn element_wise_multiply(&mut self, other: &Matrix<'_>) -> Result<()> {
        self.check_same_shape("element-wise multiply", other)?;
        vector::mul(other.as_slice(), self.as_mut_slice());
        Ok(())
    }

    // ── Reductions ─────────────────────────────────────────────────

    /// Sum of the diagonal. Square matrices only.
    pub fn trace(&self) -> Result<f64> {
        self.check_square()?;
        let data = self.as_slice();
        Ok((0..self.rows).fold(0.0, |acc, i| acc + data[i * self.columns + i]))
    }

    /// Sum of the elementwise product with `other`.
    pub fn dot_with(&self, other: &Matrix<'_>) -> Result<f64> {
        self.check_same_shape("dot", other)?;
        Ok(vector::dot(self.as_slice(), other.as_slice()))
    }

    /// A copy min-max rescaled into `[0, 1]`. Vectors only (one row or one
    /// column). If every value is the same, every value maps to 0.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let v = Matrix::from_slice(&[2.0, 4.0, 3.0], 1, 3)?;
    /// assert_eq!(v.by_unitizing()?.to_vec(), [0.0, 1.0, 0.5]);
    /// assert!(Matrix::of_size(2, 2)?.by_unitizing().is_err());
    /// # Ok::<(), densemat::MatrixError>(())
    /// ```
    pub fn by_unitizing(&self) -> Result<Matrix<'static>> {
        if self.rows != 1 && self.columns != 1 {
            return Err(DimensionError::NotVector { rows: self.rows, columns: self.columns }.into());
        }
        let (min, max) = self
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        // Halved so a span wider than f64::MAX stays finite
        let half_min = min / 2.0;
        let range = max / 2.0 - half_min;

        let mut out = Matrix::from_matrix(self);
        for v in out.as_mut_slice() {
            *v = if range == 0.0 { 0.0 } else { (*v / 2.0 - half_min) / range };
        }
        Ok(out)
    }

    // ── Comparison ─────────────────────────────────────────────────

    /// True when shapes match and every pair of cells agrees after rounding
    /// to `decimals` decimal places. Differing shapes give `false`.
    ///
    /// Where scaling by `10^decimals` leaves the finite range, the cell has no
    /// digits past `decimals` left to round, and the pair is compared exactly.
    pub fn is_equal(&self, other: &Matrix<'_>, decimals: i32) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        let scale = 10f64.powi(decimals);
        self.iter().zip(other.iter()).all(|(a, b)| {
            let (sa, sb) = (a * scale, b * scale);
            if scale.is_finite() && sa.is_finite() && sb.is_finite() {
                sa.round() == sb.round()
            } else {
                a == b
            }
        })
    }
}

impl Neg for &Matrix<'_> {
    type Output = Matrix<'static>;

    fn neg(self) -> Matrix<'static> {
        self.by_negating()
    }
}

impl Mul<f64> for &Matrix<'_> {
    type Output = Matrix<'static>;

    fn mul(self, factor: f64) -> Matrix<'static> {
        self.by_multiplying_scalar(factor)
    }
}

impl MulAssign<f64> for Matrix<'_> {
    fn mul_assign(&mut self, factor: f64) {
        self.multiply_scalar(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(data: &[f64], rows: usize, columns: usize) -> Matrix<'static> {
        Matrix::from_slice(data, rows, columns).unwrap()
    }

    #[test]
    fn failed_in_place_add_leaves_receiver_alone() {
        let mut a = m(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = m(&[1.0, 2.0, 3.0, 4.0], 1, 4);
        assert!(a.add(&b).unwrap_err().is_dimension());
        assert_eq!(a.to_vec(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn multiply_add_rejects_addend_of_wrong_shape() {
        let a = m(&[1.0; 6], 2, 3);
        let b = m(&[1.0; 6], 3, 2);
        let c = m(&[1.0; 6], 2, 3);
        assert!(a.by_multiplying_right_and_adding(&b, &c).unwrap_err().is_dimension());
    }

    #[test]
    fn transposed_products_match_explicit_transpose() {
        let a = m(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let b = m(&[1.0, -1.0, 2.0, 0.5, 3.0, 7.0], 3, 2);

        let left = a.by_transposing_and_multiplying_right(&b).unwrap();
        let expected = a.by_transposing().by_multiplying_right(&b).unwrap();
        assert_eq!(left, expected);

        let right = a.by_transposing_and_multiplying_left(&b).unwrap();
        let expected = b.by_multiplying_right(&a.by_transposing()).unwrap();
        assert_eq!(right, expected);
    }

    #[test]
    fn unitize_constant_vector_maps_to_zero() {
        let v = m(&[3.0, 3.0, 3.0], 3, 1);
        assert_eq!(v.by_unitizing().unwrap().to_vec(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn operators_delegate() {
        let mut a = m(&[1.0, -2.0], 1, 2);
        assert_eq!((-&a).to_vec(), [-1.0, 2.0]);
        assert_eq!((&a * 3.0).to_vec(), [3.0, -6.0]);
        a *= 0.5;
        assert_eq!(a.to_vec(), [0.5, -1.0]);
    }
}
