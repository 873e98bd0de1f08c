//! BLAS-style kernels the matrix type delegates to.
//!
//! Everything here is a stateless free function over row-major `f64`
//! slices with the shape passed alongside. Functions only write the output
//! buffer they are given.
//!
//! - [`gemm`]: `C = alpha * op(A) * op(B) + beta * C`
//! - [`multiply`]: `C += alpha * A * B`, picks the fastest kernel for the CPU
//! - [`transpose`]: out-of-place transpose
//! - [`vector`]: level-1 `scal`, `axpy`, `mul`, `dot`, `sum`, `product`

pub mod naive;
pub mod transpose;
pub mod vector;

pub use transpose::transpose;

use log::trace;

/// Whether a GEMM operand is read as stored or as its transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transpose {
    No,
    Yes,
}

/// General matrix multiply: C = alpha * op(A) * op(B) + beta * C
///
/// op(A) is m×k, op(B) is k×n, C is m×n. A transposed operand is passed in
/// its stored shape (k×m for A, n×k for B). With `beta == 0` the old
/// contents of C are ignored entirely, NaNs included.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
///
/// # Example
///
/// ```
/// use densemat::backend::{gemm, Transpose};
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [5.0, 6.0, 7.0, 8.0];
/// let mut c = [1.0; 4];
///
/// gemm(Transpose::No, Transpose::No, 2, 2, 2, 1.0, &a, &b, 1.0, &mut c);
/// assert_eq!(c, [20.0, 23.0, 44.0, 51.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn gemm(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    b: &[f64],
    beta: f64,
    c: &mut [f64],
) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    if beta == 0.0 {
        c.fill(0.0);
    } else if beta != 1.0 {
        vector::scal(beta, c);
    }
    if alpha == 0.0 || k == 0 {
        return;
    }

    match (trans_a, trans_b) {
        (Transpose::No, Transpose::No) => multiply(alpha, a, b, c, m, n, k),
        _ => {
            trace!("gemm {:?}/{:?} {}x{}x{}: strided scalar", trans_a, trans_b, m, n, k);
            naive::gemm_strided(trans_a, trans_b, m, n, k, alpha, a, b, c);
        }
    }
}

/// Matrix multiply: C += alpha * A * B
///
/// Picks the fastest available kernel for your CPU (AVX2 > scalar).
/// Matrices are row-major: A is m×k, B is k×n, C is m×n.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn multiply(alpha: f64, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);
    if k == 0 {
        return;
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            trace!("multiply {}x{}x{}: avx2 blocked 4x4", m, n, k);
            unsafe { crate::blocked::gemm_4x4::gemm_blocked_4x4(alpha, a, b, c, m, n, k) };
            return;
        }
    }

    trace!("multiply {}x{}x{}: scalar ikj", m, n, k);
    naive::gemm_ikj(alpha, a, b, c, m, n, k);
}
