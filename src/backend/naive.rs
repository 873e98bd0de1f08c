//! Scalar GEMM loops.
//!
//! All loops run in i-k-j order so the innermost loop walks C (and B, when it
//! is not transposed) with stride 1. These are the reference results the
//! SIMD path is checked against.

use std::ops::Range;

use super::Transpose;

/// C += alpha * A * B, all row-major, no transposes.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k)
/// * `b` - Matrix B (k × n)
/// * `c` - Matrix C (m × n), accumulated into
pub fn gemm_ikj(alpha: f64, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    gemm_ikj_region(alpha, a, b, c, 0..m, 0..n, n, k);
}

/// Same as [`gemm_ikj`] restricted to a rectangle of C.
///
/// The blocked SIMD path uses this for the rows and columns that don't fill
/// a whole tile.
#[allow(clippy::too_many_arguments)]
pub(crate) fn gemm_ikj_region(
    alpha: f64,
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    rows: Range<usize>,
    cols: Range<usize>,
    n: usize,
    k: usize,
) {
    for i in rows {
        for p in 0..k {
            let aip = alpha * a[i * k + p];
            for j in cols.clone() {
                c[i * n + j] += aip * b[p * n + j];
            }
        }
    }
}

/// C += alpha * op(A) * op(B) without materializing either transpose.
///
/// op(A) is m × k and op(B) is k × n. A transposed operand is read in its
/// stored shape (k × m for A, n × k for B) through swapped strides.
#[allow(clippy::too_many_arguments)]
pub fn gemm_strided(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
) {
    // (row stride, column stride) of op(A) and op(B) inside their buffers
    let (a_rs, a_cs) = match trans_a {
        Transpose::No => (k, 1),
        Transpose::Yes => (1, m),
    };
    let (b_rs, b_cs) = match trans_b {
        Transpose::No => (n, 1),
        Transpose::Yes => (1, k),
    };

    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let aip = alpha * a[i * a_rs + p * a_cs];
            let b_base = p * b_rs;
            for (j, cij) in c_row.iter_mut().enumerate() {
                *cij += aip * b[b_base + j * b_cs];
            }
        }
    }
}
