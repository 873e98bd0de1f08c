//! 4×4 AVX2 microkernel for matrix multiplication.

/// Computes a 4×4 tile: C[0:4, 0:4] += alpha * (A_packed × B_packed)
///
/// This is the inner kernel called by the blocked GEMM. The products are
/// summed in 4 zeroed AVX2 registers (one per row of C), then scaled by
/// `alpha` and folded into C with a single FMA per row on the way out.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA
/// - `a_pack` points to `k * 4` contiguous f64 values (packed A panel)
/// - `b_pack` points to `k * 4` contiguous f64 values (packed B panel)
/// - `c.add(row * ldc)` is valid for row in 0..4, each allowing read/write of 4 f64s
#[target_feature(enable = "avx2,fma")]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn kernel_4x4_avx2(
    alpha: f64,
    a_pack: *const f64,
    b_pack: *const f64,
    c: *mut f64,
    k: usize,
    ldc: usize,
) {
    use std::arch::x86_64::*;

    let mut acc0 = _mm256_setzero_pd();
    let mut acc1 = _mm256_setzero_pd();
    let mut acc2 = _mm256_setzero_pd();
    let mut acc3 = _mm256_setzero_pd();

    for p in 0..k {
        let b_vec = _mm256_loadu_pd(b_pack.add(p * 4));

        let a0 = _mm256_broadcast_sd(&*a_pack.add(p * 4 + 0));
        let a1 = _mm256_broadcast_sd(&*a_pack.add(p * 4 + 1));
        let a2 = _mm256_broadcast_sd(&*a_pack.add(p * 4 + 2));
        let a3 = _mm256_broadcast_sd(&*a_pack.add(p * 4 + 3));

        acc0 = _mm256_fmadd_pd(a0, b_vec, acc0);
        acc1 = _mm256_fmadd_pd(a1, b_vec, acc1);
        acc2 = _mm256_fmadd_pd(a2, b_vec, acc2);
        acc3 = _mm256_fmadd_pd(a3, b_vec, acc3);
    }

    let scale = _mm256_set1_pd(alpha);
    let rows = [acc0, acc1, acc2, acc3];
    for (r, acc) in rows.into_iter().enumerate() {
        let dst = c.add(r * ldc);
        _mm256_storeu_pd(dst, _mm256_fmadd_pd(scale, acc, _mm256_loadu_pd(dst)));
    }
}
