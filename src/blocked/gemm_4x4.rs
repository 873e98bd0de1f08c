//! 4×4 blocked GEMM using AVX2.

use crate::backend::naive::gemm_ikj_region;
use crate::kernels::kernel_4x4::kernel_4x4_avx2;

/// L1 blocking along k: keeps a B panel (4 × KC) hot.
const KC: usize = 256;
/// L2 blocking along m: a packed A panel (MC × KC) is reused across all columns.
const MC: usize = 128;

/// Cache-blocked C += alpha * A * B using the 4×4 AVX2 kernel.
///
/// Packs A and B for sequential access and calls the microkernel for each
/// full 4×4 tile. Rows and columns that don't fill a tile go through the
/// scalar loop.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA
/// - `a`, `b`, `c` are m×k, k×n, m×n row-major
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
#[allow(clippy::too_many_arguments)]
pub unsafe fn gemm_blocked_4x4(
    alpha: f64,
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
) {
    // Only complete 4×4 tiles go through the kernel
    let m_main = (m / 4) * 4;
    let n_main = (n / 4) * 4;

    if m_main > 0 && n_main > 0 && k > 0 {
        let kc = k.min(KC);
        let mc = m_main.min(MC);

        let mut a_panel = vec![0.0; mc * kc];
        let mut b_panel = vec![0.0; 4 * kc];

        for kk in (0..k).step_by(kc) {
            let k_block = (kk + kc).min(k) - kk;

            for ii in (0..m_main).step_by(mc) {
                let m_block = (ii + mc).min(m_main) - ii;
                pack_a(a, &mut a_panel, ii, kk, m_block, k_block, k);

                for j in (0..n_main).step_by(4) {
                    pack_b(b, &mut b_panel, j, kk, k_block, n);

                    for i in (0..m_block).step_by(4) {
                        kernel_4x4_avx2(
                            alpha,
                            a_panel.as_ptr().add(i * k_block),
                            b_panel.as_ptr(),
                            c.as_mut_ptr().add((ii + i) * n + j),
                            k_block,
                            n,
                        );
                    }
                }
            }
        }
    }

    // Bottom strip: leftover rows across every column
    if m_main < m {
        gemm_ikj_region(alpha, a, b, c, m_main..m, 0..n, n, k);
    }
    // Right strip: leftover columns of the tiled rows
    if n_main < n {
        gemm_ikj_region(alpha, a, b, c, 0..m_main, n_main..n, n, k);
    }
}

// Packs rows [i_start, i_start + m_block) × cols [k_start, k_start + k_block) of A.
// Each group of 4 rows becomes k_block runs of 4 values, one run per k,
// which is the order the kernel broadcasts them in.
#[allow(clippy::identity_op)]
fn pack_a(
    a: &[f64],
    a_panel: &mut [f64],
    i_start: usize,
    k_start: usize,
    m_block: usize,
    k_block: usize,
    k_total: usize,
) {
    for i_offset in (0..m_block).step_by(4) {
        let base_row = i_start + i_offset;
        for p in 0..k_block {
            let k_idx = k_start + p;
            let out = i_offset * k_block + p * 4;
            for r in 0..4 {
                a_panel[out + r] = a[(base_row + r) * k_total + k_idx];
            }
        }
    }
}

// Packs the 4 columns starting at j_start for k in [k_start, k_start + k_block).
// B is row-major so each run of 4 is already contiguous in the source.
fn pack_b(
    b: &[f64],
    b_panel: &mut [f64],
    j_start: usize,
    k_start: usize,
    k_block: usize,
    n: usize,
) {
    for p in 0..k_block {
        let src = (k_start + p) * n + j_start;
        b_panel[p * 4..p * 4 + 4].copy_from_slice(&b[src..src + 4]);
    }
}
