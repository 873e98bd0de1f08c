//! SIMD microkernels for the inner loop of matrix multiplication.
//!
//! These kernels compute small tiles of C += alpha * A × B using AVX2
//! intrinsics. They're called by the blocked GEMM after packing the input
//! matrices into cache-friendly layouts.
//!
//! Available kernels:
//! - `kernel_4x4`: 4×4 tile, AVX2 + FMA (4 accumulator registers)

pub mod kernel_4x4;
