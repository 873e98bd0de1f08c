//! Cache-blocked GEMM.
//!
//! Breaks the multiplication into panels that fit in L1/L2 cache, packs
//! them for sequential access, then calls the SIMD microkernel for the
//! inner computation.
//!
//! Available implementations:
//! - `gemm_4x4`: Uses the 4×4 AVX2 kernel

pub mod gemm_4x4;
