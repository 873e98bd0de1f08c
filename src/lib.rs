//! Dense, fixed-size `f64` matrices for numeric code that doesn't want to
//! manage raw buffers itself.
//!
//! A [`Matrix`] owns, adopts or borrows one contiguous row-major buffer
//! (see [`RefMode`]). On top of it sit bounds-checked access, reductions and
//! the arithmetic set, mostly in pairs: `by_adding` returns a new matrix,
//! `add` writes into the receiver. Bulk work goes to the BLAS-style kernels
//! in [`backend`], which use an AVX2/FMA blocked GEMM when the CPU has it.
//!
//! ## Usage
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::with_diagonal(2, 2, &[1.0, 4.0], 0.0)?;
//! assert_eq!(a.trace()?, 5.0);
//!
//! let mut b = a.by_multiplying_right(&Matrix::identity(2, 2)?)?;
//! b.add(&a)?;
//! assert_eq!(b.to_vec(), [2.0, 0.0, 0.0, 8.0]);
//! # Ok::<(), densemat::MatrixError>(())
//! ```
//!
//! Borrowing a caller's buffer writes straight through to it:
//!
//! ```
//! use densemat::Matrix;
//!
//! let mut raw = vec![1.0, 2.0, 3.0];
//! Matrix::borrowing(&mut raw, 1, 3)?.multiply_scalar(2.0);
//! assert_eq!(raw, [2.0, 4.0, 6.0]);
//! # Ok::<(), densemat::MatrixError>(())
//! ```
//!
//! ## What's inside
//!
//! - Borrowed / owned / copied storage with lifetimes doing the bookkeeping
//! - Allocating and in-place arithmetic with validate-then-write semantics
//! - GEMM with transposes folded into the kernel (no transposed copies)
//! - 4×4 AVX2 kernel behind the `simd` feature, scalar fallback otherwise
//! - serde support via a `(rows, columns, data)` wire shape

pub mod backend;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod blocked;
pub mod error;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod kernels;
pub mod matrix;

pub use error::{DimensionError, FormatError, MatrixError, Result};
pub use matrix::{Buffer, Matrix, RefMode};
