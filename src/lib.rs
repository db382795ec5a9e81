//! SGEMM benchmarking and validation, built from scratch.
//!
//! I wrote this to measure how far plain loop ordering and cache tiling
//! get you toward BLAS on single-precision GEMM (C = alpha·A·B + beta·C).
//! Each kernel variant changes only the memory access pattern; the harness
//! times them on identical random inputs and rejects any output that
//! drifts from the trusted reference.
//!
//! ## Usage
//!
//! ```
//! use sgemm_bench::rng::Randn;
//! use sgemm_bench::{Kernel, Matrix};
//!
//! let mut rng = Randn::with_seed(42);
//! let a = Matrix::randn(64, 48, &mut rng);
//! let b = Matrix::randn(48, 32, &mut rng);
//! let mut c = Matrix::zeros(64, 32);
//!
//! Kernel::Tiled.run(a.as_slice(), b.as_slice(), c.as_mut_slice(), 64, 32, 48, 1.0, 0.0);
//! ```
//!
//! Or drive a full benchmark run from the binary:
//!
//! ```text
//! sgemm-bench -i 2 -m 2048 -n 2048 -k 2048
//! ```
//!
//! ## What's inside
//!
//! - `naive`: i-j-k triple loop, the throughput floor
//! - `loop_reorder`: i-k-j order for contiguous B and C access
//! - `tiled`: column-tiled i-k-j to keep a panel of B cache-resident
//! - `reference`: `matrixmultiply`-backed oracle every kernel is checked
//!   against
//! - a harness that times kernels on seeded Gaussian inputs and reports
//!   GFLOP/s per trial plus the mean

pub mod check;
pub mod config;
pub mod kernels;
pub mod matrix;
pub mod rng;
pub mod runner;

pub use kernels::{Kernel, SgemmFn, UnknownKernel};
pub use matrix::Matrix;
