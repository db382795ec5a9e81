//! Benchmark harness.
//!
//! Drives one kernel through repeated timed trials: generate random
//! inputs, time the kernel call alone, recompute with the reference
//! kernel, validate element-wise, and aggregate GFLOP/s. The first
//! validation failure aborts the run; remaining trials never execute.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::check::{self, Mismatch};
use crate::config::BenchConfig;
use crate::kernels::Kernel;
use crate::kernels::reference::sgemm_reference;
use crate::matrix::Matrix;
use crate::rng::Randn;

/// One timed sample: wall time of the kernel call and the derived
/// throughput. Produced per trial and folded into the mean immediately.
#[derive(Debug, Clone, Copy)]
pub struct Trial {
    pub elapsed: Duration,
    pub gflops: f64,
}

/// Final aggregate of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub samples: usize,
    pub mean_gflops: f64,
}

/// A kernel output diverged from the reference beyond tolerance. Fatal:
/// the kernel under test is presumed buggy, so nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("trial {trial}: {mismatch}")]
pub struct RunError {
    pub trial: usize,
    pub mismatch: Mismatch,
}

/// FLOPs in one alpha*A*B + beta*C evaluation: 2*m*n*k multiply-add pairs
/// in the product, plus the alpha scale, the beta scale, and the final
/// addition on each of the m*n outputs.
pub fn flops(m: usize, n: usize, k: usize) -> f64 {
    2.0 * m as f64 * n as f64 * k as f64 + 3.0 * m as f64 * n as f64
}

/// Benchmark a registered kernel.
///
/// Prints one line per trial and a mean line at the end; returns the
/// aggregate, or the first validation failure.
pub fn run(
    kernel: Kernel,
    m: usize,
    n: usize,
    k: usize,
    cfg: &BenchConfig,
) -> Result<Summary, RunError> {
    run_kernel_fn(kernel.func(), m, n, k, cfg)
}

/// Benchmark any function with the kernel signature.
///
/// The generic bound (rather than taking [`Kernel`]) lets tests drive the
/// harness with a deliberately corrupted kernel and observe the exact
/// failure it reports.
///
/// # Panics
///
/// Panics if `cfg.samples` is zero or any dimension is zero.
pub fn run_kernel_fn<F>(
    f: F,
    m: usize,
    n: usize,
    k: usize,
    cfg: &BenchConfig,
) -> Result<Summary, RunError>
where
    F: Fn(&[f32], &[f32], &mut [f32], usize, usize, usize, f32, f32),
{
    assert!(cfg.samples > 0, "sample count must be positive");
    assert!(m > 0 && n > 0 && k > 0, "degenerate problem {}x{}x{}", m, n, k);

    // Seeded once per run, not per trial: the whole sequence of inputs is
    // deterministic, so separate processes benchmarking different kernels
    // see bit-identical matrices.
    let mut rng = Randn::with_seed(cfg.seed);
    let mut total_gflops = 0.0;

    for trial in 0..cfg.samples {
        let a = Matrix::randn(m, k, &mut rng);
        let b = Matrix::randn(k, n, &mut rng);
        let mut c = Matrix::zeros(m, n);

        let start = Instant::now();
        f(
            a.as_slice(),
            b.as_slice(),
            c.as_mut_slice(),
            m,
            n,
            k,
            cfg.alpha,
            cfg.beta,
        );
        let elapsed = start.elapsed();

        let sample = Trial {
            elapsed,
            gflops: flops(m, n, k) * 1e-9 / elapsed.as_secs_f64(),
        };
        println!("{:3}: GFLOP/s {:.2}", trial, sample.gflops);
        total_gflops += sample.gflops;

        // Same inputs, fresh zeroed output, trusted kernel.
        let mut expected = Matrix::zeros(m, n);
        sgemm_reference(
            a.as_slice(),
            b.as_slice(),
            expected.as_mut_slice(),
            m,
            n,
            k,
            cfg.alpha,
            cfg.beta,
        );

        check::check_close(expected.as_slice(), c.as_slice(), cfg.eps)
            .map_err(|mismatch| RunError { trial, mismatch })?;
    }

    let summary = Summary {
        samples: cfg.samples,
        mean_gflops: total_gflops / cfg.samples as f64,
    };
    println!("---");
    println!("Mean GFLOP/s {:.2}", summary.mean_gflops);

    Ok(summary)
}
