//! Tunable constants for the benchmark harness.
//!
//! These are compile-time knobs, not runtime flags. The CLI only chooses
//! the kernel and the problem shape; everything else that affects a run
//! lives here so two runs of the same binary are comparable.

/// Number of timed trials per run. The reported figure is the arithmetic
/// mean of GFLOP/s over this many samples.
pub const SAMPLE_SIZE: usize = 50;

/// Seed for the Gaussian input generator. Seeded once per run, not per
/// trial, so the whole trial sequence is reproducible and two kernels
/// benchmarked in separate processes see bit-identical inputs.
pub const SEED: u64 = 420;

/// Absolute tolerance for the element-wise correctness check.
///
/// A single absolute epsilon is not scale-invariant: accumulated rounding
/// error grows with `k` and with the magnitude of the reference values.
/// It is kept as the pass/fail contract anyway (and exposed through
/// [`BenchConfig::eps`]) rather than swapped for a relative test; deep-k
/// runs can raise it.
pub const EPS: f32 = 1e-3;

/// Column tile width for the tiled kernel. 64 columns of f32 is a 256-byte
/// row segment, so a k x 64 panel of B stays cache-resident across the
/// row sweep.
pub const TILE_WIDTH: usize = 64;

/// Scalar applied to the A*B product in the canonical configuration.
pub const ALPHA: f32 = 1.5;

/// Scalar applied to the pre-existing C in the canonical configuration.
/// Zero, because the harness times pure-product throughput into a zeroed
/// output buffer. The kernel contract itself supports arbitrary beta.
pub const BETA: f32 = 0.0;

/// One run's worth of harness settings. `Default` wires up the constants
/// above; tests shrink `samples` and tighten or loosen `eps` as needed.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub samples: usize,
    pub seed: u64,
    pub eps: f32,
    pub alpha: f32,
    pub beta: f32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: SAMPLE_SIZE,
            seed: SEED,
            eps: EPS,
            alpha: ALPHA,
            beta: BETA,
        }
    }
}
