//! Benchmark runner for the SGEMM kernels.

use std::process;

use clap::Parser;

use sgemm_bench::config::BenchConfig;
use sgemm_bench::kernels::Kernel;
use sgemm_bench::runner;

/// Uses kernel i to multiply random matrices A and B of dims m x k and
/// k x n, repeatedly, printing GFLOP/s per trial and the mean.
///
/// e.g., sgemm-bench -i 2 -m 2048 -n 2048 -k 2048
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Kernel id: 0 = reference, 1 = naive, 2 = loop-reorder, 3 = tiled
    #[arg(short = 'i', long = "kernel")]
    kernel: usize,

    /// Rows of A and C
    #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
    m: u64,

    /// Columns of B and C
    #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,

    /// Columns of A, rows of B
    #[arg(short, value_parser = clap::value_parser!(u64).range(1..))]
    k: u64,
}

fn main() {
    let args = Args::parse();

    let kernel = match Kernel::from_id(args.kernel) {
        Ok(kernel) => kernel,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let cfg = BenchConfig::default();
    let (m, n, k) = (args.m as usize, args.n as usize, args.k as usize);

    if let Err(err) = runner::run(kernel, m, n, k, &cfg) {
        eprintln!("{err}");
        process::exit(1);
    }
}
