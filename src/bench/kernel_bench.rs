//! Criterion comparison of the SGEMM kernels.
//!
//! Complements the `sgemm-bench` binary: the binary reports GFLOP/s with
//! validation, this gives criterion's statistical treatment of the same
//! kernels on identical seeded inputs.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sgemm_bench::config;
use sgemm_bench::kernels::Kernel;
use sgemm_bench::matrix::Matrix;
use sgemm_bench::rng::Randn;

const SIZES: &[usize] = &[64, 128, 256];

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgemm");

    for &n in SIZES {
        let mut rng = Randn::with_seed(config::SEED);
        let a = Matrix::randn(n, n, &mut rng);
        let b = Matrix::randn(n, n, &mut rng);

        group.throughput(Throughput::Elements((n as u64).pow(3)));

        for kernel in Kernel::ALL {
            group.bench_with_input(BenchmarkId::new(kernel.name(), n), &n, |bench, &n| {
                let mut out = vec![0.0f32; n * n];
                bench.iter(|| {
                    kernel.run(
                        black_box(a.as_slice()),
                        black_box(b.as_slice()),
                        &mut out,
                        n,
                        n,
                        n,
                        config::ALPHA,
                        config::BETA,
                    );
                    black_box(out[0]);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
