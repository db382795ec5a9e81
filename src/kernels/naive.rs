/// Naive SGEMM using i-j-k loop order.
///
/// This is the textbook triple loop: one scalar accumulator per output
/// element, then `c[i,j] = alpha * acc + beta * c[i,j]`. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), causing a
/// cache miss on every step.
///
/// This is the deliberate throughput floor the other kernels are measured
/// against.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with alpha*A*B + beta*C
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
#[allow(clippy::too_many_arguments)]
pub fn sgemm_naive(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    beta: f32,
) {
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0f32;
            for p in 0..k {
                acc += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = alpha * acc + beta * c[i * n + j];
        }
    }
}
