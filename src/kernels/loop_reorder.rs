/// Cache-friendly SGEMM using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop stream both C and B
/// row-wise (stride 1), and `alpha * a[i,p]` is hoisted out of it. That
/// alone is a large speedup over [`sgemm_naive`](super::naive::sgemm_naive)
/// on big matrices.
///
/// Because each C element now accumulates across k iterations instead of
/// being produced once, beta must be applied in a separate full pass over C
/// before any accumulation: scaling inline would multiply by beta k times.
/// The pass is skipped when beta == 1.0, the one value for which it is the
/// identity.
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
pub fn sgemm_loop_reorder(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    beta: f32,
) {
    scale(c, beta);

    for i in 0..m {
        for p in 0..k {
            let scaled_a = alpha * a[i * k + p];
            for j in 0..n {
                c[i * n + j] += scaled_a * b[p * n + j];
            }
        }
    }
}

/// Beta pre-pass shared with the tiled kernel.
pub(super) fn scale(c: &mut [f32], beta: f32) {
    if beta != 1.0 {
        for x in c.iter_mut() {
            *x *= beta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_applied_exactly_once() {
        // With A = 0 the accumulation contributes nothing, so the result
        // must be exactly beta * C_old no matter how deep k is.
        let k = 17;
        let a = vec![0.0; 3 * k];
        let b = vec![1.0; k * 4];
        let mut c = vec![3.0; 3 * 4];

        sgemm_loop_reorder(&a, &b, &mut c, 3, 4, k, 1.0, 0.5);

        assert!(c.iter().all(|&x| x == 1.5), "beta applied more than once: {:?}", c);
    }

    #[test]
    fn test_beta_one_keeps_c() {
        let a = vec![0.0; 2 * 2];
        let b = vec![0.0; 2 * 2];
        let mut c = vec![1.25, -0.5, 7.0, 0.0];

        sgemm_loop_reorder(&a, &b, &mut c, 2, 2, 2, 1.0, 1.0);

        assert_eq!(c, vec![1.25, -0.5, 7.0, 0.0]);
    }

    #[test]
    fn test_matches_naive_on_integers() {
        let m = 5;
        let n = 7;
        let k = 3;
        let a: Vec<f32> = (0..m * k).map(|i| (i % 10) as f32).collect();
        let b: Vec<f32> = (0..k * n).map(|i| (i % 10) as f32).collect();

        let mut c_naive = vec![2.0; m * n];
        let mut c_reorder = vec![2.0; m * n];

        super::super::naive::sgemm_naive(&a, &b, &mut c_naive, m, n, k, 1.0, 1.0);
        sgemm_loop_reorder(&a, &b, &mut c_reorder, m, n, k, 1.0, 1.0);

        assert_eq!(c_naive, c_reorder);
    }
}
