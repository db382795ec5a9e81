//! The trusted reference kernel.
//!
//! Delegates to `matrixmultiply`, the independently maintained BLAS-class
//! GEMM every other kernel is validated against. Nothing here is tuned by
//! this crate; it only adapts the slice-and-dims contract onto
//! `matrixmultiply`'s pointer-and-strides one.

/// Reference SGEMM: C = alpha*A*B + beta*C via `matrixmultiply::sgemm`.
///
/// Operands are dense row-major, no transposition: row stride is the
/// column count, column stride is 1.
///
/// # Panics
///
/// Panics if the slice lengths don't match the dimensions.
#[allow(clippy::too_many_arguments)]
pub fn sgemm_reference(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    beta: f32,
) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    // Safety: the asserts above guarantee every pointer covers the extent
    // implied by the dimensions and strides.
    unsafe {
        matrixmultiply::sgemm(
            m,
            k,
            n,
            alpha,
            a.as_ptr(),
            k as isize,
            1,
            b.as_ptr(),
            n as isize,
            1,
            beta,
            c.as_mut_ptr(),
            n as isize,
            1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_product() {
        // A (2x3) * B (3x2), alpha = 1, beta = 0.
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut c = vec![0.0; 4];

        sgemm_reference(&a, &b, &mut c, 2, 2, 3, 1.0, 0.0);

        for (got, want) in c.iter().zip([58.0, 64.0, 139.0, 154.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_beta_accumulates() {
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![2.0, 0.0, 0.0, 2.0];
        let mut c = vec![1.0; 4];

        sgemm_reference(&a, &b, &mut c, 2, 2, 2, 1.0, 3.0);

        // I*diag(2) + 3*ones
        for (got, want) in c.iter().zip([5.0, 3.0, 3.0, 5.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-5);
        }
    }
}
