//! SGEMM kernel variants and the registry that dispatches them.
//!
//! Every kernel computes C = alpha*A*B + beta*C over dense row-major f32
//! buffers supplied by the caller; kernels never allocate and mutate
//! nothing but C. They differ only in memory-access strategy:
//!
//! - `reference`: `matrixmultiply`-backed oracle (id 0, always present)
//! - `naive`: i-j-k triple loop, the throughput floor
//! - `loop_reorder`: i-k-j order, contiguous B and C access
//! - `tiled`: i-k-j with a column-tiled sweep for cache reuse of B

pub mod loop_reorder;
pub mod naive;
pub mod reference;
pub mod tiled;

use thiserror::Error;

/// Shared kernel signature: `(a, b, c, m, n, k, alpha, beta)`.
///
/// A is m × k, B is k × n, C is m × n, all row-major.
pub type SgemmFn = fn(&[f32], &[f32], &mut [f32], usize, usize, usize, f32, f32);

/// Raised when a kernel id outside the registered range is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kernel id {0}; valid ids are 0..={max}", max = Kernel::ALL.len() - 1)]
pub struct UnknownKernel(pub usize);

/// The closed, ordered set of kernel variants.
///
/// Ids are stable: the reference kernel sits at id 0 and is the oracle all
/// others are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Kernel {
    Reference = 0,
    Naive = 1,
    LoopReorder = 2,
    Tiled = 3,
}

impl Kernel {
    /// Every registered kernel, in id order.
    pub const ALL: [Kernel; 4] = [
        Kernel::Reference,
        Kernel::Naive,
        Kernel::LoopReorder,
        Kernel::Tiled,
    ];

    /// Resolve an id from the CLI. Out-of-range ids are a hard error,
    /// never a silent fallback.
    pub fn from_id(id: usize) -> Result<Kernel, UnknownKernel> {
        Kernel::ALL.get(id).copied().ok_or(UnknownKernel(id))
    }

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Kernel::Reference => "reference",
            Kernel::Naive => "naive",
            Kernel::LoopReorder => "loop-reorder",
            Kernel::Tiled => "tiled",
        }
    }

    /// The implementation behind this id.
    pub fn func(self) -> SgemmFn {
        match self {
            Kernel::Reference => reference::sgemm_reference,
            Kernel::Naive => naive::sgemm_naive,
            Kernel::LoopReorder => loop_reorder::sgemm_loop_reorder,
            Kernel::Tiled => tiled::sgemm_tiled,
        }
    }

    /// Run this kernel: C = alpha*A*B + beta*C.
    ///
    /// # Panics
    ///
    /// Panics if the slice sizes don't match m, n, k.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        self,
        a: &[f32],
        b: &[f32],
        c: &mut [f32],
        m: usize,
        n: usize,
        k: usize,
        alpha: f32,
        beta: f32,
    ) {
        assert!(m > 0 && n > 0 && k > 0, "degenerate problem {}x{}x{}", m, n, k);
        assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
        assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
        assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

        self.func()(a, b, c, m, n, k, alpha, beta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_id_zero() {
        assert_eq!(Kernel::Reference.id(), 0);
        assert_eq!(Kernel::from_id(0), Ok(Kernel::Reference));
    }

    #[test]
    fn test_every_id_resolves_in_order() {
        for (id, kernel) in Kernel::ALL.iter().enumerate() {
            assert_eq!(Kernel::from_id(id), Ok(*kernel));
            assert_eq!(kernel.id(), id);
        }
    }

    #[test]
    fn test_out_of_range_id_is_an_error() {
        let err = Kernel::from_id(Kernel::ALL.len()).unwrap_err();
        assert_eq!(err, UnknownKernel(4));
        assert_eq!(err.to_string(), "unknown kernel id 4; valid ids are 0..=3");
    }

    #[test]
    #[should_panic(expected = "A: expected")]
    fn test_run_rejects_mismatched_lengths() {
        let a = vec![0.0; 3];
        let b = vec![0.0; 4];
        let mut c = vec![0.0; 4];
        Kernel::Naive.run(&a, &b, &mut c, 2, 2, 2, 1.0, 0.0);
    }
}
