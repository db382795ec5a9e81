use crate::config::TILE_WIDTH;

use super::loop_reorder::scale;

/// Column-tiled SGEMM building on the i-k-j reordering.
///
/// The column sweep is partitioned into tiles of [`TILE_WIDTH`] columns, so
/// the k × T panel of B under the current tile stays cache-resident while
/// every row of A streams over it. Same up-front beta pass as the
/// loop-reordered kernel; the accumulation order per element is unchanged,
/// only the j range is restricted per tile.
#[allow(clippy::too_many_arguments)]
pub fn sgemm_tiled(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    beta: f32,
) {
    sgemm_tiled_with_width(a, b, c, m, n, k, alpha, beta, TILE_WIDTH);
}

/// [`sgemm_tiled`] with an explicit tile width.
///
/// Output is identical for every `tile >= 1`, including widths that do not
/// divide `n`: the edge tile is clamped to the true column bound, never read
/// or written past it.
///
/// # Panics
///
/// Panics if `tile == 0`.
#[allow(clippy::too_many_arguments)]
pub fn sgemm_tiled_with_width(
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    beta: f32,
    tile: usize,
) {
    assert!(tile > 0, "tile width must be positive");

    scale(c, beta);

    for jt in (0..n).step_by(tile) {
        let j_end = (jt + tile).min(n);
        for i in 0..m {
            for p in 0..k {
                let scaled_a = alpha * a[i * k + p];
                for j in jt..j_end {
                    c[i * n + j] += scaled_a * b[p * n + j];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::loop_reorder::sgemm_loop_reorder;

    #[test]
    fn test_edge_tile_clamped() {
        // n = 10 with tile = 4 leaves a ragged 2-column edge tile.
        let m = 3;
        let n = 10;
        let k = 5;
        let a: Vec<f32> = (0..m * k).map(|i| (i % 7) as f32).collect();
        let b: Vec<f32> = (0..k * n).map(|i| (i % 5) as f32).collect();

        let mut c_tiled = vec![0.0; m * n];
        let mut c_reorder = vec![0.0; m * n];

        sgemm_tiled_with_width(&a, &b, &mut c_tiled, m, n, k, 1.5, 0.0, 4);
        sgemm_loop_reorder(&a, &b, &mut c_reorder, m, n, k, 1.5, 0.0);

        assert_eq!(c_tiled, c_reorder);
    }

    #[test]
    fn test_tile_wider_than_matrix() {
        let n = 6;
        let a = vec![1.0; 2 * 3];
        let b = vec![1.0; 3 * n];

        let mut c = vec![0.0; 2 * n];
        sgemm_tiled_with_width(&a, &b, &mut c, 2, n, 3, 1.0, 0.0, 512);

        assert!(c.iter().all(|&x| x == 3.0));
    }

    #[test]
    #[should_panic(expected = "tile width must be positive")]
    fn test_zero_tile_rejected() {
        let a = vec![1.0];
        let b = vec![1.0];
        let mut c = vec![0.0];
        sgemm_tiled_with_width(&a, &b, &mut c, 1, 1, 1, 1.0, 0.0, 0);
    }
}
