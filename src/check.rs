//! Element-wise correctness check against the reference output.

use thiserror::Error;

/// First element where a kernel's output diverged from the reference
/// beyond tolerance. A mismatch means the kernel is buggy; it is never
/// retried or suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("difference at {index}: {expected:.5} {actual:.5}")]
pub struct Mismatch {
    pub index: usize,
    pub expected: f32,
    pub actual: f32,
}

/// Compare two buffers under a fixed absolute tolerance, reporting the
/// first failing index.
///
/// # Panics
///
/// Panics if the buffers have different lengths.
pub fn check_close(expected: &[f32], actual: &[f32], eps: f32) -> Result<(), Mismatch> {
    assert_eq!(expected.len(), actual.len(), "length mismatch");

    for (index, (&e, &a)) in expected.iter().zip(actual.iter()).enumerate() {
        if (e - a).abs() > eps {
            return Err(Mismatch {
                index,
                expected: e,
                actual: a,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_buffers_pass() {
        let buf = vec![1.0, -2.5, 0.0, 1e6];
        assert_eq!(check_close(&buf, &buf, 0.0), Ok(()));
    }

    #[test]
    fn test_within_tolerance_passes() {
        let expected = vec![1.0, 2.0, 3.0];
        let actual = vec![1.0005, 1.9995, 3.0];
        assert_eq!(check_close(&expected, &actual, 1e-3), Ok(()));
    }

    #[test]
    fn test_first_failing_index_reported() {
        let expected = vec![1.0, 2.0, 3.0, 4.0];
        let actual = vec![1.0, 2.5, 3.0, 9.0];

        let err = check_close(&expected, &actual, 1e-3).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.expected, 2.0);
        assert_eq!(err.actual, 2.5);
    }

    #[test]
    fn test_diagnostic_format() {
        let err = Mismatch {
            index: 7,
            expected: 1.0,
            actual: 1.25,
        };
        assert_eq!(err.to_string(), "difference at 7: 1.00000 1.25000");
    }
}
