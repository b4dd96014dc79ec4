#![forbid(unsafe_code)]

//! Tolerance assertions for floating-point transform output.
//!
//! All checks use `|actual - expected| <= atol + rtol * |expected|`, the same
//! rule as `numpy.testing.assert_allclose`. Complex values are compared by
//! the modulus of their difference.

/// Check whether `actual` is within combined tolerance of `expected`.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64, atol: f64, rtol: f64) -> bool {
    let tol = atol + rtol * expected.abs();
    (actual - expected).abs() <= tol
}

pub fn assert_close(actual: f64, expected: f64, atol: f64, rtol: f64) {
    let tol = atol + rtol * expected.abs();
    assert!(
        (actual - expected).abs() <= tol,
        "assert_close failed: actual={actual} expected={expected} diff={} tol={tol} (atol={atol}, rtol={rtol})",
        (actual - expected).abs()
    );
}

pub fn assert_close_complex(actual: (f64, f64), expected: (f64, f64), atol: f64, rtol: f64) {
    let diff = (actual.0 - expected.0).hypot(actual.1 - expected.1);
    let tol = atol + rtol * expected.0.hypot(expected.1);
    assert!(
        diff <= tol,
        "assert_close_complex failed: actual={actual:?} expected={expected:?} diff={diff} tol={tol}"
    );
}

/// Element-wise complex comparison; lengths must match exactly.
pub fn assert_close_complex_slice(
    actual: &[(f64, f64)],
    expected: &[(f64, f64)],
    atol: f64,
    rtol: f64,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "assert_close_complex_slice: length mismatch: actual={} expected={}",
        actual.len(),
        expected.len()
    );
    for (idx, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.0 - e.0).hypot(a.1 - e.1);
        let tol = atol + rtol * e.0.hypot(e.1);
        assert!(
            diff <= tol,
            "assert_close_complex_slice[{idx}]: actual={a:?} expected={e:?} diff={diff} tol={tol}"
        );
    }
}
