//! Minimal complex arithmetic over `(re, im)` pairs.

use std::f64::consts::TAU;

/// Complex sample as `(re, im)`.
pub type Complex64 = (f64, f64);

pub const ZERO: Complex64 = (0.0, 0.0);
pub const ONE: Complex64 = (1.0, 0.0);

#[inline]
#[must_use]
pub fn complex_add(lhs: Complex64, rhs: Complex64) -> Complex64 {
    (lhs.0 + rhs.0, lhs.1 + rhs.1)
}

#[inline]
#[must_use]
pub fn complex_sub(lhs: Complex64, rhs: Complex64) -> Complex64 {
    (lhs.0 - rhs.0, lhs.1 - rhs.1)
}

#[inline]
#[must_use]
pub fn complex_mul(lhs: Complex64, rhs: Complex64) -> Complex64 {
    (lhs.0 * rhs.0 - lhs.1 * rhs.1, lhs.0 * rhs.1 + lhs.1 * rhs.0)
}

#[inline]
#[must_use]
pub fn complex_scale(value: Complex64, scale: f64) -> Complex64 {
    (value.0 * scale, value.1 * scale)
}

#[inline]
#[must_use]
pub fn complex_conj(value: Complex64) -> Complex64 {
    (value.0, -value.1)
}

/// `|z|²`
#[inline]
#[must_use]
pub fn complex_norm_sqr(value: Complex64) -> f64 {
    value.0 * value.0 + value.1 * value.1
}

/// `e^{iθ}`
#[inline]
#[must_use]
pub fn complex_cis(angle: f64) -> Complex64 {
    let (sin, cos) = angle.sin_cos();
    (cos, sin)
}

/// `1, ω, ω², …, ω^(n-1)` with `ω = e^{2πi/n}`.
///
/// Built by repeated multiplication by ω rather than one `cis` per entry.
#[must_use]
pub fn roots_of_unity(n: usize) -> Vec<Complex64> {
    if n == 0 {
        return Vec::new();
    }
    let w = complex_cis(TAU / n as f64);
    let mut roots = Vec::with_capacity(n);
    let mut current = ONE;
    for _ in 0..n {
        roots.push(current);
        current = complex_mul(current, w);
    }
    roots
}
