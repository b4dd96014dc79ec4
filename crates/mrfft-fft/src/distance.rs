use mrfft_runtime::RuntimeMode;

use crate::complex::{Complex64, complex_norm_sqr, complex_sub};
use crate::transforms::FftError;

/// Euclidean distance `sqrt(Σ |a_i - b_i|²)` between two complex sequences.
///
/// Only the common prefix is compared when lengths differ; use [`l2_exact`]
/// when a mismatch should be an error.
#[must_use]
pub fn l2(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| complex_norm_sqr(complex_sub(x, y)))
        .sum::<f64>()
        .sqrt()
}

pub fn l2_exact(a: &[Complex64], b: &[Complex64]) -> Result<f64, FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(l2(a, b))
}

/// [`l2`] in Strict mode, [`l2_exact`] in Hardened mode.
pub fn l2_with_mode(
    a: &[Complex64],
    b: &[Complex64],
    mode: RuntimeMode,
) -> Result<f64, FftError> {
    match mode {
        RuntimeMode::Strict => Ok(l2(a, b)),
        RuntimeMode::Hardened => l2_exact(a, b),
    }
}
