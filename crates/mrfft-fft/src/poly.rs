//! Roots-of-unity evaluation and interpolation of polynomials.
//!
//! A coefficient sequence `c` of length `n` stands for
//! `f(x) = c[0] + c[1]·x + … + c[n-1]·x^(n-1)`. Evaluation returns
//! `f(1), f(ω), …, f(ω^(n-1))` with `ω = e^{2πi/n}`; interpolation undoes it.
//!
//! The forward kernel is a Cooley–Tukey split generalized to any length:
//! with `p` the largest prime factor of `n` and `q = n / p`, coefficient `i`
//! goes to sub-polynomial `i mod p`, so
//!
//! ```text
//! f(x) = Σ_{j<p} x^j · f_j(x^p)
//! ```
//!
//! Each `f_j` has `q` coefficients and `ω^p` is a primitive `q`-th root of
//! unity, so evaluating `f_j` at its own `q`-th roots gives every value
//! `f_j(ω^{m·p})` (they repeat with period `q` in `m`). The combine step is
//!
//! ```text
//! f(ω^m) = Σ_{j<p} ω^{(m·j) mod n} · F_j[m mod q]
//! ```
//!
//! which costs `n·p` multiplications per level. When `n` is prime this is a
//! single level with `p = n`, i.e. the naive `O(n²)` DFT.

use mrfft_primes::PrimeOracle;

use crate::complex::{
    Complex64, ZERO, complex_add, complex_conj, complex_mul, complex_scale, roots_of_unity,
};
use crate::plan::SplitPlan;
use crate::transforms::FftError;

/// Evaluate `coeffs` at every `n`-th root of unity.
///
/// The split plan is computed against the process-wide prime oracle; the
/// evaluation itself holds no lock.
#[must_use]
pub fn evaluate_poly(coeffs: &[Complex64]) -> Vec<Complex64> {
    evaluate_split(coeffs, SplitPlan::shared(coeffs.len()).radices())
}

/// [`evaluate_poly`] with a caller-owned oracle.
pub fn evaluate_poly_with(oracle: &mut PrimeOracle, coeffs: &[Complex64]) -> Vec<Complex64> {
    evaluate_split(coeffs, SplitPlan::new(oracle, coeffs.len()).radices())
}

/// Evaluate with a prepared plan; the plan length must match.
pub fn evaluate_with_plan(
    plan: &SplitPlan,
    coeffs: &[Complex64],
) -> Result<Vec<Complex64>, FftError> {
    ensure_plan_len(plan, coeffs.len())?;
    Ok(evaluate_split(coeffs, plan.radices()))
}

/// Recover coefficients from values at the `n`-th roots of unity.
#[must_use]
pub fn values_to_poly(values: &[Complex64]) -> Vec<Complex64> {
    interpolate_split(values, SplitPlan::shared(values.len()).radices())
}

/// [`values_to_poly`] with a caller-owned oracle.
pub fn values_to_poly_with(oracle: &mut PrimeOracle, values: &[Complex64]) -> Vec<Complex64> {
    interpolate_split(values, SplitPlan::new(oracle, values.len()).radices())
}

/// Interpolate with a prepared plan; the plan length must match.
pub fn interpolate_with_plan(
    plan: &SplitPlan,
    values: &[Complex64],
) -> Result<Vec<Complex64>, FftError> {
    ensure_plan_len(plan, values.len())?;
    Ok(interpolate_split(values, plan.radices()))
}

/// Product of two polynomials via pointwise multiplication of evaluations.
///
/// Both inputs are zero-padded to `a.len() + b.len() - 1`, so the result is
/// the full (acyclic) product. An empty factor gives an empty product.
#[must_use]
pub fn multiply_polys(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let n = a.len() + b.len() - 1;
    let plan = SplitPlan::shared(n);
    let pad = |poly: &[Complex64]| {
        let mut padded = poly.to_vec();
        padded.resize(n, ZERO);
        padded
    };
    let lhs = evaluate_split(&pad(a), plan.radices());
    let rhs = evaluate_split(&pad(b), plan.radices());
    let product = pointwise_product(&lhs, &rhs);
    interpolate_split(&product, plan.radices())
}

/// Cyclic convolution of two equal-length sequences.
pub fn cyclic_convolve(a: &[Complex64], b: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let plan = SplitPlan::shared(a.len());
    let lhs = evaluate_split(a, plan.radices());
    let rhs = evaluate_split(b, plan.radices());
    Ok(interpolate_split(
        &pointwise_product(&lhs, &rhs),
        plan.radices(),
    ))
}

fn pointwise_product(lhs: &[Complex64], rhs: &[Complex64]) -> Vec<Complex64> {
    lhs.iter()
        .zip(rhs)
        .map(|(&l, &r)| complex_mul(l, r))
        .collect()
}

fn ensure_plan_len(plan: &SplitPlan, actual: usize) -> Result<(), FftError> {
    if plan.len() != actual {
        return Err(FftError::LengthMismatch {
            expected: plan.len(),
            actual,
        });
    }
    Ok(())
}

fn evaluate_split(coeffs: &[Complex64], radices: &[usize]) -> Vec<Complex64> {
    let Some((&p, rest)) = radices.split_first() else {
        // Lengths 0 and 1: a constant evaluates to itself.
        return coeffs.to_vec();
    };
    let n = coeffs.len();
    debug_assert!(n.is_multiple_of(p));
    let q = n / p;

    let roots = roots_of_unity(n);

    let mut split = vec![Vec::with_capacity(q); p];
    for (idx, &coefficient) in coeffs.iter().enumerate() {
        split[idx % p].push(coefficient);
    }

    // Sub-polynomials are evaluated in index order so results are reproducible.
    let evaluated = split
        .iter()
        .map(|sub| evaluate_split(sub, rest))
        .collect::<Vec<_>>();

    (0..n)
        .map(|m| {
            evaluated
                .iter()
                .enumerate()
                .fold(ZERO, |acc, (j, sub)| {
                    complex_add(acc, complex_mul(roots[(m * j) % n], sub[m % q]))
                })
        })
        .collect()
}

/// Conjugate, scale by `1/n`, evaluate, conjugate.
///
/// The inverse DFT matrix is the conjugate transpose of the forward one
/// divided by `n`, so the forward kernel does all the work.
fn interpolate_split(values: &[Complex64], radices: &[usize]) -> Vec<Complex64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / n as f64;
    let conjugated = values
        .iter()
        .map(|&value| complex_scale(complex_conj(value), scale))
        .collect::<Vec<_>>();
    evaluate_split(&conjugated, radices)
        .into_iter()
        .map(complex_conj)
        .collect()
}
