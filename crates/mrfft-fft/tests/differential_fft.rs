//! Differential and property tests for the mixed-radix transform.
//!
//! - §1: reference agreement against a naive O(n²) DFT oracle, for prime and
//!   composite lengths, in both the roots-of-unity and canonical conventions
//! - §2: round trips (`values_to_poly ∘ evaluate_poly`, `ifft ∘ fft`)
//! - §3: metamorphic relations (linearity, convolution theorem)
//!
//! All checks emit structured JSON log lines on stderr.
//!
//! Reproduce: `PROPTEST_SEED=<seed> cargo test -p mrfft-fft --test differential_fft`

use std::f64::consts::TAU;

use mrfft_fft::{
    Complex64, FftOptions, cyclic_convolve, evaluate_poly, evaluate_poly_with, fft, ifft, l2,
    multiply_polys, values_to_poly, values_to_poly_with,
};
use mrfft_primes::PrimeOracle;
use mrfft_runtime::{LogEntry, Outcome, RuntimeMode};
use proptest::collection::SizeRange;
use proptest::prelude::*;

const MAX_TOLERANCE: f64 = 1e-5;

fn log_differential(test_id: &str, n: usize, error: f64) {
    let entry = LogEntry::new(test_id, "mrfft_fft::differential", "compare against naive DFT")
        .with_len(n)
        .with_error(error)
        .with_mode(RuntimeMode::Strict)
        .with_outcome(Outcome::from_pass(error < MAX_TOLERANCE));
    eprintln!("{}", entry.to_json_line());
}

/// `Σ_j x_j · e^{sign·2πijk/n}` evaluated term by term.
fn reference_dft(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input.iter().enumerate().fold((0.0, 0.0), |acc, (j, &(re, im))| {
                let angle = sign * TAU * ((j * k) % n) as f64 / n as f64;
                let (sin, cos) = angle.sin_cos();
                (acc.0 + re * cos - im * sin, acc.1 + re * sin + im * cos)
            })
        })
        .collect()
}

fn complex_vec(len: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Complex64>> {
    proptest::collection::vec((-1.0f64..1.0, -1.0f64..1.0), len)
}

// ═══════════════════════════════════════════════════════════════
// §1 Reference agreement
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_evaluate_poly_composite_lengths_match_reference() {
    let mut oracle = PrimeOracle::new();
    for n in [4usize, 6, 8, 12, 18, 24, 30, 45, 64, 72, 100, 210, 243] {
        let x = (0..n)
            .map(|i| ((i as f64 * 0.61).cos(), (i as f64 * 0.17).sin()))
            .collect::<Vec<_>>();
        let error = l2(&evaluate_poly_with(&mut oracle, &x), &reference_dft(&x, 1.0));
        log_differential("test_evaluate_poly_composite_lengths_match_reference", n, error);
        assert!(error < MAX_TOLERANCE, "n = {n}, error = {error}");
    }
}

#[test]
fn test_evaluate_poly_prime_lengths_take_naive_path() {
    let mut oracle = PrimeOracle::new();
    for n in [2usize, 3, 5, 7, 11, 13, 101, 211] {
        let x = (0..n).map(|i| (1.0 / (1.0 + i as f64), 0.0)).collect::<Vec<_>>();
        let error = l2(&evaluate_poly_with(&mut oracle, &x), &reference_dft(&x, 1.0));
        log_differential("test_evaluate_poly_prime_lengths_take_naive_path", n, error);
        assert!(error < MAX_TOLERANCE, "n = {n}, error = {error}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_evaluate_poly_matches_reference_dft(x in complex_vec(1..=16)) {
        let error = l2(&evaluate_poly(&x), &reference_dft(&x, 1.0));
        prop_assert!(error < MAX_TOLERANCE, "n = {}, error = {error}", x.len());
    }

    #[test]
    fn test_fft_matches_canonical_dft(x in complex_vec(1..=16)) {
        let ours = fft(&x, &FftOptions::default()).expect("fft should succeed");
        let error = l2(&ours, &reference_dft(&x, -1.0));
        prop_assert!(error < MAX_TOLERANCE, "n = {}, error = {error}", x.len());
    }

    #[test]
    fn test_ifft_matches_canonical_inverse_dft(x in complex_vec(1..=16)) {
        let n = x.len() as f64;
        let expected = reference_dft(&x, 1.0)
            .into_iter()
            .map(|(re, im)| (re / n, im / n))
            .collect::<Vec<_>>();
        let ours = ifft(&x, &FftOptions::default()).expect("ifft should succeed");
        prop_assert!(l2(&ours, &expected) < MAX_TOLERANCE);
    }
}

// ═══════════════════════════════════════════════════════════════
// §2 Round trips
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_values_to_poly_roundtrip_degrees_1_to_100() {
    let mut oracle = PrimeOracle::new();
    for n in 1..=100usize {
        let poly = (0..n)
            .map(|i| {
                let re = ((i * 7919) % 101) as f64 / 50.0 - 1.0;
                let im = ((i * 31) % 17) as f64 / 8.0 - 1.0;
                (re, im)
            })
            .collect::<Vec<_>>();
        let values = evaluate_poly_with(&mut oracle, &poly);
        let error = l2(&values_to_poly_with(&mut oracle, &values), &poly);
        log_differential("test_values_to_poly_roundtrip_degrees_1_to_100", n, error);
        assert!(error < MAX_TOLERANCE, "n = {n}, error = {error}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_values_to_poly_inverts_evaluate_poly(p in complex_vec(1..=100)) {
        let recovered = values_to_poly(&evaluate_poly(&p));
        prop_assert_eq!(recovered.len(), p.len());
        prop_assert!(l2(&recovered, &p) < MAX_TOLERANCE);
    }

    #[test]
    fn test_ifft_inverts_fft(x in complex_vec(0..=64)) {
        let opts = FftOptions::default();
        let spectrum = fft(&x, &opts).expect("fft should succeed");
        let recovered = ifft(&spectrum, &opts).expect("ifft should succeed");
        prop_assert!(l2(&recovered, &x) < MAX_TOLERANCE);
    }
}

// ═══════════════════════════════════════════════════════════════
// §3 Metamorphic relations
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_evaluate_poly_is_linear(
        pair in (1usize..=40).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
        alpha in -2.0f64..2.0,
    ) {
        let (a, b) = pair;
        let combined = a
            .iter()
            .zip(&b)
            .map(|(&x, &y)| (alpha * x.0 + y.0, alpha * x.1 + y.1))
            .collect::<Vec<_>>();
        let expected = evaluate_poly(&a)
            .into_iter()
            .zip(evaluate_poly(&b))
            .map(|(x, y)| (alpha * x.0 + y.0, alpha * x.1 + y.1))
            .collect::<Vec<_>>();
        prop_assert!(l2(&evaluate_poly(&combined), &expected) < MAX_TOLERANCE);
    }

    #[test]
    fn test_multiply_polys_matches_schoolbook(a in complex_vec(1..=12), b in complex_vec(1..=12)) {
        let mut expected = vec![(0.0, 0.0); a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                let slot = &mut expected[i + j];
                slot.0 += x.0 * y.0 - x.1 * y.1;
                slot.1 += x.0 * y.1 + x.1 * y.0;
            }
        }
        prop_assert!(l2(&multiply_polys(&a, &b), &expected) < MAX_TOLERANCE);
    }

    #[test]
    fn test_cyclic_convolve_matches_direct_sum(
        pair in (1usize..=24).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
    ) {
        let (a, b) = pair;
        let n = a.len();
        let expected = (0..n)
            .map(|k| {
                (0..n).fold((0.0, 0.0), |acc, j| {
                    let (x, y) = (a[j], b[(k + n - j) % n]);
                    (acc.0 + x.0 * y.0 - x.1 * y.1, acc.1 + x.0 * y.1 + x.1 * y.0)
                })
            })
            .collect::<Vec<_>>();
        let ours = cyclic_convolve(&a, &b).expect("equal lengths");
        prop_assert!(l2(&ours, &expected) < MAX_TOLERANCE);
    }
}

#[test]
fn test_fft_structured_log_convention() {
    let entry = LogEntry::new(
        "test_fft_matches_canonical_dft",
        "mrfft_fft",
        "property test: canonical bin agreement over 256 cases",
    )
    .with_outcome(Outcome::Pass)
    .with_mode(RuntimeMode::Strict);

    let parsed: serde_json::Value =
        serde_json::from_str(&entry.to_json_line()).expect("structured log must be valid JSON");
    assert_eq!(parsed["component"], "mrfft_fft");
    assert_eq!(parsed["outcome"], "pass");
}
