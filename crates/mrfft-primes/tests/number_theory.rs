//! Exhaustive and property tests for the prime oracle.
//!
//! Convention: test_{module}_{function}_{scenario}
//!
//! Reproduce: `PROPTEST_SEED=<seed> cargo test -p mrfft-primes --test number_theory`

use mrfft_primes::{Factorization, PrimeError, PrimeOracle};
use mrfft_runtime::{LogEntry, Outcome};
use proptest::prelude::*;

const MAX_TEST_FACTORIZE: u64 = 1_000;

const PRIMES_UP_TO_100: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

fn trial_division_is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Logs how many inputs in `0..n` disagreed with the reference.
fn log_check(event: &str, n: u64, mismatches: &[u64]) {
    let entry = LogEntry::new(event, "mrfft_primes::number_theory", "exhaustive check")
        .with_len(n as usize)
        .with_error(mismatches.len() as f64)
        .with_outcome(Outcome::from_pass(mismatches.is_empty()));
    eprintln!("{}", entry.to_json_line());
}

/// Every factor is prime with positive power and the powers multiply back to `n`.
fn multiplies_back(checker: &mut PrimeOracle, n: u64, factorization: &Factorization) -> bool {
    let mut remaining = n;
    for (prime, power) in factorization.iter() {
        if !checker.is_prime(prime) || power == 0 {
            return false;
        }
        for _ in 0..power {
            if remaining % prime != 0 {
                return false;
            }
            remaining /= prime;
        }
    }
    remaining == 1 && factorization.product() == Some(n)
}

#[test]
fn test_oracle_is_prime_matches_table_below_100() {
    let mut oracle = PrimeOracle::new();
    let mismatches = (0..100u64)
        .filter(|&n| oracle.is_prime(n) != PRIMES_UP_TO_100.contains(&n))
        .collect::<Vec<_>>();
    log_check("test_oracle_is_prime_matches_table_below_100", 100, &mismatches);
    assert!(mismatches.is_empty(), "is_prime disagrees with the table at {mismatches:?}");
}

#[test]
fn test_oracle_is_prime_out_of_order_queries() {
    // Large queries first so that small ones hit both code paths.
    let mut oracle = PrimeOracle::new();
    for n in (0..500u64).rev() {
        assert_eq!(oracle.is_prime(n), trial_division_is_prime(n), "is_prime({n})");
    }
}

#[test]
fn test_oracle_factorize_products_below_1000() {
    let mut oracle = PrimeOracle::new();
    let mut checker = PrimeOracle::new();
    let mismatches = (1..MAX_TEST_FACTORIZE)
        .filter(|&n| {
            let factorization = oracle.factorize(n).expect("positive n factorizes");
            !multiplies_back(&mut checker, n, &factorization)
        })
        .collect::<Vec<_>>();
    log_check(
        "test_oracle_factorize_products_below_1000",
        MAX_TEST_FACTORIZE,
        &mismatches,
    );
    assert!(mismatches.is_empty(), "bad factorizations for {mismatches:?}");
    assert_eq!(oracle.factorize(0), Err(PrimeError::Zero));
}

#[test]
fn test_oracle_first_prime_after_matches_scan() {
    let mut oracle = PrimeOracle::new();
    for n in 0..300u64 {
        let expected = (n + 1..).find(|&k| trial_division_is_prime(k));
        assert_eq!(oracle.first_prime_after(n).ok(), expected, "after {n}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_oracle_populate_growth_is_monotonic(
        mut bounds in proptest::collection::vec(0u64..5_000, 1..12),
    ) {
        bounds.sort_unstable();
        let mut oracle = PrimeOracle::new();
        let mut previous = oracle.clone();
        for bound in bounds {
            oracle.populate_primes_up_to(bound);
            prop_assert!(oracle.checked_up_to() >= previous.checked_up_to());
            prop_assert!(oracle.primes().starts_with(previous.primes()));
            prop_assert!(oracle.primes().windows(2).all(|w| w[0] < w[1]));
            previous = oracle.clone();
        }
        let mark = oracle.checked_up_to();
        let expected = (0..=mark).filter(|&k| trial_division_is_prime(k)).collect::<Vec<_>>();
        prop_assert_eq!(oracle.primes(), expected.as_slice());
    }

    #[test]
    fn test_oracle_factorize_roundtrips_product(n in 1u64..5_000_000) {
        let mut oracle = PrimeOracle::new();
        let factorization = oracle.factorize(n).expect("positive n factorizes");
        prop_assert_eq!(factorization.product(), Some(n));
        let mut checker = PrimeOracle::new();
        for prime in factorization.primes() {
            prop_assert!(checker.is_prime(prime));
        }
    }

    #[test]
    fn test_oracle_sigma_0_counts_divisors(n in 1u64..3_000) {
        let mut oracle = PrimeOracle::new();
        let brute = (1..=n).filter(|d| n % d == 0).count() as u64;
        let brute_sum = (1..=n).filter(|d| n % d == 0).sum::<u64>();
        prop_assert_eq!(oracle.sigma_0(n), Ok(brute));
        prop_assert_eq!(oracle.sigma_1(n), Ok(brute_sum));
    }
}
