#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mrfft_primes::{PrimeError, PrimeOracle};

#[derive(Debug, Arbitrary)]
struct FactorizeInput {
    n: u32,
    warm_up_to: u16,
}

fuzz_target!(|input: FactorizeInput| {
    let mut oracle = PrimeOracle::new();
    oracle.populate_primes_up_to(u64::from(input.warm_up_to));
    let n = u64::from(input.n);

    match oracle.factorize(n) {
        Ok(factorization) => {
            assert_eq!(factorization.product(), Some(n));
            let mut checker = PrimeOracle::new();
            for prime in factorization.primes() {
                assert!(checker.is_prime(prime));
            }
            let radices = factorization.descending_radices();
            assert_eq!(radices.first().copied(), oracle.largest_prime_factor(n));
        }
        Err(err) => assert_eq!((n, err), (0, PrimeError::Zero)),
    }
});
