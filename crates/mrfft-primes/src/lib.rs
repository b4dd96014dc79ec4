#![forbid(unsafe_code)]

//! Prime oracle for mrfft: an incremental sieve, a factorization cache, and
//! the divisor helpers built on top of them.
//!
//! Transforms use [`PrimeOracle::factorize`] to pick the largest prime factor
//! of a length as its split radix. Callers that need isolated, reproducible
//! state own a [`PrimeOracle`]; everything else goes through the shared
//! [`SharedPrimeOracle::global`] instance, which the free functions below use.

pub mod error;
pub mod factorization;
pub mod oracle;
pub mod shared;

pub use error::{PrimeError, PrimeResult};
pub use factorization::Factorization;
pub use oracle::{PrimeOracle, ceil_sqrt, factorial};
pub use shared::SharedPrimeOracle;

/// Primality against the process-wide oracle.
pub fn is_prime(n: u64) -> bool {
    SharedPrimeOracle::global().is_prime(n)
}

/// Factorization against the process-wide oracle. Fails for 0.
pub fn factorize(n: u64) -> PrimeResult<Factorization> {
    SharedPrimeOracle::global().factorize(n)
}

/// Smallest prime strictly greater than `n`, against the process-wide oracle.
pub fn first_prime_after(n: u64) -> PrimeResult<u64> {
    SharedPrimeOracle::global().first_prime_after(n)
}
