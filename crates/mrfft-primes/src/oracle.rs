#![forbid(unsafe_code)]

//! Incremental trial-division sieve with a memoized factorization table.

use std::collections::HashMap;

use crate::error::{PrimeError, PrimeResult};
use crate::factorization::Factorization;

const SEED_PRIMES: [u64; 2] = [2, 3];
const SEED_CHECKED_UP_TO: u64 = 4;

/// `⌈√n⌉` in exact integer arithmetic.
#[must_use]
pub fn ceil_sqrt(n: u64) -> u64 {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// Registry of discovered primes plus a factorization cache.
///
/// `primes` holds exactly the primes `<= checked_up_to`, in increasing order.
/// Both only ever grow until [`PrimeOracle::reset`] is called. The
/// factorization cache is never evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeOracle {
    primes: Vec<u64>,
    checked_up_to: u64,
    factorizations: HashMap<u64, Factorization>,
}

impl Default for PrimeOracle {
    fn default() -> Self {
        Self {
            primes: SEED_PRIMES.to_vec(),
            checked_up_to: SEED_CHECKED_UP_TO,
            factorizations: HashMap::new(),
        }
    }
}

impl PrimeOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the seed state: primes {2, 3}, checked up to 4, empty cache.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    #[must_use]
    pub const fn checked_up_to(&self) -> u64 {
        self.checked_up_to
    }

    #[must_use]
    pub fn cached_factorizations(&self) -> usize {
        self.factorizations.len()
    }

    /// Extend the registry so that every integer `<= n` has been classified.
    ///
    /// Candidates are scanned in increasing order, so by the time `k` is
    /// examined every prime `<= ⌈√k⌉` is already known.
    pub fn populate_primes_up_to(&mut self, n: u64) {
        while self.checked_up_to < n {
            self.checked_up_to += 1;
            let candidate = self.checked_up_to;
            if !self.has_divisor_up_to(candidate, ceil_sqrt(candidate)) {
                self.primes.push(candidate);
            }
        }
    }

    fn has_divisor_up_to(&self, n: u64, bound: u64) -> bool {
        self.primes
            .iter()
            .take_while(|&&p| p <= bound && p < n)
            .any(|&p| n.is_multiple_of(p))
    }

    pub fn is_prime(&mut self, n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n <= self.checked_up_to {
            return self.primes.binary_search(&n).is_ok();
        }
        let bound = ceil_sqrt(n);
        self.populate_primes_up_to(bound);
        !self.has_divisor_up_to(n, bound)
    }

    /// Factorize `n`, consulting and filling the cache.
    pub fn factorize(&mut self, n: u64) -> PrimeResult<Factorization> {
        if n == 0 {
            return Err(PrimeError::Zero);
        }
        if let Some(cached) = self.factorizations.get(&n) {
            return Ok(cached.clone());
        }

        self.populate_primes_up_to(ceil_sqrt(n));
        let mut factorization = Factorization::new();
        let mut remaining = n;
        for &p in &self.primes {
            if p > ceil_sqrt(remaining) {
                break;
            }
            let mut multiplicity = 0u32;
            while remaining.is_multiple_of(p) {
                remaining /= p;
                multiplicity += 1;
            }
            if multiplicity > 0 {
                factorization.add(p, multiplicity);
            }
        }
        // Whatever survives has no prime factor <= its square root.
        if remaining > 1 {
            factorization.add(remaining, 1);
        }

        self.factorizations.insert(n, factorization.clone());
        Ok(factorization)
    }

    /// Largest prime dividing `n`; `None` for 0 and 1.
    pub fn largest_prime_factor(&mut self, n: u64) -> Option<u64> {
        if n < 2 {
            return None;
        }
        self.factorize(n).ok()?.largest_prime()
    }

    /// Smallest prime strictly greater than `n`.
    ///
    /// Bertrand's postulate guarantees one in `(n, 2n]` for `n >= 1`.
    pub fn first_prime_after(&mut self, n: u64) -> PrimeResult<u64> {
        let bound = n.saturating_mul(2).max(SEED_CHECKED_UP_TO);
        self.populate_primes_up_to(bound);
        let idx = self.primes.partition_point(|&p| p <= n);
        self.primes
            .get(idx)
            .copied()
            .ok_or(PrimeError::NoPrimeFound { after: n, bound })
    }

    /// σ₀(n), the number of divisors of `n`.
    pub fn sigma_0(&mut self, n: u64) -> PrimeResult<u64> {
        self.factorize(n)?.divisor_count().ok_or(PrimeError::Overflow {
            operation: "sigma_0",
            n,
        })
    }

    /// σ₁(n), the sum of divisors of `n`.
    pub fn sigma_1(&mut self, n: u64) -> PrimeResult<u64> {
        self.factorize(n)?.divisor_sum().ok_or(PrimeError::Overflow {
            operation: "sigma_1",
            n,
        })
    }
}

/// `n!`, failing once the result leaves `u64`.
pub fn factorial(n: u64) -> PrimeResult<u64> {
    (2..=n).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(PrimeError::Overflow {
            operation: "factorial",
            n,
        })
    })
}
