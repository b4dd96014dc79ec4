#![forbid(unsafe_code)]

//! Synchronized handle around a [`PrimeOracle`].

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::PrimeResult;
use crate::factorization::Factorization;
use crate::oracle::PrimeOracle;

/// Clonable handle that serializes every read-then-append on the registry.
///
/// Clones share the same oracle. A panic while the lock is held cannot leave
/// the registry inconsistent (it is only ever appended to in order), so a
/// poisoned lock is recovered rather than propagated.
#[derive(Debug, Clone, Default)]
pub struct SharedPrimeOracle {
    inner: Arc<Mutex<PrimeOracle>>,
}

static GLOBAL_ORACLE: OnceLock<SharedPrimeOracle> = OnceLock::new();

impl SharedPrimeOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide oracle behind the crate-level convenience functions.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_ORACLE.get_or_init(Self::new)
    }

    /// Run `f` with exclusive access to the oracle.
    pub fn with<R>(&self, f: impl FnOnce(&mut PrimeOracle) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn populate_primes_up_to(&self, n: u64) {
        self.with(|oracle| oracle.populate_primes_up_to(n));
    }

    pub fn is_prime(&self, n: u64) -> bool {
        self.with(|oracle| oracle.is_prime(n))
    }

    pub fn factorize(&self, n: u64) -> PrimeResult<Factorization> {
        self.with(|oracle| oracle.factorize(n))
    }

    pub fn first_prime_after(&self, n: u64) -> PrimeResult<u64> {
        self.with(|oracle| oracle.first_prime_after(n))
    }

    #[must_use]
    pub fn checked_up_to(&self) -> u64 {
        self.with(|oracle| oracle.checked_up_to())
    }

    /// Copy of the current registry and cache.
    #[must_use]
    pub fn snapshot(&self) -> PrimeOracle {
        self.with(|oracle| oracle.clone())
    }

    pub fn reset(&self) {
        self.with(PrimeOracle::reset);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::SharedPrimeOracle;

    #[test]
    fn clones_share_state() {
        let shared = SharedPrimeOracle::new();
        let other = shared.clone();
        shared.populate_primes_up_to(100);
        assert_eq!(other.checked_up_to(), 100);
        other.reset();
        assert_eq!(shared.checked_up_to(), 4);
    }

    #[test]
    fn concurrent_population_matches_serial() {
        let shared = SharedPrimeOracle::new();
        let handles = (1..=8u64)
            .map(|worker| {
                let oracle = shared.clone();
                thread::spawn(move || {
                    for n in (1..=250u64).map(|n| n * worker) {
                        let _ = oracle.is_prime(n);
                        let _ = oracle.factorize(n);
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().expect("worker should not panic");
        }

        let concurrent = shared.snapshot();
        let serial = SharedPrimeOracle::new();
        serial.populate_primes_up_to(concurrent.checked_up_to());
        assert_eq!(concurrent.primes(), serial.snapshot().primes());
    }
}
