use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prime factorization of a positive integer, as prime → multiplicity.
///
/// The product of `p^m` over all entries is the factorized integer; the
/// factorization of 1 is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Factorization {
    factors: BTreeMap<u64, u32>,
}

impl Factorization {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, prime: u64, multiplicity: u32) {
        *self.factors.entry(prime).or_insert(0) += multiplicity;
    }

    /// Multiplicity of `prime`, 0 when it does not divide.
    #[must_use]
    pub fn multiplicity(&self, prime: u64) -> u32 {
        self.factors.get(&prime).copied().unwrap_or(0)
    }

    /// `(prime, multiplicity)` pairs in increasing prime order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.factors.iter().map(|(&p, &m)| (p, m))
    }

    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.factors.keys().copied()
    }

    /// Number of distinct primes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    #[must_use]
    pub fn largest_prime(&self) -> Option<u64> {
        self.factors.last_key_value().map(|(&p, _)| p)
    }

    /// Prime factors with multiplicity, largest first.
    ///
    /// This is the sequence of split factors a mixed-radix transform visits
    /// when it always splits on the largest prime factor of the current size.
    #[must_use]
    pub fn descending_radices(&self) -> Vec<u64> {
        self.factors
            .iter()
            .rev()
            .flat_map(|(&p, &m)| std::iter::repeat_n(p, m as usize))
            .collect()
    }

    /// Multiplies the factorization back out; `None` on overflow.
    #[must_use]
    pub fn product(&self) -> Option<u64> {
        self.iter()
            .try_fold(1u64, |acc, (p, m)| acc.checked_mul(p.checked_pow(m)?))
    }

    /// σ₀: number of divisors, `Π (m + 1)`.
    #[must_use]
    pub fn divisor_count(&self) -> Option<u64> {
        self.iter()
            .try_fold(1u64, |acc, (_, m)| acc.checked_mul(u64::from(m) + 1))
    }

    /// σ₁: sum of divisors, `Π (1 + p + … + p^m)`.
    #[must_use]
    pub fn divisor_sum(&self) -> Option<u64> {
        self.iter().try_fold(1u64, |acc, (p, m)| {
            let mut term = 1u64;
            let mut power = 1u64;
            for _ in 0..m {
                power = power.checked_mul(p)?;
                term = term.checked_add(power)?;
            }
            acc.checked_mul(term)
        })
    }
}

impl FromIterator<(u64, u32)> for Factorization {
    fn from_iter<I: IntoIterator<Item = (u64, u32)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (p, m) in iter {
            out.add(p, m);
        }
        out
    }
}
