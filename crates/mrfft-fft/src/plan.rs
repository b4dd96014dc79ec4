use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use mrfft_primes::{PrimeOracle, SharedPrimeOracle, is_prime};
use serde::{Deserialize, Serialize};

use crate::TransformKind;
use crate::complex::Complex64;
use crate::transforms::FftError;

/// Radix path of a mixed-radix transform of length `n`.
///
/// Entry `k` is the split factor used at recursion depth `k`: the largest
/// prime factor of `n / (radices[0] * … * radices[k-1])`. The product of all
/// radices is `n`; lengths 0 and 1 have an empty path.
///
/// Deserialized plans are checked against these rules, so every `SplitPlan`
/// in existence drives the kernel over a valid split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSplitPlan")]
pub struct SplitPlan {
    n: usize,
    radices: Vec<usize>,
}

#[derive(Deserialize)]
struct RawSplitPlan {
    n: usize,
    radices: Vec<usize>,
}

impl TryFrom<RawSplitPlan> for SplitPlan {
    type Error = FftError;

    fn try_from(raw: RawSplitPlan) -> Result<Self, Self::Error> {
        validate_radices(raw.n, &raw.radices)?;
        Ok(Self {
            n: raw.n,
            radices: raw.radices,
        })
    }
}

fn validate_radices(n: usize, radices: &[usize]) -> Result<(), FftError> {
    if !radices.windows(2).all(|pair| pair[0] >= pair[1]) {
        return Err(FftError::InvalidShape {
            detail: "radices must be in descending order",
        });
    }
    if !radices.iter().all(|&p| is_prime(p as u64)) {
        return Err(FftError::InvalidShape {
            detail: "radices must be prime",
        });
    }
    let product = radices
        .iter()
        .try_fold(1usize, |acc, &p| acc.checked_mul(p));
    // Length 0 has an empty path like length 1.
    let covered = match product {
        Some(product) => product == n || (n == 0 && radices.is_empty()),
        None => false,
    };
    if !covered {
        return Err(FftError::InvalidShape {
            detail: "radices must multiply to the plan length",
        });
    }
    Ok(())
}

impl SplitPlan {
    /// Plan a transform of length `n`, asking `oracle` for the split factor
    /// at every level.
    pub fn new(oracle: &mut PrimeOracle, n: usize) -> Self {
        let mut radices = Vec::new();
        let mut size = n;
        while let Some(p) = oracle.largest_prime_factor(size as u64) {
            let p = p as usize;
            radices.push(p);
            size /= p;
        }
        Self { n, radices }
    }

    /// Plan against the process-wide oracle. The lock is released on return.
    #[must_use]
    pub fn shared(n: usize) -> Self {
        SharedPrimeOracle::global().with(|oracle| Self::new(oracle, n))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[must_use]
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Recursion depth below the top-level call.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.radices.len()
    }

    /// Complex multiplications in the combine steps: `n · Σ radix`.
    ///
    /// A prime `n` costs `n²`, the naive DFT.
    #[must_use]
    pub fn estimated_multiplications(&self) -> u64 {
        let radix_sum = self.radices.iter().map(|&p| p as u64).sum::<u64>();
        (self.n as u64).saturating_mul(radix_sum)
    }

    /// Bytes held by the roots-of-unity table and split buffers at the top level.
    #[must_use]
    pub fn scratch_bytes(&self) -> usize {
        self.n
            .saturating_mul(3)
            .saturating_mul(std::mem::size_of::<Complex64>())
    }
}

/// Stable cache key for a planned transform.
///
/// Normalization is applied after the kernel and does not change the radix
/// path, so it is not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanKey {
    pub kind: TransformKind,
    pub n: usize,
}

impl PlanKey {
    #[must_use]
    pub fn new(kind: TransformKind, n: usize) -> Self {
        Self { kind, n }
    }
}

/// Cached plan plus the cost estimates it was admitted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub key: PlanKey,
    pub plan: SplitPlan,
    pub estimated_multiplications: u64,
    pub scratch_bytes: usize,
}

impl PlanMetadata {
    #[must_use]
    pub fn new(key: PlanKey, plan: SplitPlan) -> Self {
        Self {
            estimated_multiplications: plan.estimated_multiplications(),
            scratch_bytes: plan.scratch_bytes(),
            key,
            plan,
        }
    }
}

static SHARED_PLAN_CACHE: OnceLock<Mutex<HashMap<PlanKey, PlanMetadata>>> = OnceLock::new();

fn shared_cache() -> &'static Mutex<HashMap<PlanKey, PlanMetadata>> {
    SHARED_PLAN_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[must_use]
pub fn lookup_shared_plan(key: &PlanKey) -> Option<PlanMetadata> {
    shared_cache()
        .lock()
        .ok()
        .and_then(|cache| cache.get(key).cloned())
}

/// Admit `metadata` into the shared cache. Entries whose plan length differs
/// from the key length are dropped.
pub fn store_shared_plan(metadata: PlanMetadata) {
    if metadata.plan.len() != metadata.key.n {
        return;
    }
    if let Ok(mut cache) = shared_cache().lock() {
        cache.insert(metadata.key.clone(), metadata);
    }
}

#[must_use]
pub fn shared_plan_cache_len() -> usize {
    shared_cache().lock().map_or(0, |cache| cache.len())
}

pub fn clear_shared_plan_cache() {
    if let Ok(mut cache) = shared_cache().lock() {
        cache.clear();
    }
}
