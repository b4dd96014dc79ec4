use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use mrfft_runtime::{LogEntry, LogLevel, RuntimeMode};
use serde::Serialize;
use thiserror::Error;

use crate::complex::{Complex64, complex_scale};
use crate::helpers::reverse_tail;
use crate::plan::{PlanKey, PlanMetadata, SplitPlan, lookup_shared_plan, store_shared_plan};
use crate::poly::{evaluate_with_plan, interpolate_with_plan};
use crate::{Normalization, TransformKind};

/// Options shared by [`fft`] and [`ifft`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FftOptions {
    pub mode: RuntimeMode,
    pub normalization: Normalization,
    pub check_finite: bool,
}

impl FftOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: RuntimeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn with_check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    fn should_check_finite(&self) -> bool {
        self.check_finite || self.mode.rejects_non_finite()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FftError {
    #[error("invalid shape: {detail}")]
    InvalidShape { detail: &'static str },
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("sample spacing must be finite and greater than zero")]
    NonPositiveSampleSpacing,
    #[error("non-finite input rejected by policy")]
    NonFiniteInput,
}

/// Record of one [`fft`] / [`ifft`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformTrace {
    pub operation_id: String,
    pub kind: TransformKind,
    pub direction: &'static str,
    pub n: usize,
    pub radix_path: Vec<usize>,
    pub plan_cache_hit: bool,
    pub mode: RuntimeMode,
    pub timing_ns: u128,
}

impl TransformTrace {
    #[must_use]
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    /// The trace as a runtime log entry, for callers that keep an `EventLedger`.
    #[must_use]
    pub fn to_log_entry(&self) -> LogEntry {
        let message = format!(
            "{} {} n={} radix_path={:?} plan_cache_hit={} timing_ns={}",
            self.kind.name(),
            self.direction,
            self.n,
            self.radix_path,
            self.plan_cache_hit,
            self.timing_ns,
        );
        LogEntry::new(&self.operation_id, "mrfft_fft::transforms", message)
            .with_level(LogLevel::Debug)
            .with_len(self.n)
            .with_mode(self.mode)
    }
}

/// Traces kept between drains; the oldest are dropped first.
pub const TRACE_LOG_CAPACITY: usize = 4096;

static TRACE_LOG: OnceLock<Mutex<VecDeque<TransformTrace>>> = OnceLock::new();
static OPERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

fn trace_log() -> &'static Mutex<VecDeque<TransformTrace>> {
    TRACE_LOG.get_or_init(|| Mutex::new(VecDeque::with_capacity(TRACE_LOG_CAPACITY)))
}

fn next_operation_id() -> String {
    let next = OPERATION_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("fft-op-{next:016x}")
}

fn record_trace(trace: TransformTrace) {
    if let Ok(mut log) = trace_log().lock() {
        if log.len() == TRACE_LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(trace);
    }
}

/// Drain the traces recorded since the last call, oldest first.
///
/// At most [`TRACE_LOG_CAPACITY`] of the most recent traces are retained.
#[must_use]
pub fn take_transform_traces() -> Vec<TransformTrace> {
    trace_log()
        .lock()
        .map(|mut log| log.drain(..).collect())
        .unwrap_or_default()
}

/// Forward DFT in the canonical bin order: `X_k = Σ_j x_j · e^{-2πijk/n}`.
///
/// Bin `k` holds frequency `k / (n·d)` for sample spacing `d`; bins above
/// `n/2` are the negative frequencies (see [`crate::fftfreq`]).
pub fn fft(input: &[Complex64], options: &FftOptions) -> Result<Vec<Complex64>, FftError> {
    run_complex_1d(TransformKind::Fft, input, options)
}

/// Inverse of [`fft`]: `x_j = (1/n) Σ_k X_k · e^{2πijk/n}` under the default
/// normalization.
pub fn ifft(input: &[Complex64], options: &FftOptions) -> Result<Vec<Complex64>, FftError> {
    run_complex_1d(TransformKind::Ifft, input, options)
}

fn run_complex_1d(
    kind: TransformKind,
    input: &[Complex64],
    options: &FftOptions,
) -> Result<Vec<Complex64>, FftError> {
    validate_finite_complex(input, options)?;

    let n = input.len();
    let inverse = kind == TransformKind::Ifft;
    let key = PlanKey::new(kind, n);
    let (plan, plan_cache_hit) = resolve_plan(key);

    let started = Instant::now();
    // Roots-of-unity evaluation runs at angle +2πk/n; flipping bins 1..n
    // maps it onto the canonical -2πk/n ordering in both directions.
    let raw = if inverse {
        interpolate_with_plan(&plan, input)?
    } else {
        evaluate_with_plan(&plan, input)?
    };
    let mut output = reverse_tail(&raw);
    apply_normalization(&mut output, options.normalization, n, inverse);

    record_trace(TransformTrace {
        operation_id: next_operation_id(),
        kind,
        direction: if inverse { "inverse" } else { "forward" },
        n,
        radix_path: plan.radices().to_vec(),
        plan_cache_hit,
        mode: options.mode,
        timing_ns: started.elapsed().as_nanos(),
    });

    Ok(output)
}

fn resolve_plan(key: PlanKey) -> (SplitPlan, bool) {
    if let Some(cached) = lookup_shared_plan(&key) {
        return (cached.plan, true);
    }
    let plan = SplitPlan::shared(key.n);
    store_shared_plan(PlanMetadata::new(key, plan.clone()));
    (plan, false)
}

fn validate_finite_complex(input: &[Complex64], options: &FftOptions) -> Result<(), FftError> {
    if options.should_check_finite()
        && input
            .iter()
            .any(|&(re, im)| !re.is_finite() || !im.is_finite())
    {
        return Err(FftError::NonFiniteInput);
    }
    Ok(())
}

/// Scale relative to the unnormalized forward / `1/n` inverse pair the
/// kernels produce.
fn normalization_scale(normalization: Normalization, n: usize, inverse: bool) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let n_as_f64 = n as f64;
    match (normalization, inverse) {
        (Normalization::Backward, _) => 1.0,
        (Normalization::Forward, false) => 1.0 / n_as_f64,
        (Normalization::Forward, true) => n_as_f64,
        (Normalization::Ortho, false) => 1.0 / n_as_f64.sqrt(),
        (Normalization::Ortho, true) => n_as_f64.sqrt(),
    }
}

fn apply_normalization(
    data: &mut [Complex64],
    normalization: Normalization,
    n: usize,
    inverse: bool,
) {
    let scale = normalization_scale(normalization, n, inverse);
    if (scale - 1.0).abs() <= f64::EPSILON {
        return;
    }
    for value in data.iter_mut() {
        *value = complex_scale(*value, scale);
    }
}
