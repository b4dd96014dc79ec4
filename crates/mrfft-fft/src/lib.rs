#![forbid(unsafe_code)]

//! Mixed-radix discrete Fourier transform built on roots-of-unity
//! polynomial evaluation.
//!
//! - `poly`: [`evaluate_poly`] / [`values_to_poly`], the recursive kernel and
//!   its conjugation-trick inverse, plus polynomial multiplication and cyclic
//!   convolution
//! - `plan`: [`SplitPlan`] radix paths and the shared plan cache
//! - `transforms`: [`fft`] / [`ifft`] in canonical DFT bin order
//! - `helpers`: frequency bins and reorderings
//! - `distance`: the [`l2`] closeness metric

pub mod complex;
pub mod distance;
pub mod helpers;
pub mod plan;
pub mod poly;
pub mod transforms;

use serde::{Deserialize, Serialize};

pub use complex::{Complex64, roots_of_unity};
pub use distance::{l2, l2_exact, l2_with_mode};
pub use helpers::{fftfreq, fftshift_1d, ifftshift_1d, reverse_tail};
pub use plan::{
    PlanKey, PlanMetadata, SplitPlan, clear_shared_plan_cache, lookup_shared_plan,
    shared_plan_cache_len, store_shared_plan,
};
pub use poly::{
    cyclic_convolve, evaluate_poly, evaluate_poly_with, evaluate_with_plan,
    interpolate_with_plan, multiply_polys, values_to_poly, values_to_poly_with,
};
pub use transforms::{
    FftError, FftOptions, TRACE_LOG_CAPACITY, TransformTrace, fft, ifft, take_transform_traces,
};

/// Scaling conventions for the [`fft`] / [`ifft`] pair, as in NumPy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Normalization {
    /// Forward unscaled, inverse scaled by `1/n`.
    #[default]
    Backward,
    /// Forward scaled by `1/n`, inverse unscaled.
    Forward,
    /// Both scaled by `1/√n`.
    Ortho,
}

/// Adapter entry points that are planned, cached, and traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransformKind {
    Fft,
    Ifft,
}

impl TransformKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fft => "fft",
            Self::Ifft => "ifft",
        }
    }
}
