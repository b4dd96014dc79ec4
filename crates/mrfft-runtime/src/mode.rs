#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict and Hardened transform execution.

use serde::{Deserialize, Serialize};

/// Operational mode governing how much input validation a transform performs.
///
/// - **Strict**: run the textbook transform on whatever samples arrive; NaN and
///   infinities propagate through the arithmetic unchanged.
/// - **Hardened**: reject non-finite samples before any work is done, and
///   treat length mismatches in distance checks as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    /// Whether sample finiteness is checked regardless of per-call options.
    #[must_use]
    pub const fn rejects_non_finite(self) -> bool {
        matches!(self, Self::Hardened)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Hardened => "Hardened",
        }
    }
}
