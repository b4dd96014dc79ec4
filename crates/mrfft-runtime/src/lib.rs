#![forbid(unsafe_code)]

//! mrfft runtime: execution modes, structured logging, and the tolerance
//! helpers every transform test compares against.
//!
//! ## Module layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | `mode`      | [`RuntimeMode`] enum (Strict / Hardened)              |
//! | `log`       | [`LogEntry`], [`LogLevel`], [`Outcome`]               |
//! | `ledger`    | [`EventLedger`] bounded FIFO of recent entries        |
//! | `tolerance` | `assert_close*` and [`within_tolerance`]              |

pub mod ledger;
pub mod log;
pub mod mode;
pub mod tolerance;

pub use ledger::EventLedger;
pub use log::{LogEntry, LogLevel, Outcome, now_unix_ms};
pub use mode::RuntimeMode;
pub use tolerance::{
    assert_close, assert_close_complex, assert_close_complex_slice, within_tolerance,
};
