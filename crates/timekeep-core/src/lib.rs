//! Timekeep Core — the clock capability.
//!
//! This crate defines the `Clock` trait that time-dependent components
//! take as a constructor parameter, plus the production implementation.
//! Deterministic implementations for tests live in `timekeep-test-support`.

pub mod clock;

pub use clock::{Clock, SystemClock};
