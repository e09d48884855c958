//! Deterministic `Clock` implementations for tests.
//!
//! Each double here is a concrete, statically typed variant of the
//! `timekeep_core::Clock` trait — substituted through the consumer's
//! constructor, never through globals or a runtime-generated mock.

mod clock;

pub use clock::{FixedClock, ManualClock, SequenceClock};
