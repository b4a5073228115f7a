//! Time subsystem.
//!
//! Wall-clock sampling decoupled from the system clock:
//! - `TimeSample` is the value a renderer consumes, one per tick
//! - `TimeSource` is the injected "now" so renderers are testable without waiting
//!
//! Scheduling (when to sample) lives with the component that owns the timer.

mod sample;
mod source;

pub use sample::{ParseTimeError, TimeSample};
pub use source::{FixedClock, SystemClock, TimeSource, ZoneClock};
