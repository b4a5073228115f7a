//! Bauhaus clock component on top of `bauhaus-engine`.
//!
//! # Quick start
//!
//! ```
//! use std::time::Instant;
//! use bauhaus_clock::prelude::*;
//!
//! let mut clock = ClockRenderer::new(
//!     ClockProps::new().size(200.0).tick_rate(TickRate::Quartz),
//!     SystemClock,
//! );
//! clock.mount(Instant::now());
//! // Call `clock.tick(now)` from your loop; it returns `true` on a new frame.
//! let svg = clock.svg();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! Pipeline per frame: [`renderer::resolve_time`] → [`angles::derive_angles`]
//! → [`layout`] → [`face::assemble`] → SVG.

pub mod angles;
pub mod cities;
pub mod config;
pub mod face;
pub mod layout;
pub mod renderer;
pub mod scheduler;
pub mod swatches;

pub use renderer::ClockRenderer;

/// Everything needed to drive a clock.
pub mod prelude {
    pub use crate::angles::{derive_angles, AngleSet};
    pub use crate::cities::{City, CitySelector, IanaZones, ZoneResolver, CITIES};
    pub use crate::config::{ClockProps, Palette, RenderConfig, Theme, TickRate};
    pub use crate::face::{assemble, ClockScene, SecondHand};
    pub use crate::layout::{layout_numerals, layout_ticks, Numeral, Tick};
    pub use crate::renderer::{resolve_time, ClockRenderer};
    pub use crate::scheduler::{ScheduleState, TimerHandle, UpdateScheduler};

    pub use bauhaus_engine::time::{FixedClock, SystemClock, TimeSample, TimeSource, ZoneClock};
}
