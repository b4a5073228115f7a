use std::cell::Cell;

use chrono::{DateTime, Local, Offset, Utc};
use chrono_tz::Tz;

use super::TimeSample;

/// Injected "now" for renderers.
///
/// Implemented for plain closures so callers can pass `|| sample`.
pub trait TimeSource {
    fn now(&self) -> TimeSample;
}

impl<F> TimeSource for F
where
    F: Fn() -> TimeSample,
{
    #[inline]
    fn now(&self) -> TimeSample {
        self()
    }
}

/// Process-local wall clock (`chrono::Local`).
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeSample {
        TimeSample::from_timelike(&Local::now())
    }
}

/// Wall clock of an IANA zone, daylight-saving rules included.
#[derive(Debug, Copy, Clone)]
pub struct ZoneClock {
    tz: Tz,
}

impl ZoneClock {
    #[inline]
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Looks up a zone by IANA name, e.g. `"America/New_York"`.
    pub fn parse(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(Self::new)
    }

    #[inline]
    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    #[inline]
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Local wall time of this zone at the UTC instant `utc`.
    pub fn at(&self, utc: DateTime<Utc>) -> TimeSample {
        TimeSample::from_timelike(&utc.with_timezone(&self.tz))
    }

    /// Seconds east of UTC in effect at `utc`.
    pub fn offset_at(&self, utc: DateTime<Utc>) -> i32 {
        utc.with_timezone(&self.tz).offset().fix().local_minus_utc()
    }
}

impl TimeSource for ZoneClock {
    fn now(&self) -> TimeSample {
        self.at(Utc::now())
    }
}

/// Manually driven clock for tests and replays. Counts reads.
#[derive(Debug, Default)]
pub struct FixedClock {
    sample: Cell<TimeSample>,
    reads: Cell<u64>,
}

impl FixedClock {
    pub fn new(sample: TimeSample) -> Self {
        Self { sample: Cell::new(sample), reads: Cell::new(0) }
    }

    pub fn set(&self, sample: TimeSample) {
        self.sample.set(sample);
    }

    /// Number of times [`TimeSource::now`] was called.
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.reads.set(self.reads.get() + 1);
        self.sample.get()
    }
}
