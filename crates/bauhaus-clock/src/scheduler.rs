//! Redraw scheduling.
//!
//! One cancellable repeating timer per component. The scheduler never reads
//! the clock itself: every transition takes the caller's `now`, so tests
//! drive it with synthetic instants and the studio drives it from a sleep loop.

use std::time::{Duration, Instant};

use crate::config::TickRate;

/// Identity of one installed timer. Stale handles never fire.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScheduleState {
    Idle,
    Scheduled {
        interval: Duration,
        handle: TimerHandle,
        next_due: Instant,
    },
}

/// `Idle` ⇄ `Scheduled(interval)` with a terminal unmount.
#[derive(Debug)]
pub struct UpdateScheduler {
    state: ScheduleState,
    next_generation: u64,
    unmounted: bool,
    fired: u64,
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self {
            state: ScheduleState::Idle,
            next_generation: 0,
            unmounted: false,
            fired: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// Interval of the live timer, if any.
    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            ScheduleState::Scheduled { interval, .. } => Some(interval),
            ScheduleState::Idle => None,
        }
    }

    /// When the live timer fires next. `None` while idle.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            ScheduleState::Scheduled { next_due, .. } => Some(next_due),
            ScheduleState::Idle => None,
        }
    }

    /// Total fires since construction.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    #[inline]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Applies the cadence/control inputs.
    ///
    /// Any live timer is cancelled first. Controlled time leaves the scheduler
    /// idle; otherwise a fresh timer is installed, first due one interval after
    /// `now`. Ignored after [`unmount`](Self::unmount).
    pub fn configure(&mut self, tick_rate: TickRate, controlled: bool, now: Instant) -> Option<TimerHandle> {
        if self.unmounted {
            log::debug!("scheduler: configure after unmount ignored");
            return None;
        }

        self.cancel();

        if controlled {
            log::debug!("scheduler: time is controlled, staying idle");
            return None;
        }

        let interval = Duration::from_millis(tick_rate.interval_ms());
        let handle = TimerHandle(self.next_generation);
        self.next_generation += 1;

        self.state = ScheduleState::Scheduled { interval, handle, next_due: now + interval };
        log::debug!("scheduler: installed timer #{} every {:?} ({tick_rate})", handle.0, interval);
        Some(handle)
    }

    /// Fires the live timer if it is due at `now`.
    ///
    /// Fires at most once per call. A poll that arrives more than one interval
    /// late re-anchors the schedule on `now` instead of replaying missed fires.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        let ScheduleState::Scheduled { interval, handle, next_due } = &mut self.state else {
            return None;
        };
        if now < *next_due {
            return None;
        }

        let mut due = *next_due + *interval;
        if due <= now {
            log::trace!("scheduler: timer #{} behind by {:?}, re-anchoring", handle.0, now - *next_due);
            due = now + *interval;
        }
        *next_due = due;

        self.fired += 1;
        Some(*handle)
    }

    /// Cancels the live timer, if any. The scheduler stays usable.
    pub fn cancel(&mut self) {
        if let ScheduleState::Scheduled { handle, .. } = self.state {
            log::debug!("scheduler: cancelled timer #{}", handle.0);
        }
        self.state = ScheduleState::Idle;
    }

    /// Terminal teardown: cancels the timer and refuses further schedules.
    pub fn unmount(&mut self) {
        self.cancel();
        self.unmounted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_idle() {
        let s = UpdateScheduler::new();
        assert_eq!(s.state(), ScheduleState::Idle);
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn cadence_selects_interval() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        s.configure(TickRate::Smooth, false, t0);
        assert_eq!(s.interval(), Some(ms(16)));
        s.configure(TickRate::Quartz, false, t0);
        assert_eq!(s.interval(), Some(ms(1000)));
        assert_eq!(s.next_deadline(), Some(t0 + ms(1000)));
    }

    #[test]
    fn controlled_time_stays_idle() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        assert!(s.configure(TickRate::Smooth, true, t0).is_none());
        assert_eq!(s.state(), ScheduleState::Idle);
        assert!(s.poll(t0 + ms(10_000)).is_none());
        assert_eq!(s.fired(), 0);
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        let h = s.configure(TickRate::Quartz, false, t0).unwrap();
        assert!(s.poll(t0 + ms(999)).is_none());
        assert_eq!(s.poll(t0 + ms(1000)), Some(h));
        assert!(s.poll(t0 + ms(1000)).is_none());
        assert_eq!(s.poll(t0 + ms(2005)), Some(h));
        assert_eq!(s.next_deadline(), Some(t0 + ms(3000)));
        assert_eq!(s.fired(), 2);
    }

    #[test]
    fn stall_fires_once_and_reanchors() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        s.configure(TickRate::Smooth, false, t0);
        let late = t0 + ms(500);
        assert!(s.poll(late).is_some());
        assert!(s.poll(late).is_none());
        assert_eq!(s.next_deadline(), Some(late + ms(16)));
        assert_eq!(s.fired(), 1);
    }

    #[test]
    fn switching_cadence_replaces_the_timer() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        let smooth = s.configure(TickRate::Smooth, false, t0).unwrap();
        assert!(s.poll(t0 + ms(16)).is_some());

        let t1 = t0 + ms(20);
        let quartz = s.configure(TickRate::Quartz, false, t1).unwrap();
        assert_ne!(smooth, quartz);
        assert_eq!(
            s.state(),
            ScheduleState::Scheduled { interval: ms(1000), handle: quartz, next_due: t1 + ms(1000) }
        );

        // Old 16 ms deadlines no longer fire.
        for step in 1..62 {
            assert!(s.poll(t1 + ms(step * 16)).is_none(), "fired early at step {step}");
        }
        assert_eq!(s.poll(t1 + ms(1000)), Some(quartz));
        assert_eq!(s.fired(), 2);
    }

    #[test]
    fn unmount_is_terminal() {
        let t0 = Instant::now();
        let mut s = UpdateScheduler::new();
        s.configure(TickRate::Quartz, false, t0).unwrap();
        s.unmount();
        assert!(s.is_unmounted());
        assert!(s.poll(t0 + ms(5000)).is_none());
        assert!(s.configure(TickRate::Quartz, false, t0).is_none());
        assert_eq!(s.state(), ScheduleState::Idle);
    }
}
