//! World-clock selector: a fixed city list driving one controlled clock.
//!
//! The selector owns its own 1 s refresh timer and pushes each zone-adjusted
//! sample into a quartz [`ClockRenderer`]; the clock never polls on its own.

use std::time::Instant;

use bauhaus_engine::time::{SystemClock, TimeSample, TimeSource, ZoneClock};

use crate::config::{ClockProps, TickRate};
use crate::renderer::ClockRenderer;
use crate::scheduler::UpdateScheduler;

/// A named place and its zone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// IANA zone identifier.
    pub timezone: &'static str,
}

impl City {
    /// Wall clock for this city's zone. Unknown zones read as UTC.
    pub fn clock(&self) -> ZoneClock {
        ZoneClock::parse(self.timezone).unwrap_or_else(|| {
            log::warn!("unknown zone {:?} for {}, using UTC", self.timezone, self.name);
            ZoneClock::utc()
        })
    }
}

pub const CITIES: [City; 7] = [
    City { name: "San Francisco", timezone: "America/Los_Angeles" },
    City { name: "New York", timezone: "America/New_York" },
    City { name: "London", timezone: "Europe/London" },
    City { name: "Paris", timezone: "Europe/Paris" },
    City { name: "Dubai", timezone: "Asia/Dubai" },
    City { name: "Tokyo", timezone: "Asia/Tokyo" },
    City { name: "Sydney", timezone: "Australia/Sydney" },
];

/// New York.
pub const DEFAULT_CITY: usize = 1;

/// Clock size used by the selector panel.
pub const SELECTOR_CLOCK_SIZE: f32 = 280.0;

/// Finds a city by display name or zone id, case-insensitively.
pub fn find_city(query: &str) -> Option<usize> {
    let q = query.trim();
    CITIES
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(q) || c.timezone.eq_ignore_ascii_case(q))
}

/// Wall-clock conversion for a city. The trusted zone facility plugs in here.
pub trait ZoneResolver {
    fn time_in(&self, city: &City) -> TimeSample;
}

impl<F> ZoneResolver for F
where
    F: Fn(&City) -> TimeSample,
{
    fn time_in(&self, city: &City) -> TimeSample {
        self(city)
    }
}

/// Resolves through the IANA zone database.
#[derive(Debug, Copy, Clone, Default)]
pub struct IanaZones;

impl ZoneResolver for IanaZones {
    fn time_in(&self, city: &City) -> TimeSample {
        city.clock().now()
    }
}

/// City picker bound to a controlled clock.
pub struct CitySelector<R: ZoneResolver> {
    resolver: R,
    selected: usize,
    timer: UpdateScheduler,
    current: TimeSample,
    clock: ClockRenderer<SystemClock>,
}

impl<R: ZoneResolver> CitySelector<R> {
    /// Mounts the selector on [`DEFAULT_CITY`] and starts its refresh timer.
    pub fn new(resolver: R, now: Instant) -> Self {
        let current = resolver.time_in(&CITIES[DEFAULT_CITY]);
        let props = ClockProps::new()
            .size(SELECTOR_CLOCK_SIZE)
            .tick_rate(TickRate::Quartz)
            .time(Some(current));

        let mut clock = ClockRenderer::new(props, SystemClock);
        clock.mount(now);

        let mut timer = UpdateScheduler::new();
        timer.configure(TickRate::Quartz, false, now);

        Self { resolver, selected: DEFAULT_CITY, timer, current, clock }
    }

    /// Switches city, refreshes at once and restarts the 1 s timer.
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if index >= CITIES.len() {
            log::warn!("city index {index} out of range (0..{})", CITIES.len());
            return false;
        }
        self.selected = index;
        self.timer.configure(TickRate::Quartz, false, now);
        self.refresh(now);
        log::info!("selected {} ({})", self.city().name, self.city().timezone);
        true
    }

    /// Advances the refresh timer. Returns `true` when the clock was updated.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now).is_none() {
            return false;
        }
        self.refresh(now);
        true
    }

    fn refresh(&mut self, now: Instant) {
        self.current = self.resolver.time_in(&CITIES[self.selected]);
        self.clock.set_time(self.current, now);
    }

    pub fn unmount(&mut self) {
        self.timer.unmount();
        self.clock.unmount();
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn city(&self) -> &'static City {
        &CITIES[self.selected]
    }

    #[inline]
    pub fn current(&self) -> TimeSample {
        self.current
    }

    #[inline]
    pub fn clock(&self) -> &ClockRenderer<SystemClock> {
        &self.clock
    }

    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// `HH:MM` caption shown under the clock.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.current.hour, self.current.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::{TimeZone, Utc};

    /// Resolver pinned to 2024-07-01 12:00 UTC.
    fn july_noon(city: &City) -> TimeSample {
        city.clock().at(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn city_table() {
        assert_eq!(CITIES.len(), 7);
        assert_eq!(CITIES[DEFAULT_CITY].name, "New York");
        assert_eq!(find_city("tokyo"), Some(5));
        assert_eq!(find_city("Europe/Paris"), Some(3));
        assert_eq!(find_city("Atlantis"), None);
        for city in &CITIES {
            assert!(ZoneClock::parse(city.timezone).is_some(), "{}", city.timezone);
        }
    }

    #[test]
    fn summer_time_is_applied() {
        let july = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let january = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let ny = CITIES[DEFAULT_CITY].clock();
        assert_eq!(ny.offset_at(july), -4 * 3600);
        assert_eq!(ny.at(july), TimeSample::hms(8, 0, 0));

        let sydney = CITIES[6].clock();
        assert_eq!(sydney.offset_at(january), 11 * 3600);
        assert_eq!(sydney.at(january), TimeSample::hms(23, 0, 0));

        let london = CITIES[2].clock();
        assert_eq!(london.at(july), TimeSample::hms(13, 0, 0));
        assert_eq!(london.at(january), TimeSample::hms(12, 0, 0));
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        let atlantis = City { name: "Atlantis", timezone: "Ocean/Atlantis" };
        let noon = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(atlantis.clock().at(noon), TimeSample::hms(12, 0, 0));
    }

    #[test]
    fn selector_starts_on_new_york_with_controlled_quartz_clock() {
        let t0 = Instant::now();
        let sel = CitySelector::new(july_noon, t0);
        assert_eq!(sel.city().timezone, "America/New_York");
        assert_eq!(sel.current(), TimeSample::hms(8, 0, 0));
        assert_eq!(sel.label(), "08:00");

        let clock = sel.clock();
        assert!(clock.props().is_controlled());
        assert_eq!(clock.props().tick_rate, TickRate::Quartz);
        assert_eq!(clock.props().size, SELECTOR_CLOCK_SIZE);
        assert_eq!(clock.scheduler().interval(), None);
        assert_eq!(clock.angles().hour, 240.0);
    }

    #[test]
    fn selecting_refreshes_immediately() {
        let t0 = Instant::now();
        let mut sel = CitySelector::new(july_noon, t0);
        assert!(sel.select(5, t0 + Duration::from_millis(300)));
        assert_eq!(sel.city().name, "Tokyo");
        assert_eq!(sel.label(), "21:00");
        assert_eq!(sel.clock().angles().hour, 270.0);
        // Timer restarted from the selection instant.
        assert_eq!(sel.next_deadline(), Some(t0 + Duration::from_millis(1300)));
        assert!(!sel.select(99, t0));
        assert_eq!(sel.selected(), 5);
    }

    #[test]
    fn refreshes_once_a_second() {
        use std::cell::Cell;

        let t0 = Instant::now();
        let calls = Cell::new(0u8);
        let resolver = |_: &City| {
            calls.set(calls.get() + 1);
            TimeSample::hms(0, 0, calls.get())
        };
        let mut sel = CitySelector::new(resolver, t0);
        assert!(!sel.tick(t0 + Duration::from_millis(999)));
        assert!(sel.tick(t0 + Duration::from_millis(1000)));
        assert_eq!(sel.current(), TimeSample::hms(0, 0, 2));

        sel.unmount();
        assert!(!sel.tick(t0 + Duration::from_secs(10)));
    }
}
