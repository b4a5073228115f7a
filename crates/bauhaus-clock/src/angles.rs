//! Time → hand angles.
//!
//! Degrees, clockwise from 12 o'clock. Each hand carries the fractional
//! progress of the hands below it so the sweep is continuous.

use bauhaus_engine::time::TimeSample;

use crate::config::TickRate;

/// Hand angles in degrees, each in `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AngleSet {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Derives hand angles for `t`.
///
/// Only `Smooth` lets milliseconds into the second hand; the minute and hour
/// hands always carry the (possibly whole) seconds below them. Hours fold
/// mod 12, so 00:xx and 12:xx share an hour angle.
pub fn derive_angles(t: TimeSample, cadence: TickRate) -> AngleSet {
    let fraction = match cadence {
        TickRate::Smooth => t.millisecond as f64 / 1000.0,
        TickRate::Quartz => 0.0,
    };

    let seconds = t.second as f64 + fraction;
    let minutes = t.minute as f64 + seconds / 60.0;
    let hours = (t.hour % 12) as f64 + minutes / 60.0;

    AngleSet {
        hour: wrap(hours * 30.0),
        minute: wrap(minutes * 6.0),
        second: wrap(seconds * 6.0),
    }
}

/// Keeps out-of-contract samples on the dial.
#[inline]
fn wrap(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn three_oclock_quartz() {
        let a = derive_angles(TimeSample::hms(3, 0, 0), TickRate::Quartz);
        assert_eq!(a, AngleSet { hour: 90.0, minute: 0.0, second: 0.0 });
    }

    #[test]
    fn half_past_midnight_quartz() {
        let a = derive_angles(TimeSample::hms(0, 30, 0), TickRate::Quartz);
        assert!(approx(a.hour, 15.0));
        assert!(approx(a.minute, 180.0));
    }

    #[test]
    fn noon_thirty_and_a_half_seconds_smooth() {
        let a = derive_angles(TimeSample::new(12, 0, 30, 500), TickRate::Smooth);
        assert!(approx(a.second, 183.0));
        assert!(approx(a.minute, 3.05));
        // 12 folds to 0; the hour hand carries 30.5 s: (30.5 / 3600) * 30.
        assert!(approx(a.hour, 30.5 / 3600.0 * 30.0));
        assert!(a.hour > 0.254 && a.hour < 0.2542);
    }

    #[test]
    fn quartz_ignores_milliseconds() {
        let t = TimeSample::new(7, 41, 12, 999);
        let q = derive_angles(t, TickRate::Quartz);
        assert_eq!(q.second, 12.0 * 6.0);
        let s = derive_angles(t, TickRate::Smooth);
        assert!(approx(s.second, 12.999 * 6.0));
    }

    #[test]
    fn midnight_and_noon_share_hour_angle() {
        for (m, s) in [(0, 0), (17, 42), (59, 59)] {
            let a = derive_angles(TimeSample::hms(0, m, s), TickRate::Quartz);
            let b = derive_angles(TimeSample::hms(12, m, s), TickRate::Quartz);
            assert_eq!(a.hour, b.hour);
        }
    }

    #[test]
    fn every_sample_stays_on_the_dial() {
        for hour in 0..24 {
            for minute in 0..60 {
                for (second, ms) in [(0, 0), (30, 500), (59, 999)] {
                    let t = TimeSample::new(hour, minute, second, ms);
                    for cadence in [TickRate::Smooth, TickRate::Quartz] {
                        let a = derive_angles(t, cadence);
                        for v in [a.hour, a.minute, a.second] {
                            assert!((0.0..360.0).contains(&v), "{t} {cadence:?} -> {a:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn hour_hand_is_continuous_across_the_hour() {
        let before = derive_angles(TimeSample::new(4, 59, 59, 999), TickRate::Smooth);
        let after = derive_angles(TimeSample::hms(5, 0, 0), TickRate::Smooth);
        assert!((after.hour - before.hour).abs() < 1e-3);
        assert!(approx(after.hour, 150.0));
    }

    #[test]
    fn hour_hand_wraps_only_at_twelve() {
        let before = derive_angles(TimeSample::new(11, 59, 59, 999), TickRate::Smooth);
        let after = derive_angles(TimeSample::hms(12, 0, 0), TickRate::Smooth);
        assert!(before.hour > 359.99);
        assert_eq!(after.hour, 0.0);
    }
}
