use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

/// Immutable wall-clock snapshot: the time of day a frame is rendered for.
///
/// Ranges: `hour` 0–23, `minute` 0–59, `second` 0–59, `millisecond` 0–999.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl TimeSample {
    /// Creates a sample. Out-of-range fields are a caller bug (debug-asserted).
    #[inline]
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        debug_assert!(hour < 24, "hour out of range: {hour}");
        debug_assert!(minute < 60, "minute out of range: {minute}");
        debug_assert!(second < 60, "second out of range: {second}");
        debug_assert!(millisecond < 1000, "millisecond out of range: {millisecond}");
        Self { hour, minute, second, millisecond }
    }

    /// Whole-second sample.
    #[inline]
    pub fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(hour, minute, second, 0)
    }

    /// Extracts the time of day from any chrono time value.
    ///
    /// A leap second (`nanosecond() >= 1e9`) is folded into :59.999.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        let (second, millisecond) = if t.nanosecond() >= 1_000_000_000 {
            (t.second().min(59), 999)
        } else {
            (t.second().min(59), t.nanosecond() / 1_000_000)
        };
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: second as u8,
            millisecond: millisecond as u16,
        }
    }

    /// `true` when every field is in range.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60 && self.millisecond < 1000
    }

    /// Parses `HH:MM`, `HH:MM:SS` or `HH:MM:SS.mmm` (1–3 fraction digits).
    pub fn parse(s: &str) -> Result<Self, ParseTimeError> {
        let input = s.trim();
        let err = |reason: &'static str| ParseTimeError { input: input.to_string(), reason };

        let (clock, frac) = match input.split_once('.') {
            Some((c, f)) => (c, Some(f)),
            None => (input, None),
        };

        let mut fields = clock.split(':');
        let mut field = |name: &'static str, max: u8, required: bool| -> Result<u8, ParseTimeError> {
            match fields.next() {
                None if !required => Ok(0),
                None => Err(err(name)),
                Some(p) => {
                    if p.is_empty() || p.len() > 2 || !p.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(err(name));
                    }
                    let v: u8 = p.parse().map_err(|_| err(name))?;
                    if v > max { Err(err(name)) } else { Ok(v) }
                }
            }
        };

        let hour = field("hour must be 0-23", 23, true)?;
        let minute = field("minute must be 0-59", 59, true)?;
        let second = field("second must be 0-59", 59, false)?;
        if fields.next().is_some() {
            return Err(err("too many ':' separated fields"));
        }
        if frac.is_some() && clock.matches(':').count() != 2 {
            return Err(err("fraction requires seconds"));
        }

        let millisecond = match frac {
            None => 0,
            Some(f) => {
                if f.is_empty() || f.len() > 3 || !f.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err("fraction must be 1-3 digits"));
                }
                let scale = 10u16.pow(3 - f.len() as u32);
                f.parse::<u16>().map_err(|_| err("fraction must be 1-3 digits"))? * scale
            }
        };

        Ok(Self { hour, minute, second, millisecond })
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl FromStr for TimeSample {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A time-of-day literal that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTimeError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseTimeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn parses_all_precisions() {
        assert_eq!(TimeSample::parse("03:00").unwrap(), TimeSample::hms(3, 0, 0));
        assert_eq!(TimeSample::parse("00:30:00").unwrap(), TimeSample::hms(0, 30, 0));
        assert_eq!(TimeSample::parse("12:00:30.500").unwrap(), TimeSample::new(12, 0, 30, 500));
        assert_eq!(TimeSample::parse("12:00:30.5").unwrap(), TimeSample::new(12, 0, 30, 500));
        assert_eq!(" 7:05:09.07 ".parse::<TimeSample>().unwrap(), TimeSample::new(7, 5, 9, 70));
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        for bad in ["24:00", "12:60", "12:00:60", "12", "12:00:00:00", "ab:cd", "12:00.5", "1:2:3.1234", ""] {
            assert!(TimeSample::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeSample::new(3, 4, 5, 6).to_string(), "03:04:05.006");
    }

    #[test]
    fn from_chrono_time() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 58, 250).unwrap();
        assert_eq!(TimeSample::from_timelike(&t), TimeSample::new(23, 59, 58, 250));
    }

    #[test]
    fn leap_second_folds_into_last_millisecond() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(TimeSample::from_timelike(&t), TimeSample::new(23, 59, 59, 999));
    }
}
