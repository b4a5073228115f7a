//! Dial geometry: the 60-tick ring and the partial numeral set.
//!
//! All lengths are fractions of the clock `size` so the face scales freely.

use bauhaus_engine::coords::{polar_point, Vec2};

/// Ticks around the dial; one per minute.
pub const TICK_COUNT: usize = 60;

/// Hours that get a numeral. The gaps are part of the design.
pub const NUMERAL_HOURS: [u8; 7] = [12, 2, 3, 5, 6, 9, 10];

const TICK_INSET: f32 = 0.15;
const HOUR_TICK_LEN: f32 = 0.08;
const MINUTE_TICK_LEN: f32 = 0.04;
const HOUR_TICK_WIDTH: f32 = 0.008;
const MINUTE_TICK_WIDTH: f32 = 0.004;
const NUMERAL_INSET: f32 = 0.25;
const NUMERAL_FONT: f32 = 0.08;

/// One dial mark.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    pub index: usize,
    /// Every fifth tick marks an hour and is longer and thicker.
    pub is_hour: bool,
    /// Degrees clockwise from 12.
    pub angle: f32,
    pub inner: Vec2,
    pub outer: Vec2,
    pub width: f32,
}

impl Tick {
    #[inline]
    pub fn length(&self) -> f32 {
        self.inner.distance(self.outer)
    }
}

/// One hour label.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub hour: u8,
    pub label: String,
    /// Center of the label (middle anchor, middle baseline).
    pub position: Vec2,
    pub font_size: f32,
}

/// Places the 60 tick marks for a clock of `size`.
pub fn layout_ticks(size: f32) -> [Tick; TICK_COUNT] {
    let center = Vec2::new(size * 0.5, size * 0.5);
    let inner_r = size * 0.5 - size * TICK_INSET;

    std::array::from_fn(|index| {
        let is_hour = index % 5 == 0;
        let angle = index as f32 * 6.0;
        let (len, width) = if is_hour {
            (size * HOUR_TICK_LEN, size * HOUR_TICK_WIDTH)
        } else {
            (size * MINUTE_TICK_LEN, size * MINUTE_TICK_WIDTH)
        };

        Tick {
            index,
            is_hour,
            angle,
            inner: polar_point(center, inner_r, angle),
            outer: polar_point(center, inner_r + len, angle),
            width,
        }
    })
}

/// Places the numerals, or none when `hide_numbers` is set.
pub fn layout_numerals(size: f32, hide_numbers: bool) -> Vec<Numeral> {
    if hide_numbers {
        return Vec::new();
    }

    let center = Vec2::new(size * 0.5, size * 0.5);
    let radius = size * 0.5 - size * NUMERAL_INSET;

    NUMERAL_HOURS
        .iter()
        .map(|&hour| Numeral {
            hour,
            label: hour.to_string(),
            position: polar_point(center, radius, hour as f32 * 30.0),
            font_size: size * NUMERAL_FONT,
        })
        .collect()
}
