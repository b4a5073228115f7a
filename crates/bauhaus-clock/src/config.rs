use std::fmt;
use std::str::FromStr;

use bauhaus_engine::paint::Color;
use bauhaus_engine::time::TimeSample;

/// Face color scheme.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Update cadence.
///
/// `Smooth` redraws at ~60 Hz and sweeps the second hand through sub-second
/// fractions. `Quartz` redraws once a second and steps whole seconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum TickRate {
    #[default]
    Smooth,
    Quartz,
}

impl TickRate {
    /// Redraw interval in milliseconds.
    #[inline]
    pub const fn interval_ms(self) -> u64 {
        match self {
            TickRate::Smooth => 16,
            TickRate::Quartz => 1000,
        }
    }
}

/// Colors a theme resolves to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub hand: Color,
    pub face: Color,
    pub text: Color,
    pub tick: Color,
}

/// Silver used for the second hand and its accents under every theme.
pub fn second_hand_color() -> Color {
    Color::from_rgb_hex(0x86868B)
}

const INK: u32 = 0x1D1D1F;
const NIGHT_FACE: u32 = 0x161617;

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                hand: Color::from_rgb_hex(INK),
                face: Color::white(),
                text: Color::from_rgb_hex(INK),
                tick: Color::from_rgb_hex(INK),
            },
            Theme::Dark => Palette {
                hand: Color::white(),
                face: Color::from_rgb_hex(NIGHT_FACE),
                text: Color::white(),
                tick: Color::from_straight(1.0, 1.0, 1.0, 0.8),
            },
        }
    }
}

/// Geometry and styling inputs for one render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Footprint (diameter) in pixels. Must be positive.
    pub size: f32,
    pub theme: Theme,
    pub hide_numbers: bool,
    pub tick_rate: TickRate,
}

impl Default for RenderConfig {
    fn default() -> Self {
        ClockProps::default().render_config()
    }
}

impl RenderConfig {
    #[inline]
    pub fn face_radius(&self) -> f32 {
        self.size * 0.5
    }
}

/// Full input contract of the clock component.
///
/// ```
/// # use bauhaus_clock::prelude::*;
/// let props = ClockProps::new().size(120.0).theme(Theme::Dark).tick_rate(TickRate::Quartz);
/// assert_eq!(props.render_config().size, 120.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClockProps {
    pub size: f32,
    /// Passthrough class for the root SVG element. No effect on geometry.
    pub class_name: String,
    pub hide_numbers: bool,
    pub tick_rate: TickRate,
    pub theme: Theme,
    /// Controlled time. When set the component never polls its clock.
    pub time: Option<TimeSample>,
}

impl Default for ClockProps {
    fn default() -> Self {
        Self {
            size: 300.0,
            class_name: String::new(),
            hide_numbers: false,
            tick_rate: TickRate::Smooth,
            theme: Theme::Light,
            time: None,
        }
    }
}

impl ClockProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, v: f32) -> Self {
        debug_assert!(v > 0.0 && v.is_finite(), "clock size must be positive, got {v}");
        self.size = v;
        self
    }
    pub fn class_name(mut self, v: impl Into<String>) -> Self { self.class_name = v.into(); self }
    pub fn hide_numbers(mut self, v: bool) -> Self { self.hide_numbers = v; self }
    pub fn tick_rate(mut self, v: TickRate) -> Self { self.tick_rate = v; self }
    pub fn theme(mut self, v: Theme) -> Self { self.theme = v; self }
    pub fn time(mut self, v: Option<TimeSample>) -> Self { self.time = v; self }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.time.is_some()
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            size: self.size,
            theme: self.theme,
            hide_numbers: self.hide_numbers,
            tick_rate: self.tick_rate,
        }
    }
}

// ── string forms ──────────────────────────────────────────────────────────

/// Unknown enumerated option name (theme, tick rate).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub input: String,
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseOptionError {}

impl FromStr for Theme {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseOptionError { kind: "theme", input: s.to_string() }),
        }
    }
}

impl FromStr for TickRate {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(TickRate::Smooth),
            "quartz" => Ok(TickRate::Quartz),
            _ => Err(ParseOptionError { kind: "tick rate", input: s.to_string() }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TickRate::Smooth => "smooth",
            TickRate::Quartz => "quartz",
        })
    }
}
