//! Hand and face assembly: angles + config → [`ClockScene`].

use bauhaus_engine::coords::{polar_point, Rotation, Vec2, Viewport};
use bauhaus_engine::paint::Color;
use bauhaus_engine::render::{render_svg, SvgOptions};
use bauhaus_engine::scene::{
    Border, CircleCmd, DrawList, LineCap, LineCmd, TextAnchor, TextBaseline, TextCmd, ZIndex,
};

use crate::angles::AngleSet;
use crate::config::{second_hand_color, RenderConfig};
use crate::layout::{layout_numerals, layout_ticks, Numeral, Tick, TICK_COUNT};

const FACE_SCALE: f32 = 0.98;
const HOUR_HAND: f32 = 0.5;
const MINUTE_HAND: f32 = 0.75;
const HOUR_HAND_WIDTH: f32 = 0.025;
const MINUTE_HAND_WIDTH: f32 = 0.02;
const SECOND_TIP: f32 = 0.8;
const SECOND_TAIL: f32 = 0.1;
const SECOND_WIDTH: f32 = 0.008;
const PIVOT_RADIUS: f32 = 0.015;
const TIP_RADIUS: f32 = 0.02;
const CAP_RADIUS: f32 = 0.03;
const ACCENT_STROKE: f32 = 2.0;

const NUMERAL_FAMILY: &str = "Inter, sans-serif";
const NUMERAL_WEIGHT: u16 = 500;

const Z_FACE: ZIndex = ZIndex(0);
const Z_TICKS: ZIndex = ZIndex(1);
const Z_NUMERALS: ZIndex = ZIndex(2);
const Z_HANDS: ZIndex = ZIndex(3);
const Z_SECOND: ZIndex = ZIndex(4);
const Z_CAP: ZIndex = ZIndex(5);

/// The second hand: a fixed vertical needle plus accents, turned as one piece.
///
/// Geometry is recorded at 12 o'clock; `rotation` places it.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondHand {
    pub rotation: Rotation,
    /// From the counterweight tail (below center) to the tip (above).
    pub needle: LineCmd,
    pub pivot: CircleCmd,
    pub tip: CircleCmd,
}

impl SecondHand {
    /// Tip position after rotation.
    pub fn tip_position(&self) -> Vec2 {
        self.rotation.apply(self.needle.to)
    }
}

/// Everything one frame draws. Derived fresh on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockScene {
    pub size: f32,
    pub face: CircleCmd,
    pub ticks: Vec<LineCmd>,
    /// Parallel to `ticks`: whether each mark is an hour tick.
    pub hour_ticks: [bool; TICK_COUNT],
    pub numerals: Vec<TextCmd>,
    pub hour_hand: LineCmd,
    pub minute_hand: LineCmd,
    pub second_hand: SecondHand,
    pub cap: CircleCmd,
}

/// Builds the scene for `angles` under `config`.
pub fn assemble(angles: AngleSet, config: &RenderConfig) -> ClockScene {
    let size = config.size;
    let radius = config.face_radius();
    let center = Vec2::new(radius, radius);
    let palette = config.theme.palette();
    let silver = second_hand_color();

    let face = CircleCmd::solid(center, radius * FACE_SCALE, palette.face);

    let ring = layout_ticks(size);
    let ticks = ring.iter().map(|t: &Tick| tick_line(t, palette.tick)).collect();
    let hour_ticks = ring.map(|t| t.is_hour);

    let numerals = layout_numerals(size, config.hide_numbers)
        .into_iter()
        .map(|n| numeral_text(n, palette.text))
        .collect();

    let hand = |deg: f64, len: f32, width: f32| {
        LineCmd::new(
            center,
            polar_point(center, len, deg as f32),
            width,
            palette.hand,
            LineCap::Round,
        )
    };
    let hour_hand = hand(angles.hour, radius * HOUR_HAND, size * HOUR_HAND_WIDTH);
    let minute_hand = hand(angles.minute, radius * MINUTE_HAND, size * MINUTE_HAND_WIDTH);

    let tip = Vec2::new(center.x, center.y - radius * SECOND_TIP);
    let second_hand = SecondHand {
        rotation: Rotation::new(angles.second as f32, center),
        needle: LineCmd::new(
            Vec2::new(center.x, center.y + size * SECOND_TAIL),
            tip,
            size * SECOND_WIDTH,
            silver,
            LineCap::Round,
        ),
        pivot: accent_ring(center, size * PIVOT_RADIUS, silver),
        tip: CircleCmd::solid(tip, size * TIP_RADIUS, silver),
    };

    let cap = accent_ring(center, size * CAP_RADIUS, silver);

    ClockScene {
        size,
        face,
        ticks,
        hour_ticks,
        numerals,
        hour_hand,
        minute_hand,
        second_hand,
        cap,
    }
}

fn tick_line(t: &Tick, color: Color) -> LineCmd {
    LineCmd::new(t.inner, t.outer, t.width, color, LineCap::Round)
}

fn numeral_text(n: Numeral, color: Color) -> TextCmd {
    TextCmd {
        text: n.label,
        family: NUMERAL_FAMILY.to_string(),
        weight: NUMERAL_WEIGHT,
        size: n.font_size,
        color,
        position: n.position,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Middle,
    }
}

/// White disc with a thin silver rim.
fn accent_ring(center: Vec2, radius: f32, rim: Color) -> CircleCmd {
    CircleCmd::solid(center, radius, Color::white()).with_border(Border::new(ACCENT_STROKE, rim))
}

impl ClockScene {
    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.size)
    }

    /// Records the scene into a draw stream, back to front.
    pub fn write_draw_list(&self, list: &mut DrawList) {
        list.clear();

        list.push_circle(Z_FACE, self.face.clone());
        for t in &self.ticks {
            list.push_line(Z_TICKS, t.clone());
        }
        for n in &self.numerals {
            list.push_text(Z_NUMERALS, n.clone());
        }
        list.push_line(Z_HANDS, self.hour_hand.clone());
        list.push_line(Z_HANDS, self.minute_hand.clone());

        let sh = &self.second_hand;
        list.push_rotation(sh.rotation);
        list.push_line(Z_SECOND, sh.needle.clone());
        list.push_circle(Z_SECOND, sh.pivot.clone());
        list.push_circle(Z_SECOND, sh.tip.clone());
        list.pop_rotation();

        list.push_circle(Z_CAP, self.cap.clone());
    }

    pub fn to_draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        self.write_draw_list(&mut list);
        list
    }

    /// Standalone SVG document; `class_name` lands on the root element.
    pub fn to_svg(&self, class_name: &str) -> String {
        let mut list = self.to_draw_list();
        let opts = SvgOptions { class_name: class_name.to_string() };
        render_svg(&mut list, self.viewport(), &opts)
    }
}
