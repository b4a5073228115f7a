use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroke end-cap style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_svg(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) -> Self {
        Self { from, to, width, color, cap }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, line: LineCmd) {
        self.push(z, DrawCmd::Line(line));
    }
}
