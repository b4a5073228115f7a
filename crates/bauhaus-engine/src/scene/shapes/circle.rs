use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Disc with an optional rim, e.g. a clock face or a hand cap.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, border: Option<Border>) -> Self {
        Self { center, radius, paint, border }
    }

    /// Filled disc without a rim.
    #[inline]
    pub fn solid(center: Vec2, radius: f32, color: Color) -> Self {
        Self::new(center, radius, Paint::Solid(color), None)
    }

    /// Same disc with a rim stroked along its outline.
    #[inline]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// False for degenerate radii; writers skip such circles.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.radius > 0.0 && self.radius.is_finite() && self.center.is_finite()
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, circle: CircleCmd) {
        self.push(z, DrawCmd::Circle(circle));
    }
}
