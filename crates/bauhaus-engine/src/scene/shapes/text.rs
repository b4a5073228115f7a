use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Horizontal anchor of a text run relative to its position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical alignment of a text run relative to its position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// CSS font-family list.
    pub family: String,
    pub weight: u16,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point in logical pixels.
    pub position: Vec2,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, z: ZIndex, text: TextCmd) {
        self.push(z, DrawCmd::Text(text));
    }
}
