use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching writer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short tag for logs and test assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Line(_) => "line",
            DrawCmd::Text(_) => "text",
        }
    }
}
