//! Paint model shared between the scene and the renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources for fills and strokes
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ParseColorError};

/// Paint source for filling geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    /// Leave the interior unpainted (`fill="none"`).
    None,
    Solid(Color),
}
