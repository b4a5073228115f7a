//! Coordinate and geometry types shared by the scene and the renderers.
//!
//! Canonical space:
//! - Logical pixels (one SVG user unit)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees measured clockwise from 12 o'clock (straight up).

mod polar;
mod vec2;
mod viewport;

pub use polar::{polar_point, Rotation};
pub use vec2::Vec2;
pub use viewport::Viewport;
