//! Bauhaus engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the clock component:
//! geometry, paint, the draw stream, SVG/PNG output and time sampling.

pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
