//! Per-shape SVG writers.

pub mod circle;
pub mod line;
pub mod text;

use crate::paint::{Color, Paint};

use super::num;

/// ` fill=".."` (+ ` fill-opacity` when translucent).
pub(crate) fn fill_attrs(paint: &Paint) -> String {
    match paint {
        Paint::None => r#" fill="none""#.to_string(),
        Paint::Solid(c) => color_attrs("fill", *c),
    }
}

/// ` {name}="#RRGGBB"` (+ ` {name}-opacity` when translucent).
pub(crate) fn color_attrs(name: &str, color: Color) -> String {
    let mut s = format!(r#" {name}="{}""#, color.to_hex());
    if color.opacity() < 1.0 {
        s.push_str(&format!(r#" {name}-opacity="{}""#, num(color.opacity())));
    }
    s
}
