//! Output subsystem.
//!
//! Renderers consume `scene` draw streams and turn them into documents.
//! - `svg` writes an SVG string; one writer per shape under `render::shapes`
//! - `raster` rasterizes that SVG to PNG through `resvg`
//!
//! Convention: scene geometry is in logical pixels and maps 1:1 to SVG user
//! units; the document `viewBox` is the viewport.

mod svg;
mod raster;
pub mod shapes;

pub use raster::{rasterize_png, write_png};
pub use svg::{render_svg, SvgOptions};

/// Formats a coordinate compactly: at most 3 decimals, no trailing zeros.
pub(crate) fn num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Escapes text content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(150.0), "150");
        assert_eq!(num(40.5), "40.5");
        assert_eq!(num(0.0508), "0.051");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
