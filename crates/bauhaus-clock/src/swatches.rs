//! Night-mode lume swatches, drawn as a strip of glowing pills.

use bauhaus_engine::coords::{Vec2, Viewport};
use bauhaus_engine::paint::Color;
use bauhaus_engine::render::{render_svg, SvgOptions};
use bauhaus_engine::scene::{CircleCmd, DrawList, LineCap, LineCmd, TextAnchor, TextBaseline, TextCmd, ZIndex};

/// A named lume color.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const SWATCHES: [Swatch; 13] = [
    Swatch { name: "Red", hex: "#FF3B30" },
    Swatch { name: "Amber", hex: "#FF9500" },
    Swatch { name: "Lavender", hex: "#AF52DE" },
    Swatch { name: "Rose", hex: "#FF2D55" },
    Swatch { name: "Seafoam", hex: "#30D158" },
    Swatch { name: "Sky", hex: "#007AFF" },
    Swatch { name: "Swiss BGW9", hex: "#5AC8FA" },
    Swatch { name: "Peach", hex: "#FFCC00" },
    Swatch { name: "Tritium Green", hex: "#34C759" },
    Swatch { name: "Aqua", hex: "#32ADE6" },
    Swatch { name: "Yellow", hex: "#FFD60A" },
    Swatch { name: "Lime", hex: "#A4C400" },
    Swatch { name: "Ice Blue", hex: "#66D4CF" },
];

const PILL_WIDTH: f32 = 48.0;
const PILL_GAP: f32 = 16.0;
const STRIP_HEIGHT: f32 = 256.0;
const LABEL_ROW: f32 = 28.0;
const LABEL_SIZE: f32 = 10.0;

/// Pill height for the `i`-th swatch: a gentle wave across the strip.
#[inline]
pub fn pill_height(i: usize) -> f32 {
    140.0 + (i as f32).sin() * 40.0
}

/// Records the strip: black backdrop, one bottom-aligned pill per swatch, and
/// a caption under every third pill.
pub fn swatch_strip(list: &mut DrawList) -> Viewport {
    list.clear();

    let n = SWATCHES.len() as f32;
    let width = n * PILL_WIDTH + (n + 1.0) * PILL_GAP;
    let viewport = Viewport::new(width, STRIP_HEIGHT + LABEL_ROW);

    // Black page: a disc larger than the viewport, clipped by it.
    list.push_circle(ZIndex(0), CircleCmd::solid(viewport.center(), width.max(viewport.height), Color::black()));

    let baseline = STRIP_HEIGHT - PILL_GAP;
    let radius = PILL_WIDTH * 0.5;
    let label_color = Color::from_rgb_hex(0x4B5563);

    for (i, swatch) in SWATCHES.iter().enumerate() {
        let color = match Color::parse(swatch.hex) {
            Ok(c) => c,
            Err(err) => {
                log::warn!("skipping swatch {}: {err}", swatch.name);
                continue;
            }
        };

        let x = PILL_GAP + radius + i as f32 * (PILL_WIDTH + PILL_GAP);
        let h = pill_height(i);
        // Round caps add `radius` at each end; pull the endpoints in to keep
        // the visible pill exactly `h` tall.
        let bottom = Vec2::new(x, baseline - radius);
        let top = Vec2::new(x, baseline - h + radius);

        // Soft glow under the pill.
        let (r, g, b, _) = color.to_straight();
        let glow = Color::from_straight(r, g, b, 0.25);
        list.push_line(ZIndex(1), LineCmd::new(bottom, top, PILL_WIDTH + 12.0, glow, LineCap::Round));
        list.push_line(ZIndex(2), LineCmd::new(bottom, top, PILL_WIDTH, color, LineCap::Round));

        if i % 3 == 0 {
            list.push_text(
                ZIndex(3),
                TextCmd {
                    text: swatch.name.to_string(),
                    family: "Inter, sans-serif".to_string(),
                    weight: 500,
                    size: LABEL_SIZE,
                    color: label_color,
                    position: Vec2::new(x, STRIP_HEIGHT + LABEL_ROW * 0.5),
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Middle,
                },
            );
        }
    }

    viewport
}

/// The strip as a standalone SVG document.
pub fn swatch_svg() -> String {
    let mut list = DrawList::new();
    let viewport = swatch_strip(&mut list);
    render_svg(&mut list, viewport, &SvgOptions { class_name: "night-mode".into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bauhaus_engine::scene::DrawCmd;

    #[test]
    fn every_swatch_parses() {
        for s in SWATCHES {
            assert_eq!(Color::parse(s.hex).unwrap().to_hex(), s.hex, "{}", s.name);
        }
    }

    #[test]
    fn heights_wave_between_100_and_180() {
        assert_eq!(pill_height(0), 140.0);
        for i in 0..SWATCHES.len() {
            let h = pill_height(i);
            assert!((100.0..=180.0).contains(&h));
        }
    }

    #[test]
    fn strip_has_a_pill_per_swatch_and_sparse_labels() {
        let mut list = DrawList::new();
        let vp = swatch_strip(&mut list);
        assert!(vp.is_valid());
        // glow + pill per swatch
        assert_eq!(list.count_kind("line"), 2 * SWATCHES.len());
        let labels: Vec<&str> = list
            .items()
            .iter()
            .filter_map(|it| match &it.cmd {
                DrawCmd::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Red", "Rose", "Swiss BGW9", "Aqua", "Ice Blue"]);
    }

    #[test]
    fn visible_pill_height_matches_wave() {
        let mut list = DrawList::new();
        swatch_strip(&mut list);
        let pill = list
            .items()
            .iter()
            .filter(|it| it.key.z == ZIndex(2))
            .nth(2)
            .and_then(|it| match &it.cmd {
                DrawCmd::Line(l) => Some(l.clone()),
                _ => None,
            })
            .unwrap();
        assert!((pill.length() + pill.width - pill_height(2)).abs() < 1e-3);
    }

    #[test]
    fn svg_document() {
        let svg = swatch_svg();
        assert!(svg.contains(r#"class="night-mode""#));
        assert!(svg.contains(r##"stroke="#FF3B30""##));
    }
}
