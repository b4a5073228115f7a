use crate::coords::{Rotation, Viewport};
use crate::scene::{DrawCmd, DrawList};

use super::shapes::{circle, line, text};
use super::{escape, num};

/// Document-level SVG settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgOptions {
    /// Passthrough `class` attribute on the root element. Empty = omitted.
    pub class_name: String,
}

/// Writes `list` as a standalone SVG document sized to `viewport`.
///
/// Items are emitted in paint order. Consecutive items sharing a rotation are
/// wrapped in one `<g transform="rotate(..)">` so rigid groups stay rigid.
pub fn render_svg(list: &mut DrawList, viewport: Viewport, opts: &SvgOptions) -> String {
    debug_assert!(viewport.is_valid(), "render_svg: invalid viewport {viewport:?}");

    let w = num(viewport.width);
    let h = num(viewport.height);

    let mut out = String::with_capacity(list.len() * 128 + 256);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#
    ));
    if !opts.class_name.is_empty() {
        out.push_str(&format!(r#" class="{}""#, escape(&opts.class_name)));
    }
    out.push_str(">\n");

    let mut open_group: Option<Rotation> = None;
    for item in list.iter_in_paint_order() {
        if item.rotation != open_group {
            if open_group.is_some() {
                out.push_str("</g>\n");
            }
            if let Some(r) = item.rotation {
                out.push_str(&format!(
                    r#"<g transform="rotate({} {} {})">"#,
                    num(r.degrees),
                    num(r.pivot.x),
                    num(r.pivot.y)
                ));
                out.push('\n');
            }
            open_group = item.rotation;
        }

        match &item.cmd {
            DrawCmd::Circle(cmd) => circle::write(&mut out, cmd),
            DrawCmd::Line(cmd) => line::write(&mut out, cmd),
            DrawCmd::Text(cmd) => text::write(&mut out, cmd),
        }
        out.push('\n');
    }
    if open_group.is_some() {
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    log::trace!("rendered svg: {} items, {} bytes", list.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{LineCap, LineCmd, ZIndex};

    fn needle(list: &mut DrawList) {
        list.push_line(
            ZIndex(0),
            LineCmd::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 0.0), 1.0, Color::black(), LineCap::Round),
        );
    }

    #[test]
    fn document_has_size_and_class() {
        let mut list = DrawList::new();
        let svg = render_svg(
            &mut list,
            Viewport::square(300.0),
            &SvgOptions { class_name: "hero clock".into() },
        );
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="300" height="300" viewBox="0 0 300 300""#));
        assert!(svg.contains(r#"class="hero clock""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_class_is_omitted() {
        let mut list = DrawList::new();
        let svg = render_svg(&mut list, Viewport::square(10.0), &SvgOptions::default());
        assert!(!svg.contains("class="));
    }

    #[test]
    fn rotated_run_shares_one_group() {
        let mut list = DrawList::new();
        needle(&mut list);
        list.push_rotation(Rotation::new(183.0, Vec2::new(5.0, 5.0)));
        needle(&mut list);
        needle(&mut list);
        list.pop_rotation();
        needle(&mut list);

        let svg = render_svg(&mut list, Viewport::square(10.0), &SvgOptions::default());
        assert_eq!(svg.matches("<g ").count(), 1);
        assert_eq!(svg.matches("</g>").count(), 1);
        assert!(svg.contains(r#"transform="rotate(183 5 5)""#));
        assert_eq!(svg.matches("<line ").count(), 4);
    }
}
