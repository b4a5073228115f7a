use crate::render::num;
use crate::scene::CircleCmd;

use super::{color_attrs, fill_attrs};

/// Writes `<circle>` for a [`CircleCmd`]. Invisible circles are skipped.
pub fn write(out: &mut String, cmd: &CircleCmd) {
    if !cmd.is_visible() {
        return;
    }

    out.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}""#,
        num(cmd.center.x),
        num(cmd.center.y),
        num(cmd.radius)
    ));
    out.push_str(&fill_attrs(&cmd.paint));
    if let Some(border) = &cmd.border {
        out.push_str(&color_attrs("stroke", border.color));
        out.push_str(&format!(r#" stroke-width="{}""#, num(border.width.max(0.0))));
    }
    out.push_str("/>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, Paint};
    use crate::scene::Border;

    #[test]
    fn bordered_circle() {
        let mut out = String::new();
        let cmd = CircleCmd::new(
            Vec2::new(150.0, 150.0),
            9.0,
            Paint::Solid(Color::white()),
            Some(Border::new(2.0, Color::from_rgb_hex(0x86868B))),
        );
        write(&mut out, &cmd);
        assert_eq!(
            out,
            r##"<circle cx="150" cy="150" r="9" fill="#FFFFFF" stroke="#86868B" stroke-width="2"/>"##
        );
    }

    #[test]
    fn zero_radius_is_skipped() {
        let mut out = String::new();
        write(&mut out, &CircleCmd::new(Vec2::zero(), 0.0, Paint::None, None));
        assert!(out.is_empty());
    }
}
