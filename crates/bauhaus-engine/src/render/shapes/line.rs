use crate::render::num;
use crate::scene::LineCmd;

use super::color_attrs;

/// Writes `<line>` for a [`LineCmd`].
pub fn write(out: &mut String, cmd: &LineCmd) {
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        num(cmd.from.x),
        num(cmd.from.y),
        num(cmd.to.x),
        num(cmd.to.y)
    ));
    out.push_str(&color_attrs("stroke", cmd.color));
    out.push_str(&format!(
        r#" stroke-width="{}" stroke-linecap="{}"/>"#,
        num(cmd.width),
        cmd.cap.as_svg()
    ));
}
