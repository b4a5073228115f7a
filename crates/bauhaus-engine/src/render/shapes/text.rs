use crate::render::{escape, num};
use crate::scene::{TextAnchor, TextBaseline, TextCmd};

use super::color_attrs;

/// Writes `<text>` for a [`TextCmd`].
pub fn write(out: &mut String, cmd: &TextCmd) {
    let anchor = match cmd.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };

    out.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="{anchor}""#,
        num(cmd.position.x),
        num(cmd.position.y)
    ));
    if cmd.baseline == TextBaseline::Middle {
        out.push_str(r#" dominant-baseline="middle""#);
    }
    out.push_str(&color_attrs("fill", cmd.color));
    out.push_str(&format!(
        r#" font-size="{}" font-family="{}" font-weight="{}">{}</text>"#,
        num(cmd.size),
        escape(&cmd.family),
        cmd.weight,
        escape(&cmd.text)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn centered_label() {
        let mut out = String::new();
        let cmd = TextCmd {
            text: "12".into(),
            family: "Inter, sans-serif".into(),
            weight: 500,
            size: 24.0,
            color: Color::from_rgb_hex(0x1D1D1F),
            position: Vec2::new(150.0, 75.0),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
        };
        write(&mut out, &cmd);
        assert_eq!(
            out,
            r##"<text x="150" y="75" text-anchor="middle" dominant-baseline="middle" fill="#1D1D1F" font-size="24" font-family="Inter, sans-serif" font-weight="500">12</text>"##
        );
    }
}
