use std::fmt;

/// Premultiplied sRGB color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// SVG wants straight alpha; use [`Color::to_straight`] or [`Color::to_hex`]
/// at the output edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from a `0xRRGGBB` literal, fully opaque.
    #[inline]
    pub fn from_rgb_hex(rgb: u32) -> Self {
        Self::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// `#RRGGBB` of the straight color; alpha is dropped (see [`Color::opacity`]).
    pub fn to_hex(self) -> String {
        let (r, g, b, _) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", q(r), q(g), q(b))
    }

    /// Straight alpha in `[0, 1]`.
    #[inline]
    pub fn opacity(self) -> f32 {
        self.a.clamp(0.0, 1.0)
    }

    /// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(..)`, `rgba(..)`, `white`, `black`.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        let err = || ParseColorError { input: s.to_string() };

        match s.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::white()),
            "black" => return Ok(Self::black()),
            "transparent" => return Ok(Self::transparent()),
            _ => {}
        }

        if let Some(hex) = s.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(err)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Self::from_srgb_u8(r * 17, g * 17, b * 17, 255)),
                [r1, r0, g1, g0, b1, b0] => {
                    Ok(Self::from_srgb_u8(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255))
                }
                [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::from_srgb_u8(
                    r1 << 4 | r0,
                    g1 << 4 | g0,
                    b1 << 4 | b0,
                    a1 << 4 | a0,
                )),
                _ => Err(err()),
            };
        }

        let lower = s.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let parts: Vec<f32> = body
            .split(',')
            .map(|p| p.trim().parse::<f32>().ok())
            .collect::<Option<_>>()
            .ok_or_else(err)?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::from_straight(r / 255.0, g / 255.0, b / 255.0, 1.0)),
            [r, g, b, a] => Ok(Self::from_straight(r / 255.0, g / 255.0, b / 255.0, *a)),
            _ => Err(err()),
        }
    }
}

/// A color literal that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color literal: {:?}", self.input)
    }
}

impl std::error::Error for ParseColorError {}
