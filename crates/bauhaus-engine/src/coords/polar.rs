use super::Vec2;

/// Point at `radius` from `center`, `degrees` clockwise from straight up.
///
/// Uses `(sin θ, −cos θ)` so 0° is 12 o'clock in a +Y-down space.
#[inline]
pub fn polar_point(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(center.x + theta.sin() * radius, center.y - theta.cos() * radius)
}

/// Clockwise rotation about a pivot, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Vec2,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f32, pivot: Vec2) -> Self {
        Self { degrees, pivot }
    }

    /// Applies the rotation to `p`.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        let (s, c) = self.degrees.to_radians().sin_cos();
        let d = p - self.pivot;
        // +Y down, so a positive angle turns clockwise on screen.
        Vec2::new(self.pivot.x + d.x * c - d.y * s, self.pivot.y + d.x * s + d.y * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn zero_degrees_points_up() {
        let p = polar_point(Vec2::new(50.0, 50.0), 10.0, 0.0);
        assert!(close(p, Vec2::new(50.0, 40.0)));
    }

    #[test]
    fn ninety_degrees_points_right() {
        let p = polar_point(Vec2::new(50.0, 50.0), 10.0, 90.0);
        assert!(close(p, Vec2::new(60.0, 50.0)));
    }

    #[test]
    fn rotation_matches_polar_convention() {
        let c = Vec2::new(50.0, 50.0);
        let up = Vec2::new(50.0, 40.0);
        for deg in [0.0, 45.0, 90.0, 183.0, 271.5] {
            let rotated = Rotation::new(deg, c).apply(up);
            assert!(close(rotated, polar_point(c, 10.0, deg)), "deg = {deg}");
        }
    }
}
