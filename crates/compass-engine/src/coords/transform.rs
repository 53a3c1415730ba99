use super::Vec2;

/// 2D affine transform in logical pixels.
///
/// Stored column-major like an SVG `matrix(a b c d e f)`:
///
/// ```text
/// x' = a·x + c·y + e
/// y' = b·x + d·y + f
/// ```
///
/// Composition follows canvas semantics: [`Transform::then_local`] appends an
/// operation that applies to points *before* the existing transform, the same
/// way `save / rotate / translate` stack up on a drawing canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// Rotation about the origin. Positive `degrees` turn clockwise on screen.
    ///
    /// The angle is reduced modulo 360 before the trig evaluation, so any two
    /// angles that differ by a whole number of turns produce the same matrix
    /// bit for bit. Non-finite angles yield a non-finite matrix.
    pub fn rotation(degrees: f32) -> Self {
        let turned = f64::from(degrees.rem_euclid(360.0)).to_radians();
        let (sin, cos) = (turned.sin() as f32, turned.cos() as f32);
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Rotation by `degrees` about `pivot`.
    pub fn rotation_about(degrees: f32, pivot: Vec2) -> Self {
        Transform::translation(pivot.x, pivot.y)
            .then_local(Transform::rotation(degrees))
            .then_local(Transform::translation(-pivot.x, -pivot.y))
    }

    /// Returns `self · local`: `local` is applied to a point first, then `self`.
    #[must_use]
    pub fn then_local(self, local: Transform) -> Transform {
        Transform {
            a: self.a * local.a + self.c * local.b,
            b: self.b * local.a + self.d * local.b,
            c: self.a * local.c + self.c * local.d,
            d: self.b * local.c + self.d * local.d,
            e: self.a * local.e + self.c * local.f + self.e,
            f: self.b * local.e + self.d * local.f + self.f,
        }
    }

    /// Maps a point from local space into the space this transform targets.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Rotation component in degrees, in `(-180, 180]`.
    #[inline]
    pub fn rotation_degrees(self) -> f32 {
        self.b.atan2(self.a).to_degrees()
    }

    #[inline]
    pub fn translation_part(self) -> Vec2 {
        Vec2::new(self.e, self.f)
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Transform::IDENTITY
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|v| v.is_finite())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
