//! 2D affine transform helpers layered on top of `glam`.
//!
//! Attachment kinematics composes chains of `Affine2` values and then needs
//! the result back as position + angle + scale. The decomposition has to cope
//! with horizontally flipped sprites (negative `scale.x`), which show up as a
//! negative determinant of the linear part.

use glam::{Affine2, Vec2};

/// A transform split back into its translate/rotate/scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub translation: Vec2,
    pub angle: f32,
    pub scale: Vec2,
}

/// Splits an affine transform into translation, rotation angle, and scale.
///
/// A negative determinant of the 2x2 linear block means the transform carries
/// a horizontal flip. In that case the diagonal is negated before the angle
/// and column norms are read off, and the flip is carried out again as a
/// negative `scale.x` with the angle sign inverted, so that
/// `translate * rotate * scale` over the returned parts reproduces the input.
pub fn decompose(transform: &Affine2) -> Decomposed {
    let mut linear = transform.matrix2;
    let flipped = linear.determinant() < 0.0;
    if flipped {
        linear.x_axis.x = -linear.x_axis.x;
        linear.y_axis.y = -linear.y_axis.y;
    }
    let mut angle = linear.x_axis.y.atan2(linear.x_axis.x);
    let mut scale = Vec2::new(linear.x_axis.length(), linear.y_axis.length());
    if flipped {
        scale.x = -scale.x;
        angle = -angle;
    }
    Decomposed {
        translation: transform.translation,
        angle,
        scale,
    }
}
