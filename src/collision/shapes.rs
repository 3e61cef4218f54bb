use std::f32::consts::FRAC_PI_2;

use glam::{Affine2, Vec2};

use crate::core::types::Transform;

/// One disc of an entity's collision cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionCircle {
    pub center: Vec2,
    pub radius: f32,
}

impl CollisionCircle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn overlaps(&self, other: &CollisionCircle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}

/// Covers the entity's oriented footprint with circles.
///
/// A square footprint gets a single centered circle. An elongated footprint
/// is covered by circles of half the shorter side, marched along the longer
/// axis in steps of a quarter side, with a final circle flush against the far
/// end. The march axis picks up a quarter-turn correction when the footprint
/// is taller than wide.
pub fn collision_circles(transform: &Transform) -> Vec<CollisionCircle> {
    let bounds = transform.scale.abs();
    if (bounds.x - bounds.y).abs() < 1e-4 {
        return vec![CollisionCircle::new(transform.position, bounds.x / 2.0)];
    }

    let shorter = bounds.x.min(bounds.y);
    let longer = bounds.x.max(bounds.y);
    let axis_angle = if bounds.x < bounds.y {
        FRAC_PI_2 + transform.angle
    } else {
        transform.angle
    };
    let axis = Affine2::from_angle(axis_angle);
    let radius = shorter / 2.0;
    let reach = longer / 2.0 - radius;

    let mut circles = Vec::new();
    let mut offset = -reach;
    while offset < reach {
        let center = transform.position + axis.transform_vector2(Vec2::new(offset, 0.0));
        circles.push(CollisionCircle::new(center, radius));
        offset += shorter / 4.0;
    }
    let center = transform.position + axis.transform_vector2(Vec2::new(reach, 0.0));
    circles.push(CollisionCircle::new(center, radius));
    circles
}

/// Radius of the axis-aligned bounding circle: half the footprint diagonal.
pub fn bounding_radius(transform: &Transform) -> f32 {
    transform.scale.length() / 2.0
}

/// Cheap pair reject through the two bounding circles.
pub fn bounding_circles_overlap(a: &Transform, b: &Transform) -> bool {
    let reach = bounding_radius(a) + bounding_radius(b);
    a.position.distance_squared(b.position) <= reach * reach
}
