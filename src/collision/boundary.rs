use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use super::narrowphase::segment_intersects_circle;
use super::shapes::collision_circles;
use crate::config;
use crate::core::types::{Motion, Transform};

/// Playfield geometry injected into the collision detector.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// Radius of the circular playfield.
    pub map_radius: f32,
    /// Number of pie-slice regions during a boss fight.
    pub region_count: usize,
    /// Entities farther than this from the camera focus skip pairwise tests.
    pub cull_radius: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            map_radius: config::MAP_RADIUS,
            region_count: config::REGION_COUNT,
            cull_radius: config::view_cull_radius(),
        }
    }
}

impl WorldBounds {
    /// True when any cover circle pokes past the playfield edge.
    pub fn exceeds_map(&self, transform: &Transform) -> bool {
        collision_circles(transform)
            .iter()
            .any(|circle| circle.center.length() > self.map_radius - circle.radius)
    }

    /// Knockback for an entity pressed against a wedge edge of its current
    /// region, or `None` when there is no opposing contact.
    ///
    /// `region_angles` holds each region's stored lower-edge angle in
    /// `[0, 2π)`; angles above π are brought into `[-π, π]` before the
    /// containment search, matching the `atan2` range of the entity heading.
    pub fn region_boundary_bounce(
        &self,
        transform: &Transform,
        motion: &Motion,
        region_angles: &[f32],
    ) -> Option<Vec2> {
        let spread = TAU / self.region_count as f32;
        let heading = transform.position.y.atan2(transform.position.x);
        let (min_angle, max_angle) = region_angles.iter().find_map(|&stored| {
            let mut low = stored;
            if low > PI {
                low -= TAU;
            }
            let high = low + spread;
            (heading > low && heading < high).then_some((low, high))
        })?;

        for circle in collision_circles(transform) {
            let low_edge = Vec2::from_angle(min_angle) * self.map_radius;
            if segment_intersects_circle(Vec2::ZERO, low_edge, &circle) {
                let normal = Vec2::from_angle(min_angle + FRAC_PI_2);
                if motion.velocity.dot(normal) < 0.0 {
                    return Some(reflect(motion.velocity, normal));
                }
            }
            let high_edge = Vec2::from_angle(max_angle) * self.map_radius;
            if segment_intersects_circle(Vec2::ZERO, high_edge, &circle) {
                let normal = Vec2::from_angle(max_angle - FRAC_PI_2);
                if motion.velocity.dot(normal) < 0.0 {
                    return Some(reflect(motion.velocity, normal));
                }
            }
        }
        None
    }
}

/// Mirror reflection of `velocity` about the line with unit normal `normal`.
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
