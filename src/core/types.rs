use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

use crate::config;

/// Position, orientation, and footprint of an entity in the plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Sprite extents; a negative `x` encodes a horizontal flip.
    pub scale: Vec2,
    /// Stored orientation in radians, kept within `(-2π, 2π)`.
    pub angle: f32,
    /// Fixed correction between the stored angle and the facing direction.
    pub angle_offset: f32,
    /// HUD-space entities are skipped by collision detection.
    pub is_screen_coord: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::splat(10.0),
            angle: 0.0,
            angle_offset: 0.0,
            is_screen_coord: false,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Direction the entity is considered to face.
    pub fn facing(&self) -> f32 {
        self.angle - self.angle_offset
    }

    /// Full local-to-world matrix, scale included.
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, self.angle, self.position)
    }
}

/// Velocities and the per-step force accumulator driving an entity.
///
/// For attached entities `angular_velocity` is the joint's rate relative to
/// the parent rather than a world-space spin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    /// World units per second.
    pub velocity: Vec2,
    /// Radians per second.
    pub angular_velocity: f32,
    /// Per-step accumulator; the caller zeroes it before input systems write.
    pub force: Vec2,
    pub max_velocity: f32,
    pub max_angular_velocity: f32,
    pub acceleration_unit: f32,
    /// Multiplicative per-millisecond damping applied while coasting.
    pub deceleration_unit: f32,
    /// One-step acceleration suppression, set after a bounce.
    pub allow_accel: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            max_velocity: config::DEFAULT_MAX_VELOCITY,
            max_angular_velocity: config::DEFAULT_MAX_ANGULAR_VELOCITY,
            acceleration_unit: config::DEFAULT_ACCELERATION_UNIT,
            deceleration_unit: config::DEFAULT_DECELERATION_UNIT,
            allow_accel: true,
        }
    }
}

/// Timed speed burst during which the velocity clamp is suspended.
///
/// The core only reads whether the active window is open; advancing the
/// timers each frame is the caller's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dash {
    /// Cooldown between dashes.
    pub delay_duration_ms: f32,
    pub delay_timer_ms: f32,
    /// Length of the burst once triggered.
    pub active_duration_ms: f32,
    pub active_timer_ms: f32,
    /// Speed cap while the burst is open.
    pub max_dash_velocity: f32,
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            delay_duration_ms: config::DEFAULT_DASH_DELAY_MS,
            delay_timer_ms: 0.0,
            active_duration_ms: config::DEFAULT_DASH_DURATION_MS,
            active_timer_ms: 0.0,
            max_dash_velocity: config::DEFAULT_DASH_VELOCITY,
        }
    }
}

impl Dash {
    pub fn is_active(&self) -> bool {
        self.active_timer_ms > 0.0
    }

    /// Opens the burst window if the cooldown has elapsed.
    pub fn trigger(&mut self) -> bool {
        if self.delay_timer_ms > 0.0 {
            return false;
        }
        self.active_timer_ms = self.active_duration_ms;
        self.delay_timer_ms = self.delay_duration_ms;
        true
    }

    /// Advances both timers; called once per frame by the owner.
    pub fn tick(&mut self, dt_ms: f32) {
        self.active_timer_ms = (self.active_timer_ms - dt_ms).max(0.0);
        self.delay_timer_ms = (self.delay_timer_ms - dt_ms).max(0.0);
    }
}
