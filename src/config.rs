//! Global tuning constants for the simulation core.

use std::f32::consts::TAU;

/// Radius of the circular playfield, in world units.
pub const MAP_RADIUS: f32 = 10_000.0;

/// Number of pie-slice regions carved around the origin during a boss fight.
pub const REGION_COUNT: usize = 6;

/// Angular tolerance under which a facing counts as reached.
pub const ANGLE_EPSILON: f32 = 0.01;

/// Logical view extent, used to derive the collision culling radius.
pub const VIEW_WIDTH: f32 = 1920.0;
pub const VIEW_HEIGHT: f32 = 1080.0;

/// Collision culling reaches slightly past the render cull to avoid popping.
pub const CULL_PADDING: f32 = 1.1;

/// Default speed cap, in units per second.
pub const DEFAULT_MAX_VELOCITY: f32 = 400.0;

/// Default turn-rate cap, in radians per second.
pub const DEFAULT_MAX_ANGULAR_VELOCITY: f32 = TAU;

/// Default force-to-velocity conversion factor.
pub const DEFAULT_ACCELERATION_UNIT: f32 = 1.0;

/// Default per-millisecond damping factor applied when no force is impressed.
pub const DEFAULT_DECELERATION_UNIT: f32 = 0.995;

/// Default delay between dashes, in milliseconds.
pub const DEFAULT_DASH_DELAY_MS: f32 = 800.0;

/// Default length of the dash speed burst, in milliseconds.
pub const DEFAULT_DASH_DURATION_MS: f32 = 100.0;

/// Default speed cap while a dash window is open.
pub const DEFAULT_DASH_VELOCITY: f32 = 2000.0;

/// Distance from the camera focus beyond which entities skip pairwise tests.
pub fn view_cull_radius() -> f32 {
    VIEW_WIDTH.hypot(VIEW_HEIGHT) / 2.0 * CULL_PADDING
}
