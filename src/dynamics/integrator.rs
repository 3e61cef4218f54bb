use std::f32::consts::{PI, TAU};

use crate::config;
use crate::core::registry::Registry;
use crate::core::types::{Motion, Transform};

/// Angular rate steering the current facing toward `target_angle`.
///
/// When the remaining sweep exceeds half a turn it is rewrapped onto the
/// short signed direction, and the rate is capped so the facing never
/// overshoots the target within a single step.
pub fn steering_rate(
    target_angle: f32,
    transform: &Transform,
    motion: &Motion,
    dt_seconds: f32,
) -> f32 {
    let mut remaining = target_angle - transform.facing();
    if remaining.abs() < config::ANGLE_EPSILON {
        return 0.0;
    }
    if remaining.abs() > PI {
        remaining = (TAU - remaining.abs()) * -remaining.signum();
    }
    let required = remaining.abs() / dt_seconds;
    required.min(motion.max_angular_velocity) * remaining.signum()
}

/// Converts accumulated forces into velocities and advances world transforms.
///
/// Attachments are skipped here: their transforms are derived from the parent
/// in the kinematics pass that follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn integrate(&self, registry: &mut Registry, dt_ms: f32) {
        let dt_seconds = dt_ms / 1000.0;
        for (_, body) in registry.iter_mut() {
            if body.attachment.is_some() {
                continue;
            }

            let dashing = body.dash_active();
            if body.motion.force.length() > 0.0 {
                if body.motion.allow_accel {
                    let impulse = body.motion.force * dt_ms * body.motion.acceleration_unit;
                    body.motion.velocity += impulse;
                    if !dashing {
                        clamp_speed(&mut body.motion);
                    }
                }
                let target = body.motion.force.y.atan2(body.motion.force.x);
                body.motion.angular_velocity =
                    steering_rate(target, &body.transform, &body.motion, dt_seconds);
            } else if !dashing {
                body.motion.velocity *= body.motion.deceleration_unit.powf(dt_ms);
            }
            body.motion.allow_accel = true;

            body.transform.position += body.motion.velocity * dt_seconds;
            body.transform.angle += body.motion.angular_velocity * dt_seconds;
            body.transform.angle %= TAU;
        }
    }
}

/// Uniformly rescales the velocity onto the speed cap.
///
/// A zero cap marks a deliberately stationary entity (turret-style), so it is
/// skipped rather than collapsing the velocity to zero.
fn clamp_speed(motion: &mut Motion) {
    if motion.max_velocity <= 0.0 {
        return;
    }
    let speed = motion.velocity.length();
    if speed > motion.max_velocity {
        motion.velocity *= motion.max_velocity / speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::Body;
    use crate::core::types::Dash;
    use approx::assert_relative_eq;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn forced(force: Vec2) -> Body {
        let mut body = Body::new();
        body.motion.force = force;
        body
    }

    #[test]
    fn speed_stays_under_the_cap() {
        let mut registry = Registry::new();
        let mut body = forced(Vec2::new(50.0, 0.0));
        body.motion.max_velocity = 400.0;
        let id = registry.spawn(body);

        Integrator.integrate(&mut registry, 16.0);
        let motion = registry.body(id).unwrap().motion;
        assert!(motion.velocity.length() <= motion.max_velocity + 1e-3);
    }

    #[test]
    fn dash_window_suspends_the_cap() {
        let mut registry = Registry::new();
        let mut body = forced(Vec2::new(50.0, 0.0));
        body.motion.max_velocity = 400.0;
        let mut dash = Dash::default();
        dash.trigger();
        body.dash = Some(dash);
        let id = registry.spawn(body);

        Integrator.integrate(&mut registry, 16.0);
        let motion = registry.body(id).unwrap().motion;
        assert!(motion.velocity.length() > motion.max_velocity);
    }

    #[test]
    fn allow_accel_suppresses_one_step_only() {
        let mut registry = Registry::new();
        let mut body = forced(Vec2::new(10.0, 0.0));
        body.motion.allow_accel = false;
        let id = registry.spawn(body);

        Integrator.integrate(&mut registry, 16.0);
        assert_eq!(registry.body(id).unwrap().motion.velocity, Vec2::ZERO);
        assert!(registry.body(id).unwrap().motion.allow_accel);

        Integrator.integrate(&mut registry, 16.0);
        assert!(registry.body(id).unwrap().motion.velocity.length() > 0.0);
    }

    #[test]
    fn coasting_decays_frame_rate_independently() {
        // Two 8 ms steps must damp exactly as much as one 16 ms step.
        let mut split = Motion {
            velocity: Vec2::new(100.0, 0.0),
            ..Motion::default()
        };
        let mut whole = split;

        let mut registry_a = Registry::new();
        let a = registry_a.spawn(Body::new().with_motion(split));
        Integrator.integrate(&mut registry_a, 8.0);
        Integrator.integrate(&mut registry_a, 8.0);
        split = registry_a.body(a).unwrap().motion;

        let mut registry_b = Registry::new();
        let b = registry_b.spawn(Body::new().with_motion(whole));
        Integrator.integrate(&mut registry_b, 16.0);
        whole = registry_b.body(b).unwrap().motion;

        assert_relative_eq!(split.velocity.x, whole.velocity.x, epsilon = 1e-3);
    }

    #[test]
    fn turn_reaches_target_within_allowed_rate() {
        let transform = Transform::default();
        let motion = Motion {
            max_angular_velocity: PI,
            ..Motion::default()
        };
        // Target a quarter turn away with a whole second available.
        let rate = steering_rate(FRAC_PI_2, &transform, &motion, 1.0);
        assert_relative_eq!(rate, FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn turn_is_capped_without_overshoot() {
        let transform = Transform::default();
        let motion = Motion {
            max_angular_velocity: PI / 4.0,
            ..Motion::default()
        };
        let rate = steering_rate(FRAC_PI_2, &transform, &motion, 1.0);
        assert_relative_eq!(rate, PI / 4.0, epsilon = 1e-5);
    }

    #[test]
    fn wraparound_turns_the_short_way() {
        let transform = Transform {
            angle: 3.0,
            ..Transform::default()
        };
        let motion = Motion::default();
        // From 3 rad to -3 rad the short way is forward through π.
        let rate = steering_rate(-3.0, &transform, &motion, 1.0);
        assert!(rate > 0.0);
        assert_relative_eq!(rate, TAU - 6.0, epsilon = 1e-5);
    }

    #[test]
    fn settled_facing_produces_zero_rate() {
        let transform = Transform {
            angle: 1.0,
            ..Transform::default()
        };
        let rate = steering_rate(1.0 + 0.001, &transform, &Motion::default(), 1.0);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn zero_input_is_idempotent() {
        let mut registry = Registry::new();
        let id = registry.spawn(Body::new());
        for _ in 0..10 {
            Integrator.integrate(&mut registry, 16.0);
        }
        let body = registry.body(id).unwrap();
        assert_eq!(body.transform.position, Vec2::ZERO);
        assert_eq!(body.transform.angle, 0.0);
    }

    #[test]
    fn zero_max_velocity_is_legal() {
        let mut registry = Registry::new();
        let mut body = forced(Vec2::new(5.0, 0.0));
        body.motion.max_velocity = 0.0;
        let id = registry.spawn(body);

        Integrator.integrate(&mut registry, 16.0);
        let velocity = registry.body(id).unwrap().motion.velocity;
        assert!(velocity.x.is_finite());
        assert!(velocity.x > 0.0);
    }
}
