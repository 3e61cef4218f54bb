use glam::Affine2;

use super::integrator::steering_rate;
use crate::config;
use crate::core::attachment::AttachmentKind;
use crate::core::registry::Registry;
use crate::utils::affine;
use crate::utils::arena::EntityId;

/// Poses every attached entity from its parent's freshly integrated
/// transform.
///
/// Must run after the motion integrator: chains evaluate root-to-leaf, so a
/// child link always composes against the transform its parent got this step.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachmentKinematics;

impl AttachmentKinematics {
    pub fn integrate(&self, registry: &mut Registry, dt_ms: f32) {
        let dt_seconds = dt_ms / 1000.0;
        for id in registry.attachments_root_to_leaf() {
            update_joint(registry, id, dt_seconds);
        }
    }
}

fn update_joint(registry: &mut Registry, id: EntityId, dt_seconds: f32) {
    let body = registry
        .body(id)
        .expect("attachment id must stay live for the whole pass");
    let attachment = body
        .attachment
        .expect("attachment pass reached a non-attached body");
    let transform = body.transform;
    let motion = body.motion;

    let parent = registry
        .body(attachment.parent)
        .expect("attachment parent was despawned without cascading to its children");
    let parent_transform = parent.transform;
    let parent_velocity = parent.motion.velocity;

    // Advance the joint deflection: force steers it (boss-arm tracking), a
    // bare angular velocity swings it at a constant rate (sword).
    let mut new_moved = attachment.moved_angle;
    if motion.force.length() > 0.0 {
        let target = motion.force.y.atan2(motion.force.x);
        new_moved += steering_rate(target, &transform, &motion, dt_seconds) * dt_seconds;
    } else if motion.angular_velocity.abs() > 0.0 {
        new_moved += motion.angular_velocity * dt_seconds;
    }
    let moved_angle = if (new_moved - attachment.angle_offset).abs() > config::ANGLE_EPSILON {
        new_moved.signum() * attachment.angle_freedom.min(new_moved.abs())
    } else {
        attachment.angle_offset
    };

    let world = Affine2::from_angle_translation(parent_transform.angle, parent_transform.position)
        * attachment.relative_transform_1
        * Affine2::from_angle(moved_angle)
        * attachment.relative_transform_2;
    let parts = affine::decompose(&world);

    let angle = if attachment.kind == AttachmentKind::DashTrail {
        // Trailing effects point along the parent's heading, not the chain.
        parent_velocity.y.atan2(parent_velocity.x)
    } else {
        parts.angle
    };

    let body = registry
        .body_mut(id)
        .expect("attachment id must stay live for the whole pass");
    if let Some(stored) = body.attachment.as_mut() {
        stored.moved_angle = moved_angle;
    }
    body.transform.position = parts.translation;
    body.transform.angle = angle;
    body.transform.scale = parts.scale;
}
