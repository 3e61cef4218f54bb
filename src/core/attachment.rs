use glam::Affine2;
use serde::{Deserialize, Serialize};

use crate::utils::arena::EntityId;

/// Selects the special-case behavior an attachment gets in the kinematics
/// pass and in collision classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// Trailing dash effect; always oriented along the parent's heading.
    DashTrail,
    /// Melee weapon swung by a constant joint rate.
    Sword,
    /// Ranged weapon held at a fixed offset.
    Gun,
    /// One link of a boss limb chain, steered by force toward a target.
    BossArm,
}

/// Rigid or semi-rigid binding of a child entity to a parent entity.
///
/// The parent is referenced, not owned; the registry cascades removal so a
/// live attachment never outlives its parent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub parent: EntityId,
    /// Static offset applied before the joint rotation.
    pub relative_transform_1: Affine2,
    /// Static offset applied after the joint rotation.
    pub relative_transform_2: Affine2,
    /// Current deflection of the joint.
    pub moved_angle: f32,
    /// Rest deflection the joint settles back to.
    pub angle_offset: f32,
    /// Maximum deflection magnitude the joint allows.
    pub angle_freedom: f32,
}

impl Attachment {
    /// A joint at rest with identity offsets.
    pub fn new(kind: AttachmentKind, parent: EntityId) -> Self {
        Self {
            kind,
            parent,
            relative_transform_1: Affine2::IDENTITY,
            relative_transform_2: Affine2::IDENTITY,
            moved_angle: 0.0,
            angle_offset: 0.0,
            angle_freedom: 0.0,
        }
    }

    pub fn with_offsets(mut self, before_rotation: Affine2, after_rotation: Affine2) -> Self {
        self.relative_transform_1 = before_rotation;
        self.relative_transform_2 = after_rotation;
        self
    }

    pub fn with_joint_limits(mut self, angle_offset: f32, angle_freedom: f32) -> Self {
        self.angle_offset = angle_offset;
        self.angle_freedom = angle_freedom;
        self.moved_angle = angle_offset;
        self
    }
}
