use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::arena::EntityId;

/// Fixed taxonomy of contact classifications handed to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionKind {
    WithBoundary,
    PlayerWithEnemy,
    PlayerWithCyst,
    PlayerWithChest,
    PlayerWithCure,
    PlayerWithRegionBoundary,
    EnemyWithEnemy,
    BulletWithEnemy,
    BulletWithPlayer,
    BulletWithBullet,
    BulletWithBoundary,
    BulletWithCyst,
    SwordWithEnemy,
    SwordWithCyst,
}

/// One contact record, rebuilt from scratch every step.
///
/// Several events may exist for the same entity within a step, and both
/// orderings of a colliding pair may each contribute one: `entity` is always
/// the side the event is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    /// The entity this event is attached to.
    pub entity: EntityId,
    /// The second participant; `None` for boundary contacts.
    pub other: Option<EntityId>,
    /// Reflected velocity for region-boundary bounces.
    pub knockback: Option<Vec2>,
}

impl CollisionEvent {
    pub fn pair(kind: CollisionKind, entity: EntityId, other: EntityId) -> Self {
        Self {
            kind,
            entity,
            other: Some(other),
            knockback: None,
        }
    }

    pub fn boundary(kind: CollisionKind, entity: EntityId) -> Self {
        Self {
            kind,
            entity,
            other: None,
            knockback: None,
        }
    }

    pub fn bounce(kind: CollisionKind, entity: EntityId, knockback: Vec2) -> Self {
        Self {
            kind,
            entity,
            other: None,
            knockback: Some(knockback),
        }
    }
}
