use super::events::CollisionKind;
use crate::core::attachment::AttachmentKind;
use crate::core::body::Body;

/// Classification table deciding which event a detected contact produces.
///
/// An immutable value injected into the detector rather than ambient state,
/// so tests can build detectors deterministically. The first argument is the
/// entity the event will be attached to; both orderings of a pair are
/// classified independently, which is how "who hit whom" stays
/// distinguishable. A pair matching no rule simply produces no event.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionRules;

impl CollisionRules {
    pub fn classify(&self, entity: &Body, other: &Body) -> Option<CollisionKind> {
        let tags = entity.tags;
        let other_tags = other.tags;

        if tags.projectile {
            if other_tags.projectile {
                return Some(CollisionKind::BulletWithBullet);
            }
            if other_tags.player && tags.collides_players {
                return Some(CollisionKind::BulletWithPlayer);
            }
            if other_tags.enemy && tags.collides_enemies && other_tags.collides_players {
                return Some(CollisionKind::BulletWithEnemy);
            }
            if other_tags.cyst && tags.collides_enemies {
                return Some(CollisionKind::BulletWithCyst);
            }
            return None;
        }

        if tags.player && other_tags.collides_players {
            if other_tags.enemy {
                return Some(CollisionKind::PlayerWithEnemy);
            }
            if other_tags.cyst {
                return Some(CollisionKind::PlayerWithCyst);
            }
            if other_tags.chest {
                return Some(CollisionKind::PlayerWithChest);
            }
            if other_tags.cure {
                return Some(CollisionKind::PlayerWithCure);
            }
            return None;
        }

        if tags.enemy {
            if other_tags.enemy {
                return Some(CollisionKind::EnemyWithEnemy);
            }
            return None;
        }

        let is_sword = entity
            .attachment
            .as_ref()
            .is_some_and(|attachment| attachment.kind == AttachmentKind::Sword);
        if is_sword {
            if other_tags.enemy && tags.collides_enemies && other_tags.collides_players {
                return Some(CollisionKind::SwordWithEnemy);
            }
            if other_tags.cyst && tags.collides_enemies && other_tags.collides_players {
                return Some(CollisionKind::SwordWithCyst);
            }
        }

        None
    }
}
