use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::attachment::Attachment;
use super::mesh::CollisionMesh;
use super::types::{Dash, Motion, Transform};
use crate::utils::arena::EntityId;

/// Role tags consumed by collision classification.
///
/// Mirrors the game's role components: the first group says what the entity
/// *is*, the `collides_*` pair says which side it is allowed to hit (a
/// player-owned bullet carries `collides_enemies`, an enemy bullet
/// `collides_players`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tags {
    pub player: bool,
    pub enemy: bool,
    pub projectile: bool,
    pub cyst: bool,
    pub chest: bool,
    pub cure: bool,
    pub collides_players: bool,
    pub collides_enemies: bool,
}

impl Tags {
    pub fn player() -> Self {
        Self {
            player: true,
            ..Self::default()
        }
    }

    pub fn enemy() -> Self {
        Self {
            enemy: true,
            collides_players: true,
            ..Self::default()
        }
    }

    pub fn player_bullet() -> Self {
        Self {
            projectile: true,
            collides_enemies: true,
            ..Self::default()
        }
    }

    pub fn enemy_bullet() -> Self {
        Self {
            projectile: true,
            collides_players: true,
            ..Self::default()
        }
    }
}

/// One simulated entity: transform plus motion state and optional extras.
///
/// A `Body` always carries both a `Transform` and a `Motion`, so the pairing
/// invariant holds by construction rather than being checked every pass.
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub id: EntityId,
    pub transform: Transform,
    pub motion: Motion,
    pub tags: Tags,
    pub dash: Option<Dash>,
    pub attachment: Option<Attachment>,
    pub mesh: Option<Arc<CollisionMesh>>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_mesh(mut self, mesh: Arc<CollisionMesh>) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Whether a dash window is currently open, suspending the speed clamp.
    pub fn dash_active(&self) -> bool {
        self.dash.as_ref().is_some_and(Dash::is_active)
    }
}
