use glam::Vec2;

use super::boundary::WorldBounds;
use super::events::{CollisionEvent, CollisionKind};
use super::narrowphase;
use super::rules::CollisionRules;
use super::shapes;
use crate::core::body::Body;
use crate::core::registry::Registry;
use crate::utils::arena::EntityId;

/// Per-step view of the surrounding game state the detector needs: the
/// camera-tracked focal point for culling, plus the boss-fight region state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub focus: Vec2,
    /// Region wedge tests only run while a boss encounter is active.
    pub boss_active: bool,
    /// Stored lower-edge angle of each region, in `[0, 2π)`.
    pub region_angles: Vec<f32>,
}

impl ViewState {
    pub fn centered_on(focus: Vec2) -> Self {
        Self {
            focus,
            ..Self::default()
        }
    }
}

/// Finds and classifies every contact for the current step.
///
/// A pure function of the settled transforms: the detector never mutates the
/// registry, it only emits event records for the external resolver.
#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    pub rules: CollisionRules,
    pub bounds: WorldBounds,
}

impl CollisionDetector {
    pub fn new(rules: CollisionRules, bounds: WorldBounds) -> Self {
        Self { rules, bounds }
    }

    pub fn detect(&self, registry: &Registry, view: &ViewState) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        let bodies: Vec<(EntityId, &Body)> = registry
            .iter()
            .filter(|(_, body)| !body.transform.is_screen_coord)
            .collect();

        for (index, &(id, body)) in bodies.iter().enumerate() {
            // Boundary contacts come first: they apply even to entities the
            // pairwise scan culls as off-screen.
            if !body.tags.cyst && self.bounds.exceeds_map(&body.transform) {
                let kind = if body.tags.projectile {
                    CollisionKind::BulletWithBoundary
                } else {
                    CollisionKind::WithBoundary
                };
                events.push(CollisionEvent::boundary(kind, id));
            }
            if body.tags.player && view.boss_active {
                if let Some(knockback) = self.bounds.region_boundary_bounce(
                    &body.transform,
                    &body.motion,
                    &view.region_angles,
                ) {
                    events.push(CollisionEvent::bounce(
                        CollisionKind::PlayerWithRegionBoundary,
                        id,
                        knockback,
                    ));
                }
            }
            if self.culled(body, view) {
                continue;
            }

            for &(other_id, other) in &bodies[index + 1..] {
                if self.culled(other, view) {
                    continue;
                }
                if !shapes::bounding_circles_overlap(&body.transform, &other.transform) {
                    continue;
                }
                // An attachment never collides with the entity it hangs off.
                if attached_to(body, other_id) || attached_to(other, id) {
                    continue;
                }
                if !contact(body, other) {
                    continue;
                }
                if let Some(kind) = self.rules.classify(body, other) {
                    events.push(CollisionEvent::pair(kind, id, other_id));
                }
                if let Some(kind) = self.rules.classify(other, body) {
                    events.push(CollisionEvent::pair(kind, other_id, id));
                }
            }
        }
        events
    }

    fn culled(&self, body: &Body, view: &ViewState) -> bool {
        body.transform.position.distance(view.focus) > self.bounds.cull_radius
    }
}

fn attached_to(body: &Body, other: EntityId) -> bool {
    body.attachment
        .as_ref()
        .is_some_and(|attachment| attachment.parent == other)
}

/// Narrow-phase dispatch: meshes get edge-accurate tests, everything else
/// falls back to the circle cover.
fn contact(a: &Body, b: &Body) -> bool {
    match (&a.mesh, &b.mesh) {
        (Some(mesh_a), Some(mesh_b)) => narrowphase::mesh_intersects_mesh(
            mesh_a,
            &a.transform.to_affine(),
            mesh_b,
            &b.transform.to_affine(),
        ),
        (Some(mesh), None) => narrowphase::mesh_intersects_circles(
            mesh,
            &a.transform.to_affine(),
            &shapes::collision_circles(&b.transform),
        ),
        (None, Some(mesh)) => narrowphase::mesh_intersects_circles(
            mesh,
            &b.transform.to_affine(),
            &shapes::collision_circles(&a.transform),
        ),
        (None, None) => narrowphase::circles_overlap(
            &shapes::collision_circles(&a.transform),
            &shapes::collision_circles(&b.transform),
        ),
    }
}
