use std::time::Instant;

use crate::collision::detector::{CollisionDetector, ViewState};
use crate::collision::events::CollisionEvent;
use crate::core::body::Body;
use crate::core::registry::Registry;
use crate::dynamics::integrator::Integrator;
use crate::dynamics::kinematics::AttachmentKinematics;
use crate::utils::arena::EntityId;
use crate::utils::logging::{warn_if_step_budget_exceeded, PassTimer};

/// Central container running the fixed-order simulation passes.
///
/// Order per step: motion integration, then attachment kinematics (so every
/// child is posed against its parent's transform from this step), then
/// collision detection over the settled transforms. Single-threaded by
/// design; a step always runs to completion.
pub struct PhysicsWorld {
    pub registry: Registry,
    pub integrator: Integrator,
    pub kinematics: AttachmentKinematics,
    pub detector: CollisionDetector,
    /// Wall-clock budget per step before a warning is logged.
    pub step_budget_ms: f32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            integrator: Integrator,
            kinematics: AttachmentKinematics,
            detector: CollisionDetector::default(),
            step_budget_ms: 1000.0 / 60.0,
        }
    }

    pub fn spawn(&mut self, body: Body) -> EntityId {
        self.registry.spawn(body)
    }

    pub fn despawn(&mut self, id: EntityId) -> usize {
        self.registry.despawn(id)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.registry.body(id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.registry.body_mut(id)
    }

    /// Integrates forces into velocities and world transforms.
    pub fn integrate_motion(&mut self, dt_ms: f32) {
        let _timer = PassTimer::new("integrate::motion");
        self.integrator.integrate(&mut self.registry, dt_ms);
    }

    /// Poses attachments; must run after [`Self::integrate_motion`].
    pub fn integrate_attachments(&mut self, dt_ms: f32) {
        let _timer = PassTimer::new("integrate::attachments");
        self.kinematics.integrate(&mut self.registry, dt_ms);
    }

    /// Detects and classifies contacts against the settled transforms.
    pub fn detect_collisions(&self, view: &ViewState) -> Vec<CollisionEvent> {
        let _timer = PassTimer::new("collision::detect");
        self.detector.detect(&self.registry, view)
    }

    /// One full simulation step, returning the contacts it produced.
    pub fn step(&mut self, dt_ms: f32, view: &ViewState) -> Vec<CollisionEvent> {
        let start = Instant::now();
        self.integrate_motion(dt_ms);
        self.integrate_attachments(dt_ms);
        let events = self.detect_collisions(view);
        warn_if_step_budget_exceeded(start.elapsed(), self.step_budget_ms);
        events
    }
}
