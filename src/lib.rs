//! Microcosm Physics – the motion and collision core of a top-down action
//! game.
//!
//! Every simulation step integrates accumulated forces into velocities and
//! positions, poses attached sub-entities (weapons, dash trails, articulated
//! boss limbs) from their freshly integrated parents, and detects geometric
//! contact between entities and against the playfield boundary, emitting
//! typed [`CollisionEvent`]s for an external resolver.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::{Affine2, Vec2};

pub use crate::collision::{
    boundary::WorldBounds,
    detector::{CollisionDetector, ViewState},
    events::{CollisionEvent, CollisionKind},
    rules::CollisionRules,
    shapes::CollisionCircle,
};
pub use crate::core::{
    attachment::{Attachment, AttachmentKind},
    body::{Body, Tags},
    mesh::CollisionMesh,
    registry::Registry,
    types::{Dash, Motion, Transform},
};
pub use crate::dynamics::{integrator::Integrator, kinematics::AttachmentKinematics};
pub use crate::utils::arena::{Arena, EntityId};
pub use crate::world::PhysicsWorld;
