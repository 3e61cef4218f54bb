//! Collision detection: shape approximation, narrow-phase predicates,
//! boundary tests, classification, and the pairwise detector.

pub mod boundary;
pub mod detector;
pub mod events;
pub mod narrowphase;
pub mod rules;
pub mod shapes;

pub use boundary::WorldBounds;
pub use detector::{CollisionDetector, ViewState};
pub use events::{CollisionEvent, CollisionKind};
pub use rules::CollisionRules;
pub use shapes::CollisionCircle;
