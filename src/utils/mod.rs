//! Utility helpers: entity allocation, affine math, and logging.

pub mod affine;
pub mod arena;
pub mod logging;

pub use arena::{Arena, EntityId};
