//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (oldest trail point first, bubbles in generation order)
//! - No rendering, audio or platform dependencies

pub mod path;
pub mod segment;
pub mod state;
pub mod tick;
pub mod vine;
pub mod world;

pub use path::VinePath;
pub use segment::Segment;
pub use state::{GamePhase, GameState, LossReason};
pub use tick::{GameEvent, TickInput, tick};
pub use vine::{SelfCollision, Vine};
pub use world::{Bubble, World, WorldBounds, WorldGenParams};
