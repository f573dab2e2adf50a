//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per fixed timestep
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod hit;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{Category, CategoryInfo, Entity, make_entity};
pub use hit::resolve_click;
pub use motion::advance;
pub use spawn::maybe_spawn;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
