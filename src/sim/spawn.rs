//! Timer-driven block spawning

use glam::Vec2;
use rand::Rng;

use super::entity::{Category, Entity, make_entity};
use super::state::{GameEvent, GameState};

/// Advance the spawn timer and spawn a block when it is full.
///
/// Nothing happens at the population cap, not even a timer step. Otherwise a
/// full timer spawns one block along the top edge and resets to zero, and a
/// non-full timer gains one tick. Returns a copy of the spawned block.
pub fn maybe_spawn(state: &mut GameState, bounds_width: f32) -> Option<Entity> {
    if state.entities.len() >= state.max_population {
        return None;
    }

    if state.spawn_timer < state.spawn_timer_max {
        state.spawn_timer += 1.0;
        return None;
    }

    let category = Category::ALL[state.rng.random_range(0..Category::ALL.len())];
    let x = random_x(state, bounds_width, category.size().x);
    let entity = make_entity(Vec2::new(x, 0.0), category);

    state.spawn_timer = 0.0;
    state.entities.push(entity.clone());
    state.events.push(GameEvent::Spawned { category, x });
    Some(entity)
}

/// Whole-unit x in `[0, bounds_width - width)`, or 0 when the block doesn't fit
fn random_x(state: &mut GameState, bounds_width: f32, width: f32) -> f32 {
    let span = (bounds_width - width).floor();
    if span >= 1.0 {
        state.rng.random_range(0..span as u32) as f32
    } else {
        0.0
    }
}
