//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::hit::resolve_click;
use super::motion::advance;
use super::spawn::maybe_spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    /// Pointer position in logical pixels (top-left origin)
    pub pointer_pos: Vec2,
    /// Primary button currently held
    pub pointer_down: bool,
    /// Drawable area in logical pixels
    pub bounds: Vec2,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer_pos: Vec2::ZERO,
            pointer_down: false,
            bounds: Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        }
    }
}

/// Advance the game state by one fixed timestep.
///
/// Order matters: spawn, then fall and cull, then the click, then the health
/// check. A block culled this tick can no longer be clicked.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Ended {
        return;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    maybe_spawn(state, input.bounds.x);
    advance(state, FALL_SPEED, input.bounds.y);
    resolve_click(state, input.pointer_down, input.pointer_pos);

    if state.health <= 0 {
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}
