//! Pointer click resolution

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Resolve a click against the live blocks.
///
/// Only a press edge (down now, up on the previous call) can score. The first
/// block in spawn order under the pointer is removed and its value added to
/// the score; that value is returned.
pub fn resolve_click(state: &mut GameState, pointer_down: bool, pointer_pos: Vec2) -> Option<u32> {
    let pressed = pointer_down && !state.pointer_was_down;
    state.pointer_was_down = pointer_down;

    if !pressed {
        return None;
    }

    let index = state.entities.iter().position(|e| e.contains(pointer_pos))?;
    let entity = state.entities.remove(index);
    state.score += entity.score_value;
    state.events.push(GameEvent::Hit {
        category: entity.category,
        reward: entity.score_value,
    });
    Some(entity.score_value)
}
