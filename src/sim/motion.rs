//! Falling motion and floor culling

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// Move every block down by `vertical_speed`, then drop the ones whose top
/// edge is below `bounds_height`. Each dropped block costs one health.
/// Returns how many blocks were dropped.
pub fn advance(state: &mut GameState, vertical_speed: f32, bounds_height: f32) -> u32 {
    let step = Vec2::new(0.0, vertical_speed);
    for entity in &mut state.entities {
        entity.pos += step;
    }

    let events = &mut state.events;
    let before = state.entities.len();
    state.entities.retain(|entity| {
        let escaped = entity.pos.y > bounds_height;
        if escaped {
            events.push(GameEvent::Escaped {
                category: entity.category,
            });
        }
        !escaped
    });

    let escaped = (before - state.entities.len()) as u32;
    state.health -= escaped as i32;
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Category, make_entity};

    fn state_with(ys: &[f32]) -> GameState {
        let mut state = GameState::new(0);
        for (i, &y) in ys.iter().enumerate() {
            state
                .entities
                .push(make_entity(Vec2::new(i as f32 * 10.0, y), Category::Tiny));
        }
        state
    }

    #[test]
    fn test_moves_down() {
        let mut state = state_with(&[0.0, 100.0]);
        assert_eq!(advance(&mut state, 4.0, 600.0), 0);
        assert_eq!(state.entities[0].pos, Vec2::new(0.0, 4.0));
        assert_eq!(state.entities[1].pos, Vec2::new(10.0, 104.0));
        assert_eq!(state.health, 20);
    }

    #[test]
    fn test_culls_past_floor() {
        let mut state = state_with(&[597.0]);
        assert_eq!(advance(&mut state, 4.0, 600.0), 1);
        assert!(state.entities.is_empty());
        assert_eq!(state.health, 19);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Escaped {
                category: Category::Tiny
            }]
        );
    }

    #[test]
    fn test_exactly_on_floor_survives() {
        let mut state = state_with(&[596.0]);
        assert_eq!(advance(&mut state, 4.0, 600.0), 0);
        assert_eq!(state.entities[0].pos.y, 600.0);
    }

    #[test]
    fn test_adjacent_removals_not_skipped() {
        // Two escaping blocks next to each other, with survivors around them
        let mut state = state_with(&[10.0, 599.0, 598.0, 20.0, 700.0]);
        assert_eq!(advance(&mut state, 4.0, 600.0), 3);
        assert_eq!(state.health, 17);
        let xs: Vec<f32> = state.entities.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![0.0, 30.0]);
    }
}
