//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::{Entity, GameState};

/// Generate vertices for an axis-aligned filled rectangle (top-left origin)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = pos + size;
    [
        Vertex::new(pos.x, pos.y, color),
        Vertex::new(pos.x, max.y, color),
        Vertex::new(max.x, pos.y, color),
        Vertex::new(max.x, pos.y, color),
        Vertex::new(pos.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for one falling block
pub fn entity(entity: &Entity) -> [Vertex; 6] {
    rect(entity.pos, entity.size, entity.color())
}

/// Generate vertices for every live block, in spawn order
pub fn entities(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(state.entities.len() * 6);
    for e in &state.entities {
        vertices.extend_from_slice(&entity(e));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Category, make_entity};

    #[test]
    fn test_rect_corners() {
        let vertices = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_entities_use_category_color() {
        let mut state = GameState::new(0);
        state
            .entities
            .push(make_entity(Vec2::new(0.0, 0.0), Category::Large));
        state
            .entities
            .push(make_entity(Vec2::new(100.0, 0.0), Category::Tiny));

        let vertices = entities(&state);
        assert_eq!(vertices.len(), 12);
        assert!(vertices[..6].iter().all(|v| v.color == Category::Large.color()));
        assert!(vertices[6..].iter().all(|v| v.color == Category::Tiny.color()));
    }
}
