//! Falling block entities and the category table

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Block category. Smaller blocks are harder to hit and worth more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tiny,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Fixed per-category properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInfo {
    /// Side length of the square block
    pub side: f32,
    /// Points awarded when the block is clicked
    pub score_value: u32,
    /// Fill color (RGBA)
    pub color: [f32; 4],
}

impl Category {
    /// All categories, in spawn-roll order
    pub const ALL: [Category; 5] = [
        Category::Tiny,
        Category::Small,
        Category::Medium,
        Category::Large,
        Category::ExtraLarge,
    ];

    pub const fn info(self) -> CategoryInfo {
        match self {
            Category::Tiny => CategoryInfo {
                side: 10.0,
                score_value: 10,
                color: [1.0, 0.0, 1.0, 1.0], // magenta
            },
            Category::Small => CategoryInfo {
                side: 30.0,
                score_value: 7,
                color: [0.0, 0.0, 1.0, 1.0], // blue
            },
            Category::Medium => CategoryInfo {
                side: 50.0,
                score_value: 5,
                color: [0.0, 1.0, 1.0, 1.0], // cyan
            },
            Category::Large => CategoryInfo {
                side: 70.0,
                score_value: 3,
                color: [1.0, 0.0, 0.0, 1.0], // red
            },
            Category::ExtraLarge => CategoryInfo {
                side: 100.0,
                score_value: 1,
                color: [0.0, 1.0, 0.0, 1.0], // green
            },
        }
    }

    pub fn size(self) -> Vec2 {
        Vec2::splat(self.info().side)
    }

    pub fn score_value(self) -> u32 {
        self.info().score_value
    }

    pub fn color(self) -> [f32; 4] {
        self.info().color
    }
}

/// A falling block. Only `pos` changes after spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner (y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
    pub category: Category,
    pub score_value: u32,
}

/// Build a block of the given category with its top-left corner at `pos`
pub fn make_entity(pos: Vec2, category: Category) -> Entity {
    Entity {
        pos,
        size: category.size(),
        category,
        score_value: category.score_value(),
    }
}

impl Entity {
    /// Half-open box test: left/top edges inside, right/bottom edges outside
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.pos + self.size;
        point.x >= self.pos.x && point.x < max.x && point.y >= self.pos.y && point.y < max.y
    }

    pub fn color(&self) -> [f32; 4] {
        self.category.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table() {
        let values: Vec<(f32, u32)> = Category::ALL
            .iter()
            .map(|c| (c.info().side, c.score_value()))
            .collect();
        assert_eq!(
            values,
            vec![(10.0, 10), (30.0, 7), (50.0, 5), (70.0, 3), (100.0, 1)]
        );
    }

    #[test]
    fn test_score_shrinks_as_size_grows() {
        for pair in Category::ALL.windows(2) {
            assert!(pair[0].info().side < pair[1].info().side);
            assert!(pair[0].score_value() > pair[1].score_value());
        }
    }

    #[test]
    fn test_make_entity() {
        let e = make_entity(Vec2::new(12.0, 0.0), Category::Medium);
        assert_eq!(e.pos, Vec2::new(12.0, 0.0));
        assert_eq!(e.size, Vec2::new(50.0, 50.0));
        assert_eq!(e.score_value, 5);
        assert_eq!(e.category, Category::Medium);
    }

    #[test]
    fn test_contains_edges() {
        let e = make_entity(Vec2::new(5.0, 5.0), Category::Tiny);
        assert!(e.contains(Vec2::new(6.0, 6.0)));
        assert!(e.contains(Vec2::new(5.0, 5.0)));
        assert!(e.contains(Vec2::new(14.9, 14.9)));
        assert!(!e.contains(Vec2::new(15.0, 10.0)));
        assert!(!e.contains(Vec2::new(10.0, 15.0)));
        assert!(!e.contains(Vec2::new(4.9, 10.0)));
    }
}
