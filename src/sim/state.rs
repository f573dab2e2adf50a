//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Category, Entity};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Blocks spawn, fall and can be clicked
    Running,
    /// Health ran out; render-only from here on
    Ended,
}

/// Something that happened during a tick, for the platform layer to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { category: Category, x: f32 },
    Escaped { category: Category },
    Hit { category: Category, reward: u32 },
    GameOver { score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG (position and category rolls)
    pub rng: Pcg32,
    /// Live blocks, in spawn order
    pub entities: Vec<Entity>,
    pub score: u32,
    /// May dip below zero on the tick the run ends
    pub health: i32,
    /// Ticks since the last spawn (stalls while at the population cap)
    pub spawn_timer: f32,
    pub spawn_timer_max: f32,
    pub max_population: usize,
    /// Pointer state seen on the previous tick, for rising-edge detection
    pub pointer_was_down: bool,
    pub phase: GamePhase,
    /// Running ticks simulated
    pub time_ticks: u64,
    /// Running time simulated, in seconds
    pub elapsed: f32,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            entities: Vec::with_capacity(MAX_POPULATION),
            score: 0,
            health: START_HEALTH,
            // Starts full so the first tick spawns
            spawn_timer: SPAWN_TIMER_MAX,
            spawn_timer_max: SPAWN_TIMER_MAX,
            max_population: MAX_POPULATION,
            pointer_was_down: false,
            phase: GamePhase::Running,
            time_ticks: 0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Status readout drawn in the top-left corner
    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::Running => format!("Points: {}\nHealth: {}", self.score, self.health),
            GamePhase::Ended => format!("Final points: {}.\nPress ESC to exit.", self.score),
        }
    }
}
