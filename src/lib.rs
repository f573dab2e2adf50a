//! Falling Blocks - click the blocks before they hit the floor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, clicking, game state)
//! - `renderer`: wgpu rendering of blocks and the status text
//! - `platform`: winit window, input and the fixed-rate frame loop

pub mod platform;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window dimensions (logical pixels)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Falling Blocks";

    /// Spawn timer threshold, in ticks
    pub const SPAWN_TIMER_MAX: f32 = 20.0;
    /// Population cap checked before each spawn
    pub const MAX_POPULATION: usize = 5;
    /// Starting health; the run ends when it reaches zero
    pub const START_HEALTH: i32 = 20;
    /// Downward speed of every block (units per tick)
    pub const FALL_SPEED: f32 = 4.0;

    /// Status text font, embedded so the binary runs from any directory
    pub const FONT_BYTES: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/fonts/DejaVuSans.ttf"
    ));
    pub const FONT_SIZE: f32 = 24.0;
}
