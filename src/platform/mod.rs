//! Platform layer
//!
//! Handles the native window, input events and frame pacing, and drives
//! `sim::tick` and the renderer once per frame.

pub mod app;
pub mod input;

pub use app::run;
pub use input::InputState;
