//! Window events folded into per-tick input

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::sim::TickInput;

/// Latest pointer, button and quit state seen from the window
#[derive(Debug, Clone)]
pub struct InputState {
    /// Pointer position in logical pixels
    pub pointer_pos: Vec2,
    pub pointer_down: bool,
    /// Left press seen since the last tick consumed input
    pub clicked: bool,
    /// Window close or Escape
    pub quit_requested: bool,
    /// Current window scale factor, for physical → logical conversion
    pub scale_factor: f64,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_pos: Vec2::ZERO,
            pointer_down: false,
            clicked: false,
            quit_requested: false,
            scale_factor: 1.0,
        }
    }
}

impl InputState {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            ..Default::default()
        }
    }

    /// Fold one window event in
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.quit_requested = true,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.pointer_moved(logical.x, logical.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.key_pressed(logical_key),
            // Releases outside the window never arrive
            WindowEvent::Focused(false) => self.pointer_down = false,
            _ => {}
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer_pos = Vec2::new(x, y);
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.pointer_down = state.is_pressed();
            self.clicked |= self.pointer_down;
        }
    }

    pub fn key_pressed(&mut self, key: &Key) {
        if *key == Key::Named(NamedKey::Escape) {
            self.quit_requested = true;
        }
    }

    /// Snapshot for the simulation, given the drawable area.
    ///
    /// A press released before the next tick still reads as down once.
    pub fn tick_input(&self, bounds: Vec2) -> TickInput {
        TickInput {
            pointer_pos: self.pointer_pos,
            pointer_down: self.pointer_down || self.clicked,
            bounds,
        }
    }

    /// Called after each tick that consumed a snapshot
    pub fn clear_click(&mut self) {
        self.clicked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_button_tracks_down() {
        let mut input = InputState::default();
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(input.pointer_down);
        input.mouse_button(MouseButton::Right, ElementState::Released);
        assert!(input.pointer_down);
        input.mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!input.pointer_down);
    }

    #[test]
    fn test_escape_quits() {
        let mut input = InputState::default();
        input.key_pressed(&Key::Named(NamedKey::Space));
        assert!(!input.quit_requested);
        input.key_pressed(&Key::Named(NamedKey::Escape));
        assert!(input.quit_requested);
    }

    #[test]
    fn test_close_requested_quits() {
        let mut input = InputState::default();
        input.handle_window_event(&WindowEvent::CloseRequested);
        assert!(input.quit_requested);
    }

    #[test]
    fn test_focus_loss_releases_pointer() {
        let mut input = InputState::default();
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.handle_window_event(&WindowEvent::Focused(false));
        assert!(!input.pointer_down);
    }

    #[test]
    fn test_tick_input_snapshot() {
        let mut input = InputState::new(2.0);
        input.pointer_moved(6.0, 6.0);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);

        let snapshot = input.tick_input(Vec2::new(800.0, 600.0));
        assert_eq!(snapshot.pointer_pos, Vec2::new(6.0, 6.0));
        assert!(snapshot.pointer_down);
        assert_eq!(snapshot.bounds, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_click_between_ticks_is_kept() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut input = InputState::default();
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!input.pointer_down);
        assert!(input.tick_input(bounds).pointer_down);

        input.clear_click();
        assert!(!input.tick_input(bounds).pointer_down);
    }

    #[test]
    fn test_held_button_survives_clear() {
        let mut input = InputState::default();
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.clear_click();
        assert!(input.tick_input(Vec2::new(800.0, 600.0)).pointer_down);
    }

    #[test]
    fn test_quick_click_scores() {
        use crate::sim::{Category, GameState, make_entity, tick};

        let bounds = Vec2::new(800.0, 600.0);
        let mut state = GameState::new(7);
        state.spawn_timer = 0.0;
        state
            .entities
            .push(make_entity(Vec2::new(100.0, 100.0), Category::ExtraLarge));

        let mut input = InputState::default();
        input.pointer_moved(150.0, 150.0);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.mouse_button(MouseButton::Left, ElementState::Released);

        tick(&mut state, &input.tick_input(bounds), 1.0 / 60.0);
        input.clear_click();
        assert_eq!(state.score, 1);
        assert!(state.entities.is_empty());

        tick(&mut state, &input.tick_input(bounds), 1.0 / 60.0);
        assert_eq!(state.score, 1);
    }
}
