//! Native window and fixed-rate frame loop (winit 0.30)

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use super::input::InputState;
use crate::consts::*;
use crate::renderer::{RenderState, TextFont, shapes, vertex::colors};
use crate::sim::{GameEvent, GameState, tick};

/// Fixed-timestep accumulator
#[derive(Debug, Default)]
struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    /// Add `dt` seconds and return how many ticks to run now
    fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if self.accumulator >= SIM_DT {
            // Fell behind; drop the backlog rather than fast-forwarding
            self.accumulator = 0.0;
        }
        substeps
    }
}

/// Game instance holding all state
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    /// None when the font failed to load; the status text is then skipped
    font: Option<TextFont>,
    state: GameState,
    input: InputState,
    step: FixedStep,
    last_time: Option<Instant>,
    next_frame: Instant,
    /// Startup failure to hand back from `run`
    fatal: Option<anyhow::Error>,
    exiting: bool,
}

impl App {
    fn new(seed: u64) -> Self {
        Self {
            window: None,
            renderer: None,
            font: None,
            state: GameState::new(seed),
            input: InputState::default(),
            step: FixedStep::default(),
            last_time: None,
            next_frame: Instant::now(),
            fatal: None,
            exiting: false,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("create window")?,
        );

        let renderer = pollster::block_on(RenderState::new(window.clone()))?;
        log::info!(
            "Window {}x{} (logical), scale factor {}",
            renderer.view_size.x,
            renderer.view_size.y,
            window.scale_factor()
        );

        self.font = match TextFont::embedded(FONT_SIZE) {
            Ok(font) => Some(font),
            Err(e) => {
                log::error!("Error while loading fonts: {e:#}");
                None
            }
        };

        self.input = InputState::new(window.scale_factor());
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.next_frame = Instant::now();
        Ok(())
    }

    /// Run simulation ticks for the time since the last frame
    fn update(&mut self, now: Instant, bounds: Vec2) {
        let dt = self
            .last_time
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(SIM_DT)
            .min(0.1);
        self.last_time = Some(now);

        for _ in 0..self.step.advance(dt) {
            let input = self.input.tick_input(bounds);
            tick(&mut self.state, &input, SIM_DT);
            self.input.clear_click();
        }

        self.report_events();
    }

    /// True exactly once, the first time a quit is requested
    fn should_exit(&mut self) -> bool {
        if self.input.quit_requested && !self.exiting {
            self.exiting = true;
            return true;
        }
        false
    }

    fn report_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Spawned { category, x } => {
                    log::debug!("Spawned {category:?} at x={x}");
                }
                GameEvent::Escaped { category } => {
                    log::debug!("{category:?} reached the floor, health {}", self.state.health);
                }
                GameEvent::Hit { category, reward } => {
                    log::debug!("Hit {category:?} for {reward}, score {}", self.state.score);
                }
                GameEvent::GameOver { score } => {
                    log::info!(
                        "Game over: {} points after {} ticks ({:.1}s)",
                        score,
                        self.state.time_ticks,
                        self.state.elapsed
                    );
                }
            }
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(bounds) = self.renderer.as_ref().map(|r| r.view_size) else {
            return;
        };
        self.update(Instant::now(), bounds);

        let mut vertices = shapes::entities(&self.state);
        if let Some(font) = &self.font {
            vertices.extend(font.layout(&self.state.status_text(), Vec2::ZERO, colors::TEXT));
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        match renderer.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        self.input.handle_window_event(&event);
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height, window.scale_factor());
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }

        if self.should_exit() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        let now = Instant::now();
        if now >= self.next_frame {
            window.request_redraw();
            self.next_frame = now + frame_duration();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn frame_duration() -> Duration {
    Duration::from_secs_f32(SIM_DT)
}

/// Open the window and run the game until it is closed.
///
/// Errors only when the window or GPU surface cannot be set up.
pub fn run(seed: u64) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("create event loop")?;
    let mut app = App::new(seed);
    event_loop.run_app(&mut app).context("run event loop")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => {
            log::info!("Exiting with {} points", app.state.score);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_keeps_remainder() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(SIM_DT * 4.5), 4);
        assert!(step.accumulator > SIM_DT * 0.4);
        assert!(step.accumulator < SIM_DT);
    }

    #[test]
    fn test_fixed_step_drops_backlog() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(SIM_DT * 10.0), 4);
        assert_eq!(step.accumulator, 0.0);
    }

    #[test]
    fn test_fixed_step_partial_frame() {
        let mut step = FixedStep::default();
        assert_eq!(step.advance(SIM_DT * 0.5), 0);
        assert_eq!(step.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_should_exit_fires_once() {
        let mut app = App::new(1);
        assert!(!app.should_exit());
        app.input.quit_requested = true;
        assert!(app.should_exit());
        assert!(!app.should_exit());
    }
}
