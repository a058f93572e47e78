//! Terminal frontend for the spin3d software renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use spin3d_core::{FrameBuffer, FrameStats, Mesh, Renderer, RotationState};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod error;
pub mod presenter;

pub use config::AppConfig;
pub use error::AppError;
pub use presenter::TerminalPresenter;

/// Radians per key press when nudging the mesh by hand
const NUDGE: f32 = 0.1;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    renderer: Renderer,
    frame: FrameBuffer,
    presenter: TerminalPresenter,
    config: AppConfig,
    running: bool,
    paused: bool,
    last_stats: FrameStats,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        let renderer = Renderer::new(mesh, &config.render)?;
        let frame = FrameBuffer::with_background(
            config.render.width,
            config.render.height,
            config.render.background,
        );
        let (cols, rows) = terminal::size()?;

        Ok(Self {
            renderer,
            frame,
            presenter: TerminalPresenter::new(cols, rows),
            config,
            running: true,
            paused: false,
            last_stats: FrameStats::default(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        tracing::info!(config = ?self.config, "terminal renderer started");

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
        tracing::info!(
            frames = self.renderer.frames_rendered(),
            "terminal renderer stopped"
        );

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let target_frame_time = Duration::from_secs(1) / self.config.target_fps;

        while self.running {
            let frame_start = Instant::now();

            self.last_stats = self.renderer.render_frame(&mut self.frame);
            self.execute_routines(frame_start, target_frame_time);
            self.present()?;
            self.update_input()?;

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    /// Per-tick housekeeping after the frame is drawn.
    fn execute_routines(&mut self, frame_start: Instant, budget: Duration) {
        let render_time = frame_start.elapsed();
        if render_time > budget {
            tracing::warn!(
                frame = self.last_stats.frame,
                ?render_time,
                ?budget,
                "frame over budget"
            );
        }

        // Update FPS counter
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_frame).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
            self.frame_count = 0;
            self.last_frame = now;
        }
    }

    fn present(&mut self) -> Result<(), AppError> {
        let mut stdout = stdout();
        self.presenter.draw(&self.frame, &mut stdout)?;

        // Draw UI overlay
        if self.config.show_stats {
            queue!(
                stdout,
                cursor::MoveTo(0, 0),
                SetForegroundColor(Color::Yellow),
                SetBackgroundColor(Color::Black),
                Print(format!(
                    "spin3d | FPS: {:.1} | px: {} | {}WASD/Arrows=Rotate E/R=Roll Space=Pause Q=Quit",
                    self.fps,
                    self.last_stats.pixels_written,
                    if self.paused { "PAUSED | " } else { "" },
                )),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    /// Drain pending terminal events without blocking.
    fn update_input(&mut self) -> Result<(), AppError> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(cols, rows) => self.presenter.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, KeyEvent { code, kind, .. }: KeyEvent) {
        if kind == KeyEventKind::Release {
            return;
        }
        let (dx, dy, dz) = match code {
            KeyCode::Char('w') | KeyCode::Up => (NUDGE, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => (-NUDGE, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => (0.0, -NUDGE, 0.0),
            KeyCode::Char('d') | KeyCode::Right => (0.0, NUDGE, 0.0),
            KeyCode::Char('e') => (0.0, 0.0, NUDGE),
            KeyCode::Char('r') => (0.0, 0.0, -NUDGE),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                return;
            }
            KeyCode::Char(' ') => {
                self.toggle_pause();
                return;
            }
            _ => return,
        };
        self.renderer.rotation_mut().rotate(dx, dy, dz);
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let increment = if self.paused {
            RotationState::zero()
        } else {
            self.config.render.increment()
        };
        self.renderer.set_increment(increment);
    }
}
