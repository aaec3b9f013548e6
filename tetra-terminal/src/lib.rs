/// Terminal host for the spinning tetrahedron
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use tetra_core::{AnimationState, Axis, FrameRenderer, ViewerConfig};

pub mod error;
pub mod renderer;

pub use error::AppError;
pub use renderer::AsciiRenderer;

/// Owns the animation state and drawing surface, and dispatches terminal
/// events to the keyboard, reshape, idle, and display handlers.
pub struct TerminalApp {
    config: ViewerConfig,
    animation: AnimationState,
    renderer: FrameRenderer,
    canvas: AsciiRenderer,
    running: bool,
    needs_redraw: bool,
}

impl TerminalApp {
    /// Create the app with a canvas sized from the configured window size.
    /// The real size arrives through [`TerminalApp::on_reshape`].
    pub fn new(config: ViewerConfig) -> Self {
        let window = &config.window;
        let cols = window.width.div_ceil(window.cell_width_px);
        let rows = window.height.div_ceil(window.cell_height_px);
        let canvas = AsciiRenderer::new(clamp_u16(cols), clamp_u16(rows), window);

        Self {
            animation: AnimationState::with_config(&config.animation, Instant::now()),
            renderer: FrameRenderer::default(),
            canvas,
            running: true,
            needs_redraw: true,
            config,
        }
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn canvas(&self) -> &AsciiRenderer {
        &self.canvas
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        let setup = execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&self.config.window.title),
            cursor::Hide
        );

        let result = match setup {
            Ok(()) => self.main_loop(&mut out),
            Err(e) => Err(e.into()),
        };

        // Cleanup
        let restored = execute!(out, terminal::LeaveAlternateScreen, cursor::Show);
        terminal::disable_raw_mode()?;

        result?;
        restored?;
        Ok(())
    }

    fn main_loop<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        let idle_wait = Duration::from_millis(self.config.animation.idle_sleep_ms);

        let (cols, rows) = terminal::size()?;
        self.on_reshape(cols, rows);
        tracing::info!(cols, rows, "entering main loop");

        while self.running {
            // Waiting for input doubles as the idle yield.
            if event::poll(idle_wait)? {
                self.handle_event(event::read()?);
            } else {
                self.on_idle(Instant::now());
            }

            if self.needs_redraw {
                self.on_display(out)?;
            }
        }

        tracing::info!("main loop finished");
        Ok(())
    }

    /// Route a terminal event to the matching handler.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) => {
                if kind == KeyEventKind::Release {
                    return;
                }
                match code {
                    KeyCode::Esc | KeyCode::Char('q') => self.quit(),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit()
                    }
                    KeyCode::Char(key) => self.on_keyboard(key),
                    _ => {}
                }
            }
            Event::Resize(cols, rows) => self.on_reshape(cols, rows),
            _ => {}
        }
    }

    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.running = false;
    }

    pub fn on_keyboard(&mut self, key: char) {
        if self.animation.handle_key(key) {
            // The status line shows the toggles, so repaint it.
            self.needs_redraw = true;
        }
    }

    pub fn on_reshape(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
        let viewport = self.canvas.projection().viewport();
        tracing::debug!(
            cols,
            rows,
            width = viewport.width,
            height = viewport.height,
            "reshape"
        );
        self.needs_redraw = true;
    }

    pub fn on_idle(&mut self, now: Instant) {
        if self.animation.tick(now) {
            self.needs_redraw = true;
        }
    }

    /// Draw the current frame and the status line into `out`.
    pub fn on_display<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        self.renderer
            .render(&self.animation.angles(), &mut self.canvas)?;

        self.canvas.draw(out)?;

        let (cols, _) = self.canvas.size();
        let status: String = self.status_line().chars().take(cols).collect();
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        out.flush()?;
        self.needs_redraw = false;
        Ok(())
    }

    pub fn status_line(&self) -> String {
        let flag = |axis: Axis| {
            if self.animation.spin(axis).is_spinning() {
                "on"
            } else {
                "off"
            }
        };
        format!(
            "{} | x:{} y:{} z:{} | q quits",
            self.config.window.title,
            flag(Axis::X),
            flag(Axis::Y),
            flag(Axis::Z)
        )
    }
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
