/// Terminal-based ASCII preview of the spinning bus
use busframe_core::{draw_model, BusModel, Color, FrameLoop, LoopSettings};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Background drawn behind the wireframe
pub const BACKGROUND: Color = Color::WHITE;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    model: BusModel,
    frame_loop: FrameLoop,
    renderer: AsciiRenderer,
    last_second: Instant,
    frames_this_second: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(model: BusModel) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            model,
            frame_loop: FrameLoop::new(LoopSettings::default()),
            renderer: AsciiRenderer::new(width as usize, height as usize, BACKGROUND),
            last_second: Instant::now(),
            frames_this_second: 0,
            fps: 0.0,
        })
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        self.frame_loop.start();

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        loop {
            // Drain pending input without blocking
            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }

            if !self.frame_loop.advance() {
                break;
            }

            self.render()?;
            self.update_fps();
            std::thread::sleep(self.frame_loop.settings().frame_interval);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let ctrl_c =
                    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.frame_loop.close();
                }
            }
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.renderer = AsciiRenderer::new(width as usize, height as usize, BACKGROUND);
            }
            _ => {}
        }
    }

    fn update_fps(&mut self) {
        self.frames_this_second += 1;
        let elapsed = self.last_second.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frames_this_second as f32 / elapsed.as_secs_f32();
            self.frames_this_second = 0;
            self.last_second = Instant::now();
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.begin_frame(&self.frame_loop.rotation());
        draw_model(&mut self.renderer, &self.model);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Status line
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(crossterm::style::Color::DarkYellow),
            Print(format!(
                "busframe | rotation {:>6.0} deg | FPS: {:.1} | q/Esc quits",
                self.frame_loop.rotation().y,
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
