use crate::command::Command;
use crate::config::GameConfig;
use crate::game::Game;
use crate::util::{center_line, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Clear, Widget},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The terminal host: owns the current game, feeds it key presses, and calls
/// [`Game::tick()`] at the configured frame rate
#[derive(Clone, Debug)]
pub(crate) struct App {
    config: GameConfig,
    game: Game,
    mode: Mode,
    next_tick: Option<Instant>,
}

impl App {
    const PAUSED_BANNER_WIDTH: u16 = 22;

    pub(crate) fn new(config: GameConfig) -> App {
        log::info!(
            "Starting new game at {} ticks per second (seed: {:?})",
            config.frame_rate,
            config.seed
        );
        App {
            config,
            game: Game::new(&config, new_rng(config.seed)),
            mode: Mode::Playing,
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if self.ticking() {
            let period = self.tick_period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                if let Some(ending) = self.game.tick() {
                    log::info!(
                        "Game ended by {ending:?} with score {} after {:?}",
                        self.game.score(),
                        self.game.elapsed()
                    );
                }
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.ticking() {
                self.mode = Mode::Paused;
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.mode = Mode::Quit,
            Command::Pause => match self.mode {
                Mode::Playing if self.game.running() => self.mode = Mode::Paused,
                Mode::Paused => {
                    self.mode = Mode::Playing;
                    self.next_tick = None;
                }
                _ => (),
            },
            Command::Restart => {
                if !self.game.running() {
                    log::info!("Restarting");
                    self.game = Game::new(&self.config, new_rng(self.config.seed));
                    self.mode = Mode::Playing;
                    self.next_tick = None;
                }
            }
            Command::Key(key) => {
                if self.mode == Mode::Playing {
                    self.game.on_key(key);
                }
            }
        }
    }

    fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.config.frame_rate.get()
    }

    fn ticking(&self) -> bool {
        self.mode == Mode::Playing && self.game.running()
    }

    fn quitting(&self) -> bool {
        self.mode == Mode::Quit
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.game.render(area, buf);
        if self.mode == Mode::Paused {
            let display = get_display_area(area);
            let banner = center_line(display, App::PAUSED_BANNER_WIDTH, display.height / 2);
            Clear.render(banner, buf);
            Line::styled(
                " PAUSED (p to resume) ",
                Style::new().add_modifier(Modifier::REVERSED),
            )
            .centered()
            .render(banner, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Playing,
    Paused,
    Quit,
}

fn new_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::num::NonZeroU32;

    fn app() -> App {
        App::new(GameConfig {
            frame_rate: NonZeroU32::new(30).unwrap(),
            bounded_history: true,
            seed: Some(0x0123456789ABCDEF),
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn tick_period() {
        assert_eq!(app().tick_period(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn pause_and_resume() {
        let mut app = app();
        assert!(app.ticking());
        app.handle_event(key(KeyCode::Char('p')));
        assert_eq!(app.mode, Mode::Paused);
        assert!(!app.ticking());
        // Turns are ignored while paused
        app.handle_event(key(KeyCode::Up));
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Playing);
        let _ = app.game.tick();
        let _ = app.game.tick();
        assert_eq!(app.game.hud_text().top, "Score: 0");
    }

    #[test]
    fn focus_lost_pauses() {
        let mut app = app();
        app.handle_event(Event::FocusLost);
        assert_eq!(app.mode, Mode::Paused);
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut app = app();
        let fresh = app.game.clone();
        let _ = app.game.tick();
        app.handle_event(key(KeyCode::Char('r')));
        assert_ne!(app.game, fresh);
        app.handle_event(key(KeyCode::Up));
        while app.game.running() {
            let _ = app.game.tick();
        }
        assert!(!app.ticking());
        app.handle_event(key(KeyCode::Char('p')));
        assert_eq!(app.mode, Mode::Playing);
        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.game, fresh);
        assert!(app.ticking());
    }

    #[test]
    fn quit() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.quitting());
    }

    #[test]
    fn render_paused_banner() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('p')));
        let area = Rect::new(0, 0, 82, 30);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        let row = (0..area.width)
            .map(|x| buffer[(x, 15)].symbol())
            .collect::<String>();
        assert!(row.contains("PAUSED (p to resume)"), "{row:?}");
    }
}
