pub(crate) mod direction;
mod follower;
pub(crate) mod geometry;
mod growth;
mod history;
mod hud;
mod movement;
mod termination;
use self::direction::Direction;
use self::geometry::{Boundary, Position};
use self::growth::{random_food_position, Larder, RandomSource};
use self::history::PositionHistory;
use self::hud::{HudText, Timer};
use self::movement::StepThrottle;
pub(crate) use self::termination::Ending;
use crate::config::GameConfig;
use crate::consts;
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::time::Duration;

/// The complete state of one game, advanced one frame at a time by
/// [`Game::tick()`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::StdRng> {
    rng: R,
    head: Position,
    segments: Vec<Position>,
    food: Position,
    boundary: Boundary,
    history: PositionHistory,
    direction: Direction,
    /// Direction requested since the last tick, applied at the start of the
    /// next one
    pending: Option<Direction>,
    throttle: StepThrottle,
    score: u32,
    timer: Timer,
    state: GameState,
    bounded_history: bool,
}

impl<R: RandomSource> Game<R> {
    pub(crate) fn new(config: &GameConfig, mut rng: R) -> Game<R> {
        let boundary = Boundary::FIELD;
        let food = random_food_position(&mut rng, boundary);
        Game {
            rng,
            head: consts::SPAWN_POSITION,
            segments: Vec::new(),
            food,
            boundary,
            history: PositionHistory::new(),
            direction: Direction::Right,
            pending: None,
            throttle: StepThrottle::default(),
            score: 0,
            timer: Timer::new(config.frame_rate),
            state: GameState::Running,
            bounded_history: config.bounded_history,
        }
    }

    /// Advance the game by one frame.  Returns `Some` on the frame on which
    /// the game ends; once it has ended, further calls do nothing.
    pub(crate) fn tick(&mut self) -> Option<Ending> {
        if !self.running() {
            return None;
        }
        if let Some(requested) = self.pending.take() {
            self.direction = self.direction.turn(requested);
        }
        movement::advance(
            &mut self.head,
            self.direction,
            consts::SNAKE_SPEED,
            &mut self.throttle,
            &mut self.history,
        );
        let feeding = Larder {
            food: &mut self.food,
            segments: &mut self.segments,
            score: &mut self.score,
            boundary: self.boundary,
            rng: &mut self.rng,
        }
        .feed(self.head);
        if feeding.eaten {
            log::debug!(
                "Food eaten at ({}, {}); score is now {}, length {}",
                self.head.x,
                self.head.y,
                self.score,
                self.segments.len()
            );
        }
        if feeding.relocations > 0 {
            log::debug!(
                "Food moved {} time(s), now at ({}, {})",
                feeding.relocations,
                self.food.x,
                self.food.y
            );
        }
        follower::update_segments(&mut self.segments, &self.history);
        if self.bounded_history {
            // After the next tick's push and at most one growth, every segment
            // still has its slot and game over can still rewind one step.
            self.history
                .retain_latest(self.segments.len() + consts::SEGMENTS_PER_FOOD + 1);
        }
        self.timer.tick();
        let ending = termination::detect(self.head, &self.segments, self.boundary)?;
        self.finish(ending);
        Some(ending)
    }

    /// Snap the head back to where it was before the fatal move and freeze
    /// the game
    fn finish(&mut self, ending: Ending) {
        if let Some(pos) = self.history.nth_back(1) {
            self.head = pos;
        }
        self.state = GameState::Over(ending);
        log::info!(
            "Game over ({ending:?}): score {}, {} moves, lasted {:?}",
            self.score,
            self.history.recorded(),
            self.timer.elapsed()
        );
    }
}

impl<R> Game<R> {
    /// Handle a key press.  The four direction names request a turn, which
    /// is applied on the next tick; reversals and all other keys are ignored.
    pub(crate) fn on_key(&mut self, key: &str) {
        if !self.running() {
            return;
        }
        if let Ok(requested) = key.parse::<Direction>() {
            if requested != self.direction.reverse() {
                self.pending = Some(requested);
            }
        }
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub(crate) fn hud_text(&self) -> HudText {
        match self.state {
            GameState::Running => HudText::running(self.score, &self.timer),
            GameState::Over(_) => HudText::game_over(self.score, &self.timer),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Over(Ending),
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [top_area, bottom_area, block_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(display);
        let hud = self.hud_text();
        Line::styled(hud.top, consts::HUD_STYLE)
            .centered()
            .render(top_area, buf);
        Line::styled(hud.bottom, consts::HUD_STYLE)
            .centered()
            .render(bottom_area, buf);

        let help = if self.running() {
            Line::from_iter([
                Span::raw(" Move: arrows — Pause ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(") "),
            ])
        } else {
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(") "),
            ])
        };
        Block::bordered()
            .title_bottom(help.centered())
            .render(block_area, buf);

        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            boundary: self.boundary,
            buf,
        };
        field.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &seg in &self.segments {
            field.draw_cell(seg, consts::SEGMENT_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, after a collision, it is drawn over
        // whatever it hit
        if self.running() {
            field.draw_cell(self.head, consts::HEAD_SYMBOL, consts::SNAKE_STYLE);
        } else {
            field.draw_cell(
                self.head,
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        }
    }
}

/// Maps world positions onto the terminal cells of the play field, two
/// columns per grid cell
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    boundary: Boundary,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let col = (pos.x - self.boundary.left).div_euclid(consts::GRID_STEP);
        let row = (pos.y - self.boundary.top).div_euclid(consts::GRID_STEP);
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        let Some(x) = col.checked_mul(2).and_then(|c| c.checked_add(self.area.x)) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if y >= self.area.bottom() {
            return;
        }
        for (x, ch) in (x..self.area.right()).zip(symbol.chars()) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
