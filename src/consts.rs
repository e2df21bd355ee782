//! Assorted constants & hard-coded configuration
use crate::game::geometry::{Extent, Position};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the play field in world units
pub(crate) const FIELD_WIDTH: i32 = 800;

/// Height of the play field in world units, HUD strip included
pub(crate) const FIELD_HEIGHT: i32 = 600;

/// The top this many units of the field are reserved for the score & timer
/// text and are not playable.
pub(crate) const HUD_HEIGHT: i32 = 80;

/// Side length of one cell of the grid on which the head and the food move
pub(crate) const GRID_STEP: i32 = 20;

/// Distance the head travels on each movement tick
pub(crate) const SNAKE_SPEED: i32 = 20;

/// Size of the head and of every body segment
pub(crate) const SNAKE_EXTENT: Extent = Extent::square(19);

/// Size of the food pellet
pub(crate) const FOOD_EXTENT: Extent = Extent::square(20);

/// Where the head starts and where newly-grown segments are placed until the
/// follower moves them
pub(crate) const SPAWN_POSITION: Position = Position::new(410, 310);

/// How many segments are appended each time the food is eaten
pub(crate) const SEGMENTS_PER_FOOD: usize = 4;

/// Points awarded each time the food is eaten
pub(crate) const POINTS_PER_FOOD: u32 = 10;

/// Default number of simulation ticks per second
pub(crate) const DEFAULT_FRAME_RATE: u32 = 30;

/// Largest accepted frame rate
pub(crate) const MAX_FRAME_RATE: u32 = 240;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.  Each grid cell is two columns wide and one row tall; the
/// extra rows & columns are the border and the two HUD lines.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 82,
    height: 30,
};

/// Glyphs for the head, two columns wide
pub(crate) const HEAD_SYMBOL: &str = "██";

/// Glyphs for the parts of the body
pub(crate) const SEGMENT_SYMBOL: &str = "▓▓";

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyphs for the head once the game is over
pub(crate) const COLLISION_SYMBOL: &str = "><";

/// Style for the head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score & timer lines at the top of the game screen
pub(crate) const HUD_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
