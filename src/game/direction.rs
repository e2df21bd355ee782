use super::geometry::Position;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the direction the snake would end up facing if it were asked to
    /// turn towards `requested` while facing `self`.  A request for the exact
    /// opposite direction is refused, as obeying it would send the head
    /// straight into the segment behind it.
    pub(crate) fn turn(self, requested: Direction) -> Direction {
        if requested == self.reverse() {
            self
        } else {
            requested
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return `pos` moved `distance` units in this direction
    pub(crate) fn advance(self, pos: Position, distance: i32) -> Position {
        match self {
            Direction::Up => pos.offset(0, -distance),
            Direction::Down => pos.offset(0, distance),
            Direction::Left => pos.offset(-distance, 0),
            Direction::Right => pos.offset(distance, 0),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Direction, ParseDirectionError> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{0:?} is not a direction key")]
pub(crate) struct ParseDirectionError(String);
