//! World-space positions, the play boundary, and the bounding-box overlap
//! test used for every collision in the game.
//!
//! World coordinates are the 800×600 unit play field with the origin in the
//! top-left corner and `y` growing downwards.  Every object is anchored at its
//! center.
use crate::consts;

/// A point in world coordinates
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return this position moved by `dx` and `dy`
    pub(crate) fn offset(self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Position {
        Position { x, y }
    }
}

/// Width & height of an object in world units
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Extent {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Extent {
    pub(crate) const fn square(side: u32) -> Extent {
        Extent {
            width: side,
            height: side,
        }
    }
}

/// An axis-aligned box centered on a position
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Hitbox {
    pub(crate) center: Position,
    pub(crate) extent: Extent,
}

impl Hitbox {
    pub(crate) fn new(center: Position, extent: Extent) -> Hitbox {
        Hitbox { center, extent }
    }

    /// Test whether two boxes share any interior area.  Boxes whose edges
    /// merely touch do not overlap.
    pub(crate) fn overlaps(self, other: Hitbox) -> bool {
        // Compare doubled center distances against summed extents so that odd
        // sizes need no rounding.
        let dx = u64::from(self.center.x.abs_diff(other.center.x)) * 2;
        let dy = u64::from(self.center.y.abs_diff(other.center.y)) * 2;
        dx < u64::from(self.extent.width) + u64::from(other.extent.width)
            && dy < u64::from(self.extent.height) + u64::from(other.extent.height)
    }
}

/// The playable region of the field.  The strip above `top` is reserved for
/// the HUD.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Boundary {
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) right: i32,
    pub(crate) bottom: i32,
}

impl Boundary {
    /// The standard 800×600 field with an 80 unit HUD strip
    pub(crate) const FIELD: Boundary = Boundary {
        left: 0,
        top: consts::HUD_HEIGHT,
        right: consts::FIELD_WIDTH,
        bottom: consts::FIELD_HEIGHT,
    };

    /// Width of the whole field
    pub(crate) fn width(self) -> i32 {
        self.right - self.left
    }

    /// Test whether `pos` lies on or beyond any edge of the boundary
    pub(crate) fn is_violated_by(self, pos: Position) -> bool {
        pos.x >= self.right || pos.x <= self.left || pos.y >= self.bottom || pos.y <= self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SNAKE: Extent = Extent::square(19);
    const FOOD: Extent = Extent::square(20);

    #[rstest]
    #[case(Position::new(10, 90), Position::new(10, 90), true)]
    #[case(Position::new(10, 90), Position::new(29, 90), true)]
    #[case(Position::new(10, 90), Position::new(30, 90), false)]
    #[case(Position::new(10, 90), Position::new(10, 110), false)]
    #[case(Position::new(10, 90), Position::new(-9, 71), true)]
    #[case(Position::new(10, 90), Position::new(30, 110), false)]
    fn test_snake_food_overlap(#[case] head: Position, #[case] food: Position, #[case] hit: bool) {
        let a = Hitbox::new(head, SNAKE);
        let b = Hitbox::new(food, FOOD);
        assert_eq!(a.overlaps(b), hit);
        assert_eq!(b.overlaps(a), hit);
    }

    #[test]
    fn adjacent_segments_do_not_touch() {
        let a = Hitbox::new(Position::new(410, 310), SNAKE);
        let b = Hitbox::new(Position::new(390, 310), SNAKE);
        assert!(!a.overlaps(b));
        let c = Hitbox::new(Position::new(410, 330), SNAKE);
        assert!(!a.overlaps(c));
    }

    #[rstest]
    #[case(Position::new(800, 310), true)]
    #[case(Position::new(799, 310), false)]
    #[case(Position::new(0, 310), true)]
    #[case(Position::new(1, 310), false)]
    #[case(Position::new(410, 600), true)]
    #[case(Position::new(410, 599), false)]
    #[case(Position::new(410, 81), false)]
    #[case(Position::new(410, 80), true)]
    #[case(Position::new(410, 79), true)]
    #[case(Position::new(810, 70), true)]
    #[case(Position::new(790, 590), false)]
    #[case(Position::new(10, 90), false)]
    fn test_boundary_violation(#[case] pos: Position, #[case] violated: bool) {
        assert_eq!(Boundary::FIELD.is_violated_by(pos), violated);
    }

    #[test]
    fn offset_moves_both_axes() {
        assert_eq!(Position::new(10, 90).offset(-20, 40), Position::new(-10, 130));
    }
}
