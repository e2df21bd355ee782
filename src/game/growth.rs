use super::geometry::{Boundary, Hitbox, Position};
use crate::consts;
use rand::Rng;

/// Source of the random numbers used to place the food
pub(crate) trait RandomSource {
    /// Return an integer chosen uniformly from `lo..=hi`
    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32 {
        self.random_range(lo..=hi)
    }
}

/// Pick a random grid cell inside `boundary`, below the HUD strip, and return
/// its center.
pub(crate) fn random_food_position<R: RandomSource + ?Sized>(
    rng: &mut R,
    boundary: Boundary,
) -> Position {
    let step = consts::GRID_STEP;
    let columns = boundary.width() / step;
    let rows = (boundary.bottom - boundary.top) / step;
    let col = rng.uniform_int(0, columns - 1);
    let row = rng.uniform_int(0, rows - 1);
    Position::new(
        boundary.left + step / 2 + step * col,
        boundary.top + step / 2 + step * row,
    )
}

/// What happened to the food during one tick
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Feeding {
    /// The head reached the food and the snake grew
    pub(crate) eaten: bool,

    /// Number of times the food was moved
    pub(crate) relocations: usize,
}

/// The mutable state the growth check works on
#[derive(Debug)]
pub(crate) struct Larder<'a, R: ?Sized> {
    pub(crate) food: &'a mut Position,
    pub(crate) segments: &'a mut Vec<Position>,
    pub(crate) score: &'a mut u32,
    pub(crate) boundary: Boundary,
    pub(crate) rng: &'a mut R,
}

impl<R: RandomSource + ?Sized> Larder<'_, R> {
    /// Run the growth & scoring phase of a tick.
    ///
    /// First, if the head overlaps the food, the food is moved, the snake
    /// gains [`SEGMENTS_PER_FOOD`][consts::SEGMENTS_PER_FOOD] segments at the
    /// spawn point, and [`POINTS_PER_FOOD`][consts::POINTS_PER_FOOD] is added
    /// to the score.  Then, separately, the food is moved again for each
    /// segment past the first two that it lies on.
    pub(crate) fn feed(&mut self, head: Position) -> Feeding {
        let mut feeding = Feeding::default();
        if snake_box(head).overlaps(food_box(*self.food)) {
            *self.food = random_food_position(self.rng, self.boundary);
            feeding.relocations += 1;
            self.segments.extend(std::iter::repeat_n(
                consts::SPAWN_POSITION,
                consts::SEGMENTS_PER_FOOD,
            ));
            *self.score = self.score.saturating_add(consts::POINTS_PER_FOOD);
            feeding.eaten = true;
        }
        for &seg in self.segments.iter().skip(2) {
            if food_box(*self.food).overlaps(snake_box(seg)) {
                *self.food = random_food_position(self.rng, self.boundary);
                feeding.relocations += 1;
            }
        }
        feeding
    }
}

pub(crate) fn snake_box(pos: Position) -> Hitbox {
    Hitbox::new(pos, consts::SNAKE_EXTENT)
}

pub(crate) fn food_box(pos: Position) -> Hitbox {
    Hitbox::new(pos, consts::FOOD_EXTENT)
}
