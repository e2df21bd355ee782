use super::direction::Direction;
use super::geometry::Position;
use super::history::PositionHistory;

/// Two-state counter that lets the head move on every other tick only
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct StepThrottle(u8);

impl StepThrottle {
    /// Advance the counter by one tick.  Returns `true` if the head should
    /// move on this tick.
    pub(crate) fn step(&mut self) -> bool {
        if self.0 == 0 {
            self.0 = 1;
            false
        } else {
            self.0 = 0;
            true
        }
    }
}

/// Run the movement phase of a tick: step the throttle and, if it allows,
/// move `head` by `speed` in `direction` and record the new position.
/// Returns whether the head moved.
pub(crate) fn advance(
    head: &mut Position,
    direction: Direction,
    speed: i32,
    throttle: &mut StepThrottle,
    history: &mut PositionHistory,
) -> bool {
    if !throttle.step() {
        return false;
    }
    *head = direction.advance(*head, speed);
    history.push(*head);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn throttle_alternates() {
        let mut throttle = StepThrottle::default();
        let steps = std::iter::repeat_with(|| throttle.step())
            .take(6)
            .collect::<Vec<_>>();
        assert_eq!(steps, [false, true, false, true, false, true]);
    }

    #[rstest]
    #[case(0, Position::new(410, 310), 0)]
    #[case(1, Position::new(410, 310), 0)]
    #[case(2, Position::new(430, 310), 1)]
    #[case(3, Position::new(430, 310), 1)]
    #[case(7, Position::new(470, 310), 3)]
    #[case(10, Position::new(510, 310), 5)]
    fn test_moves_every_other_tick(
        #[case] ticks: usize,
        #[case] end: Position,
        #[case] recorded: u64,
    ) {
        let mut head = Position::new(410, 310);
        let mut throttle = StepThrottle::default();
        let mut history = PositionHistory::new();
        let moves = (0..ticks)
            .filter(|_| {
                advance(
                    &mut head,
                    Direction::Right,
                    20,
                    &mut throttle,
                    &mut history,
                )
            })
            .count();
        assert_eq!(moves, ticks / 2);
        assert_eq!(head, end);
        assert_eq!(history.recorded(), recorded);
        assert_eq!(history.len(), ticks / 2);
        assert_eq!(history.nth_back(0), (ticks >= 2).then_some(end));
    }

    #[test]
    fn records_post_move_position() {
        let mut head = Position::new(410, 310);
        let mut throttle = StepThrottle::default();
        let mut history = PositionHistory::new();
        assert!(!advance(&mut head, Direction::Up, 20, &mut throttle, &mut history));
        assert_eq!(history.len(), 0);
        assert!(advance(&mut head, Direction::Up, 20, &mut throttle, &mut history));
        assert_eq!(head, Position::new(410, 290));
        assert_eq!(history.nth_back(0), Some(Position::new(410, 290)));
    }
}
