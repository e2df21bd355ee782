use super::geometry::Position;
use std::collections::VecDeque;

/// Record of where the head has been, one entry per movement tick, oldest
/// first.
///
/// Only the tail of the record is ever read, so the record may be bounded with
/// [`PositionHistory::retain_latest()`]; [`PositionHistory::recorded()`] keeps
/// counting every movement tick either way.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PositionHistory {
    entries: VecDeque<Position>,
    recorded: u64,
}

impl PositionHistory {
    pub(crate) fn new() -> PositionHistory {
        PositionHistory::default()
    }

    pub(crate) fn push(&mut self, pos: Position) {
        self.entries.push_back(pos);
        self.recorded += 1;
    }

    /// Return the entry `n` places back from the newest one, so that
    /// `nth_back(0)` is the most recent position.  Returns `None` if the
    /// history does not reach that far back.
    pub(crate) fn nth_back(&self, n: usize) -> Option<Position> {
        let i = self.entries.len().checked_sub(n)?.checked_sub(1)?;
        self.entries.get(i).copied()
    }

    /// Drop the oldest entries until at most `keep` remain
    pub(crate) fn retain_latest(&mut self, keep: usize) {
        while self.len() > keep {
            let _ = self.entries.pop_front();
        }
    }

    /// Number of entries currently held
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries ever pushed, including any since dropped
    pub(crate) fn recorded(&self) -> u64 {
        self.recorded
    }
}

impl FromIterator<Position> for PositionHistory {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> PositionHistory {
        let mut history = PositionHistory::new();
        for pos in iter {
            history.push(pos);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PositionHistory {
        [(100, 90), (120, 90), (140, 90)]
            .into_iter()
            .map(Position::from)
            .collect()
    }

    #[test]
    fn nth_back() {
        let history = sample();
        assert_eq!(history.nth_back(0), Some(Position::new(140, 90)));
        assert_eq!(history.nth_back(1), Some(Position::new(120, 90)));
        assert_eq!(history.nth_back(2), Some(Position::new(100, 90)));
        assert_eq!(history.nth_back(3), None);
        assert_eq!(PositionHistory::new().nth_back(0), None);
    }

    #[test]
    fn retain_latest_keeps_tail() {
        let mut history = sample();
        history.retain_latest(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.recorded(), 3);
        assert_eq!(history.nth_back(1), Some(Position::new(120, 90)));
        assert_eq!(history.nth_back(2), None);
        history.retain_latest(5);
        assert_eq!(history.len(), 2);
    }
}
