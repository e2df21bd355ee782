use super::geometry::Position;
use super::history::PositionHistory;

/// Move every body segment onto the head's trail.
///
/// Segment `i` (0 being the one right behind the head) is placed where the
/// head was `i + 1` movement ticks ago.  The most recent history entry is the
/// head's own position and is skipped.  Segments whose place on the trail is
/// older than anything in `history` stay where they are until enough
/// history has been recorded.
pub(crate) fn update_segments(segments: &mut [Position], history: &PositionHistory) {
    for (i, seg) in segments.iter_mut().enumerate() {
        match history.nth_back(i + 1) {
            Some(pos) => *seg = pos,
            // Later segments sit even further back, so none of them have a
            // slot either.
            None => break,
        }
    }
}
