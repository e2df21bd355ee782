use super::geometry::{Boundary, Position};
use super::growth::snake_box;

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The head ran into the snake's own body
    SelfCollision,
    /// The head left the playable region
    Boundary,
}

/// Test whether the head overlaps any segment other than the one directly
/// behind it, which always sits a single step away and is never a real hit.
pub(crate) fn self_collision(head: Position, segments: &[Position]) -> bool {
    let head = snake_box(head);
    segments
        .iter()
        .skip(1)
        .any(|&seg| head.overlaps(snake_box(seg)))
}

pub(crate) fn boundary_violation(head: Position, boundary: Boundary) -> bool {
    boundary.is_violated_by(head)
}

/// Check both end conditions, self-collision first
pub(crate) fn detect(head: Position, segments: &[Position], boundary: Boundary) -> Option<Ending> {
    if self_collision(head, segments) {
        Some(Ending::SelfCollision)
    } else if boundary_violation(head, boundary) {
        Some(Ending::Boundary)
    } else {
        None
    }
}
