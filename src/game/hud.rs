//! Score & timer bookkeeping and the text shown in the HUD strip
use std::num::NonZeroU32;
use std::time::Duration;

/// Elapsed game time, advanced by one frame period per tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timer {
    frames: u64,
    frame_rate: NonZeroU32,
}

impl Timer {
    pub(crate) fn new(frame_rate: NonZeroU32) -> Timer {
        Timer {
            frames: 0,
            frame_rate,
        }
    }

    pub(crate) fn tick(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    pub(crate) fn elapsed(&self) -> Duration {
        let nanos = u128::from(self.frames) * 1_000_000_000 / u128::from(self.frame_rate.get());
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Whole seconds elapsed, rounded down
    pub(crate) fn seconds(&self) -> u64 {
        self.frames / u64::from(self.frame_rate.get())
    }
}

/// The two lines of text displayed above the play field
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HudText {
    pub(crate) top: String,
    pub(crate) bottom: String,
}

impl HudText {
    pub(crate) fn running(score: u32, timer: &Timer) -> HudText {
        HudText {
            top: format!("Score: {score}"),
            bottom: format!("Timer: {}", timer.seconds()),
        }
    }

    pub(crate) fn game_over(score: u32, timer: &Timer) -> HudText {
        HudText {
            top: format!("GAME OVER!  |  Final Score: {score}"),
            bottom: format!("Game lasted {} seconds", timer.seconds()),
        }
    }
}
