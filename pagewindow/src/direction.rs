use core::cmp;

use crate::Direction;

/// Derives a scroll direction from successive viewport offsets.
///
/// Offsets are absolute scroll positions (pixels, lines, whatever the host
/// measures in). Equal offsets leave the direction unchanged, so a `Stop`
/// cooldown survives redundant notifications until the user actually moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionTracker {
    last_offset: u64,
    direction: Direction,
}

impl DirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_offset(&self) -> u64 {
        self.last_offset
    }

    /// Feeds one scroll notification.
    ///
    /// Observing offset 0 re-arms the tracker at the top of the document.
    pub fn observe(&mut self, offset: u64) {
        match offset.cmp(&self.last_offset) {
            cmp::Ordering::Greater => self.direction = Direction::Down,
            cmp::Ordering::Less => self.direction = Direction::Up,
            cmp::Ordering::Equal => {}
        }
        self.last_offset = offset;
    }

    /// Enters the post-upward-step cooldown. Cleared by the next `observe`
    /// that sees the offset move.
    pub(crate) fn force_stop(&mut self) {
        self.direction = Direction::Stop;
    }
}
