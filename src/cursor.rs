//! Rate-limited cursor position.

/// Integer cursor that chases the mapped target slot.
///
/// Moves at most one slot per tick, which bounds the visual velocity of
/// the trail head no matter how fast the tilt signal swings.
#[derive(Debug, Clone)]
pub struct Cursor {
    slot: u8,
    last_slot: u8,
}

impl Cursor {
    /// Create a cursor at the center of a strip of `slot_count` LEDs.
    pub const fn centered(slot_count: u8) -> Self {
        Self {
            slot: slot_count / 2,
            last_slot: slot_count - 1,
        }
    }

    pub const fn slot(&self) -> u8 {
        self.slot
    }

    /// Move at most one slot toward `target` and return the new position.
    ///
    /// The clamp is redundant while targets come from the mapper, but it
    /// keeps the cursor in range against any caller.
    pub fn step_toward(&mut self, target: u8) -> u8 {
        if target > self.slot {
            self.slot += 1;
        } else if target < self.slot {
            self.slot -= 1;
        }
        self.slot = self.slot.min(self.last_slot);
        self.slot
    }
}
