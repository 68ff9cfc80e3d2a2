//! Tilt-to-slot discretization.

use libm::{copysignf, fabsf, roundf};

/// Maps a filtered tilt scalar to one of `slot_count` discrete LED
/// positions.
///
/// Tilts below `deadzone` stay at the center slot. Beyond the deadzone
/// the excess is scaled by `sensitivity` and clamped to `[-1, 1]`, so
/// large tilts saturate at the strip ends. The shipped deadzone and
/// sensitivity are deliberately conservative; tune `sensitivity` up for
/// a livelier feel.
#[derive(Debug, Clone)]
pub struct SlotMapper {
    deadzone: f32,
    sensitivity: f32,
    slot_count: u8,
}

impl SlotMapper {
    pub const fn new(deadzone: f32, sensitivity: f32, slot_count: u8) -> Self {
        Self {
            deadzone,
            sensitivity,
            slot_count,
        }
    }

    /// Map a tilt value to a slot index in `[0, slot_count - 1]`.
    ///
    /// Rounds half away from zero. Non-finite inputs settle at the
    /// center slot.
    pub fn map(&self, x: f32) -> u8 {
        let mut adjusted = if fabsf(x) < self.deadzone {
            0.0
        } else {
            copysignf((fabsf(x) - self.deadzone) * self.sensitivity, x)
        };
        adjusted = adjusted.clamp(-1.0, 1.0);
        if !adjusted.is_finite() {
            adjusted = 0.0;
        }

        let t = ((adjusted + 1.0) / 2.0).clamp(0.0, 1.0);
        let last = f32::from(self.slot_count - 1);
        let slot = roundf(t * last) as u8;
        slot.min(self.slot_count - 1)
    }
}
