//! Trail-to-frame rendering and output diffing.

use heapless::Vec;

use crate::color::{BLACK, Rgb, decayed, max_channels};
use crate::trail::Trail;

/// A single LED write: which slot, what color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedUpdate {
    pub index: u8,
    pub color: Rgb,
}

/// Converts a trail into per-LED colors and diffs against the last
/// emitted frame.
///
/// Owns the frame buffer of values actually sent to hardware; it is
/// used only for diffing, never for re-deriving trail state. A slot
/// whose color is unchanged produces no update, which keeps per-tick
/// I/O near zero while the cursor is still.
#[derive(Debug, Clone)]
pub struct TrailRenderer<const LEDS: usize, const DEPTH: usize> {
    frame: [Rgb; LEDS],
    base_color: Rgb,
    decay_levels: [u8; DEPTH],
}

impl<const LEDS: usize, const DEPTH: usize> TrailRenderer<LEDS, DEPTH> {
    /// `decay_levels[0]` is the head brightness; later entries dim the
    /// older trail segments.
    pub const fn new(base_color: Rgb, decay_levels: [u8; DEPTH]) -> Self {
        Self {
            frame: [BLACK; LEDS],
            base_color,
            decay_levels,
        }
    }

    /// Render the trail and return updates for slots whose color changed.
    pub fn render(&mut self, trail: &Trail<DEPTH>) -> Vec<LedUpdate, LEDS> {
        let mut desired = [BLACK; LEDS];
        let full = self.decay_levels[0];

        for (age, &slot) in trail.positions().iter().enumerate() {
            let color = decayed(self.base_color, self.decay_levels[age], full);
            let cell = &mut desired[slot as usize];
            // A slot revisited after a retraction keeps its brighter color
            *cell = max_channels(*cell, color);
        }

        let mut updates: Vec<LedUpdate, LEDS> = Vec::new();
        for (index, &color) in desired.iter().enumerate() {
            if color != self.frame[index] {
                self.frame[index] = color;
                let _ = updates.push(LedUpdate {
                    index: index as u8,
                    color,
                });
            }
        }
        updates
    }

    /// Blank the frame and emit a black update for every slot,
    /// regardless of diff state.
    ///
    /// Used at startup and shutdown to force the physical strip dark
    /// even when a previous write was dropped.
    pub fn reset(&mut self) -> Vec<LedUpdate, LEDS> {
        self.frame = [BLACK; LEDS];
        let mut updates: Vec<LedUpdate, LEDS> = Vec::new();
        for index in 0..LEDS {
            let _ = updates.push(LedUpdate {
                index: index as u8,
                color: BLACK,
            });
        }
        updates
    }

    /// The last frame handed to the caller for writing.
    pub const fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }
}
