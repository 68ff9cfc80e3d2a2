//! Trail history and boundary collapse.
//!
//! The trail is the ordered list of recently occupied slots,
//! most-recent-first, capped at the number of decay levels. It is the
//! sole input to the renderer: every visual property of the tail falls
//! out of the ordering and dedup rules here.

use heapless::Vec;

/// Ordered slot history, most-recent-first.
///
/// Invariants: no two adjacent entries are equal, and the length never
/// exceeds `DEPTH`. Dedup is adjacent-only by design: `[2, 3, 2]` is a
/// valid trail and renders differently from `[2, 3]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail<const DEPTH: usize> {
    positions: Vec<u8, DEPTH>,
}

impl<const DEPTH: usize> Trail<DEPTH> {
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Slots by age, head (current cursor) first.
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    pub fn head(&self) -> Option<u8> {
        self.positions.first().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Prepend a newly occupied slot.
    ///
    /// Collapses adjacent duplicates and truncates to `DEPTH`.
    pub fn advance(&mut self, slot: u8) {
        let mut next: Vec<u8, DEPTH> = Vec::new();
        let _ = next.push(slot);
        for &pos in &self.positions {
            if next.is_full() {
                break;
            }
            if next.last() != Some(&pos) {
                let _ = next.push(pos);
            }
        }
        self.positions = next;
    }

    /// Pull every entry after the head one step toward it.
    ///
    /// Entries already equal to the head stay put; the rest move by one
    /// and are clamped so they cannot overshoot the head. Adjacent
    /// duplicates produced by the move are collapsed.
    pub fn retract(&mut self) {
        let Some(&head) = self.positions.first() else {
            return;
        };
        let mut next: Vec<u8, DEPTH> = Vec::new();
        let _ = next.push(head);
        for &pos in self.positions.iter().skip(1) {
            let moved = if pos == head {
                pos
            } else if pos < head {
                (pos + 1).min(head)
            } else {
                (pos - 1).max(head)
            };
            if next.is_full() {
                break;
            }
            if next.last() != Some(&moved) {
                let _ = next.push(moved);
            }
        }
        self.positions = next;
    }
}

/// Tracks the trail across ticks.
///
/// Advances the trail whenever the cursor lands on a new slot, and
/// retracts it toward the head while the cursor rests at either end of
/// the strip. "Rests" means the mapper target equals the cursor slot;
/// a cursor that is merely clamped while the target pushes further does
/// not retract.
#[derive(Debug, Clone, Default)]
pub struct TrailTracker<const DEPTH: usize> {
    trail: Trail<DEPTH>,
    prev: Option<u8>,
}

impl<const DEPTH: usize> TrailTracker<DEPTH> {
    pub const fn new() -> Self {
        Self {
            trail: Trail::new(),
            prev: None,
        }
    }

    pub const fn trail(&self) -> &Trail<DEPTH> {
        &self.trail
    }

    /// Fold one tick of cursor motion into the trail.
    ///
    /// `last_slot` is the highest slot index on the strip.
    pub fn track(&mut self, current: u8, target: u8, last_slot: u8) -> &Trail<DEPTH> {
        if self.prev != Some(current) {
            self.trail.advance(current);
            self.prev = Some(current);
        }

        let at_end = current == 0 || current == last_slot;
        let stationary = target == current;
        if at_end && stationary && self.trail.len() > 1 {
            self.trail.retract();
        }

        &self.trail
    }
}
