mod tests {
    use tilt_trail::{Trail, TrailTracker};

    const LAST_SLOT: u8 = 6;

    #[test]
    fn test_adjacent_only_dedup() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        // Cursor sequence 2, 2, 3, 3, 2 away from the strip ends
        for slot in [2, 2, 3, 3, 2] {
            tracker.track(slot, slot, LAST_SLOT);
        }
        // A slot may reappear after an intermediate one: [2, 3, 2],
        // never globally deduplicated to [2, 3]
        assert_eq!(tracker.trail().positions(), &[2, 3, 2]);
    }

    #[test]
    fn test_length_capped_at_depth() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        for slot in [1, 2, 3, 4, 5] {
            tracker.track(slot, slot, LAST_SLOT);
        }
        assert_eq!(tracker.trail().positions(), &[5, 4, 3, 2]);
    }

    #[test]
    fn test_stationary_tick_leaves_trail_untouched() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        tracker.track(2, 2, LAST_SLOT);
        tracker.track(3, 3, LAST_SLOT);
        // Same slot again, not at an end: nothing changes
        tracker.track(3, 3, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[3, 2]);
    }

    #[test]
    fn test_boundary_collapse_progression() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        tracker.track(4, 0, LAST_SLOT);
        tracker.track(2, 0, LAST_SLOT);
        // Arrival at slot 0 with target 0: advance to [0, 2, 4], then
        // every tail entry moves one step toward the head
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0, 1, 3]);

        // Holding the tilt keeps retracting; 1 reaches the head and merges
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0, 2]);
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0, 1]);
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0]);

        // Fully collapsed: single-entry trails stop retracting
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0]);
    }

    #[test]
    fn test_collapse_at_high_end() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        tracker.track(3, 6, LAST_SLOT);
        tracker.track(4, 6, LAST_SLOT);
        tracker.track(5, 6, LAST_SLOT);
        // Arrival at 6: advance to [6, 5, 4, 3], then retract one step.
        // 5 merges into the head, 4 and 3 each move up by one.
        tracker.track(6, 6, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[6, 5, 4]);
        tracker.track(6, 6, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[6, 5]);
    }

    #[test]
    fn test_no_collapse_while_target_elsewhere() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        tracker.track(2, 0, LAST_SLOT);
        tracker.track(0, 0, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0, 1]);
        // Cursor sits at 0 but the target moved away: no retraction
        tracker.track(0, 3, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[0, 1]);
    }

    #[test]
    fn test_no_collapse_mid_strip() {
        let mut tracker: TrailTracker<4> = TrailTracker::new();
        tracker.track(2, 3, LAST_SLOT);
        tracker.track(3, 3, LAST_SLOT);
        tracker.track(3, 3, LAST_SLOT);
        assert_eq!(tracker.trail().positions(), &[3, 2]);
    }

    #[test]
    fn test_retract_keeps_entries_already_at_head() {
        let mut trail: Trail<4> = Trail::new();
        trail.advance(0);
        trail.advance(2);
        trail.advance(0);
        assert_eq!(trail.positions(), &[0, 2, 0]);

        // The trailing 0 already sits on the head and stays as-is
        trail.retract();
        assert_eq!(trail.positions(), &[0, 1, 0]);
    }

    #[test]
    fn test_retract_clamps_at_head() {
        let mut trail: Trail<4> = Trail::new();
        trail.advance(5);
        trail.advance(6);
        assert_eq!(trail.positions(), &[6, 5]);
        // 5 moves to 6, merges with the head instead of overshooting
        trail.retract();
        assert_eq!(trail.positions(), &[6]);
    }
}
