use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn animation_starts_idle() {
    let state = AnimationState::default();
    assert!(!state.running);
    assert!((SPEED_MIN..=SPEED_MAX).contains(&state.speed));
}

// =============================================================
// period_ms
// =============================================================

#[test]
fn period_spans_the_selector_range() {
    assert_eq!(period_ms(1), 900);
    assert_eq!(period_ms(5), 500);
    assert_eq!(period_ms(9), 100);
}

#[test]
fn period_clamps_out_of_range_speeds() {
    assert_eq!(period_ms(0), 900);
    assert_eq!(period_ms(42), 100);
}

// =============================================================
// next_timepoint
// =============================================================

#[test]
fn timepoints_advance_then_wrap() {
    assert_eq!(next_timepoint(1, 3), 2);
    assert_eq!(next_timepoint(2, 3), 3);
    assert_eq!(next_timepoint(3, 3), 1);
}

#[test]
fn single_timepoint_always_wraps_to_one() {
    assert_eq!(next_timepoint(1, 1), 1);
}

#[test]
fn ticks_never_leave_the_valid_range() {
    let count = 5;
    let mut current = 1;
    for _ in 0..32 {
        current = next_timepoint(current, count);
        assert!((1..=count).contains(&current));
    }
}

#[test]
fn speed_restart_keeps_the_current_base() {
    // A speed change stops and restarts the interval; the next tick is
    // still computed from the unchanged current timepoint.
    let before = next_timepoint(2, 4);
    let after = next_timepoint(2, 4);
    assert_eq!(before, after);
}
