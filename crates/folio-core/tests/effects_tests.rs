// Host-side tests for the frame-driven page effects.

use glam::Vec2;

use folio_core::constants::{
    ERASE_INTERVAL, HOLD_DELAY, NEXT_PHRASE_DELAY, TRAIL_LEN, TYPE_INTERVAL, TYPING_START_DELAY,
};
use folio_core::effects::{
    format_thousands, CursorTrail, KonamiTracker, StatCounter, TypingEffect, KONAMI_SEQUENCE,
};

fn make_typing() -> TypingEffect {
    TypingEffect::new(vec!["ab".to_string(), "xyz".to_string()])
}

#[test]
fn typing_follows_the_full_timeline() {
    let mut fx = make_typing();

    // Nothing shows until the start delay elapses.
    assert!(!fx.tick(TYPING_START_DELAY - 0.01));
    assert_eq!(fx.text(), "");

    // First character lands the moment the wait ends.
    assert!(fx.tick(0.01));
    assert_eq!(fx.text(), "a");

    assert!(fx.tick(TYPE_INTERVAL));
    assert_eq!(fx.text(), "ab");

    // Held fully typed, then erased character by character.
    assert!(!fx.tick(HOLD_DELAY - 0.01));
    assert_eq!(fx.text(), "ab");
    assert!(fx.tick(0.01));
    assert_eq!(fx.text(), "a");
    assert!(fx.tick(ERASE_INTERVAL));
    assert_eq!(fx.text(), "");

    // After the inter-phrase pause the next phrase begins.
    assert!(fx.tick(NEXT_PHRASE_DELAY));
    assert_eq!(fx.text(), "x");
}

#[test]
fn typing_replays_steps_after_a_long_frame() {
    let mut fx = make_typing();
    // One giant frame covers the start delay and the whole first phrase.
    assert!(fx.tick(TYPING_START_DELAY + TYPE_INTERVAL * 2.0));
    assert_eq!(fx.text(), "ab");
}

#[test]
fn typing_cycles_back_to_the_first_phrase() {
    let mut fx = make_typing();
    // Step in small increments through two full phrase cycles.
    let mut first_seen_again = false;
    for _ in 0..2_000 {
        fx.tick(0.05);
        if fx.text() == "ab" {
            first_seen_again = true;
        }
    }
    assert!(first_seen_again);
}

#[test]
fn typing_with_no_phrases_is_inert() {
    let mut fx = TypingEffect::new(Vec::new());
    assert!(!fx.tick(100.0));
    assert_eq!(fx.text(), "");
}

#[test]
fn counter_counts_up_and_caps_at_target() {
    let mut counter = StatCounter::new(200.0);
    assert_eq!(counter.display(), "0");
    counter.tick();
    assert_eq!(counter.display(), "1");
    while !counter.done() {
        counter.tick();
    }
    assert_eq!(counter.display(), "200");
    // Further ticks are no-ops.
    counter.tick();
    assert_eq!(counter.display(), "200");
}

#[test]
fn counter_reports_done_on_the_reaching_tick() {
    // A counter that is retired the moment it reports done must already
    // display its final value on that same tick.
    let mut counter = StatCounter::new(200.0);
    for _ in 0..199 {
        counter.tick();
        assert!(!counter.done());
    }
    counter.tick();
    assert!(counter.done());
    assert_eq!(counter.display(), "200");
}

#[test]
fn counter_with_zero_target_is_done_immediately() {
    let counter = StatCounter::new(0.0);
    assert!(counter.done());
    assert_eq!(counter.display(), "0");
}

#[test]
fn thousands_grouping() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}

#[test]
fn trail_head_snaps_to_the_cursor() {
    let mut trail = CursorTrail::new();
    assert_eq!(trail.len(), TRAIL_LEN);
    trail.update(Vec2::new(120.0, 40.0));
    assert_eq!(trail.points()[0], Vec2::new(120.0, 40.0));
}

#[test]
fn trail_converges_on_a_resting_cursor() {
    let mut trail = CursorTrail::new();
    let cursor = Vec2::new(100.0, 50.0);
    for _ in 0..500 {
        trail.update(cursor);
    }
    for p in trail.points() {
        assert!(p.distance(cursor) < 1e-3, "straggler dot: {p:?}");
    }
}

#[test]
fn trail_opacity_fades_down_the_chain() {
    assert!(CursorTrail::opacity(0) > CursorTrail::opacity(TRAIL_LEN - 1));
    assert!((CursorTrail::opacity(0) - TRAIL_LEN as f32 / 30.0).abs() < 1e-6);
    assert_eq!(CursorTrail::opacity(TRAIL_LEN + 5), 0.0);
}

#[test]
fn konami_fires_only_on_the_exact_sequence() {
    let mut tracker = KonamiTracker::new();
    for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
        let hit = tracker.push(key);
        assert_eq!(hit, i == KONAMI_SEQUENCE.len() - 1);
    }
}

#[test]
fn konami_matches_through_leading_noise() {
    let mut tracker = KonamiTracker::new();
    assert!(!tracker.push("Enter"));
    assert!(!tracker.push("x"));
    for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
        let hit = tracker.push(key);
        assert_eq!(hit, i == KONAMI_SEQUENCE.len() - 1);
    }
}

#[test]
fn konami_rejects_a_broken_sequence() {
    let mut tracker = KonamiTracker::new();
    for key in &KONAMI_SEQUENCE[..9] {
        assert!(!tracker.push(key));
    }
    assert!(!tracker.push("b"));
}
