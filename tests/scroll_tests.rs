// Host-side tests for the pure scroll/stage functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scroll {
    include!("../src/scroll.rs");
}

use scroll::*;

#[test]
fn progress_is_normalized_over_the_scrollable_range() {
    // spacer 3000, viewport 1000 -> range 2000
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert!((scroll_progress(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-6);
    assert!((scroll_progress(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn progress_clamps_outside_the_range() {
    assert_eq!(scroll_progress(-250.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(9999.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn degenerate_range_never_produces_nan() {
    // spacer equal to and shorter than the viewport
    for (spacer, viewport) in [(1000.0, 1000.0), (500.0, 1000.0), (0.0, 0.0)] {
        let at_top = scroll_progress(0.0, spacer, viewport);
        let scrolled = scroll_progress(100.0, spacer, viewport);
        assert!(at_top.is_finite() && (0.0..=1.0).contains(&at_top));
        assert!(scrolled.is_finite() && (0.0..=1.0).contains(&scrolled));
    }
    assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 1000.0, 1000.0), 1.0);
}

#[test]
fn stage_boundaries_are_lower_inclusive() {
    assert_eq!(Stage::classify(0.0), Stage::Arrival);
    assert_eq!(Stage::classify(0.329), Stage::Arrival);
    assert_eq!(Stage::classify(0.33), Stage::Exploration);
    assert_eq!(Stage::classify(0.659), Stage::Exploration);
    assert_eq!(Stage::classify(0.66), Stage::Contact);
    assert_eq!(Stage::classify(1.0), Stage::Contact);
}

#[test]
fn classification_is_total_over_the_progress_range() {
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let stage = Stage::classify(p);
        assert!(stage.index() < 3, "progress {} -> {:?}", p, stage);
    }
}

#[test]
fn stage_indices_follow_document_order() {
    assert_eq!(Stage::Arrival.index(), 0);
    assert_eq!(Stage::Exploration.index(), 1);
    assert_eq!(Stage::Contact.index(), 2);
}

#[test]
fn indicator_hide_threshold_is_exclusive() {
    assert!(!indicator_hidden(0.0));
    assert!(!indicator_hidden(0.04));
    // Exactly at the threshold the indicator stays visible.
    assert!(!indicator_hidden(0.05));
    assert!(indicator_hidden(0.0501));
    assert!(indicator_hidden(1.0));
}
