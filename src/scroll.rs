// Scroll tracking and stage classification for the hero section.
//
// Everything here is a pure function of the latest scroll geometry so the
// host-side tests can exercise it without a browser. The scroll event
// handler on the wasm side is a thin wrapper around these.

use crate::constants::{INDICATOR_HIDE_ABOVE, STAGE_B_MIN, STAGE_C_MIN};

/// Normalize a raw scroll offset into [0,1] over the hero spacer.
///
/// The scrollable range is `spacer_height - viewport_height`; the spacer
/// ends when its bottom reaches the viewport bottom. A zero or negative
/// range (page shorter than the viewport) must never produce NaN/Inf: the
/// result collapses to the matching boundary instead.
pub fn scroll_progress(scroll_top: f64, spacer_height: f64, viewport_height: f64) -> f32 {
    let range = spacer_height - viewport_height;
    if range <= 0.0 {
        return if scroll_top > 0.0 { 1.0 } else { 0.0 };
    }
    ((scroll_top / range) as f32).clamp(0.0, 1.0)
}

/// The three narrative phases of the hero, bound to progress sub-ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Arrival,
    Exploration,
    Contact,
}

impl Stage {
    /// Classify progress into a stage. Lower bounds are inclusive, so
    /// exactly 0.33 resolves to `Exploration` and 0.66 to `Contact`.
    pub fn classify(progress: f32) -> Stage {
        if progress < STAGE_B_MIN {
            Stage::Arrival
        } else if progress < STAGE_C_MIN {
            Stage::Exploration
        } else {
            Stage::Contact
        }
    }

    /// Index of the matching stage/indicator element (document order).
    pub fn index(self) -> usize {
        match self {
            Stage::Arrival => 0,
            Stage::Exploration => 1,
            Stage::Contact => 2,
        }
    }
}

/// Whether the scroll hint should be hidden. Strictly greater: progress of
/// exactly 0.05 keeps the indicator visible.
#[inline]
pub fn indicator_hidden(progress: f32) -> bool {
    progress > INDICATOR_HIDE_ABOVE
}
