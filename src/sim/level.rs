//! Infinite level strip generation
//!
//! The level is a rolling window of [`crate::consts::PLATFORM_COUNT`]
//! segments. Once the leftmost segment scrolls fully off-screen it is
//! evicted from the front and a fresh segment is appended at the back with a
//! randomized gap, elevation, and (after the session's spike delay) hazard
//! placement. Evict/append at opposite ends keeps the world infinite with a
//! bounded allocation.

use rand::Rng;

use super::state::{GameState, Platform};

/// Populate the window: contiguous ground-level segments, no hazards
pub fn init_platforms(state: &mut GameState) {
    let ground_y = state.ground_y();
    let width = state.tuning.platform_width;
    state.platforms.clear();
    for i in 0..state.tuning.platform_count {
        state.platforms.push_back(Platform {
            x: i as f32 * width,
            y: ground_y,
            has_spike: false,
        });
    }
}

/// Recycle the leftmost segment once it has fully left the viewport.
///
/// Runs once per frame. Each successful recycle scores one point.
pub fn regenerate(state: &mut GameState) {
    let width = state.tuning.platform_width;
    let off_screen = state
        .platforms
        .front()
        .is_some_and(|front| front.x + width < 0.0);
    if !off_screen {
        return;
    }

    state.platforms.pop_front();
    let Some(last) = state.platforms.back() else {
        return;
    };
    let last_x = last.x;

    let gap = if state.rng.random_bool(state.tuning.gap_chance) {
        state.tuning.gap_width
    } else {
        0.0
    };
    let elevation = if state.rng.random_bool(state.tuning.elevation_chance) {
        state.tuning.elevation_offset
    } else {
        0.0
    };
    // Spike rolls only happen past the delay, so early segments are
    // hazard-free no matter what the RNG would have said.
    let has_spike = state.elapsed_ms() >= state.tuning.spike_delay_ms
        && state.rng.random_bool(state.tuning.spike_chance);

    let platform = Platform {
        x: last_x + width + gap,
        y: state.ground_y() + elevation,
        has_spike,
    };
    log::debug!(
        "segment recycled: x={:.1} y={:.1} gap={} spike={}",
        platform.x,
        platform.y,
        gap,
        has_spike
    );
    state.platforms.push_back(platform);
    state.score += 1;
}
