//! Data-driven gameplay parameters
//!
//! Every number the simulation branches on lives here so tests can pin or
//! skew individual parameters without touching the code under test. The
//! defaults reproduce the shipped game exactly.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning parameters, injected into [`crate::sim::GameState`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Player physics ===
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Vertical velocity set by a jump or double jump (negative = up)
    pub jump_strength: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Fixed horizontal position of the player box's left edge
    pub player_x: f32,

    // === Scrolling ===
    /// World shift per frame while no boost is active
    pub base_scroll_speed: f32,
    /// Extra shift per frame while boosted
    pub boost_bonus: f32,
    /// Frames a boost input stays active
    pub boost_frames: u32,

    // === Level generation ===
    pub platform_count: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Ground surface sits this far above the bottom of the viewport
    pub ground_offset: f32,
    /// Probability a freshly generated segment is preceded by a gap
    pub gap_chance: f64,
    pub gap_width: f32,
    /// Probability a freshly generated segment is elevated
    pub elevation_chance: f64,
    /// Vertical offset of an elevated segment (negative = above ground)
    pub elevation_offset: f32,

    // === Hazards ===
    /// Session time before spikes may appear at all
    pub spike_delay_ms: u64,
    /// Probability a segment generated after the delay carries a spike
    pub spike_chance: f64,
    pub spike_width: f32,
    pub spike_height: f32,

    // === Obstacles ===
    /// Per-frame probability of spawning a meteor
    pub obstacle_spawn_chance: f64,
    pub obstacle_size: f32,
    /// Spawn height above the viewport top
    pub obstacle_spawn_y: f32,
    /// Fall speed range: min_vy + [0, vy_spread)
    pub obstacle_min_vy: f32,
    pub obstacle_vy_spread: f32,

    // === Presentation hints ===
    /// Frames the start banner stays visible after a (re)start
    pub start_banner_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_x: PLAYER_X,

            base_scroll_speed: BASE_SCROLL_SPEED,
            boost_bonus: BOOST_BONUS,
            boost_frames: BOOST_FRAMES,

            platform_count: PLATFORM_COUNT,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            ground_offset: GROUND_OFFSET,
            gap_chance: GAP_CHANCE,
            gap_width: GAP_WIDTH,
            elevation_chance: ELEVATION_CHANCE,
            elevation_offset: ELEVATION_OFFSET,

            spike_delay_ms: SPIKE_DELAY_MS,
            spike_chance: SPIKE_CHANCE,
            spike_width: SPIKE_WIDTH,
            spike_height: SPIKE_HEIGHT,

            obstacle_spawn_chance: OBSTACLE_SPAWN_CHANCE,
            obstacle_size: OBSTACLE_SIZE,
            obstacle_spawn_y: OBSTACLE_SPAWN_Y,
            obstacle_min_vy: OBSTACLE_MIN_VY,
            obstacle_vy_spread: OBSTACLE_VY_SPREAD,

            start_banner_frames: START_BANNER_FRAMES,
        }
    }
}

impl Tuning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll speed for the current frame
    pub fn scroll_speed(&self, boost_frames: u32) -> f32 {
        if boost_frames > 0 {
            self.base_scroll_speed + self.boost_bonus
        } else {
            self.base_scroll_speed
        }
    }

    /// Largest horizontal hole the generator may open between segments.
    ///
    /// Used by tests to assert the level stays jumpable.
    pub fn max_gap(&self) -> f32 {
        self.gap_width
    }
}
