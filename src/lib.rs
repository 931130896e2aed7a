//! Meteor Dash - an endless runner over gapped platforms
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, level generation, game state)
//! - `tuning`: Data-driven gameplay parameters
//!
//! The wasm shell in `main.rs` owns the canvas, the frame loop, and input
//! wiring; nothing in `sim` touches the platform.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one sim frame per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Sim frames per second (spike gating converts ticks to milliseconds)
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Maximum substeps per render frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player bounding box (corner-anchored)
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Fixed horizontal position; the world scrolls, the player does not
    pub const PLAYER_X: f32 = 100.0;

    /// Gravity per frame (downward is +y in screen space)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump and double jump
    pub const JUMP_STRENGTH: f32 = -12.0;

    /// World scroll rate per frame
    pub const BASE_SCROLL_SPEED: f32 = 3.0;
    /// Added to the scroll rate while a boost is active
    pub const BOOST_BONUS: f32 = 2.0;
    /// Frames a boost input stays active
    pub const BOOST_FRAMES: u32 = 15;

    /// Platform window
    pub const PLATFORM_COUNT: usize = 8;
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 40.0;
    /// Distance from the bottom of the viewport to the ground surface
    pub const GROUND_OFFSET: f32 = 100.0;
    /// Horizontal gap inserted between segments (when the gap roll hits)
    pub const GAP_WIDTH: f32 = 100.0;
    pub const GAP_CHANCE: f64 = 0.3;
    /// Elevated segments sit this far above ground level
    pub const ELEVATION_OFFSET: f32 = -60.0;
    pub const ELEVATION_CHANCE: f64 = 0.2;

    /// Spikes only appear after this much session time
    pub const SPIKE_DELAY_MS: u64 = 5000;
    pub const SPIKE_CHANCE: f64 = 0.3;
    /// Spike hazard footprint, centered on the segment's top edge
    pub const SPIKE_WIDTH: f32 = 30.0;
    pub const SPIKE_HEIGHT: f32 = 30.0;

    /// Falling meteor obstacles
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const OBSTACLE_SPAWN_Y: f32 = -40.0;
    pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.01;
    pub const OBSTACLE_MIN_VY: f32 = 1.0;
    pub const OBSTACLE_VY_SPREAD: f32 = 0.5;

    /// Frames the "start!" banner stays up after a (re)start
    pub const START_BANNER_FRAMES: u32 = 60;
}
