//! Game state and core simulation types
//!
//! All session state lives in one owned [`GameState`] passed explicitly into
//! update and render paths; there are no free-standing globals.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start input
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; accepts a restart input
    Ended,
}

/// The player character
///
/// Horizontally pinned; the world scrolls underneath. Corner-anchored box:
/// `pos` is the top-left, extents are `width`/`height` from tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    pub on_ground: bool,
    /// One extra airborne jump, restored on landing
    pub can_double_jump: bool,
}

impl Player {
    /// Spawn standing on the ground surface
    pub fn grounded(tuning: &Tuning, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, ground_y - tuning.player_height),
            vy: 0.0,
            on_ground: true,
            can_double_jump: true,
        }
    }
}

/// One platform segment in the scrolling level strip
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge; shifts left every frame by the scroll speed
    pub x: f32,
    /// Top surface (ground level or elevated)
    pub y: f32,
    pub has_spike: bool,
}

/// A falling meteor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center position
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed per frame
    pub vy: f32,
}

/// Current viewport dimensions, supplied by the host and mutable via resize
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ground surface height for the current viewport
    pub fn ground_y(&self, tuning: &Tuning) -> f32 {
        self.height - tuning.ground_offset
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single RNG source for every probability draw in the session
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// One point per regenerated segment
    pub score: u32,
    /// Sim frames since session start (wall clock is never consulted)
    pub time_ticks: u64,
    /// Frames of scroll boost remaining
    pub boost_frames: u32,
    /// Frames the start banner stays visible (presentation hint)
    pub start_banner_frames: u32,
    /// Gameplay parameters
    pub tuning: Tuning,
    /// Host viewport
    pub viewport: Viewport,
    pub player: Player,
    /// Rolling window of segments, ordered left to right
    pub platforms: VecDeque<Platform>,
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a new session in the start screen phase
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::with_tuning(seed, viewport, Tuning::default())
    }

    /// Create a new session with explicit tuning (tests)
    pub fn with_tuning(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        let ground_y = viewport.ground_y(&tuning);
        let player = Player::grounded(&tuning, ground_y);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            boost_frames: 0,
            start_banner_frames: 0,
            tuning,
            viewport,
            player,
            platforms: VecDeque::new(),
            obstacles: Vec::new(),
        };
        super::level::init_platforms(&mut state);
        state
    }

    /// Milliseconds since session start, derived from the tick counter
    pub fn elapsed_ms(&self) -> u64 {
        self.time_ticks * 1000 / TICKS_PER_SECOND
    }

    /// Ground surface height for the current viewport
    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y(&self.tuning)
    }

    /// Atomic session reset: clock, score, player, obstacles, platforms
    ///
    /// Valid from NotStarted and Ended; transitions to Running.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_ticks = 0;
        self.boost_frames = 0;
        self.start_banner_frames = self.tuning.start_banner_frames;
        self.player = Player::grounded(&self.tuning, self.ground_y());
        self.obstacles.clear();
        super::level::init_platforms(self);
        log::info!("session started (seed {})", self.seed);
    }

    /// Apply a host viewport change.
    ///
    /// Re-grounds the player while Running and rebuilds the platform window
    /// against the new ground level. Score and phase are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if self.phase == GamePhase::Running {
            self.player.pos.y = self.ground_y() - self.tuning.player_height;
            self.player.vy = 0.0;
        }
        super::level::init_platforms(self);
        log::debug!("viewport resized to {}x{}", width, height);
    }

    /// Transition Running -> Ended. No-op in any other phase.
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Ended;
            log::info!("run ended with score {}", self.score);
        }
    }
}
