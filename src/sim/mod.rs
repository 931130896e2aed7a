//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed frame per step
//! - Seeded RNG only
//! - Stable iteration order (platform window is ordered, obstacles scan
//!   back-to-front)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on, obstacle_aabb, platform_aabb, player_aabb, spike_aabb};
pub use state::{GamePhase, GameState, Obstacle, Platform, Player, Viewport};
pub use tick::{TickInput, jump, tick};
