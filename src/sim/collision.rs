//! Axis-aligned collision tests for the runner world
//!
//! Everything in the game is a box: the player, platform segments, the
//! spike footprint bound to a segment's top edge, and the square inscribing
//! each falling meteor. Landing uses the platform's full height band, not
//! just its top surface (the original game's loose test, kept on purpose).

use glam::Vec2;

use super::state::{Obstacle, Platform, Player};
use crate::tuning::Tuning;

/// A corner-anchored axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(min: Vec2, width: f32, height: f32) -> Self {
        Self { min, width, height }
    }

    /// Box centered on `center` (meteors are stored center-anchored)
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self {
            min: center - Vec2::splat(size / 2.0),
            width: size,
            height: size,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.height
    }

    /// Strict overlap test; shared edges do not count as contact
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.right()
            && self.right() > other.min.x
            && self.min.y < other.bottom()
            && self.bottom() > other.min.y
    }
}

/// The player's bounding box
pub fn player_aabb(player: &Player, tuning: &Tuning) -> Aabb {
    Aabb::new(player.pos, tuning.player_width, tuning.player_height)
}

/// A segment's bounding box
pub fn platform_aabb(platform: &Platform, tuning: &Tuning) -> Aabb {
    Aabb::new(
        Vec2::new(platform.x, platform.y),
        tuning.platform_width,
        tuning.platform_height,
    )
}

/// Bounding box of the triangular spike centered on a segment's top edge
pub fn spike_aabb(platform: &Platform, tuning: &Tuning) -> Aabb {
    Aabb::new(
        Vec2::new(
            platform.x + tuning.platform_width / 2.0 - tuning.spike_width / 2.0,
            platform.y - tuning.spike_height,
        ),
        tuning.spike_width,
        tuning.spike_height,
    )
}

/// Bounding box of a meteor (square inscribed by its size)
pub fn obstacle_aabb(obstacle: &Obstacle) -> Aabb {
    Aabb::centered(obstacle.pos, obstacle.size)
}

/// Landing band test against one segment.
///
/// True when the player's horizontal extent overlaps the segment's and the
/// player's bottom edge lies anywhere within the segment's height band
/// (inclusive at both edges, matching the original).
pub fn lands_on(player: &Player, platform: &Platform, tuning: &Tuning) -> bool {
    let bottom = player.pos.y + tuning.player_height;
    player.pos.x + tuning.player_width > platform.x
        && player.pos.x < platform.x + tuning.platform_width
        && bottom >= platform.y
        && bottom <= platform.y + tuning.platform_height
}
