//! Per-frame simulation step
//!
//! Advances the game deterministically one frame at a time. All physics
//! constants are per-frame quantities (the original runs one update per
//! display refresh), so the step takes no dt. Order within a frame:
//! physics -> landing -> world scroll -> level regeneration -> obstacle
//! spawn/update -> hazard checks.

use glam::Vec2;
use rand::Rng;

use super::collision::{lands_on, obstacle_aabb, player_aabb, spike_aabb};
use super::level;
use super::state::{GamePhase, GameState, Obstacle, Player};

/// Input commands for a single frame (one-shot, cleared by the shell)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start/restart outside Running; jump or double jump while Running
    pub start_or_jump: bool,
    /// Arm the scroll-speed boost
    pub boost: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Boost arms from the input handler regardless of phase (original
    // behavior); it only matters once Running.
    if input.boost {
        state.boost_frames = state.tuning.boost_frames;
    }

    match state.phase {
        GamePhase::NotStarted | GamePhase::Ended => {
            if input.start_or_jump {
                state.restart();
            }
            return;
        }
        GamePhase::Running => {}
    }

    if input.start_or_jump {
        jump(&mut state.player, state.tuning.jump_strength);
    }

    state.time_ticks += 1;
    if state.start_banner_frames > 0 {
        state.start_banner_frames -= 1;
    }

    // Scroll speed for this frame, then burn one boost frame
    let scroll = state.tuning.scroll_speed(state.boost_frames);
    if state.boost_frames > 0 {
        state.boost_frames -= 1;
    }

    // Gravity and integration
    state.player.vy += state.tuning.gravity;
    state.player.pos.y += state.player.vy;
    state.player.on_ground = false;

    // Landing correction against every segment; last hit wins (segments
    // are horizontally disjoint, so at most one fires in practice)
    for pf in &state.platforms {
        if lands_on(&state.player, pf, &state.tuning) {
            state.player.pos.y = pf.y - state.tuning.player_height;
            state.player.vy = 0.0;
            state.player.on_ground = true;
            state.player.can_double_jump = true;
        }
    }

    // The world moves left under a stationary player
    for pf in state.platforms.iter_mut() {
        pf.x -= scroll;
    }

    level::regenerate(state);
    spawn_obstacle(state);
    update_obstacles(state, scroll);

    // Spike hazards: AABB of the triangular footprint vs the player
    let player_box = player_aabb(&state.player, &state.tuning);
    let spiked = state
        .platforms
        .iter()
        .any(|pf| pf.has_spike && player_box.overlaps(&spike_aabb(pf, &state.tuning)));
    if spiked {
        state.end_run();
    }

    // Fell off-screen
    if state.player.pos.y > state.viewport.height {
        state.end_run();
    }
}

/// Jump semantics: grounded jump, or one airborne jump while the double
/// jump allowance holds. Anything else is a no-op.
pub fn jump(player: &mut Player, strength: f32) {
    if player.on_ground {
        player.vy = strength;
    } else if player.can_double_jump {
        player.vy = strength;
        player.can_double_jump = false;
    }
}

/// Probabilistically inject one meteor at the top-right of the viewport
fn spawn_obstacle(state: &mut GameState) {
    if state.rng.random_bool(state.tuning.obstacle_spawn_chance) {
        let vy = state.tuning.obstacle_min_vy
            + state.rng.random::<f32>() * state.tuning.obstacle_vy_spread;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(state.viewport.width, state.tuning.obstacle_spawn_y),
            size: state.tuning.obstacle_size,
            vy,
        });
        log::debug!("meteor spawned (vy {vy:.2})");
    }
}

/// Advance meteors, resolve player hits, drop the ones past the bottom.
///
/// Back-to-front scan so removal never skips an element.
fn update_obstacles(state: &mut GameState, scroll: f32) {
    let player_box = player_aabb(&state.player, &state.tuning);
    let mut i = state.obstacles.len();
    while i > 0 {
        i -= 1;
        let ob = &mut state.obstacles[i];
        ob.pos.y += ob.vy;
        ob.pos.x -= scroll;

        if obstacle_aabb(ob).overlaps(&player_box) {
            state.end_run();
        }
        if state.obstacles[i].pos.y > state.viewport.height {
            state.obstacles.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Viewport::new(1200.0, 800.0));
        state.restart();
        state
    }

    /// Run one frame with no input
    fn idle(state: &mut GameState) {
        tick(state, &TickInput::default());
    }

    #[test]
    fn test_start_input_begins_session() {
        let mut state = GameState::new(1, Viewport::new(1200.0, 800.0));
        assert_eq!(state.phase, GamePhase::NotStarted);

        idle(&mut state);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.time_ticks, 0);

        tick(
            &mut state,
            &TickInput {
                start_or_jump: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.start_banner_frames, 60);
        // The starting frame itself runs no physics
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_idle_frame_clamps_player_back_to_ground() {
        // Viewport height 800 -> ground 700 -> player top 640. One idle
        // frame integrates vy to 0.5 and y to 640.5, then the landing
        // band re-clamps onto the ground segment.
        let mut state = running_state(1);
        assert_eq!(state.player.pos.y, 640.0);

        idle(&mut state);
        assert_eq!(state.player.pos.y, 640.0);
        assert_eq!(state.player.vy, 0.0);
        assert!(state.player.on_ground);
    }

    #[test]
    fn test_grounded_jump_sets_fixed_velocity() {
        let mut state = running_state(1);
        jump(&mut state.player, state.tuning.jump_strength);
        assert_eq!(state.player.vy, -12.0);
        assert!(state.player.can_double_jump);
    }

    #[test]
    fn test_double_jump_consumed_once() {
        let mut state = running_state(1);
        state.player.on_ground = false;

        jump(&mut state.player, -12.0);
        assert_eq!(state.player.vy, -12.0);
        assert!(!state.player.can_double_jump);

        // Third attempt before landing: velocity untouched
        state.player.vy = -3.0;
        jump(&mut state.player, -12.0);
        assert_eq!(state.player.vy, -3.0);
    }

    #[test]
    fn test_landing_restores_double_jump() {
        let mut state = running_state(1);
        tick(
            &mut state,
            &TickInput {
                start_or_jump: true,
                ..Default::default()
            },
        );
        assert!(!state.player.on_ground);
        // Airborne double jump
        tick(
            &mut state,
            &TickInput {
                start_or_jump: true,
                ..Default::default()
            },
        );
        assert!(!state.player.can_double_jump);

        // Fall back down: -12 + 0.5/frame needs 48 frames to turn around,
        // give it plenty
        for _ in 0..200 {
            idle(&mut state);
            if state.player.on_ground {
                break;
            }
        }
        assert!(state.player.on_ground);
        assert!(state.player.can_double_jump);
    }

    #[test]
    fn test_boost_lasts_fifteen_frames() {
        let mut state = running_state(1);
        let probe = state.platforms.len() - 1;

        tick(
            &mut state,
            &TickInput {
                boost: true,
                ..Default::default()
            },
        );
        // Boosted frame: world shifted by base + bonus
        assert_eq!(state.platforms[probe].x, 7.0 * 200.0 - 5.0);

        let mut x = state.platforms[probe].x;
        for frame in 1..15 {
            idle(&mut state);
            assert_eq!(state.platforms[probe].x, x - 5.0, "frame {frame}");
            x = state.platforms[probe].x;
        }
        // 16th frame reverts to base speed
        idle(&mut state);
        assert_eq!(state.platforms[probe].x, x - 3.0);
    }

    #[test]
    fn test_obstacle_falls_scrolls_and_expires() {
        // Flat hazard-free level so the run survives the whole descent
        let mut tuning = Tuning::default();
        tuning.obstacle_spawn_chance = 0.0;
        tuning.gap_chance = 0.0;
        tuning.elevation_chance = 0.0;
        tuning.spike_chance = 0.0;
        let mut state = GameState::with_tuning(5, Viewport::new(1200.0, 800.0), tuning);
        state.restart();
        state.obstacles.push(Obstacle {
            pos: Vec2::new(1200.0, -40.0),
            size: 40.0,
            vy: 1.2,
        });

        idle(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!((state.obstacles[0].pos.y + 38.8).abs() < 1e-4);
        assert_eq!(state.obstacles[0].pos.x, 1197.0);

        let mut frames = 1u32;
        while !state.obstacles.is_empty() {
            idle(&mut state);
            frames += 1;
            assert!(frames <= 701, "meteor never expired");
        }
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_obstacle_hit_ends_run() {
        let mut state = running_state(5);
        // Drop a meteor onto the player's box
        state.obstacles.push(Obstacle {
            pos: Vec2::new(130.0, 660.0),
            size: 40.0,
            vy: 1.0,
        });
        idle(&mut state);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_spike_hit_ends_run() {
        let mut state = running_state(5);
        // The player stands on the first segment; arm its spike
        state.platforms[0].has_spike = true;
        idle(&mut state);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_falling_off_screen_ends_run() {
        let mut state = running_state(5);
        // Open a pit under the player
        state.platforms.iter_mut().for_each(|pf| pf.x += 2000.0);
        let mut frames = 0;
        while state.phase == GamePhase::Running {
            idle(&mut state);
            frames += 1;
            assert!(frames < 600, "player never fell out");
        }
        assert!(state.player.pos.y > 800.0);
    }

    #[test]
    fn test_restart_from_ended() {
        let mut state = running_state(5);
        state.platforms[0].has_spike = true;
        idle(&mut state);
        assert_eq!(state.phase, GamePhase::Ended);

        // Physics stays suspended while Ended
        let before = state.player.pos;
        idle(&mut state);
        assert_eq!(state.player.pos, before);

        tick(
            &mut state,
            &TickInput {
                start_or_jump: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input script stay identical
        let mut a = running_state(99999);
        let mut b = running_state(99999);

        let script = |frame: u64| TickInput {
            start_or_jump: frame % 37 == 0,
            boost: frame % 53 == 0,
        };

        for frame in 0..1200 {
            let input = script(frame);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        let xs_a: Vec<f32> = a.platforms.iter().map(|p| p.x).collect();
        let xs_b: Vec<f32> = b.platforms.iter().map(|p| p.x).collect();
        assert_eq!(xs_a, xs_b);
    }
}
