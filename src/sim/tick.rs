//! Per-tick simulation step
//!
//! Tick order: rotate the gap, then run one pass over a stable snapshot of
//! the ball collection. The pass builds the next collection and swaps it in
//! at the end, so despawns and respawns never disturb which balls the
//! current tick visits.

use super::collision::{CollisionOutcome, resolve_boundary};
use super::state::SimState;

/// Advance the simulation by one tick.
pub fn tick(state: &mut SimState) {
    state.time_ticks += 1;

    let center = state.center();
    let circle_radius = state.config().circle_radius;
    let ball_radius = state.config().ball_radius;
    let gravity = state.config().gravity;
    let spin_speed = state.config().spin_speed;
    let rotation_speed = state.config().rotation_speed;

    state.gap.advance(rotation_speed);
    let gap = state.gap;

    // Two-phase update: drain the current collection, rebuild the next one
    let current = std::mem::take(&mut state.balls);
    let mut next = Vec::with_capacity(current.len() + 2);

    for mut ball in current {
        if !state.config().in_play_area(ball.pos) {
            state.stats.despawns += 1;
            log::debug!(
                "tick {}: ball left play area at {:.1},{:.1}; spawning 2",
                state.time_ticks,
                ball.pos.x,
                ball.pos.y
            );
            next.push(state.spawn_replacement());
            next.push(state.spawn_replacement());
            continue;
        }

        ball.step(gravity);
        match resolve_boundary(&mut ball, center, circle_radius, ball_radius, &gap, spin_speed) {
            CollisionOutcome::Bounced => state.stats.bounces += 1,
            CollisionOutcome::Escaped => {
                state.stats.escapes += 1;
                log::debug!(
                    "tick {}: ball escaped through gap at {:.1},{:.1}",
                    state.time_ticks,
                    ball.pos.x,
                    ball.pos.y
                );
            }
            CollisionOutcome::None => {}
        }
        next.push(ball);
    }

    state.balls = next;
}

/// Advance the simulation by `ticks` steps.
pub fn advance(state: &mut SimState, ticks: u64) {
    for _ in 0..ticks {
        tick(state);
    }
}
