//! Simulation state
//!
//! One value owns everything: config, gap angles, balls, and the seeded RNG.
//! No globals, so tests can run any number of instances side by side and two
//! states built from the same seed and config stay bit-identical.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, SimConfig};

use super::arc::GapArc;
use super::ball::Ball;

/// Cumulative event counters, updated by `tick`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Collision responses applied
    pub bounces: u64,
    /// Balls that found the gap (`is_in` cleared)
    pub escapes: u64,
    /// Balls removed for leaving the play area
    pub despawns: u64,
    /// Balls spawned, initial ball included
    pub spawns: u64,
}

/// Complete simulation state (deterministic for a given config and seed)
#[derive(Debug, Clone)]
pub struct SimState {
    config: SimConfig,
    center: DVec2,
    pub(super) gap: GapArc,
    pub(super) balls: Vec<Ball>,
    pub(super) rng: Pcg32,
    pub(super) time_ticks: u64,
    pub(super) stats: TickStats,
}

impl SimState {
    /// Validate the config and build the initial state with one ball at the
    /// emission point.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let center = config.center();
        let gap = GapArc::new(config.gap_degrees);
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = vec![Ball::new(config.spawn_pos, config.spawn_vel, &mut rng)];
        log::info!(
            "simulation start: seed={seed}, circle_radius={}, gap={}°",
            config.circle_radius,
            config.gap_degrees
        );
        Ok(Self {
            config,
            center,
            gap,
            balls,
            rng,
            time_ticks: 0,
            stats: TickStats {
                spawns: 1,
                ..TickStats::default()
            },
        })
    }

    /// Spawn one replacement ball at the emission point with a randomized
    /// velocity kick.
    pub(super) fn spawn_replacement(&mut self) -> Ball {
        let vel = DVec2::new(
            self.rng
                .random_range(-self.config.respawn_kick_x..=self.config.respawn_kick_x),
            self.rng
                .random_range(-self.config.respawn_kick_y..=self.config.respawn_kick_y),
        );
        self.stats.spawns += 1;
        Ball::new(self.config.spawn_pos, vel, &mut self.rng)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Center of the boundary circle
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Read-only view of the ball collection (positions, colors for drawing)
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Radius shared by every ball (for drawing)
    pub fn ball_radius(&self) -> f64 {
        self.config.ball_radius
    }

    /// Escape gap angles `(start, end)`
    pub fn gap_angles(&self) -> (f64, f64) {
        (self.gap.gap_start, self.gap.gap_end)
    }

    /// Drawn boundary arc angles `(start, end)`, complement of the gap
    pub fn ring_angles(&self) -> (f64, f64) {
        (self.gap.ring_start, self.gap.ring_end)
    }

    /// Ticks elapsed since construction
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Cumulative event counters
    pub fn stats(&self) -> TickStats {
        self.stats
    }
}
