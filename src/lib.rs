//! Spingate - balls bouncing inside a spinning ring with an escape gap
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, ball lifecycle)
//! - `config`: Simulation parameters and validation
//!
//! The simulation is pure and deterministic: fixed unit timestep, seeded RNG,
//! no rendering or platform dependencies. Anything that touches a window,
//! a clock, or an event queue belongs to the shell (`main.rs`).

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{Ball, CollisionOutcome, GapArc, SimState, TickStats, advance, tick};

/// Simulation defaults
pub mod consts {
    /// Play area dimensions (pixels)
    pub const WIDTH: f64 = 700.0;
    pub const HEIGHT: f64 = 700.0;

    /// Boundary circle radius
    pub const CIRCLE_RADIUS: f64 = 200.0;
    /// Ball radius
    pub const BALL_RADIUS: f64 = 7.0;

    /// Gravity acceleration per tick² (+y is down, screen coordinates)
    pub const GRAVITY: f64 = 0.2;
    /// Gap rotation increment per tick (radians)
    pub const ROTATION_SPEED: f64 = 0.01;
    /// Tangential spin factor applied on collision
    pub const SPIN_SPEED: f64 = 0.01;
    /// Angular width of the escape gap (degrees)
    pub const GAP_DEGREES: f64 = 60.0;

    /// Vertical offset of the emission point above the circle center
    pub const SPAWN_OFFSET_Y: f64 = 120.0;
    /// Respawn velocity ranges: uniform in [-kick, kick] per axis
    pub const RESPAWN_KICK_X: f64 = 4.0;
    pub const RESPAWN_KICK_Y: f64 = 1.0;

    /// Target tick rate for the shell's frame limiter (Hz)
    pub const TICK_RATE: u32 = 60;
}
