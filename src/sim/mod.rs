//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed unit timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Per-tick control flow: rotate the gap, then for each ball either despawn
//! and replace it (left the play area) or integrate and resolve against the
//! boundary. The shell only ever reads state between ticks.

pub mod arc;
pub mod ball;
pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use arc::GapArc;
pub use ball::Ball;
pub use collision::{CollisionOutcome, resolve_boundary};
pub use geom::{normalize_angle, point_in_arc, reflect_with_spin};
pub use state::{SimState, TickStats};
pub use tick::{advance, tick};
