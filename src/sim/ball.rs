//! Ball entity

use glam::DVec2;
use rand::Rng;

/// A ball entity
///
/// `is_in` is true while the ball is still confined by the boundary circle.
/// Once it finds the gap the flag drops and the ball coasts under gravity,
/// exempt from collision response, until it leaves the play area.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    /// RGB, assigned at creation, immutable thereafter
    pub color: [u8; 3],
    pub is_in: bool,
}

impl Ball {
    /// Create a ball with a uniformly random color.
    pub fn new<R: Rng>(pos: DVec2, vel: DVec2, rng: &mut R) -> Self {
        Self {
            pos,
            vel,
            color: [rng.random(), rng.random(), rng.random()],
            is_in: true,
        }
    }

    /// Advance one tick: symplectic Euler with a unit timestep.
    /// Gravity first, then position, so the velocity used for the move is
    /// already post-acceleration.
    pub fn step(&mut self, gravity: f64) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }
}
