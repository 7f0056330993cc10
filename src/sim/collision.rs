//! Ball-vs-rotating-boundary collision resolution
//!
//! One response per ball per tick. The escape test runs before the bounce:
//! a ball touching the boundary inside the gap always slips through, even on
//! the tick where contact is first detected.

use glam::DVec2;

use super::arc::GapArc;
use super::ball::Ball;
use super::geom::reflect_with_spin;

/// What the resolver did to a ball this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No boundary contact (or the ball already escaped)
    None,
    /// Contact inside the gap: `is_in` cleared, position and velocity untouched
    Escaped,
    /// Contact on the solid arc: position clamped, velocity reflected with spin
    Bounced,
}

/// Detect and apply at most one collision response against the boundary.
///
/// On a bounce the ball is repositioned to exactly `radius - ball_radius`
/// from the center (no penetration survives the tick) and its velocity is
/// reflected about the contact tangent with the configured spin added.
pub fn resolve_boundary(
    ball: &mut Ball,
    center: DVec2,
    circle_radius: f64,
    ball_radius: f64,
    gap: &GapArc,
    spin_speed: f64,
) -> CollisionOutcome {
    let d = ball.pos - center;
    let dist = d.length();
    if dist + ball_radius <= circle_radius {
        return CollisionOutcome::None;
    }
    // A ball sitting exactly on the center has no usable normal; with a
    // valid config this cannot coincide with boundary contact, but guard
    // rather than divide by zero.
    if dist == 0.0 {
        return CollisionOutcome::None;
    }

    if gap.contains(ball.pos, center) {
        ball.is_in = false;
        return CollisionOutcome::Escaped;
    }
    if !ball.is_in {
        return CollisionOutcome::None;
    }

    let d_unit = d / dist;
    ball.pos = center + (circle_radius - ball_radius) * d_unit;
    // Tangent from the pre-normalization displacement: the spin impulse
    // scales with the contact distance
    let tangent = DVec2::new(-d.y, d.x);
    ball.vel = reflect_with_spin(ball.vel, tangent, spin_speed);
    CollisionOutcome::Bounced
}
