//! Rotating gap state
//!
//! Two angle pairs over the same circle: the open escape gap, and the drawn
//! boundary arc that is its complement. Both advance every tick by the same
//! increment — the gap angles increase while the ring angles decrease, a
//! mirrored-reference convention inherited from the renderer's arc API. The
//! pairs must stay complementary: `gap_start ≡ -ring_start` and
//! `gap_end ≡ -ring_end` (mod 2π).

use glam::DVec2;
use std::f64::consts::TAU;

use super::geom::{normalize_angle, point_in_arc};

/// Angular state of the escape gap and its complementary boundary arc.
///
/// Angles are stored unreduced (they grow without bound under rotation);
/// membership tests normalize on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapArc {
    /// Escape gap start angle (radians)
    pub gap_start: f64,
    /// Escape gap end angle (radians)
    pub gap_end: f64,
    /// Drawn boundary arc start angle (radians, mirrored reference)
    pub ring_start: f64,
    /// Drawn boundary arc end angle (radians, mirrored reference)
    pub ring_end: f64,
}

impl GapArc {
    /// Gap of `width_degrees` centered on angle 0.
    pub fn new(width_degrees: f64) -> Self {
        Self::centered_at(0.0, width_degrees)
    }

    /// Gap of `width_degrees` centered on `center_angle` (radians).
    pub fn centered_at(center_angle: f64, width_degrees: f64) -> Self {
        let half = width_degrees.to_radians() / 2.0;
        Self {
            gap_start: center_angle - half,
            gap_end: center_angle + half,
            ring_start: -(center_angle - half),
            ring_end: -(center_angle + half) + TAU,
        }
    }

    /// Rotate by `delta` radians: gap forward, ring backward, in lockstep.
    pub fn advance(&mut self, delta: f64) {
        self.gap_start += delta;
        self.gap_end += delta;
        self.ring_start -= delta;
        self.ring_end -= delta;
    }

    /// Is `point` inside the gap's angular sector around `center`?
    ///
    /// A zero-width gap admits nothing, even a point exactly on its angle;
    /// the sealed ring must behave as a full circle.
    pub fn contains(&self, point: DVec2, center: DVec2) -> bool {
        self.width() > 0.0 && point_in_arc(point, center, self.gap_start, self.gap_end)
    }

    /// Angular width of the gap (radians)
    pub fn width(&self) -> f64 {
        self.gap_end - self.gap_start
    }

    /// Do the gap and ring pairs still describe complementary arcs?
    pub fn is_complementary(&self, tol: f64) -> bool {
        let d_start = normalize_angle(self.gap_start + self.ring_start);
        let d_end = normalize_angle(self.gap_end + self.ring_end);
        let near_zero = |a: f64| a < tol || TAU - a < tol;
        near_zero(d_start) && near_zero(d_end)
    }
}
