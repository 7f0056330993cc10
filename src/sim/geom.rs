//! Angle and reflection utilities
//!
//! The arc-membership test is the one genuinely tricky piece: the gap
//! rotates through the 0/2π seam every revolution, so a naive
//! `start <= angle <= end` comparison goes wrong for a full tick's worth of
//! frames each time. The wrap handling here is covered by explicit tests.

use glam::DVec2;
use std::f64::consts::TAU;

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Check whether `point` lies within the arc [start_angle, end_angle] of the
/// circle around `center`.
///
/// Endpoints are normalized to [0, 2π); an arc whose normalized start exceeds
/// its normalized end wraps past 0 and is handled by extending the end (and
/// the point's angle, when needed) by 2π before comparing.
pub fn point_in_arc(point: DVec2, center: DVec2, start_angle: f64, end_angle: f64) -> bool {
    let d = point - center;
    let angle = normalize_angle(d.y.atan2(d.x));
    let start = normalize_angle(start_angle);
    let mut end = normalize_angle(end_angle);
    if start > end {
        end += TAU;
    }
    (start..=end).contains(&angle) || (start..=end).contains(&(angle + TAU))
}

/// Reflect `velocity` about the line spanned by `tangent`, then add
/// `spin_speed * tangent` to impart spin.
///
/// The tangent need not be unit length: the projection divides by `t·t`, so
/// reflection is scale-invariant, while the spin term deliberately is not
/// (a longer tangent means a stronger kick).
pub fn reflect_with_spin(velocity: DVec2, tangent: DVec2, spin_speed: f64) -> DVec2 {
    let proj = (velocity.dot(tangent) / tangent.dot(tangent)) * tangent;
    2.0 * proj - velocity + spin_speed * tangent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    fn on_circle(center: DVec2, radius: f64, degrees: f64) -> DVec2 {
        let theta = degrees.to_radians();
        center + radius * DVec2::new(theta.cos(), theta.sin())
    }

    #[test]
    fn test_normalize_angle_range() {
        assert!((normalize_angle(0.0) - 0.0).abs() < EPS);
        assert!((normalize_angle(TAU) - 0.0).abs() < EPS);
        assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < EPS);
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_point_in_arc_no_wrap() {
        let center = DVec2::new(350.0, 350.0);
        let start = 30.0_f64.to_radians();
        let end = 90.0_f64.to_radians();
        assert!(point_in_arc(on_circle(center, 200.0, 60.0), center, start, end));
        assert!(!point_in_arc(on_circle(center, 200.0, 120.0), center, start, end));
        assert!(!point_in_arc(on_circle(center, 200.0, -30.0), center, start, end));
    }

    #[test]
    fn test_point_in_arc_wraparound() {
        // Gap from 350° to 10°, wrapping through 0°
        let center = DVec2::new(350.0, 350.0);
        let start = 350.0_f64.to_radians();
        let end = 10.0_f64.to_radians();
        assert!(point_in_arc(on_circle(center, 200.0, 355.0), center, start, end));
        assert!(point_in_arc(on_circle(center, 200.0, 5.0), center, start, end));
        assert!(!point_in_arc(on_circle(center, 200.0, 180.0), center, start, end));
    }

    #[test]
    fn test_point_in_arc_unnormalized_endpoints() {
        // Endpoints after many revolutions behave like their reduced angles
        let center = DVec2::ZERO;
        let start = 10.0 * TAU + 350.0_f64.to_radians();
        let end = -3.0 * TAU + 10.0_f64.to_radians();
        assert!(point_in_arc(on_circle(center, 100.0, 0.0), center, start, end));
        assert!(!point_in_arc(on_circle(center, 100.0, 90.0), center, start, end));
    }

    #[test]
    fn test_reflect_flips_normal_preserves_tangent() {
        // 45° incoming velocity against a horizontal surface
        let v = DVec2::new(3.0, -4.0);
        let n = DVec2::new(0.0, 1.0);
        let t = DVec2::new(-n.y, n.x);

        let out = reflect_with_spin(v, t, 0.0);
        assert!((out.dot(n) - (-v.dot(n))).abs() < EPS);
        assert!((out.dot(t) - v.dot(t)).abs() < EPS);
    }

    #[test]
    fn test_reflect_scale_invariant_without_spin() {
        let v = DVec2::new(1.5, -2.5);
        let t = DVec2::new(0.6, 0.8);
        let a = reflect_with_spin(v, t, 0.0);
        let b = reflect_with_spin(v, t * 37.0, 0.0);
        assert!((a - b).length() < EPS);
    }

    #[test]
    fn test_spin_adds_along_tangent() {
        let v = DVec2::new(2.0, 0.0);
        let t = DVec2::new(0.0, 5.0);
        let without = reflect_with_spin(v, t, 0.0);
        let with = reflect_with_spin(v, t, 0.01);
        assert!((with - without - 0.01 * t).length() < EPS);
    }
}
