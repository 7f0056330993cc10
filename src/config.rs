//! Simulation parameters and validation
//!
//! All tunables live in one value so test instances can be built without
//! touching any global. The shell validates before the simulation starts;
//! a bad config aborts construction rather than surfacing mid-tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Full parameter set for one simulation instance.
///
/// Coordinates are screen-style: origin at the top-left of the play area,
/// +y pointing down (gravity is positive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Play area width (pixels); balls outside `[0, width]` despawn
    pub width: f64,
    /// Play area height (pixels); balls outside `[0, height]` despawn
    pub height: f64,
    /// Radius of the boundary circle
    pub circle_radius: f64,
    /// Radius of every ball
    pub ball_radius: f64,
    /// Gravity acceleration per tick²
    pub gravity: f64,
    /// Gap rotation increment per tick (radians)
    pub rotation_speed: f64,
    /// Spin factor applied along the (unnormalized) contact tangent, so the
    /// impulse scales with the contact distance from center
    pub spin_speed: f64,
    /// Angular width of the escape gap (degrees)
    pub gap_degrees: f64,
    /// Emission point for the initial ball and all respawns
    pub spawn_pos: DVec2,
    /// Velocity of the initial ball
    pub spawn_vel: DVec2,
    /// Respawn horizontal velocity drawn uniformly from [-kick_x, kick_x]
    pub respawn_kick_x: f64,
    /// Respawn vertical velocity drawn uniformly from [-kick_y, kick_y]
    pub respawn_kick_y: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            circle_radius: CIRCLE_RADIUS,
            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            rotation_speed: ROTATION_SPEED,
            spin_speed: SPIN_SPEED,
            gap_degrees: GAP_DEGREES,
            spawn_pos: DVec2::new(WIDTH / 2.0, HEIGHT / 2.0 - SPAWN_OFFSET_Y),
            spawn_vel: DVec2::ZERO,
            respawn_kick_x: RESPAWN_KICK_X,
            respawn_kick_y: RESPAWN_KICK_Y,
        }
    }
}

/// Rejected configuration (fatal; the simulation is never constructed)
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension or radius was zero, negative, or non-finite
    NonPositive { field: &'static str, value: f64 },
    /// Ball radius must be strictly smaller than the circle radius
    BallTooLarge { ball: f64, circle: f64 },
    /// Gap width must be within [0, 360] degrees
    GapOutOfRange { degrees: f64 },
    /// A parameter was NaN or infinite
    NonFinite { field: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::BallTooLarge { ball, circle } => {
                write!(f, "ball radius {ball} does not fit inside circle radius {circle}")
            }
            ConfigError::GapOutOfRange { degrees } => {
                write!(f, "gap width {degrees}° outside [0, 360]")
            }
            ConfigError::NonFinite { field } => write!(f, "{field} is not finite"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Check every precondition the simulation core assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("circle_radius", self.circle_radius),
            ("ball_radius", self.ball_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("rotation_speed", self.rotation_speed),
            ("spin_speed", self.spin_speed),
            ("gap_degrees", self.gap_degrees),
            ("respawn_kick_x", self.respawn_kick_x),
            ("respawn_kick_y", self.respawn_kick_y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.spawn_pos.is_finite() || !self.spawn_vel.is_finite() {
            return Err(ConfigError::NonFinite { field: "spawn" });
        }
        if self.ball_radius >= self.circle_radius {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_radius,
                circle: self.circle_radius,
            });
        }
        if !(0.0..=360.0).contains(&self.gap_degrees) {
            return Err(ConfigError::GapOutOfRange { degrees: self.gap_degrees });
        }
        Ok(())
    }

    /// Center of the boundary circle (middle of the play area)
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if a position is inside the rectangular play area (inclusive)
    pub fn in_play_area(&self, pos: DVec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_ball() {
        let config = SimConfig {
            ball_radius: 250.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_dimensions() {
        let config = SimConfig {
            width: -1.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_gravity() {
        let config = SimConfig {
            gravity: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn test_play_area_bounds() {
        let config = SimConfig::default();
        assert!(config.in_play_area(DVec2::new(0.0, 0.0)));
        assert!(config.in_play_area(DVec2::new(700.0, 700.0)));
        assert!(!config.in_play_area(DVec2::new(-0.1, 350.0)));
        assert!(!config.in_play_area(DVec2::new(350.0, 700.1)));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.circle_radius, config.circle_radius);
        assert_eq!(back.spawn_pos, config.spawn_pos);
    }
}
