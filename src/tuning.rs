//! Data-driven game balance
//!
//! Every gameplay number the simulation consumes lives here, so balance
//! can be tweaked (or loaded from JSON) without touching the sim code.
//! Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed right after a reset
    pub ball_initial_speed: f32,
    /// Speed gained on each paddle bounce
    pub ball_acceleration: f32,
    /// Hard speed cap
    pub ball_max_speed: f32,
    /// Vertical kick per unit of paddle-contact offset
    pub ball_effect_strength: f32,
    /// AI paddle speed (pixels per second)
    pub ai_speed: f32,
    /// Seconds between AI target recomputes
    pub ai_update_interval: f32,
    /// Minimum target distance before the AI paddle moves
    pub ai_dead_zone: f32,
    /// Total width of the AI's random aim error
    pub ai_imprecision_range: f32,
    /// Lives at match start
    pub lives_count: u8,
    /// Points per paddle bounce
    pub points_per_hit: u32,
    /// Points when the AI misses the ball
    pub points_per_goal: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_initial_speed: BALL_INITIAL_SPEED,
            ball_acceleration: BALL_ACCELERATION,
            ball_max_speed: BALL_MAX_SPEED,
            ball_effect_strength: BALL_EFFECT_STRENGTH,
            ai_speed: AI_SPEED,
            ai_update_interval: AI_UPDATE_INTERVAL,
            ai_dead_zone: AI_DEAD_ZONE,
            ai_imprecision_range: AI_IMPRECISION_RANGE,
            lives_count: LIVES_COUNT,
            points_per_hit: POINTS_PER_HIT,
            points_per_goal: POINTS_PER_GOAL,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.ball_initial_speed, BALL_INITIAL_SPEED);
        assert_eq!(t.ball_max_speed, BALL_MAX_SPEED);
        assert_eq!(t.lives_count, LIVES_COUNT);
        assert_eq!(t.points_per_goal, POINTS_PER_GOAL);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tuning::from_json(r#"{"ai_speed": 300.0, "lives_count": 5}"#).unwrap();
        assert_eq!(t.ai_speed, 300.0);
        assert_eq!(t.lives_count, 5);
        // Untouched fields keep their defaults
        assert_eq!(t.ball_acceleration, BALL_ACCELERATION);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
