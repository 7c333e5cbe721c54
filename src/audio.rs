//! Event contract for the external audio collaborator
//!
//! The simulation calls these hooks synchronously as it resolves a tick.
//! Implementations must not block; waveform synthesis and music playback
//! are entirely the collaborator's concern.

/// Sink for the discrete sound-cue events the simulation emits.
///
/// All methods default to no-ops so an implementation only overrides the
/// cues it cares about.
pub trait AudioSink {
    /// Ball bounced off the top or bottom wall
    fn on_wall_hit(&mut self) {}
    /// Ball bounced off a paddle
    fn on_paddle_hit(&mut self) {}
    /// Ball was re-centered after a goal, a life loss, or a restart
    fn on_ball_reset(&mut self) {}
    /// Ball speed changed after a paddle hit; `ratio` is the speed
    /// normalized over `[initial_speed, max_speed]`, clamped to `[0, 1]`.
    /// The collaborator maps this onto music playback rate.
    fn on_speed_changed(&mut self, _ratio: f32) {}
    /// Last life lost; the match is over
    fn on_game_over(&mut self) {}
}

/// Sink that ignores every event. Default for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {}

/// Normalize a ball speed into `[0, 1]` over `[initial_speed, max_speed]`.
pub fn speed_ratio(speed: f32, initial_speed: f32, max_speed: f32) -> f32 {
    ((speed - initial_speed) / (max_speed - initial_speed)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ratio_range() {
        assert_eq!(speed_ratio(200.0, 200.0, 1000.0), 0.0);
        assert_eq!(speed_ratio(1000.0, 200.0, 1000.0), 1.0);
        assert!((speed_ratio(600.0, 200.0, 1000.0) - 0.5).abs() < 1e-6);
        // Out-of-range speeds clamp rather than leak past [0, 1]
        assert_eq!(speed_ratio(100.0, 200.0, 1000.0), 0.0);
        assert_eq!(speed_ratio(1200.0, 200.0, 1000.0), 1.0);
    }
}
