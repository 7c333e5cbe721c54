//! Predictive AI paddle controller
//!
//! Recomputes its target at a fixed interval (explicit accumulated-time
//! state, no timers) by projecting the ball's straight-line trajectory to
//! the paddle column, reflecting once off the top/bottom edges. The single
//! reflection is a deliberate approximation: steep or fast shots that
//! bounce more than once beat the AI, and that is the intended difficulty.

use rand::Rng;

use super::ball::Ball;
use super::state::Paddle;
use crate::consts::CANVAS_HEIGHT;
use crate::tuning::Tuning;

/// AI paddle controller state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    /// Where the paddle is trying to be
    pub target_y: f32,
    /// Accumulated time since the last target recompute
    pub update_timer: f32,
}

impl AiController {
    pub fn new() -> Self {
        Self {
            target_y: CANVAS_HEIGHT / 2.0,
            update_timer: 0.0,
        }
    }

    /// Advance the controller by one tick: recompute the target when the
    /// interval elapses, then move the paddle toward it at bounded speed.
    pub fn update<R: Rng>(
        &mut self,
        ball: &Ball,
        paddle: &mut Paddle,
        rng: &mut R,
        tuning: &Tuning,
        dt: f32,
    ) {
        self.update_timer += dt;
        if self.update_timer >= tuning.ai_update_interval {
            self.update_timer = 0.0;
            self.recompute_target(ball, paddle.pos.x, rng, tuning);
        }

        // Move every tick, not just on recompute. No overshoot check: the
        // paddle may oscillate by up to one frame's movement around the
        // target, which is what the dead zone absorbs.
        let difference = self.target_y - paddle.pos.y;
        if difference.abs() > tuning.ai_dead_zone {
            paddle.pos.y += difference.signum() * tuning.ai_speed * dt;
        }
        paddle.clamp_to_field();
    }

    /// Project the ball to the paddle column and aim there, with a constant
    /// random aim error. A ball moving away (or straight up/down) is
    /// tracked at its current height instead.
    fn recompute_target<R: Rng>(
        &mut self,
        ball: &Ball,
        paddle_x: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) {
        let mut target = ball.pos.y;

        if ball.is_moving_right() {
            let time_to_reach = (paddle_x - ball.pos.x) / ball.vel.x;
            target = ball.pos.y + ball.vel.y * time_to_reach;

            // Fold the projection back into the canvas once per edge,
            // approximating a single wall bounce
            if target < 0.0 {
                target = -target;
            }
            if target > CANVAS_HEIGHT {
                target = CANVAS_HEIGHT - (target - CANVAS_HEIGHT);
            }
        }

        let imprecision = rng.random_range(-0.5..=0.5) * tuning.ai_imprecision_range;
        self.target_y = target + imprecision;
    }
}

impl Default for AiController {
    fn default() -> Self {
        Self::new()
    }
}
