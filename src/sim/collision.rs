//! Collision detection and response
//!
//! Runs once per active tick in a fixed order: walls, then paddles, then
//! goal/miss. Paddle hits use an axis-aligned overlap test plus a
//! directional tie-break so a ball still overlapping after its bounce
//! cannot re-register on the next tick.

use super::ball::Ball;
use super::state::Paddle;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which paddle a check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    /// Player paddle, guards the left boundary
    Left,
    /// AI paddle, guards the right boundary
    Right,
}

/// Outcome of the goal/miss check for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    /// Ball is still in play
    None,
    /// Ball got past the AI paddle: the player scores
    Goal,
    /// Ball got past the player paddle: a life is lost
    Miss,
}

/// Bounce the ball off the top/bottom field walls.
///
/// Both walls are checked every tick. On contact the ball is clamped back
/// onto the wall line before its velocity reverses, so it can never sink
/// into the frame. Returns `true` if a wall was hit.
pub fn resolve_wall_collisions(ball: &mut Ball) -> bool {
    let mut hit = false;

    if ball.pos.y - ball.radius <= FRAME_MARGIN {
        ball.pos.y = FRAME_MARGIN + ball.radius;
        ball.reverse_y();
        log::debug!("wall hit (top)");
        hit = true;
    }

    if ball.pos.y + ball.radius >= CANVAS_HEIGHT - FRAME_MARGIN {
        ball.pos.y = CANVAS_HEIGHT - FRAME_MARGIN - ball.radius;
        ball.reverse_y();
        log::debug!("wall hit (bottom)");
        hit = true;
    }

    hit
}

/// Whether a paddle hit registers this tick: bounding boxes overlap on both
/// axes AND the ball is moving toward that paddle.
pub fn paddle_hit_registers(ball: &Ball, paddle: &Paddle, side: PaddleSide) -> bool {
    let hw = paddle.half_width();
    let hh = paddle.half_height();

    let overlap = ball.pos.x - ball.radius <= paddle.pos.x + hw
        && ball.pos.x + ball.radius >= paddle.pos.x - hw
        && ball.pos.y - ball.radius <= paddle.pos.y + hh
        && ball.pos.y + ball.radius >= paddle.pos.y - hh;

    let toward = match side {
        PaddleSide::Left => ball.is_moving_left(),
        PaddleSide::Right => ball.is_moving_right(),
    };

    overlap && toward
}

/// Resolve a registered paddle hit.
///
/// The ball is repositioned flush against the paddle face (not at the exact
/// overlap point) so it cannot tunnel or re-trigger, then reverses
/// horizontally, picks up spin from the contact offset, and accelerates.
/// Returns the normalized hit position in `[-1, 1]`.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    side: PaddleSide,
    tuning: &Tuning,
) -> f32 {
    let face = paddle.half_width() + ball.radius;
    ball.pos.x = match side {
        PaddleSide::Left => paddle.pos.x + face,
        PaddleSide::Right => paddle.pos.x - face,
    };

    ball.reverse_x();

    let hit_position = ((ball.pos.y - paddle.pos.y) / paddle.half_height()).clamp(-1.0, 1.0);
    ball.add_effect(hit_position, tuning.ball_effect_strength);
    ball.accelerate(tuning.ball_acceleration, tuning.ball_max_speed);

    log::debug!(
        "paddle hit ({side:?}), offset {hit_position:.2}, speed {:.0}",
        ball.current_speed()
    );
    hit_position
}

/// Goal/miss check against the field boundaries.
///
/// A goal needs the whole ball past the right canvas edge. A miss fires
/// once the whole ball is past the player's guard line, which sits a fixed
/// tolerance inside the paddle column to be forgiving near the edge.
pub fn check_goal(ball: &Ball) -> GoalOutcome {
    if ball.pos.x - ball.radius > CANVAS_WIDTH {
        GoalOutcome::Goal
    } else if ball.pos.x + ball.radius < PADDLE_LEFT_OFFSET - PADDLE_WIDTH / 2.0 - MISS_TOLERANCE {
        GoalOutcome::Miss
    } else {
        GoalOutcome::None
    }
}
