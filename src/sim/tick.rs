//! Per-tick simulation advance
//!
//! One entry point per frame, driven by the external render loop. Fixed
//! order inside a tick: ball integration, wall collisions, paddle
//! collisions, AI movement, goal/miss resolution. Single-threaded and
//! synchronous; the only writer is this function.

use crate::audio::{AudioSink, speed_ratio};

use super::collision::{self, GoalOutcome, PaddleSide};
use super::state::{GameState, MatchPhase};

/// Input state for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player paddle y from the input collaborator; clamped, never rejected
    pub player_paddle_y: Option<f32>,
    /// Whether touch/input is engaged this frame
    pub touching: bool,
}

/// Advance the simulation by `dt` seconds.
///
/// The player paddle position is applied every call. The mutation path
/// (ball, collisions, AI, match state) runs only while the match is
/// `Playing` and the touch flag is held; lifting the finger pauses play
/// without leaving the phase.
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioSink, dt: f32) {
    if let Some(y) = input.player_paddle_y {
        state.player_paddle.pos.y = y;
        state.player_paddle.clamp_to_field();
    }

    match state.match_state.phase {
        MatchPhase::GameOver => return,
        MatchPhase::Idle => {
            if !input.touching {
                return;
            }
            state.match_state.start();
        }
        MatchPhase::Playing => {}
    }

    if !input.touching {
        return;
    }

    state.ball.update(dt);

    if collision::resolve_wall_collisions(&mut state.ball) {
        audio.on_wall_hit();
    }

    let paddles = [
        (&state.player_paddle, PaddleSide::Left),
        (&state.ai_paddle, PaddleSide::Right),
    ];
    for (paddle, side) in paddles {
        if collision::paddle_hit_registers(&state.ball, paddle, side) {
            collision::resolve_paddle_hit(&mut state.ball, paddle, side, &state.tuning);
            state
                .match_state
                .record_paddle_hit(state.tuning.points_per_hit);
            audio.on_paddle_hit();
            audio.on_speed_changed(speed_ratio(
                state.ball.current_speed(),
                state.tuning.ball_initial_speed,
                state.tuning.ball_max_speed,
            ));
        }
    }

    state.ai.update(
        &state.ball,
        &mut state.ai_paddle,
        &mut state.rng,
        &state.tuning,
        dt,
    );

    match collision::check_goal(&state.ball) {
        GoalOutcome::Goal => {
            state.match_state.record_goal(state.tuning.points_per_goal);
            state
                .ball
                .reset(&mut state.rng, state.tuning.ball_initial_speed);
            audio.on_ball_reset();
        }
        GoalOutcome::Miss => {
            if state.match_state.record_miss() {
                // Last life: the ball stays where it died
                audio.on_game_over();
            } else {
                state
                    .ball
                    .reset(&mut state.rng, state.tuning.ball_initial_speed);
                audio.on_ball_reset();
            }
        }
        GoalOutcome::None => {}
    }
}
