//! Session facade
//!
//! Owns the simulation state and the registered audio sink, and exposes the
//! narrow surface the rendering/input collaborators drive: one `update` per
//! frame, `restart`, and read-only accessors.

use glam::Vec2;

use crate::audio::{AudioSink, NullAudio};
use crate::sim::{GameState, MatchPhase, TickInput, tick};
use crate::tuning::Tuning;

/// One match session. Created once, restarted in place.
pub struct Game {
    state: GameState,
    audio: Box<dyn AudioSink>,
}

impl Game {
    /// New session with default tuning and a no-op audio sink.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            audio: Box::new(NullAudio),
        }
    }

    /// Register the audio collaborator. Events are delivered synchronously
    /// during `update`; the sink must not block.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.audio = sink;
    }

    /// Advance one frame. `player_paddle_y` comes from the input
    /// collaborator and is clamped into the field; `touching` gates the
    /// simulation; `dt` is the elapsed time in seconds, assumed positive
    /// and finite.
    pub fn update(&mut self, player_paddle_y: f32, touching: bool, dt: f32) {
        let input = TickInput {
            player_paddle_y: Some(player_paddle_y),
            touching,
        };
        tick(&mut self.state, &input, self.audio.as_mut(), dt);
    }

    /// Reset the match to its initial Idle state.
    pub fn restart(&mut self) {
        self.state.restart();
        self.audio.on_ball_reset();
    }

    pub fn score(&self) -> u32 {
        self.state.match_state.score
    }

    pub fn lives_remaining(&self) -> u8 {
        self.state.match_state.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.state.match_state.phase == MatchPhase::GameOver
    }

    pub fn ball_position(&self) -> Vec2 {
        self.state.ball.pos
    }

    pub fn ball_speed(&self) -> f32 {
        self.state.ball.current_speed()
    }

    pub fn ai_paddle_position(&self) -> Vec2 {
        self.state.ai_paddle.pos
    }

    /// Full state, for the rendering collaborator.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
