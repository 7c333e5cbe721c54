//! Game state and core simulation types
//!
//! Entities are plain data; rendering reads them, the systems in `collision`
//! and `ai` mutate them. The RNG lives here so every random draw (serve
//! direction, AI aim error) comes from one seeded stream.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ai::AiController;
use super::ball::Ball;
use crate::consts::*;
use crate::tuning::Tuning;

/// A paddle. Only `pos.y` moves during play; the x column is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle centered vertically at the given x column.
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, CANVAS_HEIGHT / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Clamp `pos.y` so the paddle stays inside the framed play field.
    pub fn clamp_to_field(&mut self) {
        let min_y = FRAME_MARGIN + self.half_height();
        let max_y = CANVAS_HEIGHT - FRAME_MARGIN - self.half_height();
        self.pos.y = self.pos.y.clamp(min_y, max_y);
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for the first touch; simulation paused
    Idle,
    /// Active gameplay
    Playing,
    /// All lives spent
    GameOver,
}

/// Score, lives and phase. Transitions are driven by the collision
/// resolver's goal/miss/hit signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub score: u32,
    pub lives: u8,
    pub phase: MatchPhase,
}

impl MatchState {
    pub fn new(lives: u8) -> Self {
        Self {
            score: 0,
            lives,
            phase: MatchPhase::Idle,
        }
    }

    /// First touch observed: Idle becomes Playing.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Idle {
            self.phase = MatchPhase::Playing;
            log::info!("first touch - match started");
        }
    }

    /// Ball bounced off a paddle.
    pub fn record_paddle_hit(&mut self, points: u32) {
        self.score += points;
    }

    /// Ball got past the AI: the player scores.
    pub fn record_goal(&mut self, points: u32) {
        self.score += points;
        log::info!("goal! score={}", self.score);
    }

    /// Ball got past the player: a life is lost. Returns `true` when that
    /// was the last life, in which case the phase is now GameOver.
    pub fn record_miss(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        log::info!("ball missed, {} lives left", self.lives);
        if self.lives == 0 {
            self.phase = MatchPhase::GameOver;
            log::info!("game over, final score {}", self.score);
            true
        } else {
            false
        }
    }

    /// Restart: back to Idle with fresh score and lives.
    pub fn reset(&mut self, lives: u8) {
        self.score = 0;
        self.lives = lives;
        self.phase = MatchPhase::Idle;
    }
}

/// Complete simulation state for one match session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, kept for diagnostics
    pub seed: u64,
    /// Seeded RNG for serve direction and AI imprecision
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub ball: Ball,
    /// Left paddle, position driven by the input collaborator
    pub player_paddle: Paddle,
    /// Right paddle, position driven by the AI controller
    pub ai_paddle: Paddle,
    pub ai: AiController,
    pub match_state: MatchState,
}

impl GameState {
    /// Create a match session with default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new();
        ball.reset(&mut rng, tuning.ball_initial_speed);
        let match_state = MatchState::new(tuning.lives_count);
        Self {
            seed,
            rng,
            ball,
            player_paddle: Paddle::new(PADDLE_LEFT_OFFSET),
            ai_paddle: Paddle::new(CANVAS_WIDTH - PADDLE_OFFSET),
            ai: AiController::new(),
            match_state,
            tuning,
        }
    }

    /// Reset the session to Idle with fresh score, lives, ball and AI.
    pub fn restart(&mut self) {
        log::info!("restarting match");
        self.match_state.reset(self.tuning.lives_count);
        self.ball.reset(&mut self.rng, self.tuning.ball_initial_speed);
        self.player_paddle = Paddle::new(PADDLE_LEFT_OFFSET);
        self.ai_paddle = Paddle::new(CANVAS_WIDTH - PADDLE_OFFSET);
        self.ai = AiController::new();
    }
}
