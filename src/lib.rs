//! Pong Frag - deterministic simulation core for a two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, AI, match state)
//! - `game`: Session facade tying the simulation to a registered audio sink
//! - `audio`: Event contract for the external audio collaborator
//! - `tuning`: Data-driven game balance
//!
//! Rendering, touch capture and sound synthesis are external collaborators.
//! The core consumes the player paddle position, a touch flag and elapsed
//! time per frame, and exposes score/lives/game-over state plus discrete
//! sound-cue events.

pub mod audio;
pub mod game;
pub mod sim;
pub mod tuning;

pub use audio::{AudioSink, NullAudio};
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 960.0;
    pub const CANVAS_HEIGHT: f32 = 540.0;
    /// Inset from canvas edges defining the playable field's wall boundaries
    pub const FRAME_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_INITIAL_SPEED: f32 = 200.0;
    /// Speed gained on each paddle bounce
    pub const BALL_ACCELERATION: f32 = 40.0;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 1000.0;
    /// Vertical kick per unit of normalized paddle-contact offset
    pub const BALL_EFFECT_STRENGTH: f32 = 100.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_HALF_HEIGHT: f32 = PADDLE_HEIGHT / 2.0;
    /// Distance between the right screen edge and the AI paddle column
    pub const PADDLE_OFFSET: f32 = 50.0;
    /// Distance between the left edge and the player paddle column
    /// (wider than the right side to leave room for the finger)
    pub const PADDLE_LEFT_OFFSET: f32 = 150.0;
    /// Center of the playable area between the two paddle columns
    pub const PLAY_AREA_CENTER: f32 =
        (PADDLE_LEFT_OFFSET + (CANVAS_WIDTH - PADDLE_OFFSET)) / 2.0;
    /// Extra distance past the player paddle before a miss registers
    pub const MISS_TOLERANCE: f32 = 20.0;

    /// AI defaults - a little slower than the player can swipe
    pub const AI_SPEED: f32 = 250.0;
    /// Seconds between AI target recomputes
    pub const AI_UPDATE_INTERVAL: f32 = 0.1;
    /// Minimum target distance before the AI paddle moves (prevents jitter)
    pub const AI_DEAD_ZONE: f32 = 8.0;
    /// Total width of the random aim error added to the AI target
    pub const AI_IMPRECISION_RANGE: f32 = 40.0;

    /// Scoring
    pub const LIVES_COUNT: u8 = 3;
    pub const POINTS_PER_HIT: u32 = 1;
    pub const POINTS_PER_GOAL: u32 = 20;
}
