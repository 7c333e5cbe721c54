//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the caller-supplied delta
//! - Seeded RNG only (ball reset direction, AI imprecision)
//! - No rendering, input, or audio-synthesis dependencies

pub mod ai;
pub mod ball;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::AiController;
pub use ball::Ball;
pub use collision::{GoalOutcome, PaddleSide};
pub use state::{GameState, MatchPhase, MatchState, Paddle};
pub use tick::{TickInput, tick};
