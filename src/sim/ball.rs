//! Ball kinematics
//!
//! Position/velocity integration, speed stepping and spin effects.
//! Collision handling lives in `collision`; this type only mutates its own
//! state in response to the resolver's calls.

use glam::Vec2;
use rand::Rng;

use crate::consts::{BALL_RADIUS, CANVAS_HEIGHT, PLAY_AREA_CENTER};

/// The ball entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Create a ball at the field center with zero velocity.
    /// Call [`Ball::reset`] before the first tick to give it a serve.
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAY_AREA_CENTER, CANVAS_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }

    /// Re-center the ball and serve it in a random horizontal direction.
    ///
    /// `vel.x` is exactly `±initial_speed`; `vel.y` is uniform in
    /// `[-initial_speed/2, +initial_speed/2]`.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, initial_speed: f32) {
        self.pos = Vec2::new(PLAY_AREA_CENTER, CANVAS_HEIGHT / 2.0);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            initial_speed * direction,
            rng.random_range(-0.5..=0.5) * initial_speed,
        );
        log::debug!("ball reset: vel=({}, {})", self.vel.x, self.vel.y);
    }

    /// Step the speed up by `acceleration`, capped at `max_speed`,
    /// preserving direction.
    ///
    /// Guards the degenerate zero-speed case (never divides by zero).
    /// A spin effect can momentarily push the speed past the cap; the
    /// rescale here pulls it back to exactly `max_speed`.
    pub fn accelerate(&mut self, acceleration: f32, max_speed: f32) {
        let speed = self.vel.length();
        if speed <= f32::EPSILON {
            return;
        }
        let new_speed = (speed + acceleration).min(max_speed);
        self.vel *= new_speed / speed;
    }

    /// Pure integration: `pos += vel * dt`. No collision handling.
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Horizontal bounce
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Vertical bounce
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Spin from an off-center paddle contact. `hit_position` is the
    /// normalized contact offset in `[-1, 1]`.
    pub fn add_effect(&mut self, hit_position: f32, strength: f32) {
        self.vel.y += hit_position * strength;
    }

    /// Velocity magnitude
    pub fn current_speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_moving_left(&self) -> bool {
        self.vel.x < 0.0
    }

    pub fn is_moving_right(&self) -> bool {
        self.vel.x > 0.0
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_ACCELERATION, BALL_INITIAL_SPEED, BALL_MAX_SPEED};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reset_centers_and_serves() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new();
        ball.reset(&mut rng, BALL_INITIAL_SPEED);

        assert_eq!(ball.pos.x, PLAY_AREA_CENTER);
        assert_eq!(ball.pos.y, CANVAS_HEIGHT / 2.0);
        assert_eq!(ball.vel.x.abs(), BALL_INITIAL_SPEED);
        assert!(ball.vel.y.abs() <= BALL_INITIAL_SPEED / 2.0);
    }

    #[test]
    fn test_reset_direction_roughly_uniform() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new();
        let mut lefts = 0;
        for _ in 0..1000 {
            ball.reset(&mut rng, BALL_INITIAL_SPEED);
            if ball.is_moving_left() {
                lefts += 1;
            }
        }
        // Fair coin: ~500 ± a generous margin
        assert!((350..=650).contains(&lefts), "lefts = {lefts}");
    }

    #[test]
    fn test_accelerate_steps_and_caps() {
        let mut ball = Ball::new();
        ball.vel = Vec2::new(BALL_INITIAL_SPEED, 0.0);

        ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
        assert!((ball.current_speed() - (BALL_INITIAL_SPEED + BALL_ACCELERATION)).abs() < 1e-3);

        ball.vel = Vec2::new(BALL_MAX_SPEED - 10.0, 0.0);
        ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
        assert!((ball.current_speed() - BALL_MAX_SPEED).abs() < 1e-3);

        // At the cap: no-op
        ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
        assert!((ball.current_speed() - BALL_MAX_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_accelerate_zero_speed_is_guarded() {
        let mut ball = Ball::new();
        ball.vel = Vec2::ZERO;
        ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!ball.vel.x.is_nan());
    }

    #[test]
    fn test_update_integrates() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(100.0, 100.0);
        ball.vel = Vec2::new(200.0, -50.0);
        ball.update(0.1);
        assert!((ball.pos.x - 120.0).abs() < 1e-4);
        assert!((ball.pos.y - 95.0).abs() < 1e-4);
    }

    #[test]
    fn test_add_effect_kicks_vertically() {
        let mut ball = Ball::new();
        ball.vel = Vec2::new(200.0, 30.0);
        ball.add_effect(0.5, 100.0);
        assert!((ball.vel.y - 80.0).abs() < 1e-4);
        assert_eq!(ball.vel.x, 200.0);
    }

    proptest! {
        /// Speed after accelerate lands in (s, min(s + acceleration, max)]
        /// and the direction is unchanged.
        #[test]
        fn prop_accelerate_monotonic_and_direction_preserving(
            vx in -900.0f32..900.0,
            vy in -900.0f32..900.0,
        ) {
            let mut ball = Ball::new();
            ball.vel = Vec2::new(vx, vy);
            let before = ball.vel;
            let s = before.length();
            prop_assume!(s > 1.0 && s < BALL_MAX_SPEED);

            ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
            let s2 = ball.current_speed();

            prop_assert!(s2 > s);
            prop_assert!(s2 <= (s + BALL_ACCELERATION).min(BALL_MAX_SPEED) + 1e-3);
            // Unit direction identical within tolerance
            let dir_before = before / s;
            let dir_after = ball.vel / s2;
            prop_assert!((dir_before - dir_after).length() < 1e-4);
        }

        /// The cap holds for any starting velocity, including ones a spin
        /// effect pushed past it.
        #[test]
        fn prop_accelerate_never_exceeds_cap(
            vx in -1500.0f32..1500.0,
            vy in -1500.0f32..1500.0,
        ) {
            let mut ball = Ball::new();
            ball.vel = Vec2::new(vx, vy);
            prop_assume!(ball.current_speed() > 1.0);
            ball.accelerate(BALL_ACCELERATION, BALL_MAX_SPEED);
            prop_assert!(ball.current_speed() <= BALL_MAX_SPEED + 1e-3);
        }
    }
}
