//! The ball: motion, paddle and wall bounces, exits

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::render::{Color, Surface};

use super::entity::{Entity, Side};
use super::paddle::{Paddle, Paddles};
use super::rect::Rect;

/// Horizontal hit position on a paddle mapped to `[-1, 1]`
/// (left edge = -1, right edge = +1)
pub fn hit_offset(ball_x: f32, radius: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    debug_assert!(paddle_width > 0.0, "paddle width must be positive");
    let relative = (ball_x + radius) - paddle_x;
    (relative / paddle_width) * 2.0 - 1.0
}

#[derive(Debug, Clone)]
pub struct Ball {
    /// Bounding square, side = 2 * radius
    pub rect: Rect,
    pub radius: f32,
    /// Direction; x in `[-1, 1]`, y is `±1`
    pub dir: Vec2,
    /// Per-axis speed scalars, always ramped together
    pub speed: Vec2,
    /// Set while overlapping a paddle so one contact bounces once
    pub collided_last_frame: bool,
    /// Paddle that touched the ball most recently (power-up attribution)
    pub last_paddle_collision: Option<Side>,
    pub color: Color,
    config: Config,
}

impl Ball {
    pub fn new<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let size = config.ball_radius * 2.0;
        let (x, y) = Self::spawn_point(config);
        let mut ball = Self {
            rect: Rect::new(x, y, size, size),
            radius: config.ball_radius,
            dir: Vec2::ZERO,
            speed: Vec2::splat(config.ball_default_speed),
            collided_last_frame: false,
            last_paddle_collision: None,
            color: Color::WHITE,
            config: config.clone(),
        };
        ball.randomize_direction(rng);
        ball.randomize_color(rng);
        ball
    }

    /// Where a (re)spawned ball's top-left corner goes
    pub fn spawn_point(config: &Config) -> (f32, f32) {
        (config.screen_width / 2.0, config.screen_height / 2.0)
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn randomize_color<R: Rng>(&mut self, rng: &mut R) {
        self.color = Color::random(rng);
    }

    fn randomize_direction<R: Rng>(&mut self, rng: &mut R) {
        let dir_x = rng.random_range(-1.0..=1.0);
        let dir_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.dir = Vec2::new(dir_x, dir_y);
    }

    /// Re-center with fresh direction, default speed and a new color
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        let (x, y) = Self::spawn_point(&self.config);
        self.rect.x = x;
        self.rect.y = y;
        self.randomize_direction(rng);
        self.collided_last_frame = false;
        self.speed = Vec2::splat(self.config.ball_default_speed);
        self.randomize_color(rng);
    }

    /// Resolve a fresh paddle contact
    fn bounce_off<R: Rng>(&mut self, paddle: &Paddle, rng: &mut R) {
        self.dir.x = hit_offset(self.rect.x, self.radius, paddle.x, paddle.width);
        self.dir.y = -self.dir.y;
        let max = self.config.ball_max_speed;
        self.speed = (self.speed + Vec2::splat(self.config.ball_speed_step)).min(Vec2::splat(max));
        self.randomize_color(rng);
    }

    /// Advance one frame. Returns the side that scored if the ball left the
    /// playfield; the caller is responsible for respawning.
    pub fn update<R: Rng>(&mut self, dt: f32, paddles: &Paddles, rng: &mut R) -> Option<Side> {
        self.rect.x += self.dir.x * self.speed.x * dt;
        self.rect.y += self.dir.y * self.speed.y * dt;

        let mut touching = false;
        for paddle in paddles.iter() {
            if !paddle.collides(&self.rect) {
                continue;
            }
            touching = true;
            self.last_paddle_collision = Some(paddle.side);
            if !self.collided_last_frame {
                self.bounce_off(paddle, rng);
                log::trace!("Ball bounced off {:?} paddle, dir_x={:.3}", paddle.side, self.dir.x);
            }
        }
        self.collided_last_frame = touching;

        // Side walls invert the horizontal direction; position is untouched
        let size = self.radius * 2.0;
        if self.rect.x <= 0.0 || self.rect.x + size >= self.config.screen_width {
            self.dir.x = -self.dir.x;
            self.randomize_color(rng);
        }

        if self.rect.y <= self.config.play_top() {
            Some(Side::Player)
        } else if self.rect.y + size >= self.config.play_bottom() {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

impl Entity for Ball {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.center(), self.radius, self.color);
    }
}
