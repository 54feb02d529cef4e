//! Segmented paddles, their status effects and cannons

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::render::{Color, Surface};

use super::bullet::{Bullet, BulletDirection};
use super::entity::{Entity, Side};
use super::rect::Rect;
use super::strategy::{ControlContext, ControlStrategy};

/// Number of destructible blocks in a paddle
pub const BLOCK_COUNT: usize = 5;

/// Ice triangles drawn around a frozen paddle
const FROST_TRIANGLES: usize = 5;
/// How far frost may reach past the paddle bounds
const FROST_REACH: f32 = 20.0;

/// One destructible segment of a paddle
#[derive(Debug, Clone)]
pub struct PaddleBlock {
    pub rect: Rect,
    pub color: Color,
    pub destroyed: bool,
}

impl Default for PaddleBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddleBlock {
    /// Inert block; the owning paddle lays it out every frame
    pub fn new() -> Self {
        Self {
            rect: Rect::zero(),
            color: Color::WHITE,
            destroyed: false,
        }
    }

    pub fn place(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        self.color = color;
        self.rect.set(x, y, w, h);
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.rect.collidable = false;
    }

    pub fn repair(&mut self) {
        self.destroyed = false;
        self.rect.collidable = true;
    }
}

impl Entity for PaddleBlock {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.destroyed {
            surface.fill_rect(self.rect, self.color, 0.0);
        }
    }
}

/// Countdown for a temporary paddle modifier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EffectTimer {
    /// Seconds left, never negative
    pub remaining: f32,
    /// Length of the most recent activation
    pub duration: f32,
    pub active: bool,
}

impl EffectTimer {
    /// (Re)start the timer; a non-positive duration does nothing
    pub fn start(&mut self, duration: f32) {
        if duration > 0.0 {
            self.remaining = duration;
            self.duration = duration;
            self.active = true;
        }
    }

    /// Count down. Returns `true` exactly once, on the frame the timer expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.active = false;
            return true;
        }
        false
    }

    /// Fraction of the duration still left, in `[0, 1]`
    pub fn ratio(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.duration).clamp(0.0, 1.0)
    }
}

/// A five-block paddle
#[derive(Debug)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub base_width: f32,
    pub base_speed: f32,
    pub current_speed: f32,
    pub base_color: Color,
    pub color: Color,
    /// Left edge, left, center, right, right edge
    pub blocks: [PaddleBlock; BLOCK_COUNT],
    pub cannon_base: PaddleBlock,
    pub cannon_top: PaddleBlock,
    pub freeze: EffectTimer,
    pub slow: EffectTimer,
    pub widen: EffectTimer,
    pub cannon: EffectTimer,
    pub bullet: Option<Bullet>,
    strategy: Box<dyn ControlStrategy>,
    slow_speed: f32,
    /// Bumped while frozen so the frost pattern flickers frame to frame
    frost_frame: u64,
    config: Config,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, config: &Config, strategy: Box<dyn ControlStrategy>) -> Self {
        Self {
            side,
            x,
            y,
            width: config.paddle_width,
            height: config.paddle_height,
            base_width: config.paddle_width,
            base_speed: config.paddle_speed,
            current_speed: config.paddle_speed,
            base_color: Color::WHITE,
            color: Color::WHITE,
            blocks: Default::default(),
            cannon_base: PaddleBlock::new(),
            cannon_top: PaddleBlock::new(),
            freeze: EffectTimer::default(),
            slow: EffectTimer::default(),
            widen: EffectTimer::default(),
            cannon: EffectTimer::default(),
            bullet: None,
            strategy,
            slow_speed: config.slow_speed,
            frost_frame: 0,
            config: config.clone(),
        }
    }

    pub fn is_enemy(&self) -> bool {
        self.side.is_enemy()
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.active
    }

    pub fn is_slowed(&self) -> bool {
        self.slow.active
    }

    pub fn is_widened(&self) -> bool {
        self.widen.active
    }

    pub fn has_cannon(&self) -> bool {
        self.cannon.active
    }

    pub fn strategy(&self) -> &dyn ControlStrategy {
        self.strategy.as_ref()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Stop strategy-driven movement for `duration` seconds
    pub fn freeze(&mut self, duration: f32) {
        self.freeze.start(duration);
    }

    pub fn slow_down(&mut self, speed: f32, duration: f32) {
        self.slow_speed = speed;
        self.current_speed = speed;
        self.slow.start(duration);
        self.refresh_color();
    }

    /// Add `extra_width` to the current width and restart the timer.
    /// Pickups stack; expiry restores `base_width`.
    pub fn increase_width(&mut self, extra_width: f32, duration: f32) {
        self.width += extra_width;
        self.widen.start(duration);
        self.refresh_color();
    }

    pub fn add_cannon(&mut self, duration: f32) {
        self.cannon.start(duration);
    }

    /// Fire a bullet if a cannon is held and none is in flight.
    ///
    /// Returns whether a bullet was spawned.
    pub fn fire(&mut self) -> bool {
        if !self.has_cannon() || self.bullet.is_some() {
            return false;
        }
        let x = self.x + self.width / 2.0 - self.config.bullet_width / 2.0;
        let bullet = if self.is_enemy() {
            Bullet::new(x, self.y + self.height + 10.0, BulletDirection::Down, &self.config)
        } else {
            Bullet::new(x, self.y - 10.0, BulletDirection::Up, &self.config)
        };
        log::debug!("{:?} paddle fired", self.side);
        self.bullet = Some(bullet);
        true
    }

    /// Repair every block
    pub fn regenerate_blocks(&mut self) {
        for block in &mut self.blocks {
            block.repair();
        }
    }

    /// Any live block overlaps `rect`
    pub fn collides(&self, rect: &Rect) -> bool {
        self.blocks
            .iter()
            .any(|block| !block.destroyed && block.rect.collides(rect))
    }

    /// Per-frame update: effect timers, own bullet against `opponent`,
    /// movement and block layout
    pub fn update(&mut self, dt: f32, ctx: &ControlContext, opponent: &mut Paddle) {
        self.freeze.tick(dt);
        if self.freeze.active {
            self.frost_frame = self.frost_frame.wrapping_add(1);
        }

        if self.slow.tick(dt) {
            self.current_speed = self.base_speed;
        } else if self.slow.active {
            self.current_speed = self.slow_speed;
        }

        if self.widen.tick(dt) {
            self.width = self.base_width;
        }

        self.cannon.tick(dt);
        self.refresh_color();

        if let Some(bullet) = self.bullet.as_mut() {
            if let Some(index) = bullet.update(dt, &mut opponent.blocks, &self.config) {
                log::debug!("{:?} bullet destroyed {:?} block {}", self.side, opponent.side, index);
            }
            if bullet.destroyed {
                self.bullet = None;
            }
        }

        self.strategy.advance(dt);
        if !self.is_frozen() {
            if let Some(target) = self.strategy.target_x(self.width, ctx) {
                self.move_toward(target, dt);
            }
            if self.strategy.fires_automatically() {
                self.fire();
            }
        }

        self.layout();
    }

    /// Step toward `target` at the current speed without overshooting
    pub fn move_toward(&mut self, target: f32, dt: f32) {
        let step = self.current_speed * dt;
        if self.x < target {
            self.x = (self.x + step).min(target);
        } else if self.x > target {
            self.x = (self.x - step).max(target);
        }
    }

    /// Base color, then slow tint, then the width blend on top
    fn refresh_color(&mut self) {
        let mut color = self.base_color;
        if self.slow.active {
            color = Color::SLOW_GRAY;
        }
        if self.widen.active {
            color = Color::GOLD.blend(Color::WHITE, self.widen.ratio());
        }
        self.color = color;
    }

    /// Recompute block and cannon rectangles from the paddle geometry
    pub fn layout(&mut self) {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let color = self.color;

        let center_w = w * 0.5;
        let side_w = w * 0.2;
        let edge_w = w * 0.1;

        let center_h = h * 0.6;
        let side_h = h * 0.5;
        let edge_h = h * 0.35;

        self.blocks[0].place(color, x, y + h - edge_h, edge_w, edge_h);
        self.blocks[1].place(color, x + edge_w - 2.0, y + h / 3.0, side_w, side_h);
        self.blocks[2].place(color, x + w / 2.0 - center_w / 2.0, y, center_w, center_h);
        self.blocks[3].place(color, x + w - edge_w - side_w + 2.0, y + h / 3.0, side_w, side_h);
        self.blocks[4].place(color, x + w - edge_w, y + h - edge_h, edge_w, edge_h);

        if self.is_enemy() {
            // Mirror vertically within the paddle's span
            for block in &mut self.blocks {
                block.rect.y = y - (block.rect.y - y + block.rect.h) + h;
            }
        }

        if self.has_cannon() {
            let (base_y, top_y) = if self.is_enemy() {
                (y + h, y + h + 10.0)
            } else {
                (y - 10.0, y - 20.0)
            };
            self.cannon_base
                .place(Color::CANNON_BASE, x + w / 2.0 - 10.0, base_y, 20.0, 10.0);
            self.cannon_top
                .place(Color::CANNON_TOP, x + w / 2.0 - 5.0, top_y, 10.0, 10.0);
        }
    }

    fn draw_frost(&self, surface: &mut dyn Surface) {
        let salt = match self.side {
            Side::Player => 0x5eed,
            Side::Ai => 0xf005,
        };
        let mut rng = Pcg32::seed_from_u64(self.frost_frame ^ salt);
        for _ in 0..FROST_TRIANGLES {
            let ice = Color::rgb(
                rng.random_range(150..=200),
                rng.random_range(200..=240),
                rng.random_range(230..=255),
            );
            let mut corner = || {
                Vec2::new(
                    self.x + rng.random_range(-FROST_REACH..=self.width + FROST_REACH),
                    self.y + rng.random_range(-FROST_REACH..=self.height + FROST_REACH),
                )
            };
            let triangle = [corner(), corner(), corner()];
            surface.fill_polygon(&triangle, ice);
        }
    }
}

impl Entity for Paddle {
    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for block in &self.blocks {
            block.draw(surface);
        }
        if self.is_frozen() {
            self.draw_frost(surface);
        }
        if self.has_cannon() {
            self.cannon_base.draw(surface);
            self.cannon_top.draw(surface);
        }
        if let Some(bullet) = &self.bullet {
            bullet.draw(surface);
        }
    }
}

/// Both paddles, addressable by side
#[derive(Debug)]
pub struct Paddles {
    pub player: Paddle,
    pub ai: Paddle,
}

impl Paddles {
    pub fn get(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// `(side, opponent)` borrowed together
    pub fn pair_mut(&mut self, side: Side) -> (&mut Paddle, &mut Paddle) {
        match side {
            Side::Player => (&mut self.player, &mut self.ai),
            Side::Ai => (&mut self.ai, &mut self.player),
        }
    }

    /// Player first, then AI
    pub fn iter(&self) -> impl Iterator<Item = &Paddle> {
        [&self.player, &self.ai].into_iter()
    }

    pub fn regenerate_blocks(&mut self) {
        self.player.regenerate_blocks();
        self.ai.regenerate_blocks();
    }
}
