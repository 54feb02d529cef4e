//! Cannon projectiles

use crate::config::Config;
use crate::render::{Color, Surface};

use super::entity::Entity;
use super::paddle::PaddleBlock;
use super::rect::Rect;

/// Travel direction of a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletDirection {
    /// Fired by the player, targets the AI paddle
    Up,
    /// Fired by the AI, targets the player paddle
    Down,
}

/// A projectile fired from a paddle cannon
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    pub speed: f32,
    pub direction: BulletDirection,
    pub destroyed: bool,
}

impl Bullet {
    pub fn new(x: f32, y: f32, direction: BulletDirection, config: &Config) -> Self {
        Self {
            rect: Rect::new(x, y, config.bullet_width, config.bullet_height),
            speed: config.bullet_speed,
            direction,
            destroyed: false,
        }
    }

    /// Move, hit the first colliding target block, and retire when off the
    /// playfield.
    ///
    /// `target` must be the opposing paddle's blocks in left-to-right order.
    /// Returns the index of the block destroyed this frame, if any.
    pub fn update(&mut self, dt: f32, target: &mut [PaddleBlock], config: &Config) -> Option<usize> {
        match self.direction {
            BulletDirection::Up => self.rect.y -= self.speed * dt,
            BulletDirection::Down => self.rect.y += self.speed * dt,
        }

        let mut hit = None;
        if !self.destroyed {
            if let Some((index, block)) = target
                .iter_mut()
                .enumerate()
                .find(|(_, block)| block.rect.collides(&self.rect))
            {
                block.destroy();
                self.destroyed = true;
                hit = Some(index);
            }
        }

        if self.rect.y <= config.play_top() || self.rect.y >= config.play_bottom() {
            self.destroyed = true;
        }

        hit
    }
}

impl Entity for Bullet {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect, Color::RED, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_at(x: f32, y: f32) -> PaddleBlock {
        let mut block = PaddleBlock::new();
        block.rect.set(x, y, 20.0, 20.0);
        block
    }

    #[test]
    fn test_bullet_moves_along_direction() {
        let config = Config::default();
        let mut up = Bullet::new(100.0, 300.0, BulletDirection::Up, &config);
        let mut down = Bullet::new(100.0, 300.0, BulletDirection::Down, &config);
        up.update(0.1, &mut [], &config);
        down.update(0.1, &mut [], &config);
        assert_eq!(up.rect.y, 250.0);
        assert_eq!(down.rect.y, 350.0);
        assert!(!up.destroyed && !down.destroyed);
    }

    #[test]
    fn test_bullet_destroys_first_overlapping_block_only() {
        let config = Config::default();
        // Two blocks both overlap the bullet's path
        let mut blocks = [block_at(95.0, 240.0), block_at(100.0, 240.0)];
        let mut bullet = Bullet::new(100.0, 270.0, BulletDirection::Up, &config);

        let hit = bullet.update(0.05, &mut blocks, &config);

        assert_eq!(hit, Some(0));
        assert!(bullet.destroyed);
        assert!(blocks[0].destroyed);
        assert!(!blocks[1].destroyed);
    }

    #[test]
    fn test_bullet_passes_destroyed_blocks() {
        let config = Config::default();
        let mut blocks = [block_at(100.0, 240.0)];
        blocks[0].destroy();
        let mut bullet = Bullet::new(100.0, 260.0, BulletDirection::Up, &config);
        assert_eq!(bullet.update(0.01, &mut blocks, &config), None);
        assert!(!bullet.destroyed);
    }

    #[test]
    fn test_bullet_retires_off_playfield() {
        let config = Config::default();
        let mut bullet = Bullet::new(100.0, 60.0, BulletDirection::Up, &config);
        bullet.update(0.1, &mut [], &config);
        assert!(bullet.destroyed);

        let mut bullet = Bullet::new(100.0, 540.0, BulletDirection::Down, &config);
        bullet.update(0.1, &mut [], &config);
        assert!(bullet.destroyed);
    }
}
