//! RGB colors for game elements

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Tint of a slowed paddle
    pub const SLOW_GRAY: Color = Color::rgb(105, 105, 105);
    pub const CANNON_BASE: Color = Color::rgb(255, 215, 0);
    pub const CANNON_TOP: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend: `t = 1` gives `self`, `t = 0` gives `other`.
    ///
    /// Channels are truncated, not rounded.
    pub fn blend(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * t + b as f32 * (1.0 - t)) as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Uniformly random opaque color
    pub fn random<R: Rng>(rng: &mut R) -> Color {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }

    /// Offset every channel by an integer drawn from `[-c*spread, c*spread]`,
    /// clamped to the channel range
    pub fn jitter<R: Rng>(self, spread: f32, rng: &mut R) -> Color {
        let mut channel = |c: u8| {
            let limit = (c as f32 * spread) as i32;
            let offset = rng.random_range(-limit..=limit);
            (c as i32 + offset).clamp(0, 255) as u8
        };
        Color::rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(Color::GOLD.blend(Color::WHITE, 1.0), Color::GOLD);
        assert_eq!(Color::GOLD.blend(Color::WHITE, 0.0), Color::WHITE);
        // Out of range factors clamp
        assert_eq!(Color::GOLD.blend(Color::WHITE, -3.0), Color::WHITE);
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = Color::GOLD.blend(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(255, 235, 127));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let c = Color::LIME.jitter(0.8, &mut rng);
            // Zero channels have no room to move
            assert_eq!(c.r, 0);
            assert_eq!(c.b, 0);
            assert!(c.g >= 51);
        }
    }
}
