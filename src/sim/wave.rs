//! Cosmetic rings that sweep in from the playfield edges after a respawn

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::render::{Color, Surface};

use super::rect::Rect;

/// Per-channel color spread of a new ring
const COLOR_SPREAD: f32 = 0.8;
/// Speed spread around the base speed
const SPEED_SPREAD: f32 = 0.3;
/// Upper bound of the per-frame growth wobble
const GROWTH_JITTER: f32 = 0.2;
const RING_THICKNESS: f32 = 2.0;

/// One ring; `size` is its inset from the playfield edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub size: f32,
    pub color: Color,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct WaveEffectSystem {
    waves: Vec<Wave>,
    spawning: bool,
    /// Seconds of spawning left
    remaining: f32,
    frequency: f32,
    since_last: f32,
    rng: Pcg32,
    config: Config,
}

impl WaveEffectSystem {
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            waves: Vec::new(),
            spawning: false,
            remaining: 0.0,
            frequency: config.wave_frequency,
            since_last: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            config: config.clone(),
        }
    }

    /// Spawn a ring every `frequency` seconds for the next `duration` seconds
    pub fn trigger(&mut self, duration: f32, frequency: f32) {
        self.remaining = duration;
        self.frequency = frequency;
        self.spawning = true;
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn is_spawning(&self) -> bool {
        self.spawning
    }

    fn spawn_wave(&mut self) {
        let base = self.config.wave_base_speed;
        let speed = self
            .rng
            .random_range(base - base * SPEED_SPREAD..=base + base * SPEED_SPREAD);
        let color = Color::LIME.jitter(COLOR_SPREAD, &mut self.rng);
        self.waves.push(Wave {
            size: 0.0,
            color,
            speed,
        });
    }

    pub fn update(&mut self, dt: f32) {
        if self.spawning {
            self.remaining -= dt;
            self.since_last += dt;
            if self.since_last >= self.frequency {
                self.spawn_wave();
                self.since_last = 0.0;
            }
            if self.remaining <= 0.0 {
                self.spawning = false;
            }
        }

        for wave in &mut self.waves {
            let wobble = self.rng.random_range(0.0..=GROWTH_JITTER);
            wave.size += (wave.speed + wave.speed * wobble) * dt;
        }

        let max_size = self.config.wave_max_size;
        self.waves.retain(|wave| wave.size <= max_size);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.config.screen_width;
        let top = self.config.interface_height;
        let area = self.config.game_area_height();
        for wave in &self.waves {
            let ring = Rect::new(
                wave.size,
                top + wave.size,
                width - wave.size * 2.0,
                area - wave.size * 2.0,
            )
            .non_collidable();
            surface.stroke_rect(ring, wave.color, RING_THICKNESS);
        }
    }
}
