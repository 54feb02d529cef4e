//! Power-up pickups and the system that spawns and resolves them
//!
//! Effects go to whichever paddle touched the ball last. Freeze and SlowDown
//! punish that paddle's opponent; IncreaseWidth and Cannon reward the toucher.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::render::{Color, Surface, TextAnchor};

use super::control::{ControlSystem, GameEvent};
use super::entity::{Entity, PowerUpId, Side};
use super::paddle::Paddles;
use super::rect::Rect;

/// Corner rounding of the pickup tile
const CORNER_RADIUS: f32 = 10.0;
const SYMBOL_SIZE: f32 = 20.0;

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Freeze,
    SlowDown,
    IncreaseWidth,
    Cannon,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Freeze,
        PowerUpKind::SlowDown,
        PowerUpKind::IncreaseWidth,
        PowerUpKind::Cannon,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PowerUpKind::Freeze => "F",
            PowerUpKind::SlowDown => "S",
            PowerUpKind::IncreaseWidth => "W",
            PowerUpKind::Cannon => "C",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Freeze => Color::rgb(238, 210, 2),
            PowerUpKind::SlowDown => Color::rgb(105, 105, 105),
            PowerUpKind::IncreaseWidth => Color::rgb(50, 205, 50),
            PowerUpKind::Cannon => Color::rgb(255, 0, 0),
        }
    }

    /// Seconds the pickup stays on the table
    pub fn lifetime(self) -> f32 {
        match self {
            PowerUpKind::Freeze => 8.5,
            _ => 8.0,
        }
    }

    /// Paddle affected when `beneficiary` collects this power-up
    pub fn target(self, beneficiary: Side) -> Side {
        match self {
            PowerUpKind::Freeze | PowerUpKind::SlowDown => beneficiary.opponent(),
            PowerUpKind::IncreaseWidth | PowerUpKind::Cannon => beneficiary,
        }
    }

    /// Apply the effect; returns the side that was affected
    pub fn apply(self, beneficiary: Side, paddles: &mut Paddles, config: &Config) -> Side {
        let target = self.target(beneficiary);
        let paddle = paddles.get_mut(target);
        match self {
            PowerUpKind::Freeze => paddle.freeze(config.freeze_duration),
            PowerUpKind::SlowDown => paddle.slow_down(config.slow_speed, config.slow_duration),
            PowerUpKind::IncreaseWidth => {
                paddle.increase_width(config.extra_width, config.extra_width_duration)
            }
            PowerUpKind::Cannon => paddle.add_cannon(config.cannon_duration),
        }
        target
    }
}

/// A pickup on the table
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: PowerUpId,
    pub kind: PowerUpKind,
    pub rect: Rect,
    /// Seconds on the table before it vanishes
    pub duration: f32,
    /// Seconds since spawn
    pub life_time: f32,
    blink_window: f32,
}

impl PowerUp {
    pub fn new(id: PowerUpId, kind: PowerUpKind, x: f32, y: f32, config: &Config) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(x, y, config.power_up_size, config.power_up_size),
            duration: kind.lifetime(),
            life_time: 0.0,
            blink_window: config.power_up_blink_window,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.life_time += dt;
    }

    pub fn time_left(&self) -> f32 {
        self.duration - self.life_time
    }

    pub fn is_expired(&self) -> bool {
        self.life_time >= self.duration
    }

    pub fn is_blinking(&self) -> bool {
        self.time_left() <= self.blink_window
    }

    /// Blinks faster as expiry approaches
    pub fn is_visible(&self) -> bool {
        if !self.is_blinking() {
            return true;
        }
        let blink_rate = (1.0 - self.time_left() / self.blink_window) * 2.0;
        (self.life_time * blink_rate) % 1.0 < 0.5
    }
}

impl Entity for PowerUp {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if !self.is_visible() {
            return;
        }
        surface.fill_rect(self.rect, self.kind.color(), CORNER_RADIUS);
        surface.text(
            self.rect.center(),
            self.kind.symbol(),
            SYMBOL_SIZE,
            Color::WHITE,
            TextAnchor::Center,
        );
    }
}

/// Spawns power-ups on a random interval and resolves pickups
#[derive(Debug, Clone)]
pub struct PowerUpSystem {
    /// Ids this system spawned and still tracks
    pub tracked: Vec<PowerUpId>,
    /// Seconds since the last spawn
    pub timer: f32,
    /// Interval until the next spawn
    pub spawn_time: f32,
    next_id: u32,
    rng: Pcg32,
    config: Config,
}

impl PowerUpSystem {
    pub fn new(config: &Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_time = Self::draw_spawn_time(config, &mut rng);
        Self {
            tracked: Vec::new(),
            timer: 0.0,
            spawn_time,
            next_id: 1,
            rng,
            config: config.clone(),
        }
    }

    fn draw_spawn_time(config: &Config, rng: &mut Pcg32) -> f32 {
        rng.random_range(config.power_up_spawn_min..=config.power_up_spawn_max)
    }

    /// Advance the spawn timer, resolve ball pickups and cull expired tiles
    pub fn update(&mut self, dt: f32, control: &mut ControlSystem) {
        self.timer += dt;
        if self.timer >= self.spawn_time {
            self.spawn(control);
            self.timer = 0.0;
            self.spawn_time = Self::draw_spawn_time(&self.config, &mut self.rng);
        }

        self.resolve_pickups(control);

        for id in self.tracked.clone() {
            let expired = control.power_up(id).is_none_or(|p| p.is_expired());
            if expired {
                if let Some(power_up) = control.power_up(id) {
                    log::debug!("{:?} power-up expired", power_up.kind);
                }
                self.remove(id, control);
            }
        }
    }

    /// Spawn one random power-up in the middle band of the playfield
    pub fn spawn(&mut self, control: &mut ControlSystem) -> PowerUpId {
        let config = &self.config;
        let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
        let x = self.rng.random_range(50..=(config.screen_width - 100.0) as i32) as f32;
        let area = config.game_area_height();
        let top = config.interface_height;
        let y = self.rng.random_range(top + area * 0.2..=top + area * 0.7);

        let id = PowerUpId(self.next_id);
        self.next_id += 1;

        log::info!("Spawned {:?} power-up at ({x:.0}, {y:.0})", kind);
        control.add_power_up(PowerUp::new(id, kind, x, y, config));
        self.tracked.push(id);
        control.push_event(GameEvent::PowerUpSpawned(kind));
        id
    }

    /// Drop a power-up from both lists; absent ids are ignored
    pub fn remove(&mut self, id: PowerUpId, control: &mut ControlSystem) {
        control.remove_power_up(id);
        self.tracked.retain(|tracked| *tracked != id);
    }

    fn resolve_pickups(&mut self, control: &mut ControlSystem) {
        for id in self.tracked.clone() {
            let Some(power_up) = control.power_up(id) else {
                continue;
            };
            if !power_up.rect.collides(&control.ball.rect) {
                continue;
            }
            let kind = power_up.kind;
            let beneficiary = control.ball.last_paddle_collision;
            match beneficiary {
                Some(side) => {
                    let target = kind.apply(side, &mut control.paddles, &self.config);
                    log::info!("{:?} collected {:?}; applied to {:?}", side, kind, target);
                }
                None => log::debug!("{:?} collected with no paddle contact yet", kind),
            }
            control.push_event(GameEvent::PowerUpCollected { kind, beneficiary });
            self.remove(id, control);
        }
    }
}
