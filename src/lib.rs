//! Cannon Pong - human vs. AI pong with destructible paddles
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, status effects, power-ups)
//! - `game`: Frame orchestration, win/reset logic, render composition
//! - `render`: Drawing surface abstraction
//! - `platform`: Frame clock and input events
//! - `config`: Data-driven game tuning

pub mod config;
pub mod game;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::{Game, GamePhase, TickInput};

/// Default tuning values (see [`Config`] for the runtime copy)
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the HUD strip above the playfield
    pub const INTERFACE_HEIGHT: f32 = 50.0;
    /// Default frame-rate cap
    pub const FPS_LIMIT: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_DEFAULT_SPEED: f32 = 100.0;
    pub const BALL_MAX_SPEED: f32 = 1250.0;
    /// Added to both speed scalars on every paddle bounce
    pub const BALL_SPEED_STEP: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 35.0;
    pub const PADDLE_SPEED: f32 = 2000.0;
    /// Distance between a paddle and its playfield edge
    pub const PADDLE_MARGIN: f32 = 40.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 20.0;
    pub const BULLET_SPEED: f32 = 500.0;

    /// Points needed to win a match
    pub const WIN_SCORE: u32 = 5;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_SPAWN_MIN: f32 = 5.0;
    pub const POWER_UP_SPAWN_MAX: f32 = 10.0;
    /// Power-ups blink during their last seconds on screen
    pub const POWER_UP_BLINK_WINDOW: f32 = 3.0;

    /// Status effect tuning
    pub const FREEZE_DURATION: f32 = 0.5;
    pub const SLOW_SPEED: f32 = 300.0;
    pub const SLOW_DURATION: f32 = 1.0;
    pub const EXTRA_WIDTH: f32 = 100.0;
    pub const EXTRA_WIDTH_DURATION: f32 = 5.0;
    pub const CANNON_DURATION: f32 = 2.0;

    /// Wave effect tuning
    pub const WAVE_DURATION: f32 = 0.5;
    pub const WAVE_FREQUENCY: f32 = 0.09;
    pub const WAVE_BASE_SPEED: f32 = 50.0;
    pub const WAVE_MAX_SIZE: f32 = 20.0;
}
