//! Simulation module
//!
//! All gameplay logic lives here:
//! - Elapsed-seconds timestep supplied by the caller
//! - Seeded RNG only (one `Pcg32` stream per system)
//! - Stable iteration order (registration order in [`ControlSystem`])
//! - No platform dependencies; drawing goes through [`crate::render::Surface`]

pub mod ball;
pub mod bullet;
pub mod control;
pub mod debug;
pub mod entity;
pub mod paddle;
pub mod powerup;
pub mod rect;
pub mod score;
pub mod strategy;
pub mod wave;

pub use ball::{Ball, hit_offset};
pub use bullet::{Bullet, BulletDirection};
pub use control::{ControlSystem, GameEvent};
pub use debug::DebugOverlay;
pub use entity::{Entity, EntityKey, PowerUpId, Side};
pub use paddle::{BLOCK_COUNT, EffectTimer, Paddle, PaddleBlock, Paddles};
pub use powerup::{PowerUp, PowerUpKind, PowerUpSystem};
pub use rect::{Rect, collides};
pub use score::{Score, Scores};
pub use strategy::{AiControl, ControlContext, ControlStrategy, HumanControl};
pub use wave::{Wave, WaveEffectSystem};
