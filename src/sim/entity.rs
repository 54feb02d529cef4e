//! Shared entity capability and registry keys

use crate::render::Surface;

use super::rect::Rect;

/// Which end of the table an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human player, bottom of the screen
    Player,
    /// AI opponent, top of the screen (drawn inverted)
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The top paddle faces downward
    pub fn is_enemy(self) -> bool {
        self == Side::Ai
    }
}

/// Stable identifier for a spawned power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PowerUpId(pub u32);

/// Registry handle for every live entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Ball,
    Paddle(Side),
    Score(Side),
    PowerUp(PowerUpId),
}

/// Anything that occupies space and can be drawn
pub trait Entity {
    /// Bounding rectangle (also the debug overlay outline)
    fn bounds(&self) -> Rect;

    fn draw(&self, surface: &mut dyn Surface);
}
