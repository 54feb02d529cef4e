//! Per-side point counters

use glam::Vec2;

use crate::render::{Color, Surface, TextAnchor};

use super::entity::{Entity, Side};
use super::rect::Rect;

/// Font size of the score labels
const SCORE_TEXT_SIZE: f32 = 30.0;

/// A labelled point counter. Only changes through [`Score::increment`].
#[derive(Debug, Clone)]
pub struct Score {
    pub label: String,
    pub value: u32,
    pub rect: Rect,
}

impl Score {
    pub fn new(label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            label: label.into(),
            value: 0,
            rect: Rect::new(x, y, 100.0, 30.0).non_collidable(),
        }
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn has_reached(&self, threshold: u32) -> bool {
        self.value >= threshold
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.value)
    }
}

impl Entity for Score {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.text(
            Vec2::new(self.rect.x, self.rect.y),
            &self.text(),
            SCORE_TEXT_SIZE,
            Color::WHITE,
            TextAnchor::TopLeft,
        );
    }
}

/// Both counters
#[derive(Debug, Clone)]
pub struct Scores {
    pub player: Score,
    pub ai: Score,
}

impl Scores {
    pub fn get(&self, side: Side) -> &Score {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Score {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn reset(&mut self) {
        self.player.reset();
        self.ai.reset();
    }
}
