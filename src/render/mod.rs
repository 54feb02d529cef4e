//! Drawing surface abstraction
//!
//! The simulation only ever draws primitive shapes. A windowing backend
//! implements [`Surface`]; [`DrawList`] records commands for tests and the
//! headless runner.

pub mod color;

pub use color::Color;

use glam::Vec2;

use crate::sim::Rect;

/// Horizontal placement of a text label relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the top-left corner
    TopLeft,
    /// Position is the center of the label
    Center,
}

/// Something the game can draw onto
pub trait Surface {
    /// Filled rectangle; `corner_radius` of zero draws square corners
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32);
    /// Rectangle outline
    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
        corner_radius: f32,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Surface that records every draw call in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text labels drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of polygons drawn
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillPolygon { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            corner_radius,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            thickness,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            size,
            color,
            anchor,
        });
    }
}
