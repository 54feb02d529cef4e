//! Bounding-box overlay toggled at runtime

use crate::render::{Color, Surface};

use super::control::ControlSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

impl DebugOverlay {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::info!("Debug overlay {}", if self.enabled { "on" } else { "off" });
    }

    /// Outline every registered entity in red
    pub fn draw(&self, control: &ControlSystem, surface: &mut dyn Surface) {
        if !self.enabled {
            return;
        }
        for key in control.entities() {
            if let Some(entity) = control.entity(*key) {
                surface.stroke_rect(entity.bounds(), Color::RED, 1.0);
            }
        }
    }
}
