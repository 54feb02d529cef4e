//! Top-level game: frame order, input handling, win/reset and composition

use glam::Vec2;

use crate::config::Config;
use crate::platform::InputEvent;
use crate::render::{Color, Surface, TextAnchor};
use crate::sim::{ControlSystem, DebugOverlay, GameEvent, PowerUpSystem, Rect, Side, WaveEffectSystem};

/// Seed offsets so each system draws from its own stream
const POWER_UP_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;
const WAVE_STREAM: u64 = 0xD1B5_4A32_D192_ED03;

const HINT_TEXT_SIZE: f32 = 24.0;
const WIN_TEXT_SIZE: f32 = 30.0;
const RESTART_TEXT_SIZE: f32 = 15.0;

/// Pointer state for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer X in screen space; `None` leaves the player paddle where it is
    pub pointer_x: Option<f32>,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Someone reached the win score; waits for Confirm
    GameOver,
}

#[derive(Debug)]
pub struct Game {
    config: Config,
    control: ControlSystem,
    power_ups: PowerUpSystem,
    waves: WaveEffectSystem,
    debug: DebugOverlay,
    phase: GamePhase,
    winner: Option<Side>,
    running: bool,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        log::info!("Starting match with seed {seed}");
        Self {
            control: ControlSystem::new(&config, seed),
            power_ups: PowerUpSystem::new(&config, seed ^ POWER_UP_STREAM),
            waves: WaveEffectSystem::new(&config, seed ^ WAVE_STREAM),
            debug: DebugOverlay::default(),
            phase: GamePhase::Playing,
            winner: None,
            running: true,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn win_message(&self) -> Option<&'static str> {
        self.winner.map(|side| match side {
            Side::Player => "YOU WIN!",
            Side::Ai => "THE AI WINS",
        })
    }

    /// False once a Quit event has been handled
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn control(&self) -> &ControlSystem {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut ControlSystem {
        &mut self.control
    }

    pub fn power_ups(&self) -> &PowerUpSystem {
        &self.power_ups
    }

    pub fn waves(&self) -> &WaveEffectSystem {
        &self.waves
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.enabled
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
            InputEvent::ToggleDebug => self.debug.toggle(),
            InputEvent::Fire => {
                if self.control.paddles.player.fire() {
                    log::debug!("Player fired");
                }
            }
            InputEvent::Confirm => {
                if self.game_over() {
                    self.reset();
                }
            }
        }
    }

    /// Advance one frame of `dt` seconds. Does nothing once the match is over.
    pub fn update(&mut self, dt: f32, input: &TickInput) {
        if self.game_over() {
            return;
        }

        self.control.update(dt, input.pointer_x);
        self.power_ups.update(dt, &mut self.control);

        for event in self.control.drain_events() {
            match event {
                GameEvent::MatchWon(side) => {
                    self.phase = GamePhase::GameOver;
                    self.winner = Some(side);
                }
                GameEvent::BallRespawned => {
                    self.waves
                        .trigger(self.config.wave_duration, self.config.wave_frequency);
                }
                other => log::trace!("{other:?}"),
            }
        }

        self.waves.update(dt);
    }

    /// Start a fresh match
    pub fn reset(&mut self) {
        log::info!("Match reset");
        self.phase = GamePhase::Playing;
        self.winner = None;
        self.control.reset_match();
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.config.screen_width;
        let height = self.config.screen_height;
        let top = self.config.interface_height;

        surface.fill_rect(Rect::new(0.0, 0.0, width, height).non_collidable(), Color::BLACK, 0.0);
        surface.fill_rect(Rect::new(0.0, 0.0, width, top).non_collidable(), Color::LIME, 0.0);
        surface.stroke_rect(
            Rect::new(0.0, top, width, self.config.game_area_height()).non_collidable(),
            Color::WHITE,
            2.0,
        );

        match self.phase {
            GamePhase::Playing => {
                self.waves.draw(surface);
                self.control.draw(surface);
                self.debug.draw(&self.control, surface);

                if self.control.paddles.player.has_cannon() {
                    surface.text(
                        Vec2::new(width / 2.0, top / 2.0),
                        "PRESS SPACE!",
                        HINT_TEXT_SIZE,
                        Color::RED,
                        TextAnchor::Center,
                    );
                }
            }
            GamePhase::GameOver => {
                if let Some(message) = self.win_message() {
                    surface.text(
                        Vec2::new(width / 2.0, height / 2.0),
                        message,
                        WIN_TEXT_SIZE,
                        Color::WHITE,
                        TextAnchor::Center,
                    );
                }
                surface.text(
                    Vec2::new(width / 2.0, height / 2.0 + 60.0),
                    "Press Enter to restart",
                    RESTART_TEXT_SIZE,
                    Color::WHITE,
                    TextAnchor::Center,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    const DT: f32 = 1.0 / 60.0;

    /// Put the ball just above the bottom exit, away from the player paddle
    fn drop_past_player(game: &mut Game) {
        let ball = &mut game.control_mut().ball;
        ball.rect.x = 100.0;
        ball.rect.y = 518.0;
        ball.dir = Vec2::new(0.0, 1.0);
        ball.speed = Vec2::splat(600.0);
    }

    #[test]
    fn test_fifth_point_ends_the_match() {
        let mut game = Game::new(Config::default(), 12345);
        for point in 1..=5 {
            drop_past_player(&mut game);
            game.update(DT, &TickInput::default());
            assert_eq!(game.control().scores.ai.value, point);
        }
        assert!(game.game_over());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.winner(), Some(Side::Ai));
        assert_eq!(game.win_message(), Some("THE AI WINS"));

        // No sixth point while the match is over
        drop_past_player(&mut game);
        game.update(DT, &TickInput::default());
        assert_eq!(game.control().scores.ai.value, 5);
        assert_eq!(game.control().ball.rect.y, 518.0);
    }

    #[test]
    fn test_confirm_restarts_only_after_game_over() {
        let mut game = Game::new(Config::default(), 1);
        game.control_mut().scores.player.value = 2;
        game.handle_event(InputEvent::Confirm);
        assert_eq!(game.control().scores.player.value, 2);

        game.control_mut().scores.player.value = 4;
        let ball = &mut game.control_mut().ball;
        ball.rect.x = 100.0;
        ball.rect.y = 52.0;
        ball.dir = Vec2::new(0.0, -1.0);
        ball.speed = Vec2::splat(600.0);
        game.update(DT, &TickInput::default());
        assert_eq!(game.win_message(), Some("YOU WIN!"));

        game.handle_event(InputEvent::Confirm);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(!game.game_over());
        assert_eq!(game.win_message(), None);
        assert_eq!(game.control().scores.player.value, 0);
        assert_eq!(game.control().scores.ai.value, 0);
    }

    #[test]
    fn test_ai_fires_on_next_update_after_cannon() {
        let mut game = Game::new(Config::default(), 2);
        game.control_mut().paddles.ai.add_cannon(2.0);
        assert!(game.control().paddles.ai.bullet.is_none());
        game.update(DT, &TickInput::default());
        assert!(game.control().paddles.ai.bullet.is_some());
    }

    #[test]
    fn test_fire_needs_a_cannon() {
        let mut game = Game::new(Config::default(), 3);
        game.handle_event(InputEvent::Fire);
        assert!(game.control().paddles.player.bullet.is_none());

        game.control_mut().paddles.player.add_cannon(2.0);
        game.handle_event(InputEvent::Fire);
        assert!(game.control().paddles.player.bullet.is_some());
    }

    #[test]
    fn test_score_triggers_wave_pulse() {
        let mut game = Game::new(Config::default(), 4);
        assert!(!game.waves().is_spawning());
        drop_past_player(&mut game);
        game.update(DT, &TickInput::default());
        assert!(game.waves().is_spawning());
    }

    #[test]
    fn test_quit_and_debug_events() {
        let mut game = Game::new(Config::default(), 5);
        game.handle_event(InputEvent::ToggleDebug);
        assert!(game.debug_enabled());
        assert!(game.is_running());
        game.handle_event(InputEvent::Quit);
        assert!(!game.is_running());
    }

    #[test]
    fn test_draw_shows_cannon_hint_and_game_over_text() {
        let mut game = Game::new(Config::default(), 6);
        game.control_mut().paddles.player.add_cannon(2.0);
        let mut list = DrawList::new();
        game.draw(&mut list);
        assert!(list.texts().any(|t| t == "PRESS SPACE!"));

        for _ in 0..5 {
            drop_past_player(&mut game);
            game.update(DT, &TickInput::default());
        }
        list.clear();
        game.draw(&mut list);
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["THE AI WINS", "Press Enter to restart"]);
    }
}
