//! Entity registry and per-frame dispatch
//!
//! [`ControlSystem`] owns the ball, both paddles, both scores and the live
//! power-ups. The key list only decides dispatch order: update and draw walk
//! a snapshot of it, so entities removed mid-pass are skipped.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::render::Surface;

use super::ball::Ball;
use super::entity::{Entity, EntityKey, PowerUpId, Side};
use super::paddle::{Paddle, Paddles};
use super::powerup::{PowerUp, PowerUpKind};
use super::score::{Score, Scores};
use super::strategy::{AiControl, ControlContext, HumanControl};

/// Something the rest of the game may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// `side` scored and now has `value` points
    Scored { side: Side, value: u32 },
    /// `side` reached the win score
    MatchWon(Side),
    BallRespawned,
    PowerUpSpawned(PowerUpKind),
    /// `beneficiary` is `None` when no paddle had touched the ball yet
    PowerUpCollected {
        kind: PowerUpKind,
        beneficiary: Option<Side>,
    },
}

#[derive(Debug)]
pub struct ControlSystem {
    pub ball: Ball,
    pub paddles: Paddles,
    pub scores: Scores,
    power_ups: Vec<PowerUp>,
    entities: Vec<EntityKey>,
    events: Vec<GameEvent>,
    rng: Pcg32,
    config: Config,
}

impl ControlSystem {
    pub fn new(config: &Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(config, &mut rng);

        let start_x = config.paddle_start_x();
        let mut paddles = Paddles {
            player: Paddle::new(
                Side::Player,
                start_x,
                config.game_area_height() - config.paddle_margin,
                config,
                Box::new(HumanControl),
            ),
            ai: Paddle::new(
                Side::Ai,
                start_x,
                config.interface_height + config.paddle_margin,
                config,
                Box::new(AiControl::new()),
            ),
        };
        paddles.player.layout();
        paddles.ai.layout();

        let scores = Scores {
            player: Score::new("Player:", 10.0, 10.0),
            ai: Score::new("AI:", config.screen_width - 150.0, 10.0),
        };

        let mut control = Self {
            ball,
            paddles,
            scores,
            power_ups: Vec::new(),
            entities: Vec::new(),
            events: Vec::new(),
            rng,
            config: config.clone(),
        };
        for key in [
            EntityKey::Ball,
            EntityKey::Paddle(Side::Player),
            EntityKey::Paddle(Side::Ai),
            EntityKey::Score(Side::Player),
            EntityKey::Score(Side::Ai),
        ] {
            control.add_entity(key);
        }
        control
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registered keys in dispatch order
    pub fn entities(&self) -> &[EntityKey] {
        &self.entities
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains(&key)
    }

    /// Register `key` at the end of the dispatch order; duplicates are ignored
    pub fn add_entity(&mut self, key: EntityKey) {
        if !self.contains(key) {
            self.entities.push(key);
        }
    }

    /// Unregister `key`. Power-up data goes with it; absent keys are a no-op.
    pub fn remove_entity(&mut self, key: EntityKey) {
        self.entities.retain(|k| *k != key);
        if let EntityKey::PowerUp(id) = key {
            self.power_ups.retain(|p| p.id != id);
        }
    }

    pub fn add_power_up(&mut self, power_up: PowerUp) {
        let key = EntityKey::PowerUp(power_up.id);
        self.power_ups.retain(|p| p.id != power_up.id);
        self.power_ups.push(power_up);
        self.add_entity(key);
    }

    pub fn remove_power_up(&mut self, id: PowerUpId) {
        self.remove_entity(EntityKey::PowerUp(id));
    }

    pub fn power_up(&self, id: PowerUpId) -> Option<&PowerUp> {
        self.power_ups.iter().find(|p| p.id == id)
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    /// Look up a registered entity
    pub fn entity(&self, key: EntityKey) -> Option<&dyn Entity> {
        if !self.contains(key) {
            return None;
        }
        match key {
            EntityKey::Ball => Some(&self.ball),
            EntityKey::Paddle(side) => Some(self.paddles.get(side)),
            EntityKey::Score(side) => Some(self.scores.get(side)),
            EntityKey::PowerUp(id) => self.power_up(id).map(|p| p as &dyn Entity),
        }
    }

    /// Update every registered entity once, in registration order
    pub fn update(&mut self, dt: f32, pointer_x: Option<f32>) {
        let snapshot = self.entities.clone();
        for key in snapshot {
            if !self.contains(key) {
                continue;
            }
            match key {
                EntityKey::Ball => {
                    if let Some(scorer) = self.ball.update(dt, &self.paddles, &mut self.rng) {
                        self.award_point(scorer);
                        self.respawn_ball();
                    }
                }
                EntityKey::Paddle(side) => {
                    let ctx = ControlContext {
                        pointer_x,
                        ball_center_x: self.ball.center().x,
                    };
                    let (paddle, opponent) = self.paddles.pair_mut(side);
                    paddle.update(dt, &ctx, opponent);
                }
                EntityKey::Score(_) => {}
                EntityKey::PowerUp(id) => {
                    if let Some(power_up) = self.power_ups.iter_mut().find(|p| p.id == id) {
                        power_up.update(dt);
                    }
                }
            }
        }
    }

    fn award_point(&mut self, side: Side) {
        let score = self.scores.get_mut(side);
        score.increment();
        let value = score.value;
        log::info!("{:?} scored ({} points)", side, value);
        self.events.push(GameEvent::Scored { side, value });

        if score.has_reached(self.config.win_score) {
            log::info!("{:?} won the match", side);
            self.events.push(GameEvent::MatchWon(side));
        }
    }

    /// Put the ball back in the middle and repair both paddles
    pub fn respawn_ball(&mut self) {
        self.ball.respawn(&mut self.rng);
        self.paddles.regenerate_blocks();
        log::debug!("Ball respawned, dir=({:.2}, {:.0})", self.ball.dir.x, self.ball.dir.y);
        self.events.push(GameEvent::BallRespawned);
    }

    /// Zero both scores and start a fresh rally
    pub fn reset_match(&mut self) {
        self.scores.reset();
        self.respawn_ball();
    }

    /// Draw every registered entity in registration order
    pub fn draw(&self, surface: &mut dyn Surface) {
        for key in &self.entities {
            if let Some(entity) = self.entity(*key) {
                entity.draw(surface);
            }
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use glam::Vec2;

    fn control() -> ControlSystem {
        ControlSystem::new(&Config::default(), 7)
    }

    #[test]
    fn test_initial_layout() {
        let control = control();
        assert_eq!(
            control.entities(),
            &[
                EntityKey::Ball,
                EntityKey::Paddle(Side::Player),
                EntityKey::Paddle(Side::Ai),
                EntityKey::Score(Side::Player),
                EntityKey::Score(Side::Ai),
            ]
        );
        assert_eq!((control.paddles.player.x, control.paddles.player.y), (350.0, 510.0));
        assert_eq!((control.paddles.ai.x, control.paddles.ai.y), (350.0, 90.0));
        assert_eq!(control.scores.ai.rect.x, 650.0);
        assert_eq!(control.scores.player.text(), "Player: 0");
    }

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let mut control = control();
        control.add_entity(EntityKey::Ball);
        assert_eq!(control.entities().len(), 5);

        control.remove_entity(EntityKey::Score(Side::Ai));
        control.remove_entity(EntityKey::Score(Side::Ai));
        assert_eq!(control.entities().len(), 4);
        assert!(control.entity(EntityKey::Score(Side::Ai)).is_none());
    }

    #[test]
    fn test_power_up_registration() {
        let config = Config::default();
        let mut control = control();
        let id = PowerUpId(3);
        control.add_power_up(PowerUp::new(id, PowerUpKind::Freeze, 100.0, 200.0, &config));
        assert!(control.contains(EntityKey::PowerUp(id)));
        assert!(control.entity(EntityKey::PowerUp(id)).is_some());

        control.update(0.25, None);
        assert_eq!(control.power_up(id).map(|p| p.life_time), Some(0.25));

        control.remove_power_up(id);
        assert!(control.power_ups().is_empty());
        assert!(!control.contains(EntityKey::PowerUp(id)));
    }

    #[test]
    fn test_exit_scores_and_respawns() {
        let mut control = control();
        control.ball.rect.x = 100.0;
        control.ball.rect.y = 52.0;
        control.ball.dir = Vec2::new(0.0, -1.0);
        control.update(0.1, None);

        assert_eq!(control.scores.player.value, 1);
        assert_eq!(control.scores.ai.value, 0);
        assert_eq!((control.ball.rect.x, control.ball.rect.y), (400.0, 300.0));
        let events = control.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::Scored { side: Side::Player, value: 1 },
                GameEvent::BallRespawned,
            ]
        );
        assert!(control.drain_events().is_empty());
    }

    #[test]
    fn test_reaching_win_score_emits_match_won() {
        let mut control = control();
        control.scores.ai.value = 4;
        control.ball.rect.x = 100.0;
        control.ball.rect.y = 518.0;
        control.ball.dir = Vec2::new(0.0, 1.0);
        control.update(0.1, None);

        let events = control.drain_events();
        assert!(events.contains(&GameEvent::MatchWon(Side::Ai)));
        assert_eq!(control.scores.ai.value, 5);
    }

    #[test]
    fn test_respawn_repairs_blocks() {
        let mut control = control();
        control.paddles.player.blocks[2].destroy();
        control.paddles.ai.blocks[0].destroy();
        control.respawn_ball();
        assert!(control.paddles.iter().all(|p| p.blocks.iter().all(|b| !b.destroyed)));
    }

    #[test]
    fn test_player_follows_pointer() {
        let mut control = control();
        control.update(1.0, Some(200.0));
        assert_eq!(control.paddles.player.x, 125.0);
    }

    #[test]
    fn test_draw_includes_scores() {
        let control = control();
        let mut list = DrawList::new();
        control.draw(&mut list);
        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"Player: 0"));
        assert!(texts.contains(&"AI: 0"));
    }
}
