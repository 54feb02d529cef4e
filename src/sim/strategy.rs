//! Paddle movement policies
//!
//! A paddle owns one boxed [`ControlStrategy`]; the strategy only picks a
//! target X; the paddle does the speed-limited move.

use std::fmt;

/// What a strategy may look at when choosing a target
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlContext {
    /// Pointer X in screen space, if the pointer is known
    pub pointer_x: Option<f32>,
    /// Current ball center X
    pub ball_center_x: f32,
}

/// Movement policy injected into a paddle
pub trait ControlStrategy: fmt::Debug {
    /// Advance internal clocks. Runs every frame, frozen or not.
    fn advance(&mut self, _dt: f32) {}

    /// Target for the paddle's left edge, or `None` to stay put
    fn target_x(&self, paddle_width: f32, ctx: &ControlContext) -> Option<f32>;

    /// Fire whenever a cannon is held and no bullet is live
    fn fires_automatically(&self) -> bool {
        false
    }
}

/// Follows the pointer
#[derive(Debug, Clone, Default)]
pub struct HumanControl;

impl ControlStrategy for HumanControl {
    fn target_x(&self, paddle_width: f32, ctx: &ControlContext) -> Option<f32> {
        ctx.pointer_x.map(|x| x - paddle_width / 2.0)
    }
}

/// Tracks the ball with a slow sideways sway so it doesn't hit dead center
#[derive(Debug, Clone, Default)]
pub struct AiControl {
    /// Seconds since creation; drives the sway
    pub life_time: f32,
}

impl AiControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sway applied to the target
    pub fn offset(&self, paddle_width: f32) -> f32 {
        self.life_time.sin() * (paddle_width / 4.0)
    }
}

impl ControlStrategy for AiControl {
    fn advance(&mut self, dt: f32) {
        self.life_time += dt;
    }

    fn target_x(&self, paddle_width: f32, ctx: &ControlContext) -> Option<f32> {
        Some(ctx.ball_center_x - paddle_width / 2.0 + self.offset(paddle_width))
    }

    fn fires_automatically(&self) -> bool {
        true
    }
}
