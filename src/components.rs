use glam::Vec2;
use rand::Rng;

use crate::arena::{Aabb, Arena};
use crate::config::Config;
use crate::resources::GameRng;

/// Which wall a paddle defends. Fixed at spawn; determines the paddle's X
/// anchor, the outward collision normal and the allowed throw directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Allowed aim angles in degrees: the half-plane facing away from the
    /// paddle's own wall.
    pub fn aim_range(self) -> (f32, f32) {
        match self {
            Side::Left => (-90.0, 90.0),
            Side::Right => (90.0, 270.0),
        }
    }

    /// Straight at the opponent.
    pub fn default_aim(self) -> f32 {
        match self {
            Side::Left => 0.0,
            Side::Right => 180.0,
        }
    }
}

/// Ball-interaction state. A single enum instead of separate
/// powered/holding flags, so the two can never be true at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddlePhase {
    #[default]
    Idle,
    Powered,
    Holding,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // vertical center; X is fixed per side
    pub load: u8,
    pub phase: PaddlePhase,
    pub aim_angle: f32, // degrees
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self {
            side,
            y,
            load: 0,
            phase: PaddlePhase::Idle,
            aim_angle: side.default_aim(),
        }
    }

    pub fn is_powered_up(&self) -> bool {
        self.phase == PaddlePhase::Powered
    }

    pub fn is_holding(&self) -> bool {
        self.phase == PaddlePhase::Holding
    }

    /// Charge gained from a successful hit, clamped at the cap.
    pub fn add_load(&mut self, amount: u8, max: u8) {
        self.load = self.load.saturating_add(amount).min(max);
    }

    /// Spend a full load bar to arm the power-up. No-op unless the bar is
    /// exactly full; a holding paddle cannot re-arm.
    pub fn try_activate_power_up(&mut self, max: u8) -> bool {
        if self.load == max && self.phase != PaddlePhase::Holding {
            self.phase = PaddlePhase::Powered;
            self.load = 0;
            true
        } else {
            false
        }
    }

    /// Swing the throw arrow. Only meaningful while holding the ball.
    pub fn rotate_aim(&mut self, dir: i8, step: f32) {
        if self.phase != PaddlePhase::Holding || dir == 0 {
            return;
        }
        let (lo, hi) = self.side.aim_range();
        self.aim_angle = (self.aim_angle + dir as f32 * step).clamp(lo, hi);
    }

    pub fn rect(&self, config: &Config, arena: &Arena) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(config.paddle_x(self.side, arena), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Where a held ball sits: flush against the paddle's outer face, at
    /// the paddle's vertical center.
    pub fn hold_anchor(&self, config: &Config, arena: &Arena) -> Vec2 {
        let rect = self.rect(config, arena);
        let x = match self.side {
            Side::Left => rect.max.x + config.ball_radius,
            Side::Right => rect.min.x - config.ball_radius,
        };
        Vec2::new(x, self.y)
    }
}

/// Ball component - the pong ball. "Held" is not stored here; the ball is
/// held exactly when some paddle is in the Holding phase.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn rect(&self, radius: f32) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(radius * 2.0))
    }

    /// Re-serve from the given point: full horizontal speed with a random
    /// sign, plus a little vertical drift.
    pub fn reset(&mut self, center: Vec2, config: &Config, rng: &mut GameRng) {
        self.pos = center;
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            sign * config.ball_serve_speed,
            rng.0
                .gen_range(-config.ball_serve_drift..=config.ball_serve_drift),
        );
    }

    /// Freeze at the holder's anchor point.
    pub fn capture(&mut self, anchor: Vec2) {
        self.pos = anchor;
        self.vel = Vec2::ZERO;
    }

    /// Launch along an aim angle given in degrees.
    pub fn release(&mut self, aim_degrees: f32, launch_speed: f32) {
        let theta = aim_degrees.to_radians();
        self.vel = Vec2::new(theta.cos(), theta.sin()) * launch_speed;
    }
}

/// Per-tick intents for one paddle, ingested from the input snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8,    // -1 = up, 0 = stop, 1 = down
    pub rotate: i8, // -1 = counter-clockwise, 1 = clockwise
    pub activate: bool,
    pub capture: bool,
    pub throw: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
