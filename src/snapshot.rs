use glam::Vec2;
use hecs::World;

use crate::arena::{Aabb, Arena};
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Score;
use crate::systems::holder;

/// One paddle as the renderer needs it.
#[derive(Debug, Clone, Copy)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Aabb,
    pub load: u8,
    pub powered_up: bool,
    pub holding: bool,
    pub aim_angle: f32,
}

impl PaddleView {
    /// Fill level of the load bar in [0, 1].
    pub fn load_fraction(&self, load_max: u8) -> f32 {
        self.load as f32 / load_max as f32
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub held: bool,
}

/// Immutable per-tick view of the whole match. This is the renderer's
/// entire input; the core never draws.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot {
    pub paddles: [PaddleView; 2], // left, right
    pub ball: BallView,
    pub score: Score,
}

/// Build the tick's render snapshot. Returns None before the match
/// entities have been spawned.
pub fn render_snapshot(
    world: &World,
    arena: &Arena,
    config: &Config,
    score: &Score,
) -> Option<RenderSnapshot> {
    let held = holder(world).is_some();

    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        let view = PaddleView {
            side: paddle.side,
            rect: paddle.rect(config, arena),
            load: paddle.load,
            powered_up: paddle.is_powered_up(),
            holding: paddle.is_holding(),
            aim_angle: paddle.aim_angle,
        };
        match paddle.side {
            Side::Left => left = Some(view),
            Side::Right => right = Some(view),
        }
    }

    let ball = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| BallView {
            pos: ball.pos,
            radius: config.ball_radius,
            held,
        })
    };

    Some(RenderSnapshot {
        paddles: [left?, right?],
        ball: ball?,
        score: *score,
    })
}
