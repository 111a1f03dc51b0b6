use hecs::World;
use rand::Rng;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::{Events, GameRng};

/// Apply movement intents, keeping each paddle fully inside the arena.
pub fn move_paddles(world: &mut World, arena: &Arena, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed;
            paddle.y = arena.clamp_y(paddle.y, config.paddle_height / 2.0);
        }
    }
}

/// Advance a free ball and bounce it off the top and bottom walls. The
/// bounce perturbs the vertical speed slightly so rallies never settle
/// into a fixed loop. Horizontal exits are left alone; those are scoring
/// events.
pub fn move_ball(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;

        let radius = config.ball_radius;
        if ball.pos.y - radius <= 0.0 || ball.pos.y + radius >= arena.height {
            ball.vel.y = -ball.vel.y
                + rng
                    .0
                    .gen_range(-config.wall_jitter..=config.wall_jitter);
            // Keep the ball inside so the bounce cannot retrigger
            ball.pos.y = ball.pos.y.clamp(radius, arena.height - radius);
            events.ball_hit_wall = true;
        }
    }
}
