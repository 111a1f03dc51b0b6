use hecs::{Entity, World};

use crate::arena::Arena;
use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Bounce a free ball off the paddles, left then right. Each hit charges
/// that paddle's load bar. A degenerate fast ball overlapping both paddles
/// in one tick double-bounces, which is accepted rather than treated as an
/// error.
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Entity, Side)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(entity, paddle)| (entity, paddle.side))
        .collect();
    paddles.sort_by_key(|&(_entity, side)| side);

    for (entity, side) in paddles {
        let (rect, center_y) = match world.get::<&Paddle>(entity) {
            Ok(paddle) => (paddle.rect(config, arena), paddle.y),
            Err(_) => continue,
        };

        let mut hit = false;
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !rect.intersects(&ball.rect(config.ball_radius)) {
                continue;
            }

            // Impact offset from the paddle center, in half-heights.
            // Deliberately not clamped to [-1, 1]: a sharp edge hit can
            // exceed it and deflect steeper and faster.
            let t = (center_y - ball.pos.y) / (config.paddle_height / 2.0);

            let reversed = -ball.vel.x * config.bounce_speed_scale;
            ball.vel.x = reversed.clamp(-config.ball_speed_max, config.ball_speed_max);
            ball.vel.y = -t * config.bounce_angle_factor * ball.vel.x.abs();

            // Flush against the outer face so the next tick cannot re-collide
            ball.pos.x = match side {
                Side::Left => rect.max.x + config.ball_radius,
                Side::Right => rect.min.x - config.ball_radius,
            };
            hit = true;
        }

        if hit {
            if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
                paddle.add_load(config.load_per_hit, config.load_max);
            }
            events.ball_hit_paddle = true;
        }
    }
}
