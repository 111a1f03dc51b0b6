use hecs::World;

use crate::arena::Arena;
use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Award a point when a free ball leaves the arena horizontally, then
/// re-serve from the center. Paddle phases and load bars are untouched.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(arena.center(), config, rng);
        } else if ball.pos.x > arena.width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(arena.center(), config, rng);
        }
    }
}
