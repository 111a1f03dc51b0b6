pub mod arena;
pub mod components;
pub mod config;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Advance the match by one tick.
///
/// Runs the fixed pipeline: ingest inputs (with the machine policy in
/// solo mode), move paddles, resolve the charge/hold/throw state machine,
/// then update the ball — pinned to its holder while held, otherwise free
/// physics followed by paddle collisions and the scoring check. Frame
/// pacing belongs to the caller; one call is one tick.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    mode: Mode,
    input: &InputSnapshot,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    ingest_inputs(world, input, mode, config);
    move_paddles(world, arena, config);
    resolve_holding(world, arena, config, events);

    if holder(world).is_some() {
        pin_held_ball(world, arena, config);
    } else {
        move_ball(world, arena, config, events, rng);
        check_collisions(world, arena, config, events);
        check_scoring(world, arena, config, score, events, rng);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles and a served ball for a fresh match.
pub fn spawn_match(world: &mut World, arena: &Arena, config: &Config, rng: &mut GameRng) {
    let mid = arena.height / 2.0;
    create_paddle(world, Side::Left, mid);
    create_paddle(world, Side::Right, mid);

    let ball = create_ball(world, arena.center(), glam::Vec2::ZERO);
    if let Ok(mut ball) = world.get::<&mut Ball>(ball) {
        ball.reset(arena.center(), config, rng);
    }
}
