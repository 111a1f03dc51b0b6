use hecs::{Entity, World};

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent, PaddlePhase, Side};
use crate::config::Config;
use crate::resources::Events;

/// The paddle currently holding the ball, if any. "Ball is held" is
/// derived from this, never stored separately.
pub fn holder(world: &World) -> Option<(Entity, Side)> {
    let mut query = world.query::<&Paddle>();
    query
        .iter()
        .find(|(_e, paddle)| paddle.phase == PaddlePhase::Holding)
        .map(|(entity, paddle)| (entity, paddle.side))
}

/// Resolve activate/capture/rotate/throw intents for both paddles.
///
/// Paddles are processed left then right; the fixed order is the tie-break
/// when both request a capture in the same tick. The left capture succeeds
/// first and the right one then finds the ball already held.
pub fn resolve_holding(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Entity, Side)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(entity, paddle)| (entity, paddle.side))
        .collect();
    paddles.sort_by_key(|&(_entity, side)| side);

    for (entity, _side) in paddles {
        let intent = match world.get::<&PaddleIntent>(entity) {
            Ok(intent) => *intent,
            Err(_) => continue,
        };

        if intent.activate {
            if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
                if paddle.try_activate_power_up(config.load_max) {
                    events.power_up_activated = true;
                }
            }
        }

        if intent.capture {
            try_capture(world, entity, arena, config, events);
        }

        if intent.rotate != 0 {
            if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
                paddle.rotate_aim(intent.rotate, config.aim_step_degrees);
            }
        }

        if intent.throw {
            release_throw(world, entity, config, events);
        }
    }
}

/// A powered paddle may grab an overlapping free ball. The power-up is
/// consumed and the paddle transitions to holding in the same step, so no
/// intermediate state is ever observable.
fn try_capture(
    world: &mut World,
    entity: Entity,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
) -> bool {
    if holder(world).is_some() {
        return false; // ball already held somewhere, routine no-op
    }

    let (powered, anchor, rect) = match world.get::<&Paddle>(entity) {
        Ok(paddle) => (
            paddle.phase == PaddlePhase::Powered,
            paddle.hold_anchor(config, arena),
            paddle.rect(config, arena),
        ),
        Err(_) => return false,
    };
    if !powered {
        return false;
    }

    let overlapping = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| rect.intersects(&ball.rect(config.ball_radius)))
    };
    if overlapping != Some(true) {
        return false;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.capture(anchor);
    }
    if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
        paddle.phase = PaddlePhase::Holding;
    }
    events.ball_captured = true;
    true
}

/// Throw a held ball along the aim arrow. No-op unless actually holding.
fn release_throw(world: &mut World, entity: Entity, config: &Config, events: &mut Events) {
    let aim = match world.get::<&Paddle>(entity) {
        Ok(paddle) if paddle.phase == PaddlePhase::Holding => paddle.aim_angle,
        _ => return,
    };

    if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
        paddle.phase = PaddlePhase::Idle;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.release(aim, config.launch_speed);
    }
    events.ball_thrown = true;
}

/// Keep a held ball glued to its holder's outer face so it tracks the
/// paddle's movement between capture and throw.
pub fn pin_held_ball(world: &mut World, arena: &Arena, config: &Config) {
    let anchor = {
        let mut query = world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, paddle)| paddle.phase == PaddlePhase::Holding)
            .map(|(_e, paddle)| paddle.hold_anchor(config, arena))
    };

    if let Some(anchor) = anchor {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.capture(anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn capture_intent() -> PaddleIntent {
        PaddleIntent {
            capture: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_capture_requires_power_up() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();
        let mut events = Events::new();

        let entity = create_paddle(&mut world, Side::Left, 300.0);
        let anchor = world
            .get::<&Paddle>(entity)
            .unwrap()
            .hold_anchor(&config, &arena);
        create_ball(&mut world, anchor, Vec2::new(-5.0, 0.0));
        *world.get::<&mut PaddleIntent>(entity).unwrap() = capture_intent();

        resolve_holding(&mut world, &arena, &config, &mut events);

        assert_eq!(
            world.get::<&Paddle>(entity).unwrap().phase,
            PaddlePhase::Idle,
            "Unpowered paddle cannot capture"
        );
        assert!(!events.ball_captured);
    }

    #[test]
    fn test_capture_requires_overlap() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();
        let mut events = Events::new();

        let entity = create_paddle(&mut world, Side::Left, 300.0);
        world.get::<&mut Paddle>(entity).unwrap().phase = PaddlePhase::Powered;
        create_ball(&mut world, arena.center(), Vec2::new(-5.0, 0.0));
        *world.get::<&mut PaddleIntent>(entity).unwrap() = capture_intent();

        resolve_holding(&mut world, &arena, &config, &mut events);

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(
            paddle.phase,
            PaddlePhase::Powered,
            "Failed capture leaves the power-up armed"
        );
        assert!(!events.ball_captured);
    }

    #[test]
    fn test_successful_capture_consumes_power_up() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();
        let mut events = Events::new();

        let entity = create_paddle(&mut world, Side::Left, 300.0);
        world.get::<&mut Paddle>(entity).unwrap().phase = PaddlePhase::Powered;
        let rect = world
            .get::<&Paddle>(entity)
            .unwrap()
            .rect(&config, &arena);
        let ball = create_ball(&mut world, rect.center(), Vec2::new(-5.0, 2.0));
        *world.get::<&mut PaddleIntent>(entity).unwrap() = capture_intent();

        resolve_holding(&mut world, &arena, &config, &mut events);

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.phase, PaddlePhase::Holding);
        assert!(events.ball_captured);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.vel, Vec2::ZERO, "Held ball is frozen");
        assert_eq!(ball.pos, paddle.hold_anchor(&config, &arena));
    }

    #[test]
    fn test_left_wins_simultaneous_capture() {
        // Shrink the arena until both paddle rectangles overlap the same
        // ball, then fire both capture intents in one tick.
        let mut world = World::new();
        let arena = Arena::new(70.0, 600.0);
        let config = Config::new();
        let mut events = Events::new();

        let left = create_paddle(&mut world, Side::Left, 300.0);
        let right = create_paddle(&mut world, Side::Right, 300.0);
        world.get::<&mut Paddle>(left).unwrap().phase = PaddlePhase::Powered;
        world.get::<&mut Paddle>(right).unwrap().phase = PaddlePhase::Powered;
        create_ball(&mut world, Vec2::new(35.0, 300.0), Vec2::new(5.0, 0.0));
        *world.get::<&mut PaddleIntent>(left).unwrap() = capture_intent();
        *world.get::<&mut PaddleIntent>(right).unwrap() = capture_intent();

        resolve_holding(&mut world, &arena, &config, &mut events);

        assert_eq!(
            world.get::<&Paddle>(left).unwrap().phase,
            PaddlePhase::Holding,
            "Left paddle is processed first and wins the ball"
        );
        assert_eq!(
            world.get::<&Paddle>(right).unwrap().phase,
            PaddlePhase::Powered,
            "Right capture fails; its power-up is not consumed"
        );
        assert_eq!(holder(&world).map(|(_e, side)| side), Some(Side::Left));
    }

    #[test]
    fn test_throw_releases_along_aim() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();
        let mut events = Events::new();

        let entity = create_paddle(&mut world, Side::Left, 300.0);
        world.get::<&mut Paddle>(entity).unwrap().phase = PaddlePhase::Holding;
        let ball = create_ball(&mut world, Vec2::new(45.0, 300.0), Vec2::ZERO);
        world.get::<&mut PaddleIntent>(entity).unwrap().throw = true;

        resolve_holding(&mut world, &arena, &config, &mut events);

        assert_eq!(
            world.get::<&Paddle>(entity).unwrap().phase,
            PaddlePhase::Idle
        );
        assert!(events.ball_thrown);
        assert_eq!(
            world.get::<&Ball>(ball).unwrap().vel,
            Vec2::new(config.launch_speed, 0.0),
            "Aim angle 0 launches straight right at launch speed"
        );
    }

    #[test]
    fn test_throw_without_hold_is_ignored() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();
        let mut events = Events::new();

        let entity = create_paddle(&mut world, Side::Left, 300.0);
        let ball = create_ball(&mut world, arena.center(), Vec2::new(5.0, 5.0));
        world.get::<&mut PaddleIntent>(entity).unwrap().throw = true;

        resolve_holding(&mut world, &arena, &config, &mut events);

        assert!(!events.ball_thrown);
        assert_eq!(
            world.get::<&Ball>(ball).unwrap().vel,
            Vec2::new(5.0, 5.0),
            "A free ball is untouched by a stray throw intent"
        );
    }

    #[test]
    fn test_pinned_ball_tracks_paddle() {
        let mut world = World::new();
        let arena = Arena::default();
        let config = Config::new();

        let entity = create_paddle(&mut world, Side::Right, 300.0);
        world.get::<&mut Paddle>(entity).unwrap().phase = PaddlePhase::Holding;
        let ball = create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);

        world.get::<&mut Paddle>(entity).unwrap().y = 250.0;
        pin_held_ball(&mut world, &arena, &config);

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, paddle.hold_anchor(&config, &arena));
        assert_eq!(ball.vel, Vec2::ZERO);
    }
}
