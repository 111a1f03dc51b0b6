use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent, Side};
use crate::config::Config;
use crate::resources::{InputSnapshot, Mode};

/// Copy the frame's input snapshot onto each paddle's intent component.
///
/// In machine mode the right paddle ignores its sampled input entirely and
/// runs the follow policy instead: chase the ball's vertical position, but
/// stand still inside a small dead-zone so it does not jitter.
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot, mode: Mode, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if mode == Mode::VsMachine && paddle.side == Side::Right {
            *intent = PaddleIntent::new();
            if let Some(ball_y) = ball_y {
                let delta = ball_y - paddle.y;
                if delta.abs() > config.machine_dead_zone {
                    intent.dir = if delta > 0.0 { 1 } else { -1 };
                }
            }
            continue;
        }

        let sampled = input.side(paddle.side);
        *intent = PaddleIntent {
            dir: sampled.dir.signum(),
            rotate: sampled.rotate.signum(),
            activate: sampled.activate,
            capture: sampled.capture,
            throw: sampled.throw,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, resources::SideInput};
    use glam::Vec2;

    #[test]
    fn test_snapshot_lands_on_matching_side() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, 300.0);
        let right = create_paddle(&mut world, Side::Right, 300.0);

        let input = InputSnapshot {
            left: SideInput {
                dir: -1,
                ..Default::default()
            },
            right: SideInput {
                dir: 1,
                throw: true,
                ..Default::default()
            },
        };
        ingest_inputs(&mut world, &input, Mode::TwoPlayer, &config);

        let left_intent = *world.get::<&PaddleIntent>(left).unwrap();
        let right_intent = *world.get::<&PaddleIntent>(right).unwrap();
        assert_eq!(left_intent.dir, -1);
        assert_eq!(right_intent.dir, 1);
        assert!(right_intent.throw);
        assert!(!left_intent.throw);
    }

    #[test]
    fn test_machine_chases_ball() {
        let mut world = World::new();
        let config = Config::new();
        let right = create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(400.0, 450.0), Vec2::ZERO);

        // Sampled input says "up"; the machine must ignore it and chase down.
        let input = InputSnapshot {
            right: SideInput {
                dir: -1,
                capture: true,
                ..Default::default()
            },
            ..Default::default()
        };
        ingest_inputs(&mut world, &input, Mode::VsMachine, &config);

        let intent = *world.get::<&PaddleIntent>(right).unwrap();
        assert_eq!(intent.dir, 1, "Machine should move toward the ball");
        assert!(!intent.capture, "Machine ignores sampled action intents");
    }

    #[test]
    fn test_machine_holds_inside_dead_zone() {
        let mut world = World::new();
        let config = Config::new();
        let right = create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(400.0, 305.0), Vec2::ZERO);

        ingest_inputs(
            &mut world,
            &InputSnapshot::new(),
            Mode::VsMachine,
            &config,
        );

        let intent = *world.get::<&PaddleIntent>(right).unwrap();
        assert_eq!(intent.dir, 0, "Within the dead-zone the machine holds");
    }

    #[test]
    fn test_two_player_mode_honors_right_input() {
        let mut world = World::new();
        let config = Config::new();
        let right = create_paddle(&mut world, Side::Right, 300.0);
        create_ball(&mut world, Vec2::new(400.0, 450.0), Vec2::ZERO);

        let input = InputSnapshot {
            right: SideInput {
                dir: -1,
                ..Default::default()
            },
            ..Default::default()
        };
        ingest_inputs(&mut world, &input, Mode::TwoPlayer, &config);

        let intent = *world.get::<&PaddleIntent>(right).unwrap();
        assert_eq!(intent.dir, -1, "Two-player mode must not override input");
    }
}
