use hecs::World;

use crate::components::*;
use crate::{ArenaGeometry, Config, RandomSource};

/// Computer opponent: chases the ball with a wobble and a dead zone
///
/// It only reacts while the ball travels towards its own side, so a rally
/// that has just been returned gives the player time to reposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    pub dead_zone: f32,
    pub error: f32,
}

impl AiController {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dead_zone: config.ai_dead_zone,
            error: config.ai_error,
        }
    }

    /// Decide this tick's movement for the paddle on `side`.
    ///
    /// Consumes exactly one random draw whether or not the paddle reacts.
    pub fn decide(
        &self,
        side: Side,
        ball: &Ball,
        paddle_y: f32,
        arena: &ArenaGeometry,
        rng: &mut dyn RandomSource,
    ) -> PaddleIntent {
        let wobble = rng.next_signed() * self.error;

        if !side.is_approached_by(ball.vel.x) {
            return PaddleIntent::new();
        }

        let paddle_center = paddle_y + arena.paddle_height / 2.0;
        let target_y = ball.pos.y + arena.ball_size / 2.0 + wobble;

        if target_y < paddle_center - self.dead_zone {
            PaddleIntent::up()
        } else if target_y > paddle_center + self.dead_zone {
            PaddleIntent::down()
        } else {
            PaddleIntent::new()
        }
    }
}

/// Set intents for every computer-driven paddle
pub fn drive_ai_paddles(
    world: &mut World,
    arena: &ArenaGeometry,
    config: &Config,
    rng: &mut dyn RandomSource,
) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let ai = AiController::from_config(config);

    for (_entity, (paddle, controller, intent)) in
        world.query_mut::<(&Paddle, &Controller, &mut PaddleIntent)>()
    {
        if *controller != Controller::Computer {
            continue;
        }
        *intent = match &ball {
            Some(ball) => ai.decide(paddle.side, ball, paddle.y, arena, rng),
            None => PaddleIntent::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRng;
    use crate::systems::move_paddles;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn ai() -> AiController {
        AiController::from_config(&Config::new())
    }

    #[test]
    fn test_ai_holds_when_ball_moves_away() {
        let arena = ArenaGeometry::default();
        let mut rng = ScriptedRng::new(&[0.0]);
        // Ball far above the paddle but travelling left, away from the right paddle
        let ball = Ball::new(Vec2::new(300.0, 0.0), Vec2::new(-3.0, 0.0));

        let intent = ai().decide(Side::Right, &ball, 200.0, &arena, &mut rng);

        assert!(intent.is_idle(), "No reaction while ball moves away");
        assert_eq!(rng.draws(), 1, "Wobble is still sampled every tick");
    }

    #[test]
    fn test_ai_moves_up_towards_ball() {
        let arena = ArenaGeometry::default();
        let mut rng = ScriptedRng::new(&[0.0]);
        let ball = Ball::new(Vec2::new(300.0, 20.0), Vec2::new(3.0, 0.0));

        let intent = ai().decide(Side::Right, &ball, 200.0, &arena, &mut rng);
        assert_eq!(intent, PaddleIntent::up());
    }

    #[test]
    fn test_ai_moves_down_towards_ball() {
        let arena = ArenaGeometry::default();
        let mut rng = ScriptedRng::new(&[0.0]);
        let ball = Ball::new(Vec2::new(300.0, 380.0), Vec2::new(3.0, 0.0));

        let intent = ai().decide(Side::Right, &ball, 0.0, &arena, &mut rng);
        assert_eq!(intent, PaddleIntent::down());
    }

    #[test]
    fn test_ai_dead_zone_holds() {
        let arena = ArenaGeometry::default();
        // paddle center = 100 + 40 = 140; ball center = 144 + 6 = 150, inside the zone
        let ball = Ball::new(Vec2::new(300.0, 144.0), Vec2::new(3.0, 0.0));

        let mut rng = ScriptedRng::new(&[0.0]);
        let intent = ai().decide(Side::Right, &ball, 100.0, &arena, &mut rng);
        assert!(intent.is_idle());
    }

    #[test]
    fn test_ai_wobble_can_push_past_dead_zone() {
        let arena = ArenaGeometry::default();
        // paddle center = 140; ball center = 156, 2 units inside the zone edge at 158
        let ball = Ball::new(Vec2::new(300.0, 150.0), Vec2::new(3.0, 0.0));

        let mut rng = ScriptedRng::new(&[-1.0]);
        assert!(ai().decide(Side::Right, &ball, 100.0, &arena, &mut rng).is_idle());

        let mut rng = ScriptedRng::new(&[1.0]);
        assert_eq!(
            ai().decide(Side::Right, &ball, 100.0, &arena, &mut rng),
            PaddleIntent::down(),
            "Max wobble of +3 moves the target past the zone"
        );
    }

    #[test]
    fn test_left_side_ai_reacts_to_leftward_ball() {
        let arena = ArenaGeometry::default();
        let mut rng = ScriptedRng::new(&[0.0]);
        let ball = Ball::new(Vec2::new(300.0, 20.0), Vec2::new(-3.0, 0.0));

        let intent = ai().decide(Side::Left, &ball, 200.0, &arena, &mut rng);
        assert_eq!(intent, PaddleIntent::up());
    }

    #[test]
    fn test_drive_ai_paddles_stays_in_bounds() {
        let mut world = World::new();
        let arena = ArenaGeometry::default();
        let config = Config::new();
        let mut rng = ScriptedRng::new(&[0.0]);
        create_ball(&mut world, Vec2::new(300.0, 0.0), Vec2::new(3.0, 0.0));
        let cpu = create_paddle(&mut world, Side::Right, Controller::Computer, 1.0);

        for _ in 0..10 {
            drive_ai_paddles(&mut world, &arena, &config, &mut rng);
            move_paddles(&mut world, &arena, &config);
        }

        assert_eq!(world.get::<&Paddle>(cpu).unwrap().y, 0.0);
    }

    #[test]
    fn test_drive_ai_without_ball_holds() {
        let mut world = World::new();
        let arena = ArenaGeometry::default();
        let config = Config::new();
        let mut rng = ScriptedRng::new(&[1.0]);
        let cpu = create_paddle(&mut world, Side::Right, Controller::Computer, 50.0);

        drive_ai_paddles(&mut world, &arena, &config, &mut rng);

        assert!(world.get::<&PaddleIntent>(cpu).unwrap().is_idle());
    }
}
