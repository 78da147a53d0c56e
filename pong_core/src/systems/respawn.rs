use hecs::World;

use crate::components::*;
use crate::{ArenaGeometry, Config};

/// Put the ball and both paddles back at the arena's center line
///
/// Used on start and on every resize; any rally in flight is discarded.
pub fn recenter(world: &mut World, arena: &ArenaGeometry, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = arena.center();
        ball.vel = config.initial_ball_velocity;
    }

    let paddle_y = arena.clamp_paddle_y(arena.paddle_spawn_y());
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        paddle.y = paddle_y;
        *intent = PaddleIntent::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_recenter_ball_and_paddles() {
        let mut world = World::new();
        let arena = ArenaGeometry::new(800.0, 600.0);
        let config = Config::new();
        let ball = create_ball(&mut world, Vec2::new(13.0, 7.0), Vec2::new(-3.0, -1.2));
        let left = create_paddle(&mut world, Side::Left, Controller::Keyboard, 0.0);
        let right = create_paddle(&mut world, Side::Right, Controller::Computer, 520.0);
        *world.get::<&mut PaddleIntent>(left).unwrap() = PaddleIntent::down();

        recenter(&mut world, &arena, &config);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(3.0, 2.0));
        assert_eq!(world.get::<&Paddle>(left).unwrap().y, 260.0);
        assert_eq!(world.get::<&Paddle>(right).unwrap().y, 260.0);
        assert!(world.get::<&PaddleIntent>(left).unwrap().is_idle());
    }
}
