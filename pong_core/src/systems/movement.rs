use crate::{ArenaGeometry, Ball, Config, Controller, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
///
/// Up is applied before down, each guarded by the paddle's current edge, and
/// the result is always clamped into the arena.
pub fn move_paddles(world: &mut World, arena: &ArenaGeometry, config: &Config) {
    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &Controller)>()
    {
        let speed = match controller {
            Controller::Keyboard => config.paddle_speed,
            Controller::Computer => config.ai_speed,
        };

        if intent.up && paddle.y > 0.0 {
            paddle.y -= speed;
        }
        if intent.down && paddle.y < arena.max_paddle_y() {
            paddle.y += speed;
        }

        paddle.y = arena.clamp_paddle_y(paddle.y);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
