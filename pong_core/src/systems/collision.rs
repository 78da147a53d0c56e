use crate::{ArenaGeometry, Ball, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Paddle hits only force the horizontal direction away from the paddle and
/// snap the ball clear of its face; the vertical velocity is untouched, so
/// the rally angle never changes on a paddle hit.
pub fn check_collisions(world: &mut World, arena: &ArenaGeometry, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, arena) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if deflect_off_paddle(ball, paddle, arena) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect off the top/bottom walls, clamping the ball back inside
pub fn bounce_off_walls(ball: &mut Ball, arena: &ArenaGeometry) -> bool {
    let max_y = arena.max_ball_y();
    if ball.pos.y <= 0.0 || ball.pos.y >= max_y {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(0.0, max_y);
        return true;
    }
    false
}

/// Inclusive overlap test between the ball square and a paddle
pub fn overlaps_paddle(ball: &Ball, paddle: &Paddle, arena: &ArenaGeometry) -> bool {
    let paddle_x = arena.paddle_x(paddle.side);
    let vertical =
        ball.pos.y + arena.ball_size >= paddle.y && ball.pos.y <= paddle.y + arena.paddle_height;

    let horizontal = match paddle.side {
        Side::Left => ball.pos.x >= paddle_x && ball.pos.x <= paddle_x + arena.paddle_width,
        Side::Right => {
            ball.pos.x + arena.ball_size >= paddle_x
                && ball.pos.x <= paddle_x + arena.paddle_width
        }
    };

    vertical && horizontal
}

/// Send the ball away from `paddle` if it overlaps it
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, arena: &ArenaGeometry) -> bool {
    if !overlaps_paddle(ball, paddle, arena) {
        return false;
    }

    let paddle_x = arena.paddle_x(paddle.side);
    match paddle.side {
        Side::Left => {
            ball.vel.x = ball.vel.x.abs();
            ball.pos.x = paddle_x + arena.paddle_width + 1.0;
        }
        Side::Right => {
            ball.vel.x = -ball.vel.x.abs();
            ball.pos.x = paddle_x - arena.ball_size - 1.0;
        }
    }
    true
}
