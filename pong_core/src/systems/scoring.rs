use crate::{ArenaGeometry, Ball, Config, Events, RandomSource, Score, Side};
use hecs::World;
use tracing::info;

/// Side that wins the point if the ball has fully left the arena
pub fn exited_past(ball: &Ball, arena: &ArenaGeometry) -> Option<Side> {
    if ball.pos.x < -arena.ball_size {
        Some(Side::Right)
    } else if ball.pos.x > arena.width + arena.ball_size {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena (scoring)
///
/// The scorer receives the serve: the ball restarts at the arena center
/// heading towards the scorer's side with a random vertical component.
pub fn check_scoring(
    world: &mut World,
    arena: &ArenaGeometry,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(scorer) = exited_past(ball, arena) else {
            continue;
        };

        score.award(scorer);
        events.scored(scorer);
        info!(
            ?scorer,
            left = score.left,
            right = score.right,
            "point scored"
        );

        ball.pos = arena.center();
        ball.vel = config.serve_velocity(scorer, rng.next_signed());
    }
}
