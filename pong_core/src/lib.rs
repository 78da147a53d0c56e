//! Fixed-tick Pong simulation
//!
//! One keyboard paddle on the left, a computer paddle on the right and a
//! ball, stored in a `hecs` world and advanced by [`step`]. [`GameSession`]
//! owns the world and exposes the start/stop/resize/tick lifecycle the host
//! drives; [`SharedSession`] serializes access when the host is threaded.

pub mod arena;
pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod resources;
pub mod session;
pub mod shared;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use shared::*;

use hecs::World;
use systems::*;

/// Advance the simulation by exactly one tick
///
/// Paddles move before the ball, and collisions are resolved before the
/// exit check, so a ball deflected this tick can never also score.
pub fn step(
    world: &mut World,
    arena: &ArenaGeometry,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Intents: keyboard for the player, AI for the computer
    apply_keyboard_input(world, input, config);
    drive_ai_paddles(world, arena, config, rng);

    // 2. Move paddles based on intents
    move_paddles(world, arena, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, arena, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, arena, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, controller: Controller, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), controller, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
