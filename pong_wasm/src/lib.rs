//! Browser host for the Pong core
//!
//! The page owns the DOM, the 16 ms interval and the arena measurement; this
//! crate forwards those events into one [`GameSession`] and hands back a flat
//! snapshot for rendering. Exports are only generated for wasm32, so the
//! host logic is tested natively.

mod input;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use input::{command_for_key, HostCommand};

use pong_core::{ArenaGeometry, GameSession, Params, Snapshot};
use tracing::debug;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Border drawn around the arena on each side, in CSS pixels
pub const ARENA_BORDER: f32 = 2.0;

/// Delay before the first measurement, so layout has settled
pub const MEASURE_DELAY_MS: u32 = 100;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_module() {
    logging::init();
}

/// Flat, render-ready copy of the session state
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotView {
    ball_x: f32,
    ball_y: f32,
    ball_vx: f32,
    ball_vy: f32,
    ball_size: f32,
    left_paddle_x: f32,
    left_paddle_y: f32,
    right_paddle_x: f32,
    right_paddle_y: f32,
    paddle_width: f32,
    paddle_height: f32,
    score_left: u32,
    score_right: u32,
    active: bool,
}

impl SnapshotView {
    fn new(snapshot: &Snapshot, arena: &ArenaGeometry) -> Self {
        Self {
            ball_x: snapshot.ball.pos.x,
            ball_y: snapshot.ball.pos.y,
            ball_vx: snapshot.ball.vel.x,
            ball_vy: snapshot.ball.vel.y,
            ball_size: arena.ball_size,
            left_paddle_x: arena.paddle_x(snapshot.left_paddle.side),
            left_paddle_y: snapshot.left_paddle.y,
            right_paddle_x: arena.paddle_x(snapshot.right_paddle.side),
            right_paddle_y: snapshot.right_paddle.y,
            paddle_width: arena.paddle_width,
            paddle_height: arena.paddle_height,
            score_left: snapshot.score.left,
            score_right: snapshot.score.right,
            active: snapshot.active,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl SnapshotView {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_x(&self) -> f32 {
        self.ball_x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_y(&self) -> f32 {
        self.ball_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_vx(&self) -> f32 {
        self.ball_vx
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_vy(&self) -> f32 {
        self.ball_vy
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_size(&self) -> f32 {
        self.ball_size
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_paddle_x(&self) -> f32 {
        self.left_paddle_x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_paddle_y(&self) -> f32 {
        self.left_paddle_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_paddle_x(&self) -> f32 {
        self.right_paddle_x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_paddle_y(&self) -> f32 {
        self.right_paddle_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_width(&self) -> f32 {
        self.paddle_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_height(&self) -> f32 {
        self.paddle_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_left(&self) -> u32 {
        self.score_left
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_right(&self) -> u32 {
        self.score_right
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn active(&self) -> bool {
        self.active
    }
}

/// One game embedded in the page
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct GameHost {
    session: GameSession,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl GameHost {
    /// `seed` is typically `Date.now()`
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(seed: f64) -> Self {
        Self {
            session: GameSession::new(seed as u64),
        }
    }

    /// Forward a key press. Enter opens (starts) and Escape closes (stops)
    /// the game; every key is also recorded as held. Returns true when the
    /// press changed the session lifecycle.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        let changed = match command_for_key(key) {
            Some(HostCommand::Open) => self.session.start(),
            Some(HostCommand::Close) => self.session.stop(),
            None => false,
        };
        self.session.key_down(key);
        changed
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.session.key_up(key);
    }

    /// Window lost focus: key-up events will not arrive for held keys
    pub fn on_blur(&mut self) {
        self.session.release_keys();
    }

    /// Arena bounds in game units. Returns false while the size is unusable.
    pub fn on_resize(&mut self, width: f32, height: f32) -> bool {
        self.session.resize(width, height)
    }

    /// Arena element's bounding box, border included
    pub fn on_measure(&mut self, rect_width: f32, rect_height: f32) -> bool {
        let width = rect_width - 2.0 * ARENA_BORDER;
        let height = rect_height - 2.0 * ARENA_BORDER;
        debug!(rect_width, rect_height, width, height, "arena measured");
        self.on_resize(width, height)
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn stop(&mut self) -> bool {
        self.session.stop()
    }

    /// Called by the page every [`Params::TICK_MS`]
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    pub fn snapshot(&self) -> SnapshotView {
        SnapshotView::new(&self.session.snapshot(), self.session.arena())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn active(&self) -> bool {
        self.session.is_active()
    }

    pub fn tick_interval_ms() -> u32 {
        Params::TICK_MS
    }

    pub fn measure_delay_ms() -> u32 {
        MEASURE_DELAY_MS
    }
}
