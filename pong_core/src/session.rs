use hecs::World;
use tracing::{debug, info, trace, warn};

use crate::components::*;
use crate::params::Params;
use crate::systems::recenter;
use crate::{
    create_ball, create_paddle, step, ArenaGeometry, Config, Events, GameRng, InputState,
    RandomSource, Score,
};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not started, or stopped: ticks are ignored
    Idle,
    /// Ticking
    Running,
}

/// Read-only view of the session handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    pub active: bool,
}

/// One match: the authoritative world plus its lifecycle
///
/// The left paddle follows the keyboard, the right paddle is the computer.
/// Score survives `stop`/`start`; only a new session starts from 0-0.
pub struct GameSession<R = GameRng> {
    world: World,
    arena: ArenaGeometry,
    config: Config,
    input: InputState,
    score: Score,
    events: Events,
    rng: R,
    state: SessionState,
    tick: u64,
}

impl GameSession<GameRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }
}

impl Default for GameSession<GameRng> {
    fn default() -> Self {
        Self::with_rng(GameRng::default())
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_config(Config::default(), rng)
    }

    pub fn with_config(config: Config, rng: R) -> Self {
        let arena = ArenaGeometry::default();
        let mut world = World::new();

        create_ball(&mut world, arena.center(), config.initial_ball_velocity);
        create_paddle(&mut world, Side::Left, Controller::Keyboard, arena.paddle_spawn_y());
        create_paddle(&mut world, Side::Right, Controller::Computer, arena.paddle_spawn_y());

        Self {
            world,
            arena,
            config,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            state: SessionState::Idle,
            tick: 0,
        }
    }

    /// Idle -> Running, re-centering ball and paddles. No-op when running.
    pub fn start(&mut self) -> bool {
        if self.state == SessionState::Running {
            return false;
        }

        recenter(&mut self.world, &self.arena, &self.config);
        self.state = SessionState::Running;
        info!(
            width = self.arena.width,
            height = self.arena.height,
            left = self.score.left,
            right = self.score.right,
            "session started"
        );
        true
    }

    /// Running -> Idle, freezing positions and score. No-op when idle.
    pub fn stop(&mut self) -> bool {
        if self.state == SessionState::Idle {
            return false;
        }

        self.state = SessionState::Idle;
        info!(tick = self.tick, "session stopped");
        true
    }

    /// Apply new arena bounds and re-center.
    ///
    /// A degenerate size is not applied: the previous bounds stay, ticks are
    /// suspended until a usable size arrives, and `false` is returned.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if let Err(err) = self.arena.resize(width, height) {
            warn!(%err, "deferring arena resize until layout settles");
            return false;
        }

        recenter(&mut self.world, &self.arena, &self.config);
        debug!(width, height, state = ?self.state, "arena resized");
        true
    }

    /// Advance one tick. Returns `false` (and changes nothing) when idle or
    /// while the arena is waiting for a usable size.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running || !self.arena.is_settled() {
            return false;
        }

        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;

        if self.tick % Params::HEARTBEAT_TICKS == 0 {
            trace!(
                tick = self.tick,
                left = self.score.left,
                right = self.score.right,
                "session running"
            );
        }
        true
    }

    pub fn key_down(&mut self, id: &str) {
        self.input.key_down(id);
    }

    pub fn key_up(&mut self, id: &str) {
        self.input.key_up(id);
    }

    pub fn set_key(&mut self, id: &str, pressed: bool) {
        self.input.set_key(id, pressed);
    }

    /// Forget held keys, e.g. when the page loses focus mid-press
    pub fn release_keys(&mut self) {
        self.input.release_all();
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| Ball::new(self.arena.center(), glam::Vec2::ZERO));

        let spawn_y = self.arena.paddle_spawn_y();
        let mut left_paddle = Paddle::new(Side::Left, spawn_y);
        let mut right_paddle = Paddle::new(Side::Right, spawn_y);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left_paddle = *paddle,
                Side::Right => right_paddle = *paddle,
            }
        }

        Snapshot {
            ball,
            left_paddle,
            right_paddle,
            score: self.score,
            active: self.is_active(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the last applied tick
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn arena(&self) -> &ArenaGeometry {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Number of ticks applied so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}
