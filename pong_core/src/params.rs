/// Game tuning parameters for Pong
///
/// Units are arena units (CSS pixels in the browser host) and all speeds are
/// per tick, not per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (provisional until the host measures the playing surface)
    pub const DEFAULT_ARENA_WIDTH: f32 = 600.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const INITIAL_BALL_VX: f32 = 3.0;
    pub const INITIAL_BALL_VY: f32 = 2.0;
    pub const SERVE_SPEED: f32 = 3.0;
    pub const SERVE_SPREAD: f32 = 2.0; // vy drawn from [-SPREAD, SPREAD]

    // Computer opponent
    pub const AI_SPEED: f32 = 3.2;
    pub const AI_DEAD_ZONE: f32 = 18.0;
    pub const AI_ERROR: f32 = 3.0;

    // Keyboard
    pub const KEY_UP: &'static str = "w";
    pub const KEY_DOWN: &'static str = "s";

    // Loop
    pub const TICK_MS: u32 = 16; // ~60 Hz
    pub const HEARTBEAT_TICKS: u64 = 60;
}
