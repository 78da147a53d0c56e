use crate::params::Params;

/// Game configuration
///
/// Geometry constants live on [`crate::ArenaGeometry`]; this holds the
/// movement, opponent, serve and key tuning.
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub ai_error: f32,
    pub initial_ball_velocity: glam::Vec2,
    pub serve_speed: f32,
    pub serve_spread: f32,
    pub key_up: String,
    pub key_down: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_error: Params::AI_ERROR,
            initial_ball_velocity: glam::Vec2::new(Params::INITIAL_BALL_VX, Params::INITIAL_BALL_VY),
            serve_speed: Params::SERVE_SPEED,
            serve_spread: Params::SERVE_SPREAD,
            key_up: Params::KEY_UP.to_string(),
            key_down: Params::KEY_DOWN.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve velocity towards the given side, with vertical component
    /// scaled from a signed unit draw.
    pub fn serve_velocity(&self, towards: crate::Side, signed_unit: f32) -> glam::Vec2 {
        let vy = signed_unit.clamp(-1.0, 1.0) * self.serve_spread;
        glam::Vec2::new(towards.direction() * self.serve_speed, vy)
    }
}
