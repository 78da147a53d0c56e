use glam::Vec2;
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Why a resize was deferred
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArenaError {
    #[error("arena size is not finite: {width} x {height}")]
    NonFinite { width: f32, height: f32 },
    #[error("arena size must be positive: {width} x {height}")]
    Degenerate { width: f32, height: f32 },
    #[error("arena {width} x {height} is smaller than the minimum {min_width} x {min_height}")]
    TooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}

/// Playing-field bounds and the fixed geometry derived from them
///
/// `width`/`height` come from the host and change on resize; the paddle and
/// ball dimensions are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaGeometry {
    pub width: f32,
    pub height: f32,
    pub paddle_height: f32,
    pub paddle_width: f32,
    pub ball_size: f32,
    pub paddle_inset: f32,
    settled: bool,
}

impl Default for ArenaGeometry {
    fn default() -> Self {
        Self::new(Params::DEFAULT_ARENA_WIDTH, Params::DEFAULT_ARENA_HEIGHT)
    }
}

impl ArenaGeometry {
    /// Build a geometry with the standard paddle/ball constants.
    ///
    /// Dimensions that fail validation fall back to the provisional default
    /// size, so a geometry value is always usable for clamping.
    pub fn new(width: f32, height: f32) -> Self {
        let mut arena = Self {
            width: Params::DEFAULT_ARENA_WIDTH,
            height: Params::DEFAULT_ARENA_HEIGHT,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            ball_size: Params::BALL_SIZE,
            paddle_inset: Params::PADDLE_INSET,
            settled: true,
        };
        if arena.resize(width, height).is_err() {
            arena.settled = true;
        }
        arena
    }

    /// Smallest width that still fits both paddle bands and a ball between them
    pub fn min_width(&self) -> f32 {
        2.0 * (self.paddle_inset + self.paddle_width) + self.ball_size
    }

    /// Smallest height that keeps the paddle clamp range non-empty
    pub fn min_height(&self) -> f32 {
        self.paddle_height.max(self.ball_size)
    }

    /// Apply new host-supplied bounds.
    ///
    /// On error the previous bounds are kept and the geometry is marked
    /// unsettled until a valid size arrives.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ArenaError> {
        if let Err(err) = self.validate(width, height) {
            self.settled = false;
            return Err(err);
        }
        self.width = width;
        self.height = height;
        self.settled = true;
        Ok(())
    }

    fn validate(&self, width: f32, height: f32) -> Result<(), ArenaError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ArenaError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ArenaError::Degenerate { width, height });
        }
        let (min_width, min_height) = (self.min_width(), self.min_height());
        if width < min_width || height < min_height {
            return Err(ArenaError::TooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }

    /// False while a degenerate resize is waiting for a usable size
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Left edge of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset - self.paddle_width,
        }
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.height - self.paddle_height).max(0.0)
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y.is_nan() {
            return 0.0;
        }
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_ball_y(&self) -> f32 {
        (self.height - self.ball_size).max(0.0)
    }
}
