use std::sync::Arc;

use parking_lot::Mutex;

use crate::{GameRng, GameSession, RandomSource, Snapshot};

/// Cloneable, lock-protected handle to one [`GameSession`]
///
/// For hosts that deliver ticks and input on different threads. Each call
/// holds the lock for its whole duration, so a reader never sees a
/// half-applied tick and ticks never overlap.
pub struct SharedSession<R = GameRng> {
    inner: Arc<Mutex<GameSession<R>>>,
}

impl<R> Clone for SharedSession<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedSession<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with<T>(&self, f: impl FnOnce(&mut GameSession<R>) -> T) -> T {
        let mut session = self.inner.lock();
        f(&mut *session)
    }

    pub fn start(&self) -> bool {
        self.with(|s| s.start())
    }

    pub fn stop(&self) -> bool {
        self.with(|s| s.stop())
    }

    pub fn resize(&self, width: f32, height: f32) -> bool {
        self.with(|s| s.resize(width, height))
    }

    pub fn tick(&self) -> bool {
        self.with(|s| s.tick())
    }

    pub fn key_down(&self, id: &str) {
        self.with(|s| s.key_down(id));
    }

    pub fn key_up(&self, id: &str) {
        self.with(|s| s.key_up(id));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }
}
