//! Shared, serialised access to a `GameSession`.

use std::sync::Arc;

use parking_lot::Mutex;

use super::error::MoveRejection;
use super::game::{GameSession, GameState};
use super::options::SessionOptions;
use crate::board::{Color, Square};

/// Cloneable handle to one session.
///
/// Each operation takes the lock once and runs to completion before the
/// next one starts, so two proposals never interleave their validation
/// and mutation. Results are cloned out so no lock outlives a call.
#[derive(Clone, Debug, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<GameSession>>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        SessionHandle {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self::new(GameSession::new(options))
    }

    pub fn propose_move(
        &self,
        requester: Color,
        from: Square,
        to: Square,
    ) -> Result<GameState, MoveRejection> {
        self.inner
            .lock()
            .propose_move(requester, from, to)
            .cloned()
    }

    /// Change one option by name; `None` when it was not accepted.
    pub fn set_option(&self, name: &str, value: Option<&str>) -> Option<SessionOptions> {
        self.inner.lock().set_option(name, value).cloned()
    }

    pub fn reset(&self) -> GameState {
        self.inner.lock().reset().clone()
    }

    /// Current state, for observers that just joined.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().state().clone()
    }

    /// Run a read-only closure against the session while holding the lock.
    pub fn with_session<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R {
        f(&self.inner.lock())
    }
}
