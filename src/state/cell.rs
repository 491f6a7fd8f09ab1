//! Async driver around the request state machine
//!
//! A [`FetchCell`] owns one `RequestState` and runs one remote call at a
//! time against it. Re-running the cell invalidates whatever call was still
//! in flight: each run records a generation number, and a completion whose
//! generation no longer matches is discarded instead of committed.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::errors::RosterError;
use crate::state::{Action, RequestState, reduce};

/// Parameters for one fetch: the API credential plus, for the channel
/// listing, the user whose membership is being queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: String,
    pub user_id: Option<String>,
}

struct Inner<T> {
    state: RequestState<T>,
    generation: u64,
}

/// Shared handle to one request lifecycle.
///
/// Clones share the same state; the mutex is only held to apply a
/// transition, never across an await.
pub struct FetchCell<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for FetchCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for FetchCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchCell<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: RequestState::default(),
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the idle state and invalidates any call still in flight.
    ///
    /// Used when the originating request is cleared or the owner goes away;
    /// a late completion from before the reset becomes inert.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        let prev = std::mem::take(&mut inner.state);
        inner.state = reduce(prev, Action::Init);
    }

    /// Runs one fetch against this cell.
    ///
    /// A missing request or an empty token is a no-op: no transition is
    /// applied and `loader` is never invoked. Otherwise the cell enters the
    /// loading state, awaits `loader`, and commits the outcome unless a
    /// newer run (or a reset) has claimed the cell in the meantime. Every
    /// loader failure collapses into the single error state; the cause is
    /// only logged.
    pub async fn run<F, Fut>(&self, request: Option<&FetchRequest>, loader: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, RosterError>>,
    {
        let Some(request) = request else {
            return;
        };
        if request.token.is_empty() {
            return;
        }

        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            let prev = std::mem::take(&mut inner.state);
            inner.state = reduce(prev, Action::Start);
            inner.generation
        };

        let outcome = loader().await;

        let mut inner = self.lock();
        if inner.generation != generation {
            debug!("Discarding stale completion for generation {}", generation);
            return;
        }

        let action = match outcome {
            Ok(payload) => Action::Data(payload),
            Err(e) => {
                warn!("Fetch failed: {}", e);
                Action::Error
            }
        };
        let prev = std::mem::take(&mut inner.state);
        inner.state = reduce(prev, action);
    }
}

impl<T: Clone> FetchCell<T> {
    /// Current `{loading, error, data}` view for the display layer.
    pub fn snapshot(&self) -> RequestState<T> {
        self.lock().state.clone()
    }
}
