//! Request lifecycle state machine
//!
//! Models one asynchronous remote call as it moves through
//! idle -> loading -> success/failed, driven by a pure transition function.
//! The async driver around it lives in [`cell`].

pub mod cell;

pub use cell::{FetchCell, FetchRequest};

/// The view of one in-flight request exposed to the display layer.
///
/// Invariants: `loading` never coexists with freshly committed `data`, and
/// `error` implies `data` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub error: bool,
    pub data: Option<Vec<T>>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: false,
            data: None,
        }
    }
}

/// Transition inputs for the request state machine.
///
/// The set is closed; match exhaustiveness makes an unrecognized action
/// impossible rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<T> {
    Init,
    Start,
    Data(Vec<T>),
    Error,
}

/// Applies one action to the current state and returns the next state.
///
/// `Start` eagerly drops any previous payload so a new load never briefly
/// shows the previous result.
pub fn reduce<T>(state: RequestState<T>, action: Action<T>) -> RequestState<T> {
    match action {
        Action::Init => RequestState::default(),
        Action::Start => RequestState {
            loading: true,
            data: None,
            ..state
        },
        Action::Data(payload) => RequestState {
            loading: false,
            error: false,
            data: Some(payload),
        },
        Action::Error => RequestState {
            loading: false,
            error: true,
            data: None,
        },
    }
}
