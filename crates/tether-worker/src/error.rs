//! Worker error types.
//!
//! Everything a command handler can raise funnels into [`WorkerError`]; the
//! dispatch loop converts it to an `ERROR_RESULT` frame and keeps running.
//! Only [`WorkerError::Output`] is fatal: once the reply stream is broken
//! there is nobody left to report to.

use tether_runtime::RuntimeError;
use tether_wire::WireError;

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// Framing or stream failure while reading a command's arguments.
    #[error("{0}")]
    Wire(#[from] WireError),

    /// The runtime rejected a resolution or invocation.
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    /// A negative handle outside every defined virtual band.
    #[error("invalid handle {0}")]
    InvalidHandle(i32),

    /// A non-negative handle pointing at no live slot.
    #[error("handle {0} is vacant")]
    VacantHandle(i32),

    /// `FREE_OBJECT` aimed at a virtual handle.
    #[error("cannot free virtual handle {0}")]
    FreeVirtual(i32),

    /// A handle that should name a class or method named something else.
    #[error("handle {handle} holds a {kind}, expected a {expected}")]
    WrongKind {
        handle: i32,
        kind: &'static str,
        expected: &'static str,
    },

    /// An in-alphabet tag byte that names no command.
    #[error("unrecognized command tag {0:?}")]
    UnknownCommand(char),

    /// The reply stream failed; fatal.
    #[error("output stream failure: {0}")]
    Output(#[source] std::io::Error),
}
