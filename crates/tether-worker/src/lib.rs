//! The tether worker: the child-process half of the bridge.
//!
//! A single-threaded loop reads framed commands from an input stream,
//! executes them against the embedded runtime, and writes framed replies to
//! an output stream. Anything the runtime prints while a command runs is
//! intercepted and forwarded as `PRINT_OUT` frames on the same stream,
//! ahead of the command's terminal reply.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod sink;
pub mod table;

pub use config::WorkerConfig;
pub use dispatch::Worker;
pub use error::WorkerError;
pub use table::ObjectTable;
