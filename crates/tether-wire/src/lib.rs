//! Wire codec for the tether bridge protocol.
//!
//! The driver and the worker exchange self-delimiting frames over a single
//! byte stream. Every frame starts with a one-byte base-36 tag; the payload
//! is built from two atoms: fixed-width integers (eight lowercase hex ASCII
//! digits) and text blobs (a fixed-width length followed by that many
//! Latin-1 code units). Frames are assembled in a local buffer and emitted
//! with a single write so that command replies and intercepted print output
//! never interleave.

pub mod codec;
pub mod frame;
pub mod handles;

pub use codec::{read_i32, read_tag, read_text, read_u32, WireError};
pub use frame::{Command, FrameBuf, Reply};
