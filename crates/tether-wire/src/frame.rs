//! Frame tags and frame assembly.
//!
//! Command and reply kinds are identified by their ordinal, encoded as a
//! single base-36 digit on the wire. `FrameBuf` accumulates a complete
//! outgoing frame in a local buffer so it can be handed to the stream with
//! one write call; the dispatcher and the print interceptor both rely on
//! that to keep frames atomic.

use std::io::{self, Write};

use crate::codec;

/// Commands the driver may send, in ordinal (tag) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shutdown,
    GetClass,
    FreeObject,
    GetMethod,
    ToString,
    CreateString,
    InvokeStaticMethod,
}

impl Command {
    const ALL: [Command; 7] = [
        Command::Shutdown,
        Command::GetClass,
        Command::FreeObject,
        Command::GetMethod,
        Command::ToString,
        Command::CreateString,
        Command::InvokeStaticMethod,
    ];

    /// Decode an in-alphabet ordinal; `None` if it names no command.
    pub fn from_ordinal(ordinal: u8) -> Option<Command> {
        Command::ALL.get(ordinal as usize).copied()
    }

    /// The command's tag byte.
    pub fn tag(self) -> u8 {
        codec::tag_byte(self as u8)
    }

    /// Diagnostic name, echoed to stderr in debug mode.
    pub fn name(self) -> &'static str {
        match self {
            Command::Shutdown => "SHUTDOWN",
            Command::GetClass => "GET_CLASS",
            Command::FreeObject => "FREE_OBJECT",
            Command::GetMethod => "GET_METHOD",
            Command::ToString => "TO_STRING",
            Command::CreateString => "CREATE_STRING",
            Command::InvokeStaticMethod => "INVOKE_STATIC_METHOD",
        }
    }
}

/// Reply frame kinds the worker emits, in ordinal (tag) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Shutdown,
    PrintOut,
    IntResult,
    ErrorResult,
    VoidResult,
    StringResult,
}

impl Reply {
    /// The reply's tag byte.
    pub fn tag(self) -> u8 {
        codec::tag_byte(self as u8)
    }
}

/// A complete outgoing frame, assembled locally before emission.
#[derive(Debug)]
pub struct FrameBuf {
    buf: Vec<u8>,
}

impl FrameBuf {
    /// Start a frame with the given reply tag.
    pub fn new(reply: Reply) -> Self {
        FrameBuf {
            buf: vec![reply.tag()],
        }
    }

    /// Append a fixed-width integer.
    pub fn push_u32(mut self, value: u32) -> Self {
        codec::encode_u32(&mut self.buf, value);
        self
    }

    /// Append a signed handle as its two's-complement wire form.
    pub fn push_i32(self, value: i32) -> Self {
        self.push_u32(value as u32)
    }

    /// Append a text blob.
    pub fn push_text(mut self, text: &str) -> Self {
        codec::encode_text(&mut self.buf, text);
        self
    }

    /// The assembled frame bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Emit the frame with a single write, optionally flushing.
    pub fn write_to(&self, out: &mut impl Write, flush: bool) -> io::Result<()> {
        out.write_all(&self.buf)?;
        if flush {
            out.flush()?;
        }
        Ok(())
    }
}
