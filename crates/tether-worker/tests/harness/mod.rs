//! Test harness for driving the worker over in-memory streams.
//!
//! `Script` assembles the byte stream a driver would send, runs a worker
//! over it, and demultiplexes the emitted frames for assertions.

#![allow(dead_code)] // not every test binary uses every helper

use std::io::Cursor;

use tether_runtime::Registry;
use tether_wire::codec;
use tether_wire::Command;
use tether_worker::{Worker, WorkerConfig};

/// A demultiplexed reply frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Shutdown,
    Print(String),
    Int(i32),
    Error(String),
    Void,
    Str(String),
}

/// A driver-side command script under assembly.
pub struct Script {
    buf: Vec<u8>,
}

impl Script {
    pub fn new() -> Self {
        Script { buf: Vec::new() }
    }

    pub fn tag(mut self, command: Command) -> Self {
        self.buf.push(command.tag());
        self
    }

    /// Append an arbitrary byte, for malformed-input tests.
    pub fn raw(mut self, byte: u8) -> Self {
        self.buf.push(byte);
        self
    }

    pub fn int(mut self, value: i32) -> Self {
        codec::encode_u32(&mut self.buf, value as u32);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        codec::encode_text(&mut self.buf, text);
        self
    }

    pub fn get_class(self, name: &str) -> Self {
        self.tag(Command::GetClass).text(name)
    }

    pub fn free(self, handle: i32) -> Self {
        self.tag(Command::FreeObject).int(handle)
    }

    pub fn get_method(self, owner: i32, name: &str, params: &[i32]) -> Self {
        let mut script = self
            .tag(Command::GetMethod)
            .int(owner)
            .text(name)
            .int(params.len() as i32);
        for &param in params {
            script = script.int(param);
        }
        script
    }

    pub fn to_string_of(self, handle: i32) -> Self {
        self.tag(Command::ToString).int(handle)
    }

    pub fn create_string(self, text: &str) -> Self {
        self.tag(Command::CreateString).text(text)
    }

    /// Start an invocation; inline-argument words follow via [`Script::int`].
    pub fn invoke(self, method: i32, argc: i32) -> Self {
        self.tag(Command::InvokeStaticMethod).int(method).int(argc)
    }

    pub fn shutdown(self) -> Self {
        self.tag(Command::Shutdown)
    }

    /// Run the script against the standard runtime.
    pub fn run(self) -> Vec<Frame> {
        self.run_with(Registry::with_stdlib())
    }

    /// Run the script against a caller-assembled registry.
    pub fn run_with(self, registry: Registry) -> Vec<Frame> {
        let mut worker = Worker::with_registry(
            Cursor::new(self.buf),
            Vec::new(),
            registry,
            WorkerConfig::default(),
        );
        worker.run().expect("worker loop failed");
        let output = worker.output_handle();
        let bytes = output.lock().clone();
        parse_frames(&bytes)
    }
}

/// Demultiplex a worker output stream into frames.
pub fn parse_frames(bytes: &[u8]) -> Vec<Frame> {
    let mut input = Cursor::new(bytes.to_vec());
    let mut frames = Vec::new();
    while let Some(ordinal) = codec::read_tag(&mut input).expect("tag read") {
        frames.push(match ordinal {
            0 => Frame::Shutdown,
            1 => Frame::Print(codec::read_text(&mut input).expect("print payload")),
            2 => Frame::Int(codec::read_i32(&mut input).expect("int payload")),
            3 => Frame::Error(codec::read_text(&mut input).expect("error payload")),
            4 => Frame::Void,
            5 => Frame::Str(codec::read_text(&mut input).expect("string payload")),
            other => panic!("unexpected reply ordinal {other}"),
        });
    }
    frames
}
