//! Print interception: the sink the worker installs as the runtime's
//! output primitive.
//!
//! Every textual write becomes one `PRINT_OUT` frame on the same stream
//! the dispatcher writes replies to. The sink shares the raw writer with
//! the dispatcher; each frame is assembled locally and emitted under one
//! lock acquisition, so print frames and reply frames never interleave.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tether_runtime::{OutputSink, LINE_SEPARATOR};
use tether_wire::{FrameBuf, Reply};

/// An [`OutputSink`] that frames writes as `PRINT_OUT` records.
pub struct FrameSink<W: Write> {
    out: Arc<Mutex<W>>,
}

impl<W: Write> FrameSink<W> {
    /// Wrap the shared writer the dispatcher also uses.
    pub fn new(out: Arc<Mutex<W>>) -> Self {
        FrameSink { out }
    }
}

impl<W: Write> OutputSink for FrameSink<W> {
    fn write_text(&mut self, text: &str, newline: bool) -> io::Result<()> {
        let owned;
        let payload = if newline {
            owned = format!("{text}{LINE_SEPARATOR}");
            owned.as_str()
        } else {
            text
        };
        let frame = FrameBuf::new(Reply::PrintOut).push_text(payload);
        // Partial-line output (a prompt, say) must reach the driver now;
        // line-terminated output can ride the next reply frame's flush.
        let flush = !payload.ends_with(LINE_SEPARATOR);
        frame.write_to(&mut *self.out.lock(), flush)
    }
}
