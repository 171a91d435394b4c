//! The request dispatcher: one command in flight at a time.
//!
//! The loop reads a tag byte, parses the command's arguments through the
//! codec, performs the reflective action against the registry and the
//! object table, and emits the reply frame. Failures inside a command are
//! caught at the loop boundary and reported as `ERROR_RESULT`; the loop
//! then continues. End of input and the explicit `SHUTDOWN` tag both end
//! the loop, which writes a terminal `SHUTDOWN` frame on the way out.

use std::io::{Read, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tether_runtime::{ClassId, Console, NativeCtx, Obj, ObjRef, Registry, RuntimeError};
use tether_wire::codec;
use tether_wire::handles::{self, InlineKind, HANDLE_NULL};
use tether_wire::{Command, FrameBuf, Reply, WireError};

use crate::config::WorkerConfig;
use crate::error::WorkerError;
use crate::sink::FrameSink;
use crate::table::ObjectTable;

/// Terminal result of a successfully handled command.
enum Outcome {
    Int(i32),
    Void,
    Text(String),
}

/// The bridge worker.
pub struct Worker<R: Read, W: Write + 'static> {
    input: R,
    output: Arc<Mutex<W>>,
    table: ObjectTable,
    registry: Registry,
    console: Console,
    config: WorkerConfig,
}

impl<R: Read, W: Write + 'static> Worker<R, W> {
    /// A worker over the standard runtime.
    pub fn new(input: R, output: W, config: WorkerConfig) -> Self {
        Worker::with_registry(input, output, Registry::with_stdlib(), config)
    }

    /// A worker over a caller-assembled registry.
    pub fn with_registry(input: R, output: W, registry: Registry, config: WorkerConfig) -> Self {
        let output = Arc::new(Mutex::new(output));
        let console = Console::new(Box::new(FrameSink::new(output.clone())));
        Worker {
            input,
            output,
            table: ObjectTable::new(),
            registry,
            console,
            config,
        }
    }

    /// The shared writer replies and print frames go to.
    pub fn output_handle(&self) -> Arc<Mutex<W>> {
        self.output.clone()
    }

    /// Run the loop until shutdown or end of input.
    ///
    /// Returns an error only for fatal stream failures; per-command
    /// failures are reported in-band and do not end the loop.
    pub fn run(&mut self) -> Result<(), WorkerError> {
        loop {
            let Some(ordinal) = codec::read_tag(&mut self.input)? else {
                break;
            };
            let Some(command) = Command::from_ordinal(ordinal) else {
                let tag = codec::tag_byte(ordinal) as char;
                self.report(&WorkerError::UnknownCommand(tag))?;
                continue;
            };
            if self.config.debug {
                eprintln!("{}", command.name());
            }
            if command == Command::Shutdown {
                break;
            }
            match self.execute(command) {
                Ok(outcome) => self.write_outcome(outcome)?,
                Err(err) => self.report(&err)?,
            }
        }
        self.write_frame(FrameBuf::new(Reply::Shutdown))
    }

    fn execute(&mut self, command: Command) -> Result<Outcome, WorkerError> {
        match command {
            // The loop exits before dispatching this.
            Command::Shutdown => Ok(Outcome::Void),

            Command::GetClass => {
                let name = codec::read_text(&mut self.input)?;
                let id = self.registry.class_by_name(&name)?;
                let class = self.registry.class_obj(id);
                Ok(Outcome::Int(self.save(class)))
            }

            Command::FreeObject => {
                let handle = codec::read_i32(&mut self.input)?;
                if handle < 0 {
                    return Err(WorkerError::FreeVirtual(handle));
                }
                self.table.free(handle)?;
                Ok(Outcome::Void)
            }

            Command::GetMethod => {
                let owner = self.read_class()?;
                let name = codec::read_text(&mut self.input)?;
                let arity = codec::read_u32(&mut self.input)? as usize;
                let mut params = Vec::new();
                for _ in 0..arity {
                    let class = self.read_class()?;
                    let ty = self.registry.type_of_class(class).ok_or_else(|| {
                        RuntimeError::SignatureType(self.registry.class_name(class).to_string())
                    })?;
                    params.push(ty);
                }
                let method = self.registry.resolve_method(owner, &name, &params)?;
                Ok(Outcome::Int(self.save(method)))
            }

            Command::ToString => {
                let value = self.read_value()?;
                Ok(Outcome::Text(self.registry.render(&value)))
            }

            Command::CreateString => {
                let text = codec::read_text(&mut self.input)?;
                Ok(Outcome::Int(self.save(Obj::Str(text).alloc())))
            }

            Command::InvokeStaticMethod => {
                let handle = codec::read_i32(&mut self.input)?;
                let method = self.table.resolve(handle)?;
                let mref = method.as_method().ok_or(WorkerError::WrongKind {
                    handle,
                    kind: method.kind(),
                    expected: "method",
                })?;
                let arity = codec::read_u32(&mut self.input)? as usize;
                let mut args = Vec::new();
                for _ in 0..arity {
                    args.push(self.read_value()?);
                }
                let result = {
                    let mut ctx = NativeCtx {
                        registry: &self.registry,
                        console: &mut self.console,
                    };
                    self.registry.invoke(mref, &mut ctx, &args)?
                };
                Ok(Outcome::Int(self.save(result)))
            }
        }
    }

    /// Admit a result into the table; null maps to its sentinel handle.
    fn save(&mut self, obj: ObjRef) -> i32 {
        if obj.is_null() {
            HANDLE_NULL
        } else {
            self.table.admit(obj)
        }
    }

    /// Read a class-position handle: a stored class or a built-in type.
    fn read_class(&mut self) -> Result<ClassId, WorkerError> {
        let handle = codec::read_i32(&mut self.input)?;
        if handle >= 0 {
            let obj = self.table.resolve(handle)?;
            obj.as_class().ok_or(WorkerError::WrongKind {
                handle,
                kind: obj.kind(),
                expected: "class",
            })
        } else {
            handles::builtin_class_index(handle).ok_or(WorkerError::InvalidHandle(handle))
        }
    }

    /// Read a value-position handle, consuming inline primitive bits where
    /// the handle calls for them.
    fn read_value(&mut self) -> Result<ObjRef, WorkerError> {
        let handle = codec::read_i32(&mut self.input)?;
        if handle >= 0 {
            return self.table.resolve(handle);
        }
        if handle == HANDLE_NULL {
            return Ok(Obj::Null.alloc());
        }
        if let Some(kind) = InlineKind::from_handle(handle) {
            return self.read_inline(kind);
        }
        if let Some(index) = handles::builtin_value_index(handle) {
            return Ok(self.registry.class_obj(index));
        }
        Err(WorkerError::InvalidHandle(handle))
    }

    fn read_inline(&mut self, kind: InlineKind) -> Result<ObjRef, WorkerError> {
        let obj = match kind {
            InlineKind::Byte => Obj::Byte(codec::read_u32(&mut self.input)? as i8),
            InlineKind::Boolean => Obj::Boolean(codec::read_u32(&mut self.input)? != 0),
            InlineKind::Short => Obj::Short(codec::read_u32(&mut self.input)? as i16),
            InlineKind::Char => Obj::Char(codec::read_u32(&mut self.input)? as u16),
            InlineKind::Int => Obj::Int(codec::read_u32(&mut self.input)? as i32),
            InlineKind::Float => Obj::Float(f32::from_bits(codec::read_u32(&mut self.input)?)),
            InlineKind::Long => Obj::Long(self.read_wide()? as i64),
            InlineKind::Double => Obj::Double(f64::from_bits(self.read_wide()?)),
        };
        Ok(obj.alloc())
    }

    /// Two consecutive 32-bit halves, high first, low half zero-extended.
    fn read_wide(&mut self) -> Result<u64, WireError> {
        let high = codec::read_u32(&mut self.input)? as u64;
        let low = codec::read_u32(&mut self.input)? as u64;
        Ok((high << 32) | low)
    }

    fn write_outcome(&mut self, outcome: Outcome) -> Result<(), WorkerError> {
        let frame = match outcome {
            Outcome::Int(value) => FrameBuf::new(Reply::IntResult).push_i32(value),
            Outcome::Void => FrameBuf::new(Reply::VoidResult),
            Outcome::Text(text) => FrameBuf::new(Reply::StringResult).push_text(&text),
        };
        self.write_frame(frame)
    }

    fn report(&mut self, err: &WorkerError) -> Result<(), WorkerError> {
        self.write_frame(FrameBuf::new(Reply::ErrorResult).push_text(&err.to_string()))
    }

    fn write_frame(&mut self, frame: FrameBuf) -> Result<(), WorkerError> {
        frame
            .write_to(&mut *self.output.lock(), true)
            .map_err(WorkerError::Output)
    }
}
