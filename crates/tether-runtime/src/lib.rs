//! The reflective runtime the tether worker bridges to.
//!
//! The runtime is a registry of named classes carrying statically dispatched
//! native methods over a dynamically typed value universe. It plays the role
//! reflection plays in a managed host: classes are looked up by name, methods
//! are resolved by name and parameter types, and invocation goes through a
//! uniform native-function ABI. The bridge protocol itself lives elsewhere;
//! this crate only knows about objects, classes, and a pluggable output sink
//! that the worker intercepts.

pub mod class;
pub mod error;
pub mod object;
pub mod output;
pub mod registry;
pub mod stdlib;

pub use class::{ClassDef, ClassId, MethodDef, NativeFn, TypeId};
pub use error::RuntimeError;
pub use object::{MethodRef, Obj, ObjRef};
pub use output::{Console, OutputSink, LINE_SEPARATOR};
pub use registry::{NativeCtx, Registry};
