//! Standard classes registered into every worker runtime.
//!
//! One module per class. Method bodies receive arguments the registry has
//! already arity- and type-checked against the overload's signature; the
//! accessors here exist so a body still degrades to a clean error instead
//! of a panic if that contract is ever violated.

use crate::error::RuntimeError;
use crate::object::ObjRef;
use crate::registry::Registry;

pub mod console;
pub mod fmt;
pub mod math;
pub mod obj;
pub mod time;

/// Register every standard class.
pub fn register(registry: &mut Registry) {
    registry.register_class(math::class());
    registry.register_class(fmt::class());
    registry.register_class(time::class());
    registry.register_class(obj::class());
    registry.register_class(console::class());
}

fn argument_error(method: &str, index: usize, expected: &str, args: &[ObjRef]) -> RuntimeError {
    RuntimeError::InvalidArgument(format!(
        "{method}: argument {index} is not a {expected} (got {})",
        args.get(index).map_or("nothing", |a| a.kind())
    ))
}

pub(crate) fn boolean_arg(
    method: &str,
    args: &[ObjRef],
    index: usize,
) -> Result<bool, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_boolean())
        .ok_or_else(|| argument_error(method, index, "boolean", args))
}

pub(crate) fn char_arg(method: &str, args: &[ObjRef], index: usize) -> Result<u16, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_char())
        .ok_or_else(|| argument_error(method, index, "char", args))
}

pub(crate) fn int_arg(method: &str, args: &[ObjRef], index: usize) -> Result<i32, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_int())
        .ok_or_else(|| argument_error(method, index, "int", args))
}

pub(crate) fn long_arg(method: &str, args: &[ObjRef], index: usize) -> Result<i64, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_long())
        .ok_or_else(|| argument_error(method, index, "long", args))
}

pub(crate) fn float_arg(method: &str, args: &[ObjRef], index: usize) -> Result<f32, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_float())
        .ok_or_else(|| argument_error(method, index, "float", args))
}

pub(crate) fn double_arg(
    method: &str,
    args: &[ObjRef],
    index: usize,
) -> Result<f64, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_double())
        .ok_or_else(|| argument_error(method, index, "double", args))
}

pub(crate) fn str_arg<'a>(
    method: &str,
    args: &'a [ObjRef],
    index: usize,
) -> Result<&'a str, RuntimeError> {
    args.get(index)
        .and_then(|a| a.as_str())
        .ok_or_else(|| argument_error(method, index, "string", args))
}
