//! The `console` class: the textual output surface programs print through.
//!
//! Every overload forwards to the matching [`Console`] adapter, so a call
//! from the driver produces exactly one write on the installed sink. The
//! `object` overloads canonicalize through the registry's renderer first.

use crate::class::{ClassDef, TypeId};
use crate::object::{char_unit_to_char, Obj};
use crate::stdlib::{
    boolean_arg, char_arg, double_arg, float_arg, int_arg, long_arg, str_arg,
};

pub fn class() -> ClassDef {
    let mut class = ClassDef::new("console");

    class.method("print", &[TypeId::Boolean], |ctx, args| {
        ctx.console
            .print_boolean(boolean_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Char], |ctx, args| {
        ctx.console
            .print_char(char_unit_to_char(char_arg("console.print", args, 0)?))?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Int], |ctx, args| {
        ctx.console.print_int(int_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Long], |ctx, args| {
        ctx.console
            .print_long(long_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Float], |ctx, args| {
        ctx.console
            .print_float(float_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Double], |ctx, args| {
        ctx.console
            .print_double(double_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Str], |ctx, args| {
        ctx.console.print_text(str_arg("console.print", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("print", &[TypeId::Object], |ctx, args| {
        let text = ctx.registry.render(&args[0]);
        ctx.console.print_text(&text)?;
        Ok(Obj::Null.alloc())
    });

    class.method("println", &[], |ctx, _| {
        ctx.console.println()?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Boolean], |ctx, args| {
        ctx.console
            .println_boolean(boolean_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Char], |ctx, args| {
        ctx.console
            .println_char(char_unit_to_char(char_arg("console.println", args, 0)?))?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Int], |ctx, args| {
        ctx.console
            .println_int(int_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Long], |ctx, args| {
        ctx.console
            .println_long(long_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Float], |ctx, args| {
        ctx.console
            .println_float(float_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Double], |ctx, args| {
        ctx.console
            .println_double(double_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Str], |ctx, args| {
        ctx.console
            .println_text(str_arg("console.println", args, 0)?)?;
        Ok(Obj::Null.alloc())
    });
    class.method("println", &[TypeId::Object], |ctx, args| {
        let text = ctx.registry.render(&args[0]);
        ctx.console.println_text(&text)?;
        Ok(Obj::Null.alloc())
    });

    class
}
