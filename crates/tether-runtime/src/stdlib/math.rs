//! The `math` class: numeric helpers.

use crate::class::{ClassDef, TypeId};
use crate::object::Obj;
use crate::stdlib::{double_arg, int_arg, long_arg};

pub fn class() -> ClassDef {
    let mut class = ClassDef::new("math");

    // abs(int.MIN) stays int.MIN, matching two's-complement convention.
    class.method("abs", &[TypeId::Int], |_, args| {
        Ok(Obj::Int(int_arg("math.abs", args, 0)?.wrapping_abs()).alloc())
    });
    class.method("abs", &[TypeId::Long], |_, args| {
        Ok(Obj::Long(long_arg("math.abs", args, 0)?.wrapping_abs()).alloc())
    });
    class.method("abs", &[TypeId::Double], |_, args| {
        Ok(Obj::Double(double_arg("math.abs", args, 0)?.abs()).alloc())
    });

    class.method("min", &[TypeId::Int, TypeId::Int], |_, args| {
        let a = int_arg("math.min", args, 0)?;
        let b = int_arg("math.min", args, 1)?;
        Ok(Obj::Int(a.min(b)).alloc())
    });
    class.method("max", &[TypeId::Int, TypeId::Int], |_, args| {
        let a = int_arg("math.max", args, 0)?;
        let b = int_arg("math.max", args, 1)?;
        Ok(Obj::Int(a.max(b)).alloc())
    });

    // Domain errors follow IEEE-754: sqrt of a negative is NaN, not a fault.
    class.method("sqrt", &[TypeId::Double], |_, args| {
        Ok(Obj::Double(double_arg("math.sqrt", args, 0)?.sqrt()).alloc())
    });
    class.method("pow", &[TypeId::Double, TypeId::Double], |_, args| {
        let base = double_arg("math.pow", args, 0)?;
        let exp = double_arg("math.pow", args, 1)?;
        Ok(Obj::Double(base.powf(exp)).alloc())
    });
    class.method("floor", &[TypeId::Double], |_, args| {
        Ok(Obj::Double(double_arg("math.floor", args, 0)?.floor()).alloc())
    });
    class.method("ceil", &[TypeId::Double], |_, args| {
        Ok(Obj::Double(double_arg("math.ceil", args, 0)?.ceil()).alloc())
    });

    class
}
