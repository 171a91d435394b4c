//! The `obj` class: reference-level helpers.

use std::rc::Rc;

use crate::class::{ClassDef, TypeId};
use crate::error::RuntimeError;
use crate::object::Obj;

pub fn class() -> ClassDef {
    let mut class = ClassDef::new("obj");

    // Returns its argument by reference, so a stored object round-trips to
    // the same handle while an inline primitive gets admitted fresh.
    class.method("identity", &[TypeId::Object], |_, args| {
        Ok(args[0].clone())
    });

    class.method("same", &[TypeId::Object, TypeId::Object], |_, args| {
        Ok(Obj::Boolean(Rc::ptr_eq(&args[0], &args[1])).alloc())
    });

    class.method("class_of", &[TypeId::Object], |ctx, args| {
        let ty = args[0].type_id().ok_or_else(|| {
            RuntimeError::InvalidArgument("obj.class_of: null has no class".to_string())
        })?;
        Ok(ctx.registry.class_obj(ty.class_id()))
    });

    class
}
