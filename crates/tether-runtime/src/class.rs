//! Class and method metadata.
//!
//! `TypeId` enumerates the built-in types in their canonical order; the
//! registry guarantees the first eleven registered classes are exactly these
//! types, so a `TypeId`'s ordinal doubles as its `ClassId`. Method parameter
//! lists are `TypeId` sequences and overload resolution is exact on them.

use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::{Obj, ObjRef};
use crate::registry::NativeCtx;

/// Index into the registry's class list.
pub type ClassId = usize;

/// The built-in types, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Byte,
    Boolean,
    Short,
    Char,
    Int,
    Float,
    Long,
    Double,
    Object,
    Str,
    Class,
}

impl TypeId {
    pub const ALL: [TypeId; 11] = [
        TypeId::Byte,
        TypeId::Boolean,
        TypeId::Short,
        TypeId::Char,
        TypeId::Int,
        TypeId::Float,
        TypeId::Long,
        TypeId::Double,
        TypeId::Object,
        TypeId::Str,
        TypeId::Class,
    ];

    /// Canonical class name of the type.
    pub fn name(self) -> &'static str {
        match self {
            TypeId::Byte => "byte",
            TypeId::Boolean => "boolean",
            TypeId::Short => "short",
            TypeId::Char => "char",
            TypeId::Int => "int",
            TypeId::Float => "float",
            TypeId::Long => "long",
            TypeId::Double => "double",
            TypeId::Object => "object",
            TypeId::Str => "string",
            TypeId::Class => "class",
        }
    }

    /// The `ClassId` the registry assigns this type at startup.
    pub fn class_id(self) -> ClassId {
        self as ClassId
    }

    /// Whether a value is acceptable for a parameter of this type.
    ///
    /// Primitives accept exactly themselves; the reference types accept
    /// null; `object` accepts everything.
    pub fn accepts(self, value: &Obj) -> bool {
        match self {
            TypeId::Object => true,
            TypeId::Str => matches!(value, Obj::Str(_) | Obj::Null),
            TypeId::Class => matches!(value, Obj::Class(_) | Obj::Null),
            TypeId::Byte => matches!(value, Obj::Byte(_)),
            TypeId::Boolean => matches!(value, Obj::Boolean(_)),
            TypeId::Short => matches!(value, Obj::Short(_)),
            TypeId::Char => matches!(value, Obj::Char(_)),
            TypeId::Int => matches!(value, Obj::Int(_)),
            TypeId::Float => matches!(value, Obj::Float(_)),
            TypeId::Long => matches!(value, Obj::Long(_)),
            TypeId::Double => matches!(value, Obj::Double(_)),
        }
    }
}

/// A native method body.
pub type NativeFn = Rc<dyn Fn(&mut NativeCtx, &[ObjRef]) -> Result<ObjRef, RuntimeError>>;

/// One method overload: name, exact parameter types, and body.
pub struct MethodDef {
    pub name: String,
    pub params: Vec<TypeId>,
    pub func: NativeFn,
}

impl MethodDef {
    /// Render the parameter list for diagnostics, e.g. `"int, int"`.
    pub fn params_display(&self) -> String {
        params_display(&self.params)
    }
}

impl std::fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}

/// Render a parameter type list for diagnostics and method rendering.
pub fn params_display(params: &[TypeId]) -> String {
    params
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A registered class: a name and its static method table.
#[derive(Debug)]
pub struct ClassDef {
    pub name: String,
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    /// Create a class with an empty method table.
    pub fn new(name: &str) -> Self {
        ClassDef {
            name: name.to_string(),
            methods: Vec::new(),
        }
    }

    /// Register a method overload.
    pub fn method(
        &mut self,
        name: &str,
        params: &[TypeId],
        func: impl Fn(&mut NativeCtx, &[ObjRef]) -> Result<ObjRef, RuntimeError> + 'static,
    ) -> &mut Self {
        self.methods.push(MethodDef {
            name: name.to_string(),
            params: params.to_vec(),
            func: Rc::new(func),
        });
        self
    }

    /// Find the overload with this exact name and parameter type list.
    pub fn find_method(&self, name: &str, params: &[TypeId]) -> Option<usize> {
        self.methods
            .iter()
            .position(|m| m.name == name && m.params == params)
    }
}
