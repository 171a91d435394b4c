//! Class registry: lookup, method resolution, and native invocation.
//!
//! Classes are registered once at startup and never change afterwards, so
//! the registry hands out interned class and method objects: resolving the
//! same class or method twice yields the same reference, which is what lets
//! the worker's identity-keyed object table alias repeated resolutions to a
//! single handle.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::class::{params_display, ClassDef, ClassId, TypeId};
use crate::error::RuntimeError;
use crate::object::{char_unit_to_char, MethodRef, Obj, ObjRef};
use crate::output::Console;

/// Context handed to native method bodies.
///
/// Carries the facilities a body may touch: the registry (for rendering and
/// class objects) and the console (the intercepted output primitive).
pub struct NativeCtx<'a> {
    pub registry: &'a Registry,
    pub console: &'a mut Console,
}

/// The runtime's class registry.
pub struct Registry {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<String, ClassId>,
    class_objs: Vec<ObjRef>,
    method_objs: RefCell<FxHashMap<MethodRef, ObjRef>>,
}

impl Registry {
    /// An empty registry. Most callers want [`Registry::with_stdlib`].
    pub fn new() -> Self {
        Registry {
            classes: Vec::new(),
            by_name: FxHashMap::default(),
            class_objs: Vec::new(),
            method_objs: RefCell::new(FxHashMap::default()),
        }
    }

    /// A registry holding the built-in types and the standard classes.
    ///
    /// The built-in types are registered first, in canonical order, so
    /// their `ClassId`s equal their `TypeId` ordinals.
    pub fn with_stdlib() -> Self {
        let mut registry = Registry::new();
        for ty in TypeId::ALL {
            let id = registry.register_class(ClassDef::new(ty.name()));
            debug_assert_eq!(id, ty.class_id());
        }
        crate::stdlib::register(&mut registry);
        registry
    }

    /// Register a class, interning its class object.
    pub fn register_class(&mut self, def: ClassDef) -> ClassId {
        let id = self.classes.len();
        self.by_name.insert(def.name.clone(), id);
        self.classes.push(def);
        self.class_objs.push(Obj::Class(id).alloc());
        id
    }

    /// Look a class up by name.
    pub fn class_by_name(&self, name: &str) -> Result<ClassId, RuntimeError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::ClassNotFound(name.to_string()))
    }

    /// The interned object for a class.
    pub fn class_obj(&self, id: ClassId) -> ObjRef {
        self.class_objs[id].clone()
    }

    pub fn class_name(&self, id: ClassId) -> &str {
        &self.classes[id].name
    }

    /// The built-in type a class denotes, if it denotes one.
    ///
    /// Only built-in type classes may appear in method signatures.
    pub fn type_of_class(&self, id: ClassId) -> Option<TypeId> {
        TypeId::ALL.get(id).copied()
    }

    /// Resolve a method by name and exact parameter types.
    ///
    /// The returned object is interned: resolving the same method twice
    /// yields the same reference.
    pub fn resolve_method(
        &self,
        class: ClassId,
        name: &str,
        params: &[TypeId],
    ) -> Result<ObjRef, RuntimeError> {
        let def = &self.classes[class];
        let index = def
            .find_method(name, params)
            .ok_or_else(|| RuntimeError::MethodNotFound {
                class: def.name.clone(),
                name: name.to_string(),
                params: params_display(params),
            })?;
        let mref = MethodRef { class, index };
        let mut interned = self.method_objs.borrow_mut();
        Ok(interned
            .entry(mref)
            .or_insert_with(|| Obj::Method(mref).alloc())
            .clone())
    }

    /// Invoke a resolved method after checking arity and argument types.
    pub fn invoke(
        &self,
        mref: MethodRef,
        ctx: &mut NativeCtx,
        args: &[ObjRef],
    ) -> Result<ObjRef, RuntimeError> {
        let def = &self.classes[mref.class].methods[mref.index];
        if args.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch {
                method: self.method_display(mref),
                expected: def.params.len(),
                actual: args.len(),
            });
        }
        for (index, (param, arg)) in def.params.iter().zip(args).enumerate() {
            if !param.accepts(arg) {
                return Err(RuntimeError::ArgumentType {
                    method: self.method_display(mref),
                    index,
                    expected: param.name(),
                    actual: arg.kind().to_string(),
                });
            }
        }
        let func = def.func.clone();
        func(ctx, args)
    }

    /// `class.name` form for diagnostics.
    fn method_display(&self, mref: MethodRef) -> String {
        let class = &self.classes[mref.class];
        format!("{}.{}", class.name, class.methods[mref.index].name)
    }

    /// Canonical text rendering of a value.
    pub fn render(&self, obj: &Obj) -> String {
        match obj {
            Obj::Null => "null".to_string(),
            Obj::Byte(v) => v.to_string(),
            Obj::Boolean(v) => v.to_string(),
            Obj::Short(v) => v.to_string(),
            Obj::Char(v) => char_unit_to_char(*v).to_string(),
            Obj::Int(v) => v.to_string(),
            Obj::Float(v) => v.to_string(),
            Obj::Long(v) => v.to_string(),
            Obj::Double(v) => v.to_string(),
            Obj::Str(s) => s.clone(),
            Obj::Class(id) => format!("class {}", self.class_name(*id)),
            Obj::Method(mref) => {
                let class = &self.classes[mref.class];
                let def = &class.methods[mref.index];
                format!(
                    "fn {}.{}({})",
                    class.name,
                    def.name,
                    def.params_display()
                )
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::with_stdlib()
    }
}
