//! The `time` class: wall-clock access.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::class::{ClassDef, TypeId};
use crate::object::Obj;

fn since_epoch() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

pub fn class() -> ClassDef {
    let mut class = ClassDef::new("time");
    let no_params: &[TypeId] = &[];

    class.method("millis", no_params, |_, _| {
        Ok(Obj::Long(since_epoch().as_millis() as i64).alloc())
    });
    class.method("nanos", no_params, |_, _| {
        Ok(Obj::Long(since_epoch().as_nanos() as i64).alloc())
    });

    class
}

#[cfg(test)]
mod tests {
    use crate::object::Obj;
    use crate::output::capture::CaptureSink;
    use crate::output::Console;
    use crate::registry::{NativeCtx, Registry};

    #[test]
    fn test_millis_is_a_positive_long() {
        let registry = Registry::with_stdlib();
        let time = registry.class_by_name("time").unwrap();
        let method = registry.resolve_method(time, "millis", &[]).unwrap();
        let mut console = Console::new(CaptureSink::paired().0);
        let mut ctx = NativeCtx {
            registry: &registry,
            console: &mut console,
        };
        let result = registry
            .invoke(method.as_method().unwrap(), &mut ctx, &[])
            .unwrap();
        match *result {
            Obj::Long(ms) => assert!(ms > 0),
            ref other => panic!("expected long, got {other:?}"),
        }
    }
}
