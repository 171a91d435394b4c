//! The `fmt` class: string formatting and inspection.

use crate::class::{ClassDef, TypeId};
use crate::error::RuntimeError;
use crate::object::Obj;
use crate::stdlib::{int_arg, long_arg, str_arg};

pub fn class() -> ClassDef {
    let mut class = ClassDef::new("fmt");

    // Radix renderings are unsigned, so hex(-1) is "ffffffff".
    class.method("hex", &[TypeId::Int], |_, args| {
        Ok(Obj::Str(format!("{:x}", int_arg("fmt.hex", args, 0)? as u32)).alloc())
    });
    class.method("hex", &[TypeId::Long], |_, args| {
        Ok(Obj::Str(format!("{:x}", long_arg("fmt.hex", args, 0)? as u64)).alloc())
    });
    class.method("bin", &[TypeId::Int], |_, args| {
        Ok(Obj::Str(format!("{:b}", int_arg("fmt.bin", args, 0)? as u32)).alloc())
    });

    class.method("parse_int", &[TypeId::Str], |_, args| {
        let text = str_arg("fmt.parse_int", args, 0)?;
        let value = text.parse::<i32>().map_err(|_| {
            RuntimeError::InvalidArgument(format!("fmt.parse_int: not an int literal: {text:?}"))
        })?;
        Ok(Obj::Int(value).alloc())
    });

    class.method("concat", &[TypeId::Str, TypeId::Str], |_, args| {
        let left = str_arg("fmt.concat", args, 0)?;
        let right = str_arg("fmt.concat", args, 1)?;
        Ok(Obj::Str(format!("{left}{right}")).alloc())
    });
    class.method("upper", &[TypeId::Str], |_, args| {
        Ok(Obj::Str(str_arg("fmt.upper", args, 0)?.to_uppercase()).alloc())
    });
    class.method("lower", &[TypeId::Str], |_, args| {
        Ok(Obj::Str(str_arg("fmt.lower", args, 0)?.to_lowercase()).alloc())
    });
    class.method("trim", &[TypeId::Str], |_, args| {
        Ok(Obj::Str(str_arg("fmt.trim", args, 0)?.trim().to_string()).alloc())
    });

    class.method("len", &[TypeId::Str], |_, args| {
        let text = str_arg("fmt.len", args, 0)?;
        Ok(Obj::Int(text.chars().count() as i32).alloc())
    });

    class.method("char_at", &[TypeId::Str, TypeId::Int], |_, args| {
        let text = str_arg("fmt.char_at", args, 0)?;
        let index = int_arg("fmt.char_at", args, 1)?;
        let c = usize::try_from(index)
            .ok()
            .and_then(|i| text.chars().nth(i))
            .ok_or_else(|| {
                RuntimeError::InvalidArgument(format!(
                    "fmt.char_at: index {index} out of range for string of length {}",
                    text.chars().count()
                ))
            })?;
        let unit = u16::try_from(c as u32).map_err(|_| {
            RuntimeError::InvalidArgument(format!(
                "fmt.char_at: {c:?} does not fit in a single char unit"
            ))
        })?;
        Ok(Obj::Char(unit).alloc())
    });

    class.method("repeat", &[TypeId::Str, TypeId::Int], |_, args| {
        let text = str_arg("fmt.repeat", args, 0)?;
        let count = int_arg("fmt.repeat", args, 1)?;
        let count = usize::try_from(count).map_err(|_| {
            RuntimeError::InvalidArgument(format!("fmt.repeat: negative count {count}"))
        })?;
        Ok(Obj::Str(text.repeat(count)).alloc())
    });

    class
}

#[cfg(test)]
mod tests {
    use crate::class::TypeId;
    use crate::object::Obj;
    use crate::output::capture::CaptureSink;
    use crate::output::Console;
    use crate::registry::{NativeCtx, Registry};

    fn call(name: &str, params: &[TypeId], args: &[Obj]) -> Result<Obj, String> {
        let registry = Registry::with_stdlib();
        let fmt = registry.class_by_name("fmt").unwrap();
        let method = registry.resolve_method(fmt, name, params).unwrap();
        let mut console = Console::new(CaptureSink::paired().0);
        let mut ctx = NativeCtx {
            registry: &registry,
            console: &mut console,
        };
        let args: Vec<_> = args.iter().cloned().map(Obj::alloc).collect();
        registry
            .invoke(method.as_method().unwrap(), &mut ctx, &args)
            .map(|r| (*r).clone())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn test_hex_is_unsigned() {
        assert_eq!(
            call("hex", &[TypeId::Int], &[Obj::Int(255)]).unwrap(),
            Obj::Str("ff".into())
        );
        assert_eq!(
            call("hex", &[TypeId::Int], &[Obj::Int(-1)]).unwrap(),
            Obj::Str("ffffffff".into())
        );
        assert_eq!(
            call("hex", &[TypeId::Long], &[Obj::Long(-1)]).unwrap(),
            Obj::Str("ffffffffffffffff".into())
        );
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(
            call("parse_int", &[TypeId::Str], &[Obj::Str("-42".into())]).unwrap(),
            Obj::Int(-42)
        );
        let err = call("parse_int", &[TypeId::Str], &[Obj::Str("4x".into())]).unwrap_err();
        assert!(err.contains("not an int literal"));
    }

    #[test]
    fn test_string_helpers() {
        assert_eq!(
            call(
                "concat",
                &[TypeId::Str, TypeId::Str],
                &[Obj::Str("ab".into()), Obj::Str("cd".into())]
            )
            .unwrap(),
            Obj::Str("abcd".into())
        );
        assert_eq!(
            call("upper", &[TypeId::Str], &[Obj::Str("hi".into())]).unwrap(),
            Obj::Str("HI".into())
        );
        assert_eq!(
            call("trim", &[TypeId::Str], &[Obj::Str("  x ".into())]).unwrap(),
            Obj::Str("x".into())
        );
        assert_eq!(
            call("len", &[TypeId::Str], &[Obj::Str("caf\u{e9}".into())]).unwrap(),
            Obj::Int(4)
        );
    }

    #[test]
    fn test_char_at_bounds() {
        assert_eq!(
            call(
                "char_at",
                &[TypeId::Str, TypeId::Int],
                &[Obj::Str("abc".into()), Obj::Int(1)]
            )
            .unwrap(),
            Obj::Char(b'b' as u16)
        );
        let err = call(
            "char_at",
            &[TypeId::Str, TypeId::Int],
            &[Obj::Str("abc".into()), Obj::Int(3)],
        )
        .unwrap_err();
        assert!(err.contains("out of range"));
        let err = call(
            "char_at",
            &[TypeId::Str, TypeId::Int],
            &[Obj::Str("abc".into()), Obj::Int(-1)],
        )
        .unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_repeat_rejects_negative_counts() {
        assert_eq!(
            call(
                "repeat",
                &[TypeId::Str, TypeId::Int],
                &[Obj::Str("ab".into()), Obj::Int(3)]
            )
            .unwrap(),
            Obj::Str("ababab".into())
        );
        let err = call(
            "repeat",
            &[TypeId::Str, TypeId::Int],
            &[Obj::Str("ab".into()), Obj::Int(-2)],
        )
        .unwrap_err();
        assert!(err.contains("negative count"));
    }
}
