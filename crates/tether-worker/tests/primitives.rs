//! Inline-primitive round-trips: every virtual encoding through an
//! identity invocation and back out as canonical text.

mod harness;

use harness::{Frame, Script};

/// Send `obj.identity` one inline-encoded argument and render the result.
///
/// `words` is the wire form of the argument: the virtual marker followed by
/// its bit-pattern words.
fn identity_roundtrip(words: &[i32], expected: &str) {
    let mut script = Script::new()
        .get_class("obj")
        .get_method(0, "identity", &[-9])
        .invoke(1, 1);
    for &word in words {
        script = script.int(word);
    }
    let frames = script.to_string_of(2).shutdown().run();
    assert_eq!(
        frames,
        vec![
            Frame::Int(0),
            Frame::Int(1),
            Frame::Int(2),
            Frame::Str(expected.to_string()),
            Frame::Shutdown,
        ],
        "wire words {words:?}"
    );
}

#[test]
fn test_byte_wraps_to_low_eight_bits() {
    identity_roundtrip(&[-1, 0x41], "65");
    identity_roundtrip(&[-1, 0xff], "-1");
    identity_roundtrip(&[-1, 0x17f], "127");
}

#[test]
fn test_boolean_is_zero_or_nonzero() {
    identity_roundtrip(&[-2, 0], "false");
    identity_roundtrip(&[-2, 1], "true");
    identity_roundtrip(&[-2, 7], "true");
}

#[test]
fn test_short_takes_the_low_sixteen_bits() {
    identity_roundtrip(&[-3, 0x7fff], "32767");
    identity_roundtrip(&[-3, 0xffff], "-1");
}

#[test]
fn test_char_takes_the_low_sixteen_bits() {
    identity_roundtrip(&[-4, 0x41], "A");
    identity_roundtrip(&[-4, 0xe9], "\u{e9}");
}

#[test]
fn test_int_uses_all_thirty_two_bits() {
    identity_roundtrip(&[-5, 255], "255");
    identity_roundtrip(&[-5, -1], "-1");
    identity_roundtrip(&[-5, i32::MIN], "-2147483648");
}

#[test]
fn test_float_bits_are_preserved() {
    identity_roundtrip(&[-6, 0x3fc0_0000], "1.5");
    identity_roundtrip(&[-6, 0xbfc0_0000_u32 as i32], "-1.5");
    identity_roundtrip(&[-6, 0x7fc0_0000], "NaN");
}

#[test]
fn test_long_arrives_high_half_first() {
    identity_roundtrip(&[-7, 0, 5], "5");
    identity_roundtrip(&[-7, 1, 5], "4294967301");
    identity_roundtrip(&[-7, -1, -1], "-1");
    // A low half with its top bit set must not leak into the high half.
    identity_roundtrip(&[-7, 0, 0x8000_0000_u32 as i32], "2147483648");
}

#[test]
fn test_double_bits_are_preserved() {
    identity_roundtrip(&[-8, 0x3ff8_0000, 0], "1.5");
    identity_roundtrip(&[-8, 0x8000_0000_u32 as i32, 0], "-0");
    identity_roundtrip(&[-8, 0x7ff8_0000, 0], "NaN");
}

#[test]
fn test_identity_of_a_stored_object_keeps_its_handle() {
    let frames = Script::new()
        .create_string("anchor")
        .get_class("obj")
        .get_method(1, "identity", &[-9])
        .invoke(2, 1)
        .int(0)
        .shutdown()
        .run();
    assert_eq!(
        frames,
        vec![
            Frame::Int(0),
            Frame::Int(1),
            Frame::Int(2),
            Frame::Int(0),
            Frame::Shutdown,
        ]
    );
}

#[test]
fn test_builtin_class_argument_resolves_to_the_interned_class() {
    // Passing virtual -19 ("class" in value position) stringifies like the
    // class object itself.
    let frames = Script::new()
        .get_class("obj")
        .get_method(0, "identity", &[-9])
        .invoke(1, 1)
        .int(-19)
        .to_string_of(2)
        .shutdown()
        .run();
    assert_eq!(frames[3], Frame::Str("class class".to_string()));
}
