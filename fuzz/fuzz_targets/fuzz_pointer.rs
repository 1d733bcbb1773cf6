#![no_main]
use arbitrary::Arbitrary;
use jsonpointer::{Pointer, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pointer: &'a str,
    document: &'a [u8],
    replace_with_null: bool,
}

fuzz_target!(|input: Input| {
    let Ok(pointer) = Pointer::parse(input.pointer) else {
        return;
    };

    // Printing a pointer and re-parsing it must land on the same pointer.
    let reparsed = Pointer::parse(&pointer.to_string()).expect("display output must parse");
    assert_eq!(reparsed, pointer);

    let Ok(mut document) = serde_json::from_slice::<Value>(input.document) else {
        return;
    };
    let snapshot = document.clone();
    let resolved = pointer.get(&document).cloned();

    if input.replace_with_null {
        match pointer.set(&mut document, Value::Null) {
            // Writing at the root is defined as a no-op.
            Ok(_) if pointer.is_root() => assert_eq!(document, snapshot),
            Ok(written) => {
                assert_eq!(*written, Value::Null);
                assert_eq!(pointer.get(&document), Ok(&Value::Null));
            }
            Err(_) => assert_eq!(document, snapshot),
        }
    } else {
        match pointer.delete(&mut document) {
            // A removed value is exactly what get resolved beforehand.
            Ok(removed) => assert_eq!(resolved.as_ref(), Ok(&removed)),
            Err(_) => assert_eq!(document, snapshot),
        }
    }
});
