//! Macros write through the redirected debug stream.
//!
//! The debug stream is process-wide, so everything that redirects it lives
//! in this single test.

use calltally_debug::{
    checkpoint, hexdump, location, message, reset_stream, set_stream, show, show_container,
    show_container_flat, time_it, SharedBuffer,
};

fn nested_location() -> String {
    location!()
}

#[test]
fn macros_write_to_redirected_stream() {
    let buffer = SharedBuffer::new();
    set_stream(buffer.clone());

    let line = line!() + 1;
    checkpoint!();
    let out = buffer.take();
    assert_eq!(
        out,
        format!("{}:{}: redirect::macros_write_to_redirected_stream\n", file!(), line)
    );

    message!("Hello {}!", "world");
    assert!(buffer.take().ends_with(":\n\tHello world!\n"));

    let i = 3;
    let foo = String::from("Bar baz!");
    let x = 1.5_f64;
    show!(i, foo, x, i * 2);
    assert!(buffer
        .take()
        .ends_with(":\n\ti = 3\n\tfoo = \"Bar baz!\"\n\tx = 1.5\n\ti * 2 = 6\n"));

    let values: Vec<i32> = (100..103).collect();
    show_container!(values);
    assert!(buffer
        .take()
        .ends_with(":\n\tvalues = [\n\t     0: 100\n\t     1: 101\n\t     2: 102\n\t]\n"));

    show_container_flat!(values);
    assert!(buffer.take().ends_with(":\n\tvalues = [100, 101, 102]\n"));

    let bytes = *b"ABCD";
    hexdump!(bytes);
    let out = buffer.take();
    assert!(out.contains(":\nbytes:\n0  41 42 43 44"));
    assert!(out.ends_with(&format!("  ABCD{}\n", " ".repeat(12))));

    let raw = vec![0x64_u8, 0x00, 0x01];
    hexdump!(raw, 2);
    let out = buffer.take();
    assert!(out.contains("\n0  64 00   "), "{out}");

    hexdump!(raw, 10);
    let out = buffer.take();
    assert!(out.contains("\n0  64 00 01 "), "{out}");

    {
        time_it!();
    }
    let out = buffer.take();
    assert!(out.contains(":\n\telapsed time = "));
    assert!(out.ends_with('\n'));

    assert_eq!(
        nested_location(),
        format!("{}:{}: redirect::nested_location", file!(), 12)
    );

    reset_stream();
    checkpoint!();
    assert_eq!(buffer.contents(), "", "output goes back to stderr");
}
