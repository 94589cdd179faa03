use super::{ConsoleDisplay, DisplaySink, InlineGuard};
use std::sync::Arc;

fn output(display: ConsoleDisplay<Vec<u8>>) -> String {
    String::from_utf8(display.into_inner()).unwrap()
}

#[test]
fn test_plain_writes_append() {
    let display = ConsoleDisplay::new(Vec::new());
    display.write("Success!");
    display.write_line(" done");
    display.write_line("next");

    assert_eq!(output(display), "Success! done\nnext\n");
}

#[test]
fn test_inline_writes_overwrite_previous_message() {
    let display = ConsoleDisplay::new(Vec::new());
    display.set_inline(true);
    display.write("T - 10");
    display.write("T - 9");

    assert_eq!(output(display), "T - 10\r      \rT - 9");
}

#[test]
fn test_leaving_inline_terminates_pending_line() {
    let display = ConsoleDisplay::new(Vec::new());
    display.set_inline(true);
    display.write("T + 4: Liftoff");
    display.set_inline(false);
    display.write_line("Program completed, terminating...");

    assert_eq!(output(display), "T + 4: Liftoff\nProgram completed, terminating...\n");
}

#[test]
fn test_inline_write_line_clears_before_writing() {
    let display = ConsoleDisplay::new(Vec::new());
    display.set_inline(true);
    display.write("abc");
    display.write_line("Launch!");
    display.write("T + 1");

    assert_eq!(output(display), "abc\r   \rLaunch!\nT + 1");
}

#[test]
fn test_inline_guard_restores_on_drop() {
    let display = Arc::new(ConsoleDisplay::new(Vec::new()));
    {
        let _guard = InlineGuard::new(Arc::clone(&display) as Arc<dyn DisplaySink>);
        display.write("T - 1");
    }
    display.write(" after");

    let display = Arc::try_unwrap(display).ok().unwrap();
    assert_eq!(output(display), "T - 1\n after");
}
