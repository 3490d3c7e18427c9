use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_buffer_captures_lines() {
    let handler = OutputHandler::buffer();
    handler.println("a");
    handler.println("");
    assert_eq!(handler.get_output(), "a\n\n");
}

#[test]
fn test_stdout_captures_nothing() {
    assert_eq!(OutputHandler::stdout().get_output(), "");
}

#[test]
fn test_default_is_stdout() {
    assert!(matches!(OutputHandler::default(), OutputHandler::Stdout));
}
