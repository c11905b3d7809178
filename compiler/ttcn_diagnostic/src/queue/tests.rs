use super::*;
use pretty_assertions::assert_eq;

fn syntax_error(msg: &str, start: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(msg)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn flush_sorts_by_offset() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(syntax_error("third", 30), 3));
    assert!(queue.add(syntax_error("first", 5), 1));
    assert!(queue.add(syntax_error("second", 12), 2));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert!(!queue.has_errors());
}

#[test]
fn default_config_keeps_everything() {
    let mut queue = DiagnosticQueue::new();
    for i in 0..25 {
        assert!(queue.add(syntax_error("e", i), 1));
    }
    assert_eq!(queue.error_count(), 25);
    assert_eq!(queue.flush().len(), 25);
}

#[test]
fn compact_dedups_same_line_syntax_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::compact());
    assert!(queue.add(syntax_error("a", 1), 1));
    assert!(!queue.add(syntax_error("b", 3), 1));
    assert!(queue.add(syntax_error("c", 20), 2));

    let lexer = Diagnostic::error(ErrorCode::E0002)
        .with_message("invalid character")
        .with_label(Span::new(21, 22), "here");
    assert!(queue.add(lexer, 2));
    assert_eq!(queue.error_count(), 3);
}

#[test]
fn limit_adds_single_truncation_note() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(syntax_error("a", 1), 1));
    assert!(queue.add(syntax_error("b", 2), 2));
    assert!(queue.limit_reached());
    assert!(!queue.add(syntax_error("c", 3), 3));
    assert!(!queue.add(syntax_error("d", 4), 4));

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 3);
    assert_eq!(flushed[2].code, ErrorCode::E9002);
}

#[test]
fn peek_does_not_drain() {
    let mut queue = DiagnosticQueue::new();
    queue.add(syntax_error("x", 1), 1);
    assert_eq!(queue.peek().count(), 1);
    assert_eq!(queue.flush().len(), 1);
    assert_eq!(queue.peek().count(), 0);
}
