use jsdoc_rs::{
    Action, ActionOutcome, CommentSynthesizer, CommentVariant, DocStyle, LineBuffer, Point,
    TextSurface,
};

fn buffer_at(text: &str, row: usize, column: usize) -> LineBuffer {
    LineBuffer::from_text(text)
        .with_cursor(Point::new(row, column))
        .expect("cursor inside buffer")
}

#[test]
fn test_function_comment_above_indented_function() {
    let source = "class Greeter {\n\n    greet(name) {\n        return name;\n    }\n}";
    let mut buffer = buffer_at(source, 1, 0);

    let outcome = Action::WriteComment.dispatch(&mut buffer, &CommentSynthesizer::default());
    let placement = match outcome {
        ActionOutcome::Written(placement) => placement,
        other => panic!("expected a written comment, got {:?}", other),
    };
    assert_eq!(placement.variant, CommentVariant::Function);
    assert_eq!(placement.indentation, "    ");

    assert_eq!(
        &buffer.lines()[2..8],
        &[
            "    /**",
            "     * greet - description",
            "     *",
            "     * @param  {type} name description",
            "     * @return {type} description",
            "     */",
        ]
    );
    assert_eq!(buffer.lines()[8], "    greet(name) {");
    assert_eq!(buffer.selected_text(), "description");
    assert_eq!(buffer.selection().map(|(start, _)| start.row), Some(3));
}

#[test]
fn test_typing_replaces_selected_placeholder() {
    let mut buffer = buffer_at("\nfunction greet(name) {\n}", 0, 0);
    Action::WriteComment.dispatch(&mut buffer, &CommentSynthesizer::default());

    buffer.insert_text("Say hello");
    assert_eq!(buffer.lines()[2], " * greet - Say hello");
}

#[test]
fn test_indentation_follows_next_line_over_anchor() {
    let mut buffer = buffer_at("\n    total += x;", 0, 0);
    Action::WriteComment.dispatch(&mut buffer, &CommentSynthesizer::default());

    for line in &buffer.lines()[1..4] {
        assert!(line.starts_with("    "), "line {:?} is not indented", line);
    }
}

#[test]
fn test_newline_inside_block_comment_continues_gutter() {
    let mut buffer = buffer_at("/**\n   * some comment text", 1, 22);
    buffer.insert_newline();
    Action::ContinueComment.dispatch(&mut buffer, &CommentSynthesizer::default());

    assert_eq!(buffer.lines()[2], "   * ");
    buffer.insert_text("more");
    assert_eq!(buffer.lines()[2], "   * more");
}

#[test]
fn test_continuation_uses_style_prefixes() {
    let style = DocStyle {
        line_continuation: "//! ".to_string(),
        ..DocStyle::default()
    };
    let mut buffer = buffer_at("//! crate docs", 0, 14);
    buffer.insert_newline();
    Action::ContinueComment.dispatch(&mut buffer, &CommentSynthesizer::new(style));

    assert_eq!(buffer.text(), "//! crate docs\n//! ");
}

#[test]
fn test_write_then_continue_round() {
    let mut buffer = buffer_at("\n", 0, 0);
    let synthesizer = CommentSynthesizer::default();

    let outcome = Action::WriteComment.dispatch(&mut buffer, &synthesizer);
    assert!(matches!(
        outcome,
        ActionOutcome::Written(ref p) if p.variant == CommentVariant::Empty
    ));
    assert_eq!(buffer.cursor_position(), Point::new(1, 3));

    // Enter at the end of `/**` continues the block
    buffer.insert_newline();
    let outcome = Action::ContinueComment.dispatch(&mut buffer, &synthesizer);
    assert!(matches!(outcome, ActionOutcome::Continued(_)));
    assert_eq!(buffer.lines(), &["", "/**", " * ", " */", ""]);
}
