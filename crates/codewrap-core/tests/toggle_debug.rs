use codewrap_core::{
    BraceKind, LineRange, PendingEdit, RopeBuffer, ToggleEngine, ToggleError, ToggleOptions,
    toggle_debug,
};
use pretty_assertions::assert_eq;

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_wrap_then_unwrap_restores_buffer() {
    let original = lines(&["let a = 1", "    print(a)", "let b = 2"]);
    let mut buffer = original.clone();

    let applied = toggle_debug(&mut buffer, &[LineRange::new(0, 1)]).unwrap();
    assert_eq!(
        buffer,
        lines(&["#if DEBUG", "let a = 1", "    print(a)", "#endif", "let b = 2"])
    );

    // The engine reports where the selection moved; toggling that range unwraps.
    assert_eq!(applied.selections, vec![LineRange::new(1, 2)]);
    toggle_debug(&mut buffer, &applied.selections).unwrap();
    assert_eq!(buffer, original);
}

#[test]
fn test_hand_written_wrapper_is_recognized() {
    let mut buffer = lines(&["func f() {", "    #if DEBUG", "    log()", "        #endif", "}"]);

    let applied = toggle_debug(&mut buffer, &[LineRange::single(2)]).unwrap();

    assert_eq!(applied.unwrapped, 1);
    assert_eq!(buffer, lines(&["func f() {", "    log()", "}"]));
}

#[test]
fn test_selection_containing_directive_fails_without_mutation() {
    for directive in ["#if DEBUG", "#elseif", "  #else", "#endif  "] {
        let original = lines(&["a", directive, "b"]);
        let mut buffer = original.clone();

        let err = toggle_debug(&mut buffer, &[LineRange::new(0, 2)]).unwrap_err();

        assert_eq!(err, ToggleError::ContainsDirective { line: 1 });
        assert_eq!(buffer, original);
    }
}

#[test]
fn test_out_of_bounds_selection() {
    let mut buffer = lines(&["a", "b"]);

    let err = toggle_debug(&mut buffer, &[LineRange::new(1, 2)]).unwrap_err();
    assert_eq!(
        err,
        ToggleError::OutOfBounds {
            range: LineRange::new(1, 2),
            line_count: 2,
        }
    );

    let err = toggle_debug(&mut buffer, &[LineRange::single(5)]).unwrap_err();
    assert!(matches!(err, ToggleError::OutOfBounds { .. }));
    assert_eq!(buffer, lines(&["a", "b"]));
}

#[test]
fn test_blank_selection_only_fails_when_wrapping() {
    let mut buffer = lines(&["x", "", "   ", "y"]);
    let err = toggle_debug(&mut buffer, &[LineRange::new(1, 2)]).unwrap_err();
    assert_eq!(
        err,
        ToggleError::EmptySelection {
            range: LineRange::new(1, 2),
        }
    );

    let mut buffer = lines(&["#if DEBUG", "", "   ", "#endif"]);
    toggle_debug(&mut buffer, &[LineRange::new(1, 2)]).unwrap();
    assert_eq!(buffer, lines(&["", "   "]));
}

#[test]
fn test_first_invalid_selection_aborts_batch() {
    let original = lines(&["a", "b", "#else", "c"]);
    let mut buffer = original.clone();

    // The first selection is fine on its own; the batch still fails as a whole.
    let err = toggle_debug(
        &mut buffer,
        &[LineRange::single(0), LineRange::single(2), LineRange::single(9)],
    )
    .unwrap_err();

    assert_eq!(err, ToggleError::ContainsDirective { line: 2 });
    assert_eq!(buffer, original);
}

#[test]
fn test_brace_guard() {
    let original = lines(&["let items = [", "    1,", "]"]);

    let mut buffer = original.clone();
    toggle_debug(&mut buffer, &[LineRange::new(0, 2)]).unwrap();
    assert_eq!(buffer.len(), 5);

    let strict = ToggleEngine::default().with_options(ToggleOptions::strict());
    let mut buffer = original.clone();
    let err = strict
        .toggle(&mut buffer, &[LineRange::new(0, 2)])
        .unwrap_err();
    assert_eq!(
        err,
        ToggleError::ContainsUnbalancedBrace {
            line: 0,
            kind: BraceKind::Array,
        }
    );
    assert_eq!(err.to_string(), "Selection contains array braces at line 0.");
    assert_eq!(buffer, original);

    // A line that merely contains a brace is fine.
    let mut buffer = lines(&["let s = \"{\" + x"]);
    strict.toggle(&mut buffer, &[LineRange::single(0)]).unwrap();
}

#[test]
fn test_plan_does_not_touch_buffer() {
    let engine = ToggleEngine::default();
    let buffer = lines(&["a", "b"]);

    let plan = engine.plan(&buffer, &[LineRange::single(1)]).unwrap();

    assert_eq!(buffer, lines(&["a", "b"]));
    assert_eq!(
        plan.into_edits(),
        vec![
            PendingEdit::Insert {
                index: 1,
                text: "#if DEBUG".to_string(),
            },
            PendingEdit::Insert {
                index: 3,
                text: "#endif".to_string(),
            },
        ]
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ToggleError::ContainsDirective { line: 3 }.to_string(),
        "Selection contains compilation block at line 3."
    );
    assert_eq!(
        ToggleError::EmptySelection {
            range: LineRange::new(1, 2),
        }
        .to_string(),
        "Selection 1..=2 contains only blank lines."
    );
}

#[test]
fn test_rope_wraps_the_line_after_a_form_feed_line() {
    let engine = ToggleEngine::default();
    let mut buffer = RopeBuffer::from_text("a\x0cb\nc\nd");

    engine.toggle(&mut buffer, &[LineRange::single(1)]).unwrap();

    assert_eq!(buffer.to_text(), "a\x0cb\n#if DEBUG\nc\n#endif\nd");
}

#[test]
fn test_rope_round_trip_keeps_mixed_line_endings() {
    let original = "a\r\nb\nc\r\n";
    let engine = ToggleEngine::default();
    let mut buffer = RopeBuffer::from_text(original);

    let applied = engine.toggle(&mut buffer, &[LineRange::single(0)]).unwrap();
    assert_eq!(buffer.to_text(), "#if DEBUG\r\na\r\n#endif\r\nb\nc\r\n");

    engine.toggle(&mut buffer, &applied.selections).unwrap();
    assert_eq!(buffer.to_text(), original);
}
