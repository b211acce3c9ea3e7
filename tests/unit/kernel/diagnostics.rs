use super::*;

#[test]
fn test_format_without_location_only_strips_markup() {
    let input = "Unexpected token <> here </> end";
    assert_eq!(format_babel_error(input), "Unexpected token  here  end");

    let plain = "SyntaxError: something went wrong";
    assert_eq!(format_babel_error(plain), plain);
}

#[test]
fn test_format_template_error_shifts_lines() {
    let input = "unknown: Unexpected token (3:4)\n\n  1 | /* @babel/template */;\n  2 | <>\n> 3 | <div>\n    |    ^";
    let expected = "unknown: Unexpected token (2:4)\n\n  \n  1 | \n> 2 | <div>\n    |    ^";
    assert_eq!(format_babel_error(input), expected);
}

#[test]
fn test_format_keeps_location_outside_template() {
    assert_eq!(
        format_babel_error("Unexpected token (10:2)"),
        "Unexpected token (10:2)"
    );
}

#[test]
fn test_format_renumbers_gutter_and_keeps_alignment() {
    let input = "  9 | a\n> 10 | b";
    assert_eq!(format_babel_error(input), "  8 | a\n>  9 | b");
}

#[test]
fn test_format_never_underflows() {
    assert_eq!(format_babel_error("0 | x"), "0 | x");
    assert_eq!(
        format_babel_error("/* @babel/template */ (0:1)"),
        "/* @babel/template */ (0:1)"
    );
}

#[test]
fn test_frame_error_appends_code_frame() {
    let code = "const a = 1;\nconst b = ;\nconst c = 3;";
    let framed = frame_error("Unexpected token (2:10)", code);

    let expected = format!(
        "Unexpected token (2:10)\n\n  1 | const a = 1;\n> 2 | const b = ;\n    |{}^\n  3 | const c = 3;",
        " ".repeat(10)
    );
    assert_eq!(framed, expected);
}

#[test]
fn test_frame_error_passthrough() {
    let code = "a\nb";
    assert_eq!(frame_error("", code), "");
    assert_eq!(frame_error("no location", code), "no location");
    assert_eq!(frame_error("at (1:1) somewhere", code), "at (1:1) somewhere");
    assert_eq!(frame_error("too far (7:1)", code), "too far (7:1)");
}

#[test]
fn test_code_frame_limits_context() {
    let code = (1..=12)
        .map(|n| format!("line{}", n))
        .collect::<Vec<_>>()
        .join("\n");
    let frame = code_frame(&code, 6, 1).expect("frame");
    let rows: Vec<&str> = frame.lines().collect();

    assert_eq!(rows.first(), Some(&"  4 | line4"));
    assert_eq!(rows.last(), Some(&"  9 | line9"));
    assert!(rows.contains(&"> 6 | line6"));
    assert!(rows.contains(&"    | ^"));
}

#[test]
fn test_code_frame_pads_to_widest_number() {
    let code = (1..=10).map(|_| "x").collect::<Vec<_>>().join("\n");
    let frame = code_frame(&code, 9, 1).expect("frame");
    assert!(frame.contains(">  9 | x"));
    assert!(frame.contains("  10 | x"));
}

#[test]
fn test_code_frame_handles_crlf_and_empty_lines() {
    let frame = code_frame("a\r\n\r\nb", 2, 1).expect("frame");
    assert_eq!(frame, "  1 | a\n> 2 |\n    | ^\n  3 | b");
}

#[test]
#[should_panic(expected = "Didn't expect to get here")]
fn test_assert_unreachable_panics() {
    assert_unreachable();
}
