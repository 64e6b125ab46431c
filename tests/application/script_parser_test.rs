use virtual_avatar::application::services::{ScriptError, parse_script};

#[test]
fn given_json_array_when_parsing_then_returns_lines_in_order() {
    let raw = r#"[
        {"text": "First", "facialExpression": "smile", "animation": "Talking"},
        {"text": "Second", "facialExpression": "default", "animation": "Idle"}
    ]"#;

    let lines = parse_script(raw).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "First");
    assert_eq!(lines[0].facial_expression, "smile");
    assert_eq!(lines[1].animation, "Idle");
}

#[test]
fn given_object_with_messages_key_when_parsing_then_unwraps_array() {
    let raw = r#"{"messages": [{"text": "Only", "facialExpression": "smile", "animation": "Talking"}]}"#;

    let lines = parse_script(raw).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Only");
}

#[test]
fn given_line_without_expression_when_parsing_then_uses_defaults() {
    let lines = parse_script(r#"[{"text": "Bare"}]"#).unwrap();

    assert_eq!(lines[0].facial_expression, "default");
    assert_eq!(lines[0].animation, "Talking");
}

#[test]
fn given_plain_prose_when_parsing_then_returns_invalid_json() {
    let result = parse_script("Sure! Here are two messages for you.");

    assert!(matches!(result, Err(ScriptError::InvalidJson(_))));
}

#[test]
fn given_line_without_text_when_parsing_then_returns_unexpected_shape() {
    let result = parse_script(r#"[{"facialExpression": "smile"}]"#);

    assert!(matches!(result, Err(ScriptError::UnexpectedShape(_))));
}

#[test]
fn given_empty_array_when_parsing_then_returns_unexpected_shape() {
    assert!(matches!(
        parse_script("[]"),
        Err(ScriptError::UnexpectedShape(_))
    ));
}
