use jvalue_core::{parse, ParseError, ParserConfig, Value, DEFAULT_MAX_DEPTH};

/// Helper: assert that `text` is rejected with the given error kind.
fn assert_parse_err(text: &str, expected: ParseError) {
    assert_eq!(parse(text), Err(expected), "input: {text:?}");
}

/// Helper: our parser and serde_json must agree on well-formed input.
fn assert_matches_serde_json(text: &str) {
    let ours = parse(text).unwrap_or_else(|e| panic!("parse failed for {text:?}: {e}"));
    let reference: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(ours, Value::from(reference), "input: {text:?}");
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn parse_literals() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), true);
    assert_eq!(parse("false").unwrap(), false);
}

#[test]
fn parse_numbers() {
    assert_eq!(parse("0").unwrap(), 0.0);
    assert_eq!(parse("-7").unwrap(), -7.0);
    assert_eq!(parse("3.14").unwrap(), 3.14);
    assert_eq!(parse("1e3").unwrap(), 1000.0);
    assert_eq!(parse("-2.5E-2").unwrap(), -0.025);
    assert_eq!(parse("9007199254740993").unwrap(), 9007199254740992.0);
}

#[test]
fn parse_string() {
    assert_eq!(parse(r#""hello world""#).unwrap(), "hello world");
    assert_eq!(parse(r#""""#).unwrap(), "");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse(" \t\r\n 42 \n").unwrap(), 42.0);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn parse_empty_containers() {
    assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse("{}").unwrap(), Value::Object(Default::default()));
    assert_eq!(parse("[ ]").unwrap().size(), 0);
    assert_eq!(parse("{ \n }").unwrap().size(), 0);
}

#[test]
fn parse_array_of_mixed_values() {
    let v = parse(r#"[1, "two", true, null, [3], {"four": 4}]"#).unwrap();
    assert_eq!(v.size(), 6);
    assert_eq!(v[0], 1);
    assert_eq!(v[1], "two");
    assert_eq!(v[2], true);
    assert!(v[3].is_null());
    assert_eq!(v[4][0], 3);
    assert_eq!(v[5]["four"], 4);
}

#[test]
fn parse_nested_object() {
    let v = parse(r#"{"a": {"b": {"c": [1, 2, {"d": "deep"}]}}}"#).unwrap();
    assert_eq!(v["a"]["b"]["c"][2]["d"], "deep");
}

#[test]
fn parse_scenario_document() {
    let root = parse(r#"{"x": [1, 2.5, "s", true, null]}"#).unwrap();
    assert!(root.is_object());
    assert_eq!(root["x"].size(), 5);
    assert_eq!(root["x"][1].get_number(), 2.5);
    assert!(root["x"][4].is_null());
}

#[test]
fn duplicate_keys_last_wins() {
    let v = parse(r#"{"a": 1, "a": 2}"#).unwrap();
    assert_eq!(v.size(), 1);
    assert_eq!(v["a"], 2);
}

#[test]
fn keys_are_unescaped() {
    let v = parse(r#"{"a\"b": 1, "A": 2}"#).unwrap();
    assert_eq!(v["a\"b"], 1);
    assert_eq!(v["A"], 2);
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn escape_sequence_scenario() {
    let v = parse(r#""\"a\\b\u00e9\"""#).unwrap();
    assert_eq!(v.get_string(), "\"a\\b\u{e9}\"");
}

#[test]
fn every_simple_escape() {
    let v = parse(r#""\"\\\/\b\f\n\r\t""#).unwrap();
    assert_eq!(v.get_string(), "\"\\/\u{08}\u{0c}\n\r\t");
}

#[test]
fn surrogate_pair_combines() {
    let v = parse(r#""\ud83d\ude00 ok""#).unwrap();
    assert_eq!(v.get_string(), "\u{1f600} ok");
}

#[test]
fn lone_surrogate_is_replaced() {
    let v = parse(r#""\udc00""#).unwrap();
    assert_eq!(v.get_string(), "\u{fffd}");
}

#[test]
fn raw_utf8_passes_through() {
    let v = parse("\"caf\u{e9} \u{4f60}\u{597d} \u{1f600}\"").unwrap();
    assert_eq!(v.get_string(), "caf\u{e9} \u{4f60}\u{597d} \u{1f600}");
}

#[test]
fn raw_control_bytes_are_copied() {
    let v = parse("\"tab\there\"").unwrap();
    assert_eq!(v.get_string(), "tab\there");
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn missing_value_after_colon() {
    assert_parse_err(r#"{"a":}"#, ParseError::UnexpectedCharacter('}'));
}

#[test]
fn unterminated_array() {
    assert_parse_err("[1,2", ParseError::UnexpectedEnd);
}

#[test]
fn unterminated_object() {
    assert_parse_err(r#"{"a":1"#, ParseError::UnexpectedEnd);
}

#[test]
fn empty_input() {
    assert_parse_err("", ParseError::UnexpectedEnd);
    assert_parse_err("   \n", ParseError::UnexpectedEnd);
}

#[test]
fn missing_colon() {
    assert_parse_err(r#"{"a" 1}"#, ParseError::UnexpectedCharacter('1'));
}

#[test]
fn unquoted_key() {
    assert_parse_err("{a:1}", ParseError::UnexpectedCharacter('a'));
}

#[test]
fn trailing_commas_are_rejected() {
    assert_parse_err("[1,]", ParseError::UnexpectedCharacter(']'));
    assert_parse_err(r#"{"a":1,}"#, ParseError::UnexpectedCharacter('}'));
}

#[test]
fn missing_comma() {
    assert_parse_err("[1 2]", ParseError::UnexpectedCharacter('2'));
    assert_parse_err(r#"{"a":1 "b":2}"#, ParseError::UnexpectedCharacter('"'));
}

#[test]
fn comments_are_rejected() {
    assert_parse_err("// c\n1", ParseError::UnexpectedCharacter('/'));
    assert_parse_err("[1 /* c */]", ParseError::UnexpectedCharacter('/'));
}

#[test]
fn malformed_literals() {
    assert_parse_err("tru", ParseError::InvalidLiteral);
    assert_parse_err("nul", ParseError::InvalidLiteral);
    assert_parse_err("fals", ParseError::InvalidLiteral);
    assert_parse_err("True", ParseError::UnexpectedCharacter('T'));
}

#[test]
fn malformed_numbers() {
    assert_parse_err("-", ParseError::InvalidNumber);
    assert_parse_err("1.", ParseError::InvalidNumber);
    assert_parse_err("1e", ParseError::InvalidNumber);
    assert_parse_err("[-]", ParseError::InvalidNumber);
    assert_parse_err("+1", ParseError::UnexpectedCharacter('+'));
    assert_parse_err(".5", ParseError::UnexpectedCharacter('.'));
    assert_parse_err("1e999", ParseError::InvalidNumber);
}

#[test]
fn malformed_strings() {
    assert_parse_err(r#""abc"#, ParseError::UnexpectedEnd);
    assert_parse_err(r#""\q""#, ParseError::InvalidEscape);
    assert_parse_err(r#""\u00zz""#, ParseError::InvalidEscape);
}

#[test]
fn trailing_content_is_rejected() {
    assert_parse_err("1 2", ParseError::TrailingCharacters);
    assert_parse_err("{} x", ParseError::TrailingCharacters);
    assert_parse_err("truex", ParseError::TrailingCharacters);
    assert_parse_err("[1]]", ParseError::TrailingCharacters);
}

#[test]
fn unexpected_non_ascii_character() {
    assert_parse_err("[\u{e9}]", ParseError::UnexpectedCharacter('\u{e9}'));
}

// ============================================================================
// from_string / FromStr
// ============================================================================

#[test]
fn from_string_replaces_value() {
    let mut v = Value::from("old");
    assert!(v.from_string(r#"{"new":true}"#));
    assert_eq!(v["new"], true);
}

#[test]
fn from_string_failure_returns_false() {
    let mut v = Value::from(vec![Value::from(1)]);
    assert!(!v.from_string(r#"{"a":}"#));
    assert!(!v.from_string("[1,2"));
    assert!(v.is_null());
}

#[test]
fn from_str_trait() {
    let v: Value = "[1,2]".parse().unwrap();
    assert_eq!(v.size(), 2);
    assert!("[1,".parse::<Value>().is_err());
}

// ============================================================================
// Depth limit
// ============================================================================

#[test]
fn default_depth_accepts_reasonable_nesting() {
    let text = format!("{}{}", "[".repeat(100), "]".repeat(100));
    assert!(parse(&text).is_ok());
}

#[test]
fn default_depth_rejects_pathological_nesting() {
    let depth = DEFAULT_MAX_DEPTH + 1;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert_parse_err(&text, ParseError::DepthLimitExceeded(DEFAULT_MAX_DEPTH));
}

#[test]
fn custom_depth_limit() {
    let config = ParserConfig::new().max_depth(2);
    assert!(config.parse(r#"{"a":[1]}"#).is_ok());
    assert_eq!(
        config.parse(r#"{"a":[{}]}"#),
        Err(ParseError::DepthLimitExceeded(2))
    );
}

#[test]
fn zero_depth_allows_only_scalars() {
    let config = ParserConfig::new().max_depth(0);
    assert!(config.parse("1").is_ok());
    assert_eq!(config.parse("[]"), Err(ParseError::DepthLimitExceeded(0)));
}

// ============================================================================
// Agreement with serde_json
// ============================================================================

#[test]
fn agrees_with_serde_json() {
    for text in [
        "null",
        "[1, -2, 3.5, 1e-7, 123456789012]",
        r#"{"name": "Alice", "tags": ["a", "b"], "meta": {"active": true, "score": null}}"#,
        r#"["\u00e9", "\ud834\udd1e", "\n\t\"\\"]"#,
        r#"[[[]], {}, [{}], {"": ""}]"#,
        r#"{"events": [{"id": 1, "title": "Standup"}, {"id": 2, "title": "Review"}]}"#,
    ] {
        assert_matches_serde_json(text);
    }
}
