//! Integration tests for the command language
//!
//! Tests tokenization of arguments and parsing of meta commands.

use pvars_foundation::OwnerId;
use pvars_host::Arg;
use pvars_runtime::{Command, Token, parse_line, tokenize};

#[test]
fn tokens_become_typed_arguments() {
    let tokens = tokenize(r#"10 -3 1.5 "quoted text" @ bare"#).unwrap();
    let args: Vec<Arg> = tokens.into_iter().map(Token::into_arg).collect();

    assert_eq!(
        args,
        vec![
            Arg::Int(10),
            Arg::Int(-3),
            Arg::Float(1.5),
            Arg::Str("quoted text".to_string()),
            Arg::buffer(),
            Arg::Str("bare".to_string()),
        ]
    );
}

#[test]
fn quoted_numbers_stay_strings() {
    let args: Vec<Arg> = tokenize(r#""10" "1.5""#)
        .unwrap()
        .into_iter()
        .map(Token::into_arg)
        .collect();

    assert_eq!(
        args,
        vec![Arg::Str("10".to_string()), Arg::Str("1.5".to_string())]
    );
}

#[test]
fn full_call_line() {
    let command = parse_line(r#"PVarSetString 5 Name "Bob \"the\" Builder""#)
        .unwrap()
        .unwrap();

    assert_eq!(
        command,
        Command::Call {
            native: "PVarSetString".to_string(),
            args: vec![
                Arg::Int(5),
                Arg::Str("Name".to_string()),
                Arg::Str(r#"Bob "the" Builder"#.to_string()),
            ],
        }
    );
}

#[test]
fn meta_commands_parse() {
    assert_eq!(
        parse_line(":disconnect 12").unwrap(),
        Some(Command::Disconnect(OwnerId(12)))
    );
    assert_eq!(parse_line(":dump").unwrap(), Some(Command::Dump(None)));
    assert_eq!(parse_line(":natives").unwrap(), Some(Command::Natives));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(parse_line("  # setup").unwrap(), None);
    assert_eq!(parse_line("").unwrap(), None);
}

#[test]
fn malformed_lines_are_errors() {
    assert!(parse_line(r#"PVarSetString 1 a "open"#).is_err());
    assert!(parse_line(":bogus").is_err());
}
