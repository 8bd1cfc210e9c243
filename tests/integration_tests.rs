//! 集成测试 - 端到端词法分析测试

mod common;

use abnf_workspace::{
    load_project, read_source, resolve_entry, tokenize_with_config, ApiError, DiagnosticKind,
    LexerConfig, Logger, RunConfig, Token, TokenKind, Tokenizer,
};
use common::{kinds, lex, pairs, positions, TempDir, SAMPLE_GRAMMAR};

#[test]
fn test_sample_grammar_kinds() {
    use TokenKind::*;

    // 按源码行分组
    let lines: [&[TokenKind]; 8] = [
        &[EndOfLine],
        &[RuleName, Equals, TerminalValue, Comment, EndOfLine],
        &[RuleName, Equals, TerminalValue, EndOfLine],
        &[RuleName, Equals, TerminalValue, EndOfLine],
        &[RuleName, Equals, RuleName, RuleName, EndOfLine],
        &[RuleName, Equals, StringLiteral, EndOfLine],
        &[RuleName, Equals, RuleName, Alternative, RuleName, EndOfLine],
        &[EndOfInput],
    ];
    let tokens = lex(SAMPLE_GRAMMAR);
    assert_eq!(kinds(&tokens), lines.concat());
}

#[test]
fn test_sample_grammar_values() {
    let tokens = lex(SAMPLE_GRAMMAR);
    let texts: Vec<_> = pairs(&tokens)
        .into_iter()
        .filter(|(kind, _)| kind.carries_text())
        .map(|(_, value)| value)
        .collect();
    let lines: [&[&str]; 6] = [
        &["LF", "x0A", "Hello World"],
        &["CR", "x0D"],
        &["DECIMAL", "d13.10"],
        &["CRLF", "CR", "LF"],
        &["command", "command string"],
        &["rule", "CRLF", "DECIMAL"],
    ];
    assert_eq!(texts, lines.concat());
}

#[test]
fn test_sample_grammar_positions() {
    let tokens = lex(SAMPLE_GRAMMAR);
    let positions = positions(&tokens);

    assert_eq!(positions[0], (TokenKind::EndOfLine, 1, 1));
    // LF = %x0A ;Hello World
    assert_eq!(
        &positions[1..6],
        &[
            (TokenKind::RuleName, 2, 1),
            (TokenKind::Equals, 2, 4),
            (TokenKind::TerminalValue, 2, 6),
            (TokenKind::Comment, 2, 11),
            (TokenKind::EndOfLine, 2, 23),
        ]
    );
    // command = "command string"
    assert_eq!(positions[21], (TokenKind::StringLiteral, 6, 11));
    assert_eq!(positions[22], (TokenKind::EndOfLine, 6, 27));
    // <rule> = <CRLF> / DECIMAL
    assert_eq!(
        &positions[23..29],
        &[
            (TokenKind::RuleName, 7, 1),
            (TokenKind::Equals, 7, 8),
            (TokenKind::RuleName, 7, 10),
            (TokenKind::Alternative, 7, 17),
            (TokenKind::RuleName, 7, 19),
            (TokenKind::EndOfLine, 7, 26),
        ]
    );
    assert_eq!(positions[29], (TokenKind::EndOfInput, 8, 1));
}

#[test]
fn test_crlf_grammar_matches_lf_grammar() {
    let lf = lex(SAMPLE_GRAMMAR);
    let crlf = lex(&SAMPLE_GRAMMAR.replace('\n', "\r\n"));
    assert_eq!(lf, crlf);
}

#[test]
fn test_positions_are_one_based_and_lines_monotonic() {
    let tokens = lex(SAMPLE_GRAMMAR);
    assert!(tokens.iter().all(|t| t.line >= 1 && t.column >= 1));
    assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));

    // 行尾之后的 token 都位于下一行
    for pair in tokens.windows(2) {
        if pair[0].kind == TokenKind::EndOfLine {
            assert_eq!(pair[1].line, pair[0].line + 1);
        }
    }
}

#[test]
fn test_values_exclude_delimiters_and_whitespace() {
    let tokens = lex("  a\t=  \"x y\"  <b>  %x41  ;c\n");
    for token in &tokens {
        assert!(!token.value.contains(['"', '<', '>', '%', ';']));
    }
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::RuleName, "a"),
            (TokenKind::Equals, "="),
            (TokenKind::StringLiteral, "x y"),
            (TokenKind::RuleName, "b"),
            (TokenKind::TerminalValue, "x41"),
            (TokenKind::Comment, "c"),
            (TokenKind::EndOfLine, ""),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn test_end_of_input_repeats() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_input("a");
    assert_eq!(tokenizer.next_token().kind, TokenKind::RuleName);
    for _ in 0..10 {
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::EndOfInput, "", 1, 2)
        );
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(lex(""), vec![Token::new(TokenKind::EndOfInput, "", 1, 1)]);
}

#[test]
fn test_unknown_then_resume() {
    let tokens = lex("@ foo = bar");
    assert_eq!(tokens[0], Token::new(TokenKind::Unknown, "", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::RuleName, "foo", 1, 3));
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_with_config_reports_diagnostics() {
    let output = tokenize_with_config("a = \"open\nb = @\n", &RunConfig::default()).unwrap();
    let found: Vec<_> = output
        .diagnostics
        .iter()
        .map(|d| (d.kind.clone(), d.line, d.column))
        .collect();
    assert_eq!(
        found,
        vec![
            (DiagnosticKind::UnterminatedString, 1, 5),
            (DiagnosticKind::UnrecognizedCharacter('@'), 2, 5),
        ]
    );
    assert_eq!(output.count(TokenKind::EndOfLine), 2);
}

#[test]
fn test_strict_run_rejects_with_location() {
    let config = RunConfig {
        strict: true,
        logger: Logger::noop(),
        lexer: LexerConfig::default(),
    };
    let err = tokenize_with_config("ok = yes\nbad = #\n", &config).unwrap_err();
    assert!(matches!(err, ApiError::Rejected { .. }));
    assert_eq!((err.line(), err.column()), (Some(2), Some(7)));
    assert_eq!(err.to_report().phase, "lexer");
}

#[test]
fn test_project_file_end_to_end() {
    let dir = TempDir::new("project");
    dir.write("grammar.abnf", SAMPLE_GRAMMAR);
    let project_path = dir.write(
        "abnf.json",
        r#"{ "entry": "grammar.abnf", "lexer": { "collect_diagnostics": false } }"#,
    );

    let project = load_project(&project_path).unwrap();
    let grammar = resolve_entry(&project_path, project.entry.as_deref()).unwrap();
    let source = read_source(grammar).unwrap();

    let config = RunConfig::from_project(&project, Logger::noop());
    let output = tokenize_with_config(&source, &config).unwrap();
    assert_eq!(output.tokens, lex(SAMPLE_GRAMMAR));
    assert_eq!(output.count(TokenKind::Comment), 1);
}

#[test]
fn test_missing_grammar_file() {
    let dir = TempDir::new("missing");
    let err = read_source(dir.path.join("nope.abnf")).unwrap_err();
    assert!(matches!(err, ApiError::Io { .. }));
    assert!(err.to_string().contains("nope.abnf"));
}

#[test]
fn test_token_json_shape() {
    let tokens = lex("a = \"b\"");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[2]["kind"], "STRING_LITERAL");
    assert_eq!(json[2]["value"], "b");
    assert_eq!(json[3]["kind"], "END_OF_INPUT");
}
