use std::path::Path;

use exprlex::{
    base::{MemoryProvider, SilentHandler},
    lexical::token::KeywordKind,
    LexerOptions, TokenKind,
};
use pretty_assertions::assert_eq;

fn listing(stream: &exprlex::TokenStream) -> Vec<String> {
    stream.iter().map(ToString::to_string).collect()
}

#[test]
fn lexing_expression() {
    let source = include_str!("./expression.txt");
    let mut dir = MemoryProvider::new();
    dir.add_file("expression.txt", source);

    let handler = SilentHandler::new();
    let tokens = exprlex::tokenize(
        &handler,
        &dir,
        Path::new("expression.txt"),
        LexerOptions::default(),
    )
    .expect("Failed to tokenize");

    assert!(handler.is_empty());
    assert_eq!(
        listing(&tokens),
        vec![
            "if   : Keyword_if",
            "x   : Id",
            "<=   : Le",
            "10   : Int",
            "then   : Keyword_then",
            "pair   : Keyword_pair",
            "(   : LParen",
            "x   : Id",
            "2.5e-3f   : FloatF",
            ")   : RParen",
            "else   : Keyword_else",
            "nil   : Keyword_nil",
            "{   : LBrace",
            "first   : Keyword_first",
            "y   : Id",
            "}   : RBrace",
            ">=   : Ge",
            "-42   : Int",
            ".7   : Float",
            "**3   : Int",
        ]
    );

    let keywords = tokens
        .iter()
        .filter_map(|token| token.kind().as_keyword().copied())
        .collect::<Vec<_>>();
    assert_eq!(
        keywords,
        vec![
            KeywordKind::If,
            KeywordKind::Then,
            KeywordKind::Pair,
            KeywordKind::Else,
            KeywordKind::Nil,
            KeywordKind::First,
        ]
    );
}

#[test]
fn lexing_reports_invalid_tokens() {
    let source = include_str!("./invalid.txt");
    let mut dir = MemoryProvider::new();
    dir.add_file("invalid.txt", source);

    let handler = SilentHandler::new();
    let tokens = exprlex::tokenize(
        &handler,
        &dir,
        Path::new("invalid.txt"),
        LexerOptions::default(),
    )
    .expect("Failed to tokenize");

    assert_eq!(listing(&tokens), vec!["a   : Id", "b   : Id", "12   : Int"]);

    let reported = handler
        .into_inner()
        .into_iter()
        .map(|err| match err {
            exprlex::base::Error::LexicalError(exprlex::lexical::Error::InvalidToken(invalid)) => {
                invalid.to_string()
            }
            other => panic!("unexpected error {other}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        reported,
        vec![
            ".. : Lexical Error, invalid token",
            "3e+  : Lexical Error, invalid token",
            "@ : Lexical Error, invalid token",
        ]
    );
}

#[test]
fn lexing_missing_file() {
    let dir = MemoryProvider::new();

    exprlex::tokenize(
        &SilentHandler::new(),
        &dir,
        Path::new("missing.txt"),
        LexerOptions::default(),
    )
    .expect_err("Expecting a missing file");
}

#[test]
fn lexing_str_with_corrections() {
    let handler = SilentHandler::new();
    let tokens = exprlex::tokenize_str(&handler, "  not   and", LexerOptions::corrected());

    assert!(handler.is_empty());
    assert_eq!(
        tokens.iter().map(exprlex::Token::kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword(KeywordKind::Not),
            TokenKind::Keyword(KeywordKind::And),
        ]
    );
}

#[test]
fn lexing_reader_matches_file() {
    let source = include_str!("./expression.txt");
    let mut dir = MemoryProvider::new();
    dir.add_file("expression.txt", source);

    let from_file = exprlex::tokenize(
        &SilentHandler::new(),
        &dir,
        Path::new("expression.txt"),
        LexerOptions::default(),
    )
    .expect("Failed to tokenize");
    let reader = std::io::BufReader::with_capacity(4, source.as_bytes());
    let from_reader =
        exprlex::tokenize_reader(&SilentHandler::new(), reader, LexerOptions::default());

    assert_eq!(listing(&from_reader), listing(&from_file));
}

#[test]
fn lexing_reader_reports_plain_diagnostics() {
    let handler = SilentHandler::new();
    let tokens = exprlex::tokenize_reader(
        &handler,
        include_str!("./invalid.txt").as_bytes(),
        LexerOptions::default(),
    );

    assert_eq!(listing(&tokens), vec!["a   : Id", "b   : Id", "12   : Int"]);
    assert_eq!(
        handler
            .into_inner()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec![
            ".. : Lexical Error, invalid token",
            "3e+  : Lexical Error, invalid token",
            "@ : Lexical Error, invalid token",
        ]
    );
}
