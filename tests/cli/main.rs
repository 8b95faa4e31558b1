use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn exprlex_cmd() -> Command {
    Command::cargo_bin("exprlex").unwrap()
}

#[test]
fn writes_token_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    std::fs::write(&input, "if a<=b then 1.5E3 else ; nil").unwrap();

    exprlex_cmd().arg(&input).arg(&output).assert().success();

    let listing = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        listing,
        "if   : Keyword_if\n\
         a   : Id\n\
         <=   : Le\n\
         b   : Id\n\
         then   : Keyword_then\n\
         1.5E3   : FloatE\n\
         else   : Keyword_else\n\
         ; : Lexical Error, invalid token\n\
         nil   : Id\n"
    );
}

#[test]
fn keeps_whitespace_quirk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    std::fs::write(&input, "x  y\n").unwrap();

    exprlex_cmd().arg(&input).arg(&output).assert().success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "x   : Id\n  : Lexical Error, invalid token\ny   : Id\n"
    );
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    exprlex_cmd()
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("output.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("[error]:"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn requires_both_arguments() {
    exprlex_cmd()
        .arg("input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OUTPUT"));
}
