use pretty_assertions::assert_eq;

use super::token::{Keyword, Literal, TokenKind};
use super::{tokenize, tokenize_with_limit};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).0.into_iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source).0.into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn wrapped_number_is_one_token() {
    let (tokens, errors) = tokenize("(42) (3.5)");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(3.5)));
}

#[test]
fn paren_without_number_is_grouping() {
    assert_eq!(lexemes("(@x)"), vec!["(", "@x", ")", ""]);
    assert_eq!(lexemes("(1 + 2)"), vec!["(", "1", "+", "2", ")", ""]);
    // A dangling decimal point is not a wrapped number.
    assert_eq!(lexemes("(5.)"), vec!["(", "5", ".", ")", ""]);
}

#[test]
fn division_family() {
    assert_eq!(
        lexemes("$ $$ $= $$= ** **= %="),
        vec!["$", "$$", "$=", "$$=", "**", "**=", "%=", ""]
    );
}

#[test]
fn equality_family() {
    assert_eq!(lexemes("= == === != !"), vec!["=", "==", "===", "!=", "!", ""]);
    assert_eq!(lexemes("<< <= < >> >= >"), vec!["<<", "<=", "<", ">>", ">=", ">", ""]);
}

#[test]
fn multi_word_operators() {
    assert_eq!(lexemes("@a not in @b"), vec!["@a", "not in", "@b", ""]);
    assert_eq!(lexemes("@a is not int"), vec!["@a", "is not", "int", ""]);
}

#[test]
fn partial_multi_word_match_consumes_nothing() {
    // `inside` is not `in`, so `not` stands alone and `inside` is a word.
    assert_eq!(lexemes("not inside"), vec!["not", "inside", ""]);
    assert_eq!(lexemes("is nothing"), vec!["is", "nothing", ""]);
}

#[test]
fn execute_subcommands() {
    assert_eq!(
        kinds("/execute if /execute while /execute for /execute elif /execute else"),
        vec![
            TokenKind::Keyword(Keyword::ExecuteIf),
            TokenKind::Keyword(Keyword::ExecuteWhile),
            TokenKind::Keyword(Keyword::ExecuteFor),
            TokenKind::Keyword(Keyword::ExecuteElif),
            TokenKind::Keyword(Keyword::ExecuteElse),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn execute_with_partial_subcommand_stays_single() {
    let (tokens, _) = tokenize("/execute iffy");
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Execute));
    assert_eq!(tokens[1].kind, TokenKind::Word);
    assert_eq!(tokens[1].lexeme, "iffy");
}

#[test]
fn say_captures_rest_of_line() {
    let (tokens, _) = tokenize("/say   hello    {@name}   there\n/kill");

    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Say));
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "hello {@name} there");
    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Kill));
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn say_capture_stops_at_closing_brace() {
    assert_eq!(
        lexemes("run { /say big } else { /say small }"),
        vec!["run", "{", "/say", "big", "}", "else", "{", "/say", "small", "}", ""]
    );
}

#[test]
fn say_with_quoted_message_uses_string_scanner() {
    let (tokens, _) = tokenize("/say \"a  b\"");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "a  b");
}

#[test]
fn whisper_comments_vanish() {
    assert_eq!(
        kinds("/whisper note to self\n/whisper \"spans\ntwo lines\"\n/kill"),
        vec![TokenKind::Keyword(Keyword::Kill), TokenKind::Eof]
    );
    let (tokens, _) = tokenize("/whisper \"a\nb\"\n/kill");
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn multi_line_string_counts_lines() {
    let (tokens, _) = tokenize("\"one\ntwo\" @x");
    assert_eq!(tokens[0].lexeme, "one\ntwo");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn identifier_needs_letter_after_sigil() {
    let (tokens, errors) = tokenize("@1 @ok");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expected a letter after '@'.");
    assert!(tokens.iter().any(|t| t.lexeme == "@ok"));
}

#[test]
fn overlong_identifier_reported_and_scanning_continues() {
    let long = format!("@{}", "a".repeat(50));
    let (tokens, errors) = tokenize(&format!("{} @fine", long));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 1);
    assert!(tokens.iter().any(|t| t.lexeme == "@fine"));

    let (_, errors) = tokenize_with_limit("@abcd", 4);
    assert_eq!(errors.len(), 1);
}

#[test]
fn unknown_characters_do_not_stop_scanning() {
    let (tokens, errors) = tokenize("# @x\n\"open");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Unexpected character '#'.");
    assert_eq!(errors[1].message, "Unterminated string.");
    assert_eq!(errors[1].line, 2);
    assert_eq!(tokens[0].lexeme, "@x");
}

#[test]
fn unknown_command_is_reported() {
    let (_, errors) = tokenize("/teleport @x");
    assert_eq!(errors[0].message, "Unknown command '/teleport'.");
}

#[test]
fn literal_words() {
    assert_eq!(
        kinds("true false nil null range run"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::Nil,
            TokenKind::Keyword(Keyword::Range),
            TokenKind::Keyword(Keyword::Run),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn colon_is_text() {
    let (tokens, _) = tokenize(":");
    assert_eq!(tokens[0].kind, TokenKind::String);
}
