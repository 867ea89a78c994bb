//! Property tests for the lexer's structural laws: the span round-trip
//! guarantee, the identifier law, and bracket-balance behavior.

use glint::lexer::keywords::is_keyword;
use glint::{check_balanced_brackets, tokenize, TokenKind};
use proptest::prelude::*;

/// Character-indexed inclusive substring.
fn char_slice(source: &str, start: usize, end: usize) -> String {
    source.chars().skip(start).take(end - start + 1).collect()
}

/// Self-contained lexemes that can be joined by whitespace into a
/// well-formed (lexically, not grammatically) source string.
fn snippet() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("foo"),
        Just("count"),
        Just("$tmp"),
        Just("_x1"),
        Just("if"),
        Just("while"),
        Just("int"),
        Just("return"),
        Just("0"),
        Just("123"),
        Just("12.5"),
        Just("12.5f"),
        Just("7L"),
        Just("\"str\""),
        Just("\"a\\\"b\""),
        Just("'c'"),
        Just("'\\n'"),
        Just("+"),
        Just("-"),
        Just("=="),
        Just("!="),
        Just("&&"),
        Just("||"),
        Just(">>>"),
        Just("<<"),
        Just("+="),
        Just("("),
        Just(")"),
        Just("{"),
        Just("}"),
        Just("["),
        Just("]"),
        Just(";"),
        Just(","),
        Just("/* boxed */"),
        Just("// tail"),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just("\t"), Just("  ")]
}

/// Recursively generated bracket strings that nest correctly.
fn balanced_brackets() -> impl Strategy<Value = String> {
    let leaf = Just(String::new());
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a}){b}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("[{a}]{b}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{{{a}}}{b}")),
        ]
    })
}

proptest! {
    #[test]
    fn lone_identifiers_lex_as_identifier_then_eof(
        word in "[A-Za-z_$][A-Za-z0-9_$]{0,12}"
    ) {
        prop_assume!(!is_keyword(&word));

        let tokens = tokenize(&word).expect("should tokenize");
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].text, &word);
        prop_assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn spans_round_trip_for_arbitrary_token_soup(
        pieces in prop::collection::vec((snippet(), separator()), 1..24)
    ) {
        let mut source = String::new();
        for (snippet, separator) in &pieces {
            source.push_str(snippet);
            source.push_str(separator);
        }

        let tokens = tokenize(&source).expect("should tokenize");
        let (eof, rest) = tokens.split_last().expect("at least EOF");

        prop_assert_eq!(eof.kind, TokenKind::Eof);
        prop_assert_eq!(eof.span.start, source.chars().count());

        for token in rest {
            prop_assert_eq!(
                char_slice(&source, token.span.start, token.span.end),
                token.text.clone()
            );
        }

        // Spans stay ordered and disjoint, which is what lets a
        // highlighter apply non-overlapping attribute ranges.
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end < pair[1].span.start);
        }
    }

    #[test]
    fn balanced_bracket_streams_pass_the_check(source in balanced_brackets()) {
        let tokens = tokenize(&source).expect("should tokenize");
        prop_assert!(check_balanced_brackets(&tokens));
    }

    #[test]
    fn one_extra_closer_fails_the_check(
        source in balanced_brackets(),
        closer in prop::sample::select(vec![")", "]", "}"])
    ) {
        let tokens = tokenize(&format!("{source}{closer}"))
            .expect("should tokenize");
        prop_assert!(!check_balanced_brackets(&tokens));
    }
}
