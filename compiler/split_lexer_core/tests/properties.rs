//! Property-based tests for the comment-splitting scanner.
//!
//! Sources are generated from fragments that are dense in comment markers,
//! literal delimiters, and multi-byte characters, so that nesting,
//! fallback, and resumption edge cases come up often. Checked:
//! 1. Coverage: token texts concatenate back to the window
//! 2. Depth invariant after every token
//! 3. Resumability from any token boundary
//! 4. Merged and lexeme granularity tag every byte the same way

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use split_lexer_core::{
    tokenize, LexicalMode, ScanOptions, ScanState, Scanner, Token, TokenKind,
};

// -- Source Generation Strategies --

fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "/*", "*/", "/**", "/**/", "//", "/", "*", "\n", "\r\n", "\"", "\"\"\"", "'", "\\",
        "u000A", "`", "#!", "!#", "::", "x", " ", "\u{e9}", "\u{1F600}",
    ])
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => proptest::collection::vec(fragment_strategy(), 0..48)
            .prop_map(|fragments| fragments.concat()),
        1 => any::<String>(),
    ]
}

fn len(source: &str) -> u32 {
    u32::try_from(source.len()).unwrap()
}

/// Token kind of every byte of `source`.
fn byte_kinds(source: &str, tokens: &[Token]) -> Vec<TokenKind> {
    let mut kinds = Vec::with_capacity(source.len());
    for token in tokens {
        kinds.extend(std::iter::repeat(token.kind).take(token.len() as usize));
    }
    kinds
}

proptest! {
    #[test]
    fn tokens_cover_source(source in source_strategy()) {
        let tokens = tokenize(&source);
        let mut offset = 0;
        let mut text = String::with_capacity(source.len());
        for token in &tokens {
            prop_assert_eq!(token.start(), offset);
            prop_assert!(!token.is_empty(), "empty token at {}", offset);
            text.push_str(token.span.slice(&source).unwrap());
            offset = token.end();
        }
        prop_assert_eq!(offset, len(&source));
        prop_assert_eq!(text, source);
    }

    #[test]
    fn depth_matches_mode_after_every_token(source in source_strategy()) {
        let mut scanner = Scanner::new(&source);
        let mut opened = 0u32;
        let mut closed = 0u32;
        while let Some(token) = scanner.advance() {
            prop_assert_eq!(
                scanner.nesting_depth() == 0,
                scanner.current_mode() == LexicalMode::Initial
            );
            if token.kind.is_comment() {
                match scanner.token_text() {
                    "/*" | "/**" => opened += 1,
                    "*/" => closed += 1,
                    _ => {}
                }
            }
        }
        prop_assert_eq!(scanner.nesting_depth(), opened - closed);
    }

    #[test]
    fn resume_matches_single_pass(source in source_strategy(), cut in any::<prop::sample::Index>()) {
        let expected = tokenize(&source);
        let split_at = cut.index(expected.len() + 1);

        let mut first = Scanner::new(&source);
        let mut tokens: Vec<Token> = first.by_ref().take(split_at).collect();
        let snapshot: ScanState = first.state();

        let mut second = Scanner::new("");
        second.resume(&source, len(&source), snapshot);
        tokens.extend(second.by_ref());

        prop_assert_eq!(tokens, expected);
    }

    #[test]
    fn granularity_does_not_change_kinds(source in source_strategy()) {
        let merged = tokenize(&source);
        let lexemes: Vec<Token> = Scanner::with_options(&source, ScanOptions::lexemes()).collect();

        prop_assert!(lexemes.len() >= merged.len());
        prop_assert_eq!(byte_kinds(&source, &merged), byte_kinds(&source, &lexemes));

        // Every merged boundary is also a lexeme boundary.
        let lexeme_ends: Vec<u32> = lexemes.iter().map(|token| token.end()).collect();
        for token in &merged {
            prop_assert!(lexeme_ends.binary_search(&token.end()).is_ok());
        }
    }

    #[test]
    fn windowed_scan_stays_inside_window(source in source_strategy(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let boundaries: Vec<u32> = source
            .char_indices()
            .map(|(offset, _)| u32::try_from(offset).unwrap())
            .chain(std::iter::once(len(&source)))
            .collect();
        let x = boundaries[a.index(boundaries.len())];
        let y = boundaries[b.index(boundaries.len())];
        let (start, end) = (x.min(y), x.max(y));

        let mut scanner = Scanner::new("");
        scanner.reset(&source, start, end, LexicalMode::Initial);
        let mut offset = start;
        while let Some(token) = scanner.advance() {
            prop_assert_eq!(token.start(), offset);
            prop_assert!(token.end() <= end);
            offset = token.end();
        }
        prop_assert_eq!(offset, end);
    }
}
