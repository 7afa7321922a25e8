use pretty_assertions::assert_eq;

use super::*;

#[test]
fn lex_lists_merged_tokens() {
    let out = render_tokens("a.src", "x /* c */", Granularity::Merged);
    assert_eq!(
        out,
        "Tokens for 'a.src' (4 tokens):\n\
         \x20 PlainContent @ 0..2 \"x \"\n\
         \x20 BlockComment @ 2..4 \"/*\"\n\
         \x20 BlockComment @ 4..7 \" c \"\n\
         \x20 BlockComment @ 7..9 \"*/\"\n"
    );
}

#[test]
fn lex_lists_lexemes() {
    let out = render_tokens("a.src", "ab//", Granularity::Lexeme);
    assert_eq!(
        out,
        "Tokens for 'a.src' (3 tokens):\n\
         \x20 PlainContent @ 0..1 \"a\"\n\
         \x20 PlainContent @ 1..2 \"b\"\n\
         \x20 LineComment @ 2..4 \"//\"\n"
    );
}

#[test]
fn lex_empty_source() {
    assert_eq!(
        render_tokens("e.src", "", Granularity::Merged),
        "Tokens for 'e.src' (0 tokens):\n"
    );
}

#[test]
fn stats_counts_tokens_and_bytes() {
    let out = render_stats("a.src", "x // l\n/** d */");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Stats for 'a.src' (15 bytes):");
    assert_eq!(lines[1], "  plain content       2 tokens        3 bytes");
    assert_eq!(lines[2], "  line comment        1 tokens        4 bytes");
    assert_eq!(lines[3], "  block comment       0 tokens        0 bytes");
    assert_eq!(lines[4], "  doc comment         3 tokens        8 bytes");
    assert_eq!(lines[5], "Final state: Initial");
    assert_eq!(lines.len(), 6);
}

#[test]
fn stats_reports_unterminated_comment() {
    let out = render_stats("u.src", "/** a /* b");
    assert!(out.contains("Final state: InBlockComment, depth 2, Doc comment"));
    assert!(out.contains("warning: end of input inside an unterminated doc comment"));
}
