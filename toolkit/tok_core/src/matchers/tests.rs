use super::*;
use pretty_assertions::assert_eq;

/// Helper: apply `t` to `source` and return the matched bytes, if any.
fn matched<'src, T: Tokenizer>(t: &T, source: &'src str) -> Option<&'src [u8]> {
    let mut cursor = Cursor::from(source);
    t.tokenize(&mut cursor).map(|span| span.as_bytes())
}

// === satisfy ===

#[test]
fn satisfy_fails_on_empty_input() {
    let mut cursor = Cursor::from("");
    assert_eq!(satisfy(|b| b == b'x').tokenize(&mut cursor), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn satisfy_consumes_one_matching_byte() {
    let mut cursor = Cursor::from("xyz");
    let span = satisfy(|b| b == b'x')
        .tokenize(&mut cursor)
        .expect("leading byte satisfies the predicate");
    assert_eq!(span.as_bytes(), b"x");
    assert_eq!(span.len(), 1);
    assert_eq!(cursor.rest(), b"yz");
}

#[test]
fn satisfy_leaves_cursor_untouched_on_mismatch() {
    let mut cursor = Cursor::from("xyz");
    assert_eq!(satisfy(|b| b == b'q').tokenize(&mut cursor), None);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.rest(), b"xyz");
}

// === Character classes ===

#[test]
fn alphabet_matches_either_case() {
    assert_eq!(matched(&alphabet(), "aBCd12434"), Some(&b"a"[..]));
    assert_eq!(matched(&alphabet(), "G"), Some(&b"G"[..]));
    assert_eq!(matched(&alphabet(), "12-4"), None);
    assert_eq!(matched(&alphabet(), ""), None);
}

#[test]
fn lower_alphabet_rejects_upper_case() {
    assert_eq!(matched(&lower_alphabet(), "x"), Some(&b"x"[..]));
    assert_eq!(matched(&lower_alphabet(), "G"), None);
    assert_eq!(matched(&lower_alphabet(), "00"), None);
    assert_eq!(matched(&lower_alphabet(), ""), None);
}

#[test]
fn upper_alphabet_rejects_lower_case() {
    assert_eq!(matched(&upper_alphabet(), "G"), Some(&b"G"[..]));
    assert_eq!(matched(&upper_alphabet(), "x"), None);
    assert_eq!(matched(&upper_alphabet(), "12-4"), None);
}

#[test]
fn digit_matches_decimal_only() {
    assert_eq!(matched(&digit(), "9"), Some(&b"9"[..]));
    assert_eq!(matched(&digit(), "Text"), None);
    assert_eq!(matched(&digit(), ""), None);
}

#[test]
fn hex_digit_accepts_both_cases_and_decimals() {
    assert_eq!(matched(&hex_digit(), "A22b3a"), Some(&b"A"[..]));
    assert_eq!(matched(&hex_digit(), "b"), Some(&b"b"[..]));
    assert_eq!(matched(&hex_digit(), "7"), Some(&b"7"[..]));
    assert_eq!(matched(&hex_digit(), "g"), None);
}

#[test]
fn whitespace_covers_space_tab_cr_lf() {
    for source in [" ", "\t", "\r", "\n"] {
        assert!(matched(&whitespace(), source).is_some(), "{source:?}");
    }
    assert_eq!(matched(&whitespace(), "x"), None);
}

#[test]
fn newline_covers_cr_and_lf_only() {
    assert_eq!(matched(&newline(), "\r\n"), Some(&b"\r"[..]));
    assert_eq!(matched(&newline(), "\n"), Some(&b"\n"[..]));
    assert_eq!(matched(&newline(), " "), None);
}

#[test]
fn any_byte_matches_anything_but_empty_input() {
    assert_eq!(matched(&any_byte(), "z"), Some(&b"z"[..]));
    assert_eq!(matched(&any_byte(), "\""), Some(&b"\""[..]));
    assert_eq!(matched(&any_byte(), ""), None);

    let bytes = [0xFF];
    let mut cursor = Cursor::new(&bytes);
    let span = any_byte()
        .tokenize(&mut cursor)
        .expect("any_byte accepts arbitrary bytes");
    assert_eq!(span.as_bytes(), &[0xFF]);
}

#[test]
fn byte_matches_exactly_one_value() {
    assert_eq!(matched(&byte(b'-'), "-19C"), Some(&b"-"[..]));
    assert_eq!(matched(&byte(b'-'), "19C"), None);
    assert_eq!(matched(&byte(b'-'), ""), None);
}

// === literal ===

#[test]
fn literal_matches_the_exact_sequence() {
    let mut cursor = Cursor::from("+CGPADDR: 128");
    let span = literal("+CGPADDR: ")
        .tokenize(&mut cursor)
        .expect("input starts with the literal");
    assert_eq!(span.as_bytes(), b"+CGPADDR: ");
    assert_eq!(span.start(), 0);
    assert_eq!(cursor.rest(), b"128");
}

#[test]
fn literal_is_case_sensitive() {
    assert_eq!(matched(&literal("0x"), "0X1F"), None);
    assert_eq!(matched(&literal("0x"), "0x1F"), Some(&b"0x"[..]));
}

#[test]
fn literal_fails_when_input_is_shorter() {
    let mut cursor = Cursor::from("+CGP");
    assert_eq!(literal("+CGPADDR: ").tokenize(&mut cursor), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn literal_span_points_into_the_input() {
    let mut cursor = Cursor::from("ab0xcd");
    cursor.advance(2);
    let span = literal("0x")
        .tokenize(&mut cursor)
        .expect("literal present mid-input");
    assert_eq!(span.start(), 2);
    assert_eq!(span.end(), 4);
}

#[test]
fn empty_literal_matches_with_empty_span() {
    let mut cursor = Cursor::from("abc");
    let span = literal("")
        .tokenize(&mut cursor)
        .expect("empty literal always matches");
    assert!(span.is_empty());
    assert_eq!(cursor.pos(), 0);
}

// === one_of / none_of ===

#[test]
fn one_of_matches_any_set_member() {
    assert_eq!(matched(&one_of("+-"), "-3"), Some(&b"-"[..]));
    assert_eq!(matched(&one_of("+-"), "+3"), Some(&b"+"[..]));
    assert_eq!(matched(&one_of("+-"), "3"), None);
    assert_eq!(matched(&one_of("+-"), ""), None);
}

#[test]
fn none_of_matches_only_outside_the_set() {
    assert_eq!(matched(&none_of("\""), "this"), Some(&b"t"[..]));
    assert_eq!(matched(&none_of("\""), "\"quoted\""), None);
}

#[test]
fn none_of_fails_outright_on_empty_input() {
    let mut cursor = Cursor::from("");
    assert_eq!(none_of("\"").tokenize(&mut cursor), None);
    assert_eq!(cursor.pos(), 0);
}
