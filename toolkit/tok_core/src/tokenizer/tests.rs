use std::cell::{Cell, RefCell};

use crate::cursor::Cursor;
use crate::matchers::{digit, literal};
use crate::tokenizer::Tokenizer;
use pretty_assertions::assert_eq;

// === observe ===

#[test]
fn observe_fires_once_on_success() {
    let calls = Cell::new(0usize);
    let t = digit().observe(|_| calls.set(calls.get() + 1));

    let mut cursor = Cursor::from("42");
    let span = t.tokenize(&mut cursor).expect("digit matches");
    assert_eq!(span.as_bytes(), b"4");
    assert_eq!(calls.get(), 1);
}

#[test]
fn observe_is_silent_on_failure() {
    let calls = Cell::new(0usize);
    let t = digit().observe(|_| calls.set(calls.get() + 1));

    let mut cursor = Cursor::from("x");
    assert_eq!(t.tokenize(&mut cursor), None);
    assert_eq!(calls.get(), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn observe_passes_the_result_through_unchanged() {
    let seen = RefCell::new(Vec::new());
    let t = literal("0x").observe(|span| seen.borrow_mut().extend_from_slice(span.as_bytes()));

    let mut cursor = Cursor::from("0x1F");
    let span = t.tokenize(&mut cursor).expect("literal matches");
    assert_eq!(span.as_bytes(), b"0x");
    assert_eq!(cursor.rest(), b"1F");
    assert_eq!(seen.into_inner(), b"0x");
}

#[test]
fn observe_adds_no_consumption_of_its_own() {
    let t = digit().observe(|_| {});
    let mut cursor = Cursor::from("7a");
    let span = t.tokenize(&mut cursor).expect("digit matches");
    assert_eq!(cursor.pos(), span.len());
}

// === Reuse by reference ===

#[test]
fn tokenizer_values_compose_by_reference() {
    let d = digit();
    let by_ref: &dyn Tokenizer = &d;

    let mut cursor = Cursor::from("12");
    assert!(by_ref.tokenize(&mut cursor).is_some());
    assert!(by_ref.tokenize(&mut cursor).is_some());
    assert!(cursor.is_empty());
}
