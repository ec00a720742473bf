//! Tests for the search input.

use super::*;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn ctrl(c: char) -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

fn strip(s: &str) -> String {
    lipgloss_extras::lipgloss::strip_ansi(s)
}

fn typed(text: &str) -> Model {
    let mut input = new();
    input.focus();
    for ch in text.chars() {
        input.handle_key(&key(KeyCode::Char(ch)));
    }
    input
}

#[test]
fn test_new_default_values() {
    let input = new();
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert_eq!(input.width(), 1);
    assert!(!input.focused());
}

#[test]
fn test_typing_inserts_at_cursor() {
    let mut input = typed("tw");
    input.handle_key(&key(KeyCode::Left));
    input.handle_key(&key(KeyCode::Char('o')));
    assert_eq!(input.value(), "tow");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_blurred_input_ignores_keys() {
    let mut input = new();
    assert!(!input.handle_key(&key(KeyCode::Char('a'))));
    assert_eq!(input.value(), "");
}

#[test]
fn test_control_chars_are_not_inserted() {
    let mut input = typed("ab");
    assert!(!input.handle_key(&ctrl('z')));
    assert_eq!(input.value(), "ab");
}

#[test]
fn test_backspace_and_delete() {
    let mut input = typed("abc");
    input.handle_key(&key(KeyCode::Backspace));
    assert_eq!(input.value(), "ab");

    input.cursor_start();
    input.handle_key(&key(KeyCode::Delete));
    assert_eq!(input.value(), "b");

    // backspace at position 0 is a no-op but still an editing key
    assert!(input.handle_key(&key(KeyCode::Backspace)));
    assert_eq!(input.value(), "b");
}

#[test]
fn test_delete_word_backward() {
    let mut input = typed("red green  ");
    input.handle_key(&ctrl('w'));
    assert_eq!(input.value(), "red ");
    input.handle_key(&ctrl('w'));
    assert_eq!(input.value(), "");
}

#[test]
fn test_delete_before_and_after_cursor() {
    let mut input = typed("hello world");
    input.set_cursor(5);
    input.handle_key(&ctrl('k'));
    assert_eq!(input.value(), "hello");

    input.set_cursor(2);
    input.handle_key(&ctrl('u'));
    assert_eq!(input.value(), "llo");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_set_cursor_clamps() {
    let mut input = new();
    input.set_value("abc");
    input.set_cursor(99);
    assert_eq!(input.position(), 3);
}

#[test]
fn test_fit_to_content_tracks_placeholder_then_value() {
    let mut input = new();
    input.set_placeholder("Search");
    input.fit_to_content();
    assert_eq!(input.width(), 7);

    input.set_value("ab");
    input.fit_to_content();
    assert_eq!(input.width(), 3);

    input.set_min_width(5);
    input.fit_to_content();
    assert_eq!(input.width(), 5);
}

#[test]
fn test_fit_to_content_uses_display_width() {
    let mut input = new();
    input.set_value("日本");
    input.fit_to_content();
    assert_eq!(input.width(), 5);
}

#[test]
fn test_view_shows_placeholder_when_empty() {
    let mut input = new();
    input.set_placeholder("Search");
    input.fit_to_content();
    assert_eq!(strip(&input.view()).trim_end(), "Search");
}

#[test]
fn test_view_shows_value_padded_to_width() {
    let mut input = new();
    input.set_value("two");
    input.set_width(6);
    assert_eq!(strip(&input.view()), "two   ");
}

#[test]
fn test_update_forwards_key_messages() {
    let mut input = new();
    input.focus();
    let cmd = input.update(Box::new(key(KeyCode::Char('x'))));
    assert!(cmd.is_none());
    assert_eq!(input.value(), "x");
}

#[test]
fn test_component_focus_cycle() {
    use crate::Component;

    let mut input = new();
    assert!(Component::focus(&mut input).is_none());
    assert!(Component::focused(&input));
    Component::blur(&mut input);
    assert!(!input.focused());
}
