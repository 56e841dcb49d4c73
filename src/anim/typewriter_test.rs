use super::*;

#[test]
fn first_character_appears_on_the_first_tick() {
    let tw = Typewriter::new("hello");
    assert_eq!(tw.visible_at(0), "h");
    assert_eq!(tw.visible_at(99), "h");
    assert_eq!(tw.visible_at(100), "he");
}

#[test]
fn one_character_per_tick_until_complete() {
    let tw = Typewriter::new("abc");
    assert_eq!(tw.visible_at(0), "a");
    assert_eq!(tw.visible_at(100), "ab");
    assert_eq!(tw.visible_at(200), "abc");
    assert_eq!(tw.visible_at(10_000), "abc");
}

#[test]
fn completion_is_sticky() {
    let tw = Typewriter::new("abc");
    assert!(!tw.is_done(100));
    assert!(tw.is_done(200));
    assert!(tw.is_done(u64::MAX / TICK_MS));
}

#[test]
fn multibyte_characters_are_never_split() {
    let tw = Typewriter::new("café ☕!");
    for elapsed in (0..800).step_by(100) {
        // Indexing would panic on a non-boundary; also check the prefix is
        // a char-count prefix rather than a byte-count one.
        let visible = tw.visible_at(elapsed);
        assert!(tw.char_count() >= visible.chars().count());
    }
    assert_eq!(tw.visible_at(300), "café");
    assert_eq!(tw.visible_at(400), "café ");
    assert_eq!(tw.visible_at(500), "café ☕");
    assert_eq!(tw.visible_at(600), "café ☕!");
}

#[test]
fn empty_text_is_immediately_done() {
    let tw = Typewriter::new("");
    assert_eq!(tw.visible_at(0), "");
    assert!(tw.is_done(0));
}

#[test]
fn prefix_clamps_to_full_text() {
    let tw = Typewriter::new("ab");
    assert_eq!(tw.prefix(0), "");
    assert_eq!(tw.prefix(1), "a");
    assert_eq!(tw.prefix(99), "ab");
}
