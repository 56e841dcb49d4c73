use super::*;

fn frames(samples: &[f64]) -> Vec<ScrollFrame> {
    let mut tracker = ScrollTracker::new();
    samples.iter().map(|&o| tracker.sample(o)).collect()
}

// =============================================================
// Compact flag
// =============================================================

#[test]
fn compact_is_pure_function_of_offset() {
    for (offset, expected) in [(0.0, false), (100.0, false), (100.5, true), (5000.0, true)] {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(offset).compact, expected, "offset {offset}");
    }
}

#[test]
fn compact_ignores_direction_and_history() {
    let all = frames(&[500.0, 150.0, 50.0, 150.0]);
    let compact: Vec<bool> = all.iter().map(|f| f.compact).collect();
    assert_eq!(compact, vec![true, true, false, true]);
}

// =============================================================
// Hidden flag
// =============================================================

#[test]
fn hidden_requires_downward_movement_past_threshold() {
    // First sample moves down from the implicit previous of 0.
    let all = frames(&[200.0, 350.0, 400.0]);
    assert!(!all[0].hidden, "below 300 never hides");
    assert!(all[1].hidden);
    assert!(all[2].hidden);
}

#[test]
fn upward_sample_shows_navbar_regardless_of_magnitude() {
    let all = frames(&[1000.0, 900.0]);
    assert!(all[0].hidden);
    assert!(!all[1].hidden, "scrolling up at 900px must reveal");
}

#[test]
fn downward_below_threshold_does_not_hide() {
    let all = frames(&[100.0, 250.0, 300.0]);
    assert!(all.iter().all(|f| !f.hidden));
}

#[test]
fn first_sample_compares_against_zero() {
    let mut tracker = ScrollTracker::new();
    assert!(tracker.sample(400.0).hidden);
}

// =============================================================
// Back-to-top flag
// =============================================================

#[test]
fn back_to_top_tracks_threshold_only() {
    let all = frames(&[0.0, 300.0, 301.0, 250.0]);
    let visible: Vec<bool> = all.iter().map(|f| f.back_to_top).collect();
    assert_eq!(visible, vec![false, false, true, false]);
}

// =============================================================
// Active section
// =============================================================

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 600.0),
        SectionBounds::new("about", 600.0, 500.0),
        SectionBounds::new("contact", 1100.0, 700.0),
    ]
}

#[test]
fn no_section_matches_above_the_page() {
    // Offset 0 is not strictly greater than home's adjusted top of -100... it is.
    // But an offset left of every window yields None.
    assert_eq!(active_section(-200.0, &page()), None);
}

#[test]
fn section_activates_within_margin_above_its_top() {
    let sections = page();
    // about spans (500, 1000] after the 100px margin shift.
    assert_eq!(active_section(500.0, &sections), Some("home"));
    assert_eq!(active_section(500.5, &sections), Some("about"));
    assert_eq!(active_section(1000.0, &sections), Some("about"));
    assert_eq!(active_section(1000.5, &sections), Some("contact"));
}

#[test]
fn beyond_last_section_nothing_is_active() {
    assert_eq!(active_section(2000.0, &page()), None);
}

#[test]
fn later_section_wins_on_overlap() {
    let overlapping = vec![
        SectionBounds::new("a", 0.0, 1000.0),
        SectionBounds::new("b", 400.0, 400.0),
    ];
    assert_eq!(active_section(500.0, &overlapping), Some("b"));
    // Outside b's window, a is active again.
    assert_eq!(active_section(900.0, &overlapping), Some("a"));
}

#[test]
fn empty_section_list_is_never_active() {
    assert_eq!(active_section(500.0, &[]), None);
}
