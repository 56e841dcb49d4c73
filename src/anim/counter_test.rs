use super::*;

#[test]
fn starts_at_zero_and_ends_at_target() {
    let counter = Counter::new(250);
    assert_eq!(counter.sample(0.0), 0);
    assert_eq!(counter.sample(DURATION_MS), 250);
    assert_eq!(counter.sample(DURATION_MS * 2.0), 250);
}

#[test]
fn fixed_rate_sampling_is_monotonic_and_never_overshoots() {
    let counter = Counter::new(250);
    let mut last = 0;
    let mut elapsed = 0.0;
    while !counter.is_done(elapsed) {
        let value = counter.sample(elapsed);
        assert!(value >= last, "monotonic at {elapsed}ms");
        assert!(value <= 250, "clamped at {elapsed}ms");
        last = value;
        #[allow(clippy::cast_precision_loss)]
        {
            elapsed += STEP_MS as f64;
        }
    }
    assert_eq!(counter.sample(elapsed), 250);
}

#[test]
fn negative_elapsed_clamps_to_zero() {
    assert_eq!(Counter::new(100).sample(-50.0), 0);
}

#[test]
fn zero_target_stays_at_zero() {
    let counter = Counter::new(0);
    assert_eq!(counter.sample(0.0), 0);
    assert_eq!(counter.sample(1000.0), 0);
    assert_eq!(counter.sample(DURATION_MS), 0);
}

// =============================================================
// Label parsing and formatting
// =============================================================

#[test]
fn split_keeps_the_surrounding_text() {
    assert_eq!(split_integer("250+"), Some(("", 250, "+")));
    assert_eq!(split_integer("15"), Some(("", 15, "")));
    assert_eq!(split_integer("over 1200 cups"), Some(("over ", 1200, " cups")));
}

#[test]
fn split_requires_digits() {
    assert_eq!(split_integer("no numbers here"), None);
    assert_eq!(split_integer(""), None);
}

#[test]
fn grouped_formatting_inserts_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1000), "1,000");
    assert_eq!(format_grouped(1_234_567), "1,234,567");
}
