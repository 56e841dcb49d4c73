#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Total count-up duration.
pub const DURATION_MS: f64 = 2000.0;

/// Fixed sampling interval for the driving loop.
pub const STEP_MS: u64 = 16;

/// Animated statistic counter: 0 up to `target` over [`DURATION_MS`].
///
/// Every sample is clamped to the target, so floating-point accumulation can
/// never overshoot at any intermediate step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u64,
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    pub fn target(self) -> u64 {
        self.target
    }

    /// Value to display `elapsed_ms` into the animation.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(self, elapsed_ms: f64) -> u64 {
        if elapsed_ms >= DURATION_MS {
            return self.target;
        }
        let progress = (elapsed_ms.max(0.0) / DURATION_MS).clamp(0.0, 1.0);
        let value = (self.target as f64 * progress).floor() as u64;
        value.min(self.target)
    }

    pub fn is_done(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= DURATION_MS
    }
}

/// Split a stat label around its first run of digits, e.g. `"over 250+"`
/// -> `("over ", 250, "+")`. The surrounding text renders unchanged while
/// the integer animates.
pub fn split_integer(text: &str) -> Option<(&str, u64, &str)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let end = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| start + i);
    text[start..end]
        .parse()
        .ok()
        .map(|n| (&text[..start], n, &text[end..]))
}

/// Thousands-separated rendering, e.g. `1234567` -> `"1,234,567"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
