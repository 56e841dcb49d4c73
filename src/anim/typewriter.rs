#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay between the page reveal and the first typed character.
pub const START_DELAY_MS: u64 = 1000;

/// Fixed interval between characters.
pub const TICK_MS: u64 = 100;

/// Hero title typing effect.
///
/// One character becomes visible per [`TICK_MS`] tick; `visible_at` is a
/// pure function of elapsed time since the first tick, so the driving loop
/// only needs to sample it. The effect runs once and is not restartable.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// How many characters are visible `elapsed_ms` after the effect
    /// started. The first character appears on the first tick.
    pub fn chars_at(&self, elapsed_ms: u64) -> usize {
        let ticks = (elapsed_ms / TICK_MS + 1) as usize;
        ticks.min(self.char_count())
    }

    /// Visible prefix after `elapsed_ms`, never splitting a character.
    pub fn visible_at(&self, elapsed_ms: u64) -> &str {
        self.prefix(self.chars_at(elapsed_ms))
    }

    /// Prefix of the first `chars` characters, clamped to the full text.
    pub fn prefix(&self, chars: usize) -> &str {
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self, elapsed_ms: u64) -> bool {
        self.chars_at(elapsed_ms) == self.char_count()
    }
}
