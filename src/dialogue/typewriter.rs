//! Character-by-character text reveal on a fixed cadence.

use std::time::Duration;

/// Reveals one line of text one character at a time.
///
/// Timestamps are absolute (time since app start), so the reveal cadence
/// is independent of frame rate. At most one character appears per
/// `tick`, no matter how much time has passed since the last one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    line: String,
    /// Revealed characters, counted in `char`s rather than bytes
    revealed_chars: usize,
    total_chars: usize,
    reveal_interval: Duration,
    last_reveal: Duration,
}

impl Typewriter {
    pub fn new(line: impl Into<String>, reveal_interval: Duration) -> Self {
        let line = line.into();
        Self {
            total_chars: line.chars().count(),
            line,
            revealed_chars: 0,
            reveal_interval,
            last_reveal: Duration::ZERO,
        }
    }

    /// Switch to a new line with nothing revealed.
    ///
    /// The reveal clock keeps running across lines.
    pub fn set_line(&mut self, line: impl Into<String>) {
        self.line = line.into();
        self.total_chars = self.line.chars().count();
        self.revealed_chars = 0;
    }

    /// Reveal the next character if the interval has elapsed.
    ///
    /// Returns true when a character was revealed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.is_line_fully_revealed() {
            return false;
        }
        if now.saturating_sub(self.last_reveal) < self.reveal_interval {
            return false;
        }

        self.revealed_chars += 1;
        self.last_reveal = now;
        true
    }

    /// Skip the animation and show the whole line.
    pub fn reveal_all(&mut self) {
        self.revealed_chars = self.total_chars;
    }

    pub fn is_line_fully_revealed(&self) -> bool {
        self.revealed_chars >= self.total_chars
    }

    /// The currently visible prefix of the line.
    pub fn revealed_text(&self) -> &str {
        self.line
            .char_indices()
            .nth(self.revealed_chars)
            .map(|(i, _)| &self.line[..i])
            .unwrap_or(&self.line)
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
