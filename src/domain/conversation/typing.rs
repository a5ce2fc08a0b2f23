//! Simulated typing delay for bot replies.

use std::time::Duration;

/// Delay model: a fixed base plus time proportional to the reply length,
/// capped at a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    base: Duration,
    chars_per_second: u32,
    cap: Duration,
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(500),
            chars_per_second: 20,
            cap: Duration::from_millis(3000),
        }
    }
}

impl TypingDelay {
    /// Creates a delay model. A zero rate is treated as one character per second.
    pub fn new(base: Duration, chars_per_second: u32, cap: Duration) -> Self {
        Self {
            base,
            chars_per_second: chars_per_second.max(1),
            cap,
        }
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn chars_per_second(&self) -> u32 {
        self.chars_per_second
    }

    pub fn cap(&self) -> Duration {
        self.cap
    }

    /// Delay before a reply of this text is shown.
    pub fn for_text(&self, text: &str) -> Duration {
        let chars = text.chars().count() as u64;
        let typing_ms = chars.saturating_mul(1000) / u64::from(self.chars_per_second);
        let typing = Duration::from_millis(typing_ms);
        (self.base + typing).min(self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_waits_base_only() {
        assert_eq!(TypingDelay::default().for_text(""), Duration::from_millis(500));
    }

    #[test]
    fn grows_fifty_ms_per_char() {
        let text = "a".repeat(20);
        assert_eq!(TypingDelay::default().for_text(&text), Duration::from_millis(1500));
    }

    #[test]
    fn long_text_is_capped() {
        let text = "a".repeat(400);
        assert_eq!(TypingDelay::default().for_text(&text), Duration::from_millis(3000));
    }

    #[test]
    fn uneven_rate_does_not_truncate_per_char() {
        let delay = TypingDelay::new(Duration::ZERO, 30, Duration::from_secs(10));
        assert_eq!(delay.for_text(&"a".repeat(30)), Duration::from_millis(1000));
    }

    #[test]
    fn fast_rate_still_scales_with_length() {
        let delay = TypingDelay::new(Duration::ZERO, 2000, Duration::from_secs(10));
        assert_eq!(delay.for_text("a"), Duration::ZERO);
        assert_eq!(delay.for_text(&"a".repeat(4000)), Duration::from_millis(2000));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let delay = TypingDelay::default();
        assert_eq!(delay.for_text("👋"), delay.for_text("a"));
    }

    #[test]
    fn zero_rate_is_clamped() {
        let delay = TypingDelay::new(Duration::ZERO, 0, Duration::from_secs(10));
        assert_eq!(delay.chars_per_second(), 1);
        assert_eq!(delay.for_text("ab"), Duration::from_secs(2));
    }
}
