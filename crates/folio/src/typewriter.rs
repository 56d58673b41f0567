//! Typed-out hero tagline.

use std::time::{Duration, Instant};

/// Reveals a string one character per interval.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    interval: Duration,
    started: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        Self {
            text: text.into(),
            interval,
            started: Instant::now(),
        }
    }

    /// Characters revealed after `elapsed`. The first tick shows nothing;
    /// each later tick reveals one more character.
    pub fn revealed_chars(&self, elapsed: Duration) -> usize {
        let total = self.text.chars().count();
        if self.interval.is_zero() {
            return total;
        }
        let typed = (elapsed.as_nanos() / self.interval.as_nanos()).saturating_sub(1);
        typed.min(total as u128) as usize
    }

    /// Visible prefix after `elapsed`.
    pub fn visible_at(&self, elapsed: Duration) -> &str {
        let chars = self.revealed_chars(elapsed);
        match self.text.char_indices().nth(chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Visible prefix right now.
    pub fn visible(&self) -> &str {
        self.visible_at(self.started.elapsed())
    }

    pub fn is_done(&self) -> bool {
        self.revealed_chars(self.started.elapsed()) == self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_reveals_one_char_per_interval() {
        let tw = Typewriter::new("Full Stack", TICK);
        assert_eq!(tw.visible_at(Duration::ZERO), "");
        assert_eq!(tw.visible_at(Duration::from_millis(100)), "");
        assert_eq!(tw.visible_at(Duration::from_millis(199)), "");
        assert_eq!(tw.visible_at(Duration::from_millis(200)), "F");
        assert_eq!(tw.visible_at(Duration::from_millis(550)), "Full");
        assert_eq!(tw.visible_at(Duration::from_millis(1000)), "Full Stac");
        assert_eq!(tw.visible_at(Duration::from_millis(1100)), "Full Stack");
        assert_eq!(tw.visible_at(Duration::from_secs(60)), "Full Stack");
    }

    #[test]
    fn test_multibyte_text() {
        let tw = Typewriter::new("héllo", TICK);
        assert_eq!(tw.visible_at(Duration::from_millis(300)), "hé");
        assert_eq!(tw.revealed_chars(Duration::from_secs(1)), 5);
    }

    #[test]
    fn test_zero_interval_is_complete() {
        let tw = Typewriter::new("done", Duration::ZERO);
        assert_eq!(tw.visible_at(Duration::ZERO), "done");
        assert!(tw.is_done());
    }
}
