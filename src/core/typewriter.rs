//! Character-by-character text reveal.
//!
//! The animator is a lazy, finite sequence: starting from the empty string it
//! exposes one more character per interval until the full source is visible,
//! then never changes again. It owns no timer: the event loop polls it with
//! the current instant, so the reveal logic stays decoupled from the timing
//! mechanism and dropping the animator cleanly ends the sequence.

use std::time::{Duration, Instant};

use crate::core::constants::DEFAULT_CHAR_INTERVAL;

pub struct Typewriter {
    source: String,
    interval: Duration,
    total_chars: usize,
    revealed: usize,
    started: Option<Instant>,
}

impl Typewriter {
    pub fn new(source: impl Into<String>, interval: Duration) -> Self {
        let source = source.into();
        let total_chars = source.chars().count();
        Typewriter {
            source,
            interval,
            total_chars,
            revealed: 0,
            started: None,
        }
    }

    pub fn with_default_rate(source: impl Into<String>) -> Self {
        Self::new(source, DEFAULT_CHAR_INTERVAL)
    }

    /// The currently revealed prefix of the source string.
    pub fn visible(&self) -> &str {
        let end = self
            .source
            .char_indices()
            .nth(self.revealed)
            .map(|(idx, _)| idx)
            .unwrap_or(self.source.len());
        &self.source[..end]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total_chars
    }

    /// Advance the reveal to whatever `now` entitles it to. The first poll
    /// pins the epoch, so the sequence always starts from the empty string.
    /// Returns true when the visible prefix changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_complete() {
            return false;
        }
        let started = *self.started.get_or_insert(now);

        let due = if self.interval.is_zero() {
            self.total_chars
        } else {
            let elapsed = now.saturating_duration_since(started);
            (elapsed.as_nanos() / self.interval.as_nanos()) as usize
        };
        let due = due.min(self.total_chars);

        if due > self.revealed {
            self.revealed = due;
            true
        } else {
            false
        }
    }

    /// Begin the reveal again from the empty string, as on a fresh mount.
    pub fn restart(&mut self) {
        self.revealed = 0;
        self.started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Duration = Duration::from_millis(40);

    #[test]
    fn test_reveals_one_char_per_interval() {
        let mut tw = Typewriter::new("abc", D);
        let t0 = Instant::now();

        assert!(!tw.poll(t0));
        assert_eq!(tw.visible(), "");

        assert!(tw.poll(t0 + D));
        assert_eq!(tw.visible(), "a");

        assert!(tw.poll(t0 + 2 * D));
        assert_eq!(tw.visible(), "ab");

        assert!(tw.poll(t0 + 3 * D));
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_complete());
    }

    #[test]
    fn test_stops_emitting_after_completion() {
        let mut tw = Typewriter::new("abc", D);
        let t0 = Instant::now();
        tw.poll(t0 + 10 * D);
        assert_eq!(tw.visible(), "abc");

        assert!(!tw.poll(t0 + 20 * D));
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_catches_up_when_polled_late() {
        let mut tw = Typewriter::new("abcdef", D);
        let t0 = Instant::now();
        tw.poll(t0);
        assert!(tw.poll(t0 + 4 * D));
        assert_eq!(tw.visible(), "abcd");
    }

    #[test]
    fn test_teardown_ends_the_sequence() {
        // Dropping the animator between states means the next state is never
        // produced; there is no timer left behind to fire.
        let mut tw = Typewriter::new("abc", D);
        let t0 = Instant::now();
        tw.poll(t0 + 2 * D);
        assert_eq!(tw.visible(), "ab");
        drop(tw);
    }

    #[test]
    fn test_restart_begins_from_empty() {
        let mut tw = Typewriter::new("abc", D);
        let t0 = Instant::now();
        tw.poll(t0 + 3 * D);
        assert!(tw.is_complete());

        tw.restart();
        assert_eq!(tw.visible(), "");
        assert!(!tw.poll(t0 + 10 * D));
        assert_eq!(tw.visible(), "");
        assert!(tw.poll(t0 + 10 * D + D));
        assert_eq!(tw.visible(), "a");
    }

    #[test]
    fn test_reveal_respects_char_boundaries() {
        let mut tw = Typewriter::new("é★c", D);
        let t0 = Instant::now();
        tw.poll(t0 + D);
        assert_eq!(tw.visible(), "é");
        tw.poll(t0 + 2 * D);
        assert_eq!(tw.visible(), "é★");
    }

    #[test]
    fn test_zero_interval_reveals_everything() {
        let mut tw = Typewriter::new("abc", Duration::ZERO);
        assert!(tw.poll(Instant::now()));
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_empty_source_is_immediately_complete() {
        let mut tw = Typewriter::with_default_rate("");
        assert!(tw.is_complete());
        assert!(!tw.poll(Instant::now()));
        assert_eq!(tw.visible(), "");
    }
}
