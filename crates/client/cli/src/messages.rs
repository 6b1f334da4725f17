//! Bounded log of recent game events for the message panel.

use std::collections::VecDeque;

const MAX_MESSAGES: usize = 32;

/// Rolling list of user-facing event lines.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == MAX_MESSAGES {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Up to `count` most recent entries, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(count).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new();
        log.push("one");
        log.push("two");
        log.push("three");

        let recent: Vec<&str> = log.recent(2).collect();
        assert_eq!(recent, vec!["three", "two"]);
    }

    #[test]
    fn the_log_is_bounded() {
        let mut log = MessageLog::new();
        for n in 0..(MAX_MESSAGES + 10) {
            log.push(format!("message {n}"));
        }
        assert_eq!(log.recent(usize::MAX).count(), MAX_MESSAGES);
    }
}
