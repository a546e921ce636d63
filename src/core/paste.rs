//! Paste register: recently deleted or cut spans of text
//!
//! Written by delete/kill operations, read by yank. Single-slot by default
//! (each deletion overwrites the previous entry), which matches the
//! observed delete/yank round-tripping; a ring of N slots is available for
//! kill-ring semantics. Not persisted across sessions.

use std::collections::VecDeque;

/// Holding area for recently deleted text, most-recent-last
#[derive(Debug, Clone)]
pub struct PasteRegister {
    entries: VecDeque<Vec<char>>,
    slots: usize,
}

impl PasteRegister {
    /// Create a single-slot register (the default policy)
    pub fn new() -> Self {
        Self::with_slots(1)
    }

    /// Create a register holding up to `slots` spans; older spans are
    /// evicted first. A slot count of 0 is treated as 1.
    pub fn with_slots(slots: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            slots: slots.max(1),
        }
    }

    /// Number of stored spans
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capture a deleted/cut span. Empty spans are ignored so a clamped
    /// no-op delete does not clobber the register.
    pub fn add_text(&mut self, span: Vec<char>) {
        if span.is_empty() {
            return;
        }
        if self.entries.len() == self.slots {
            self.entries.pop_front();
        }
        self.entries.push_back(span);
    }

    /// The most recent span, without removing it: repeated yanks paste the
    /// same text again. `None` when the register is empty.
    pub fn yank(&self) -> Option<&[char]> {
        self.entries.back().map(|s| s.as_slice())
    }
}

impl Default for PasteRegister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_empty_register_yanks_nothing() {
        let register = PasteRegister::new();
        assert!(register.is_empty());
        assert!(register.yank().is_none());
    }

    #[test]
    fn test_single_slot_overwrites() {
        let mut register = PasteRegister::new();
        register.add_text(span("f"));
        assert_eq!(register.yank().unwrap(), &['f']);

        register.add_text(span("bar"));
        assert_eq!(register.yank().unwrap(), &['b', 'a', 'r']);
        assert_eq!(register.len(), 1);
    }

    #[test]
    fn test_yank_does_not_consume() {
        let mut register = PasteRegister::new();
        register.add_text(span("x"));
        assert_eq!(register.yank().unwrap(), &['x']);
        assert_eq!(register.yank().unwrap(), &['x']);
    }

    #[test]
    fn test_empty_span_ignored() {
        let mut register = PasteRegister::new();
        register.add_text(span("keep"));
        register.add_text(Vec::new());
        assert_eq!(register.yank().unwrap(), span("keep").as_slice());
    }

    #[test]
    fn test_multi_slot_evicts_oldest() {
        let mut register = PasteRegister::with_slots(2);
        register.add_text(span("one"));
        register.add_text(span("two"));
        register.add_text(span("three"));
        assert_eq!(register.len(), 2);
        assert_eq!(register.yank().unwrap(), span("three").as_slice());
    }

    #[test]
    fn test_zero_slots_treated_as_one() {
        let mut register = PasteRegister::with_slots(0);
        register.add_text(span("a"));
        register.add_text(span("b"));
        assert_eq!(register.len(), 1);
        assert_eq!(register.yank().unwrap(), &['b']);
    }
}
