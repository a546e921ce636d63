//! Undo stack: ordered snapshots of line-buffer state
//!
//! Pure value history with no knowledge of rendering. Callers record one
//! frame per logical user-visible edit (not per internal sub-step), so one
//! undo reverts one logical action. Depth is capped with oldest-first
//! eviction to bound memory over very long sessions.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Immutable snapshot of `(content, cursor)` taken before a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoFrame {
    chars: Vec<char>,
    cursor: usize,
}

impl UndoFrame {
    /// Capture a snapshot from raw parts
    pub fn new(chars: Vec<char>, cursor: usize) -> Self {
        Self { chars, cursor }
    }

    /// Content code points at capture time
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Cursor offset at capture time
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Capped stack of undo frames with oldest-first eviction
#[derive(Debug, Clone)]
pub struct UndoStack {
    frames: VecDeque<UndoFrame>,
    limit: usize,
}

impl UndoStack {
    /// Default depth cap
    pub const DEFAULT_LIMIT: usize = 100;

    /// Create a stack with the default depth cap
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Create a stack holding at most `limit` frames. A limit of 0 keeps
    /// no history (every record is immediately discarded).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            frames: VecDeque::new(),
            limit,
        }
    }

    /// Number of recorded frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if there is nothing to undo
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Push a frame, evicting the oldest when at capacity
    pub fn record(&mut self, frame: UndoFrame) {
        if self.limit == 0 {
            return;
        }
        if self.frames.len() == self.limit {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Pop the most recent frame; `None` when the stack is empty (a
    /// user-facing no-op, not an error)
    pub fn pop(&mut self) -> Option<UndoFrame> {
        self.frames.pop_back()
    }

    /// Drop all recorded frames (e.g. at the start of a new input session)
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
