//! Line buffer: editable code-point content plus cursor
//!
//! The buffer owns one logical input line as a flat sequence of Unicode
//! scalar values. Multi-line input is represented by embedded `\n` markers;
//! the segment view is derived on demand and never mutated separately, so
//! it cannot drift out of sync with the content.
//!
//! Every operation clamps instead of failing: out-of-range cursor moves and
//! deletes past either end are routine editing situations, not errors.

use std::ops::Range;

use super::undo::UndoFrame;

/// Editable line content with a cursor offset.
///
/// Invariant: `0 <= cursor <= chars.len()` at all times. Operations that
/// would violate this clamp the cursor to the nearest valid bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    /// Content as code points; may contain `\n` line-break markers
    chars: Vec<char>,
    /// Cursor offset in code points, in `[0, chars.len()]`
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty buffer with the cursor at offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of code points in the buffer
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer holds no content
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current cursor offset in code points
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The content as code points
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The content as an owned string
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Code points in the given range, clamped to the buffer bounds
    pub fn slice(&self, range: Range<usize>) -> &[char] {
        let start = range.start.min(self.chars.len());
        let end = range.end.min(self.chars.len()).max(start);
        &self.chars[start..end]
    }

    /// Splice `text` into the content at the cursor and advance the cursor
    /// past the inserted text. Empty `text` is a no-op.
    pub fn insert_str(&mut self, text: &str) {
        let at = self.cursor;
        self.insert_at(at, text);
    }

    /// Splice `text` into the content at `at` (clamped to the buffer
    /// bounds) and move the cursor to the end of the inserted text.
    pub fn insert_at(&mut self, at: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = at.min(self.chars.len());
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.chars.splice(at..at, inserted);
        self.cursor = at + count;
    }

    /// Remove `|count|` code points: backward from the cursor when `count`
    /// is negative, forward from the cursor when positive. Clamps to the
    /// buffer bounds, so deleting backward at offset 0 and deleting forward
    /// past the end both degrade to shorter (possibly empty) removals.
    ///
    /// Returns the removed span so callers can route it to the paste
    /// register.
    pub fn delete(&mut self, count: isize) -> Vec<char> {
        if count < 0 {
            let n = count.unsigned_abs().min(self.cursor);
            let start = self.cursor - n;
            let removed: Vec<char> = self.chars.drain(start..self.cursor).collect();
            self.cursor = start;
            removed
        } else {
            let n = (count as usize).min(self.chars.len() - self.cursor);
            self.chars.drain(self.cursor..self.cursor + n).collect()
        }
    }

    /// Move the cursor by `delta`, clamping to `[0, len]`.
    ///
    /// Returns the *applied* delta (`new_cursor - old_cursor`), which may
    /// be smaller in magnitude than requested. Callers need the applied
    /// value to compute terminal cursor movement.
    pub fn move_cursor(&mut self, delta: isize) -> isize {
        let old = self.cursor;
        let target = old as isize + delta;
        self.cursor = target.clamp(0, self.chars.len() as isize) as usize;
        self.cursor as isize - old as isize
    }

    /// Place the cursor at an absolute offset, clamped to `[0, len]`.
    /// Returns the offset actually applied.
    pub fn set_cursor(&mut self, offset: usize) -> usize {
        self.cursor = offset.min(self.chars.len());
        self.cursor
    }

    /// Check if the content contains a line-break marker
    pub fn has_line_break(&self) -> bool {
        self.chars.contains(&'\n')
    }

    /// Derived multi-line view: code-point ranges of each visual segment,
    /// split on `\n` markers (the markers belong to no segment). A buffer
    /// without markers yields one segment covering the whole content.
    pub fn segments(&self) -> Vec<Range<usize>> {
        let mut segments = Vec::new();
        let mut start = 0;
        for (i, &c) in self.chars.iter().enumerate() {
            if c == '\n' {
                segments.push(start..i);
                start = i + 1;
            }
        }
        segments.push(start..self.chars.len());
        segments
    }

    /// Cursor position as (segment row, column within segment)
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut row = 0;
        let mut line_start = 0;
        for (i, &c) in self.chars.iter().enumerate() {
            if i >= self.cursor {
                break;
            }
            if c == '\n' {
                row += 1;
                line_start = i + 1;
            }
        }
        (row, self.cursor - line_start)
    }

    /// Snapshot the current state for the undo stack
    pub fn snapshot(&self) -> UndoFrame {
        UndoFrame::new(self.chars.clone(), self.cursor)
    }

    /// Restore a previously captured snapshot
    pub fn restore(&mut self, frame: &UndoFrame) {
        self.chars = frame.chars().to_vec();
        self.cursor = frame.cursor().min(self.chars.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new() {
        let buf = LineBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_insert_moves_cursor() {
        let mut buf = LineBuffer::new();
        buf.insert_str("foo");
        assert_eq!(buf.as_string(), "foo");
        assert_eq!(buf.cursor(), 3);

        buf.insert_str("bar");
        assert_eq!(buf.as_string(), "foobar");
        assert_eq!(buf.cursor(), 6);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut buf = LineBuffer::new();
        buf.insert_str("food");
        buf.move_cursor(-3);
        buf.insert_str("XY");
        assert_eq!(buf.as_string(), "fXYood");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abc");
        buf.move_cursor(-1);
        buf.insert_str("");
        assert_eq!(buf.as_string(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_insert_at_clamps_offset() {
        let mut buf = LineBuffer::new();
        buf.insert_at(99, "abc");
        assert_eq!(buf.as_string(), "abc");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_delete_backward() {
        let mut buf = LineBuffer::new();
        buf.insert_str("foo0");
        buf.set_cursor(1);
        let removed = buf.delete(-1);
        assert_eq!(removed, vec!['f']);
        assert_eq!(buf.as_string(), "oo0");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abc");
        buf.set_cursor(0);
        let removed = buf.delete(-1);
        assert!(removed.is_empty());
        assert_eq!(buf.as_string(), "abc");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abcdef");
        buf.set_cursor(2);
        let removed = buf.delete(3);
        assert_eq!(removed, vec!['c', 'd', 'e']);
        assert_eq!(buf.as_string(), "abf");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_delete_forward_past_end_truncates() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abc");
        buf.set_cursor(1);
        let removed = buf.delete(100);
        assert_eq!(removed, vec!['b', 'c']);
        assert_eq!(buf.as_string(), "a");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_delete_backward_clamps() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abc");
        let removed = buf.delete(-100);
        assert_eq!(removed.len(), 3);
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_move_cursor_returns_applied_delta() {
        let mut buf = LineBuffer::new();
        buf.insert_str("foo0");
        assert_eq!(buf.move_cursor(-1), -1);
        assert_eq!(buf.cursor(), 3);

        // Clamped: only 3 steps available
        assert_eq!(buf.move_cursor(-10), -3);
        assert_eq!(buf.cursor(), 0);

        assert_eq!(buf.move_cursor(100), 4);
        assert_eq!(buf.cursor(), 4);

        assert_eq!(buf.move_cursor(0), 0);
    }

    #[test]
    fn test_insert_delete_round_trip() {
        let mut buf = LineBuffer::new();
        buf.insert_str("base");
        buf.set_cursor(2);
        let before = buf.clone();

        buf.insert_str("xyz");
        buf.delete(-3);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_slice_clamps() {
        let mut buf = LineBuffer::new();
        buf.insert_str("hello");
        assert_eq!(buf.slice(1..3), &['e', 'l']);
        assert_eq!(buf.slice(3..99), &['l', 'o']);
        assert!(buf.slice(7..9).is_empty());
    }

    #[test]
    fn test_segments_single_line() {
        let mut buf = LineBuffer::new();
        buf.insert_str("abc");
        assert_eq!(buf.segments(), vec![0..3]);
        assert!(!buf.has_line_break());
    }

    #[test]
    fn test_segments_multi_line() {
        let mut buf = LineBuffer::new();
        buf.insert_str("ab\ncde\n");
        assert!(buf.has_line_break());
        assert_eq!(buf.segments(), vec![0..2, 3..6, 7..7]);
    }

    #[test]
    fn test_cursor_position_multi_line() {
        let mut buf = LineBuffer::new();
        buf.insert_str("ab\ncde");
        buf.set_cursor(5);
        assert_eq!(buf.cursor_position(), (1, 2));

        buf.set_cursor(2);
        assert_eq!(buf.cursor_position(), (0, 2));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut buf = LineBuffer::new();
        buf.insert_str("state");
        buf.set_cursor(2);
        let frame = buf.snapshot();

        buf.delete(3);
        buf.insert_str("other");
        buf.restore(&frame);

        assert_eq!(buf.as_string(), "state");
        assert_eq!(buf.cursor(), 2);
    }
}
