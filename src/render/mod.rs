//! Terminal renderer: minimal diff emission
//!
//! Consumes rendered glyph state before and after a mutation and produces
//! the smallest set of terminal operations that brings the display in line
//! with the buffer, instead of repainting the whole line. The renderer is
//! stateless except for the last-known rendered snapshot it needs to
//! compute the next diff.
//!
//! Masking is resolved before glyphs reach this module: the renderer never
//! inspects raw buffer content, only the glyphs the prompt policy chose to
//! echo.

mod ansi;

use crate::core::{LineBuffer, Mask, Prompt};

/// One terminal operation in a render delta. Transient: encoded and
/// emitted, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Move the cursor left by n columns (`ESC [ n D`)
    MoveLeft(usize),
    /// Move the cursor right by n columns (`ESC [ n C`)
    MoveRight(usize),
    /// Move the cursor up by n rows (`ESC [ n A`)
    MoveUp(usize),
    /// Move the cursor down by n rows (`ESC [ n B`)
    MoveDown(usize),
    /// Write literal glyphs at the cursor
    Write(Vec<char>),
    /// Erase from the cursor to the end of the line (`ESC [ K`)
    EraseToEnd,
    /// Return the cursor to column 0 of the current row
    CarriageReturn,
    /// Move to column 0 of the next row
    Newline,
}

/// Encode a render delta into the code points written to the transport
pub fn encode(ops: &[RenderOp]) -> Vec<char> {
    let mut out = Vec::new();
    for op in ops {
        match op {
            RenderOp::MoveLeft(n) => ansi::cursor_left(&mut out, *n),
            RenderOp::MoveRight(n) => ansi::cursor_right(&mut out, *n),
            RenderOp::MoveUp(n) => ansi::cursor_up(&mut out, *n),
            RenderOp::MoveDown(n) => ansi::cursor_down(&mut out, *n),
            RenderOp::Write(glyphs) => out.extend_from_slice(glyphs),
            RenderOp::EraseToEnd => ansi::erase_to_end(&mut out),
            RenderOp::CarriageReturn => out.push('\r'),
            RenderOp::Newline => {
                out.push('\r');
                out.push('\n');
            }
        }
    }
    out
}

/// Last-known display state, in rendered glyph units
#[derive(Debug, Clone, Default)]
struct LastRender {
    /// Rendered content glyphs of the last emission (single segment on the
    /// diff path)
    glyphs: Vec<char>,
    /// Visual cursor offset within the rendered content
    cursor: usize,
    /// Rows occupied by the last full repaint
    rows: usize,
    /// Row the cursor was left on
    cursor_row: usize,
}

/// Computes minimal terminal deltas between successive buffer states
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<LastRender>,
}

impl Renderer {
    /// Create a renderer with no display state yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last-known display state. The next `draw_line` repaints
    /// from scratch; used when the prompt (and thus the echo policy) is
    /// swapped mid-session.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Diff a single-segment rendered state against the last emission.
    ///
    /// `glyphs` is the post-mask rendered content and `cursor` the visual
    /// cursor offset within it. A pure cursor move yields one relative
    /// movement op; a content change repaints from the first divergence
    /// point to the end, erases any leftover tail, and moves the cursor
    /// back into place. Content containing line-break markers must go
    /// through `draw_line` instead.
    pub fn diff(&mut self, glyphs: &[char], cursor: usize) -> Vec<RenderOp> {
        let last = self.last.take().unwrap_or_default();
        let mut ops = Vec::new();

        if glyphs == last.glyphs.as_slice() {
            push_horizontal(&mut ops, cursor as isize - last.cursor as isize);
        } else {
            let split = common_prefix(&last.glyphs, glyphs);
            push_horizontal(&mut ops, split as isize - last.cursor as isize);

            let mut at = split;
            if split < glyphs.len() {
                ops.push(RenderOp::Write(glyphs[split..].to_vec()));
                at = glyphs.len();
            }
            if glyphs.len() < last.glyphs.len() {
                ops.push(RenderOp::EraseToEnd);
            }
            push_horizontal(&mut ops, cursor as isize - at as isize);
        }

        tracing::trace!(ops = ops.len(), cursor, "render diff");
        self.last = Some(LastRender {
            glyphs: glyphs.to_vec(),
            cursor,
            rows: 1,
            cursor_row: 0,
        });
        ops
    }

    /// Full repaint: prompt plus the complete rendered content plus a
    /// trailing cursor-position move. Bypasses diffing; used for initial
    /// display and for mutations too disruptive to diff (anything touching
    /// a line-break marker). Stale rows from a previous taller repaint are
    /// cleared.
    pub fn draw_line(&mut self, prompt: &Prompt, buffer: &LineBuffer) -> Vec<RenderOp> {
        let last = self.last.take();
        let mut ops = Vec::new();

        // Reposition to column 0 of the prompt row before repainting
        if let Some(ref last) = last {
            ops.push(RenderOp::CarriageReturn);
            if last.cursor_row > 0 {
                ops.push(RenderOp::MoveUp(last.cursor_row));
            }
        }

        if !prompt.text().is_empty() {
            ops.push(RenderOp::Write(prompt.text().to_vec()));
        }

        if prompt.mask() == Mask::Silent {
            ops.push(RenderOp::EraseToEnd);
            self.last = Some(LastRender {
                glyphs: Vec::new(),
                cursor: 0,
                rows: 1,
                cursor_row: 0,
            });
            return ops;
        }

        let segments = buffer.segments();
        let rows = segments.len();
        let mut end_col = prompt.columns();
        let mut single_segment_glyphs = Vec::new();

        for (row, range) in segments.iter().enumerate() {
            if row > 0 {
                ops.push(RenderOp::Newline);
            }
            let rendered = prompt.render_content(buffer.slice(range.clone()));
            end_col = rendered.len() + if row == 0 { prompt.columns() } else { 0 };
            if rows == 1 {
                single_segment_glyphs = rendered.clone();
            }
            if !rendered.is_empty() {
                ops.push(RenderOp::Write(rendered));
            }
            ops.push(RenderOp::EraseToEnd);
        }

        // Clear rows left over from a previously taller repaint
        let extra = last.map_or(0, |l| l.rows.saturating_sub(rows));
        for _ in 0..extra {
            ops.push(RenderOp::CarriageReturn);
            ops.push(RenderOp::MoveDown(1));
            ops.push(RenderOp::EraseToEnd);
        }

        // Move from the end of the repaint back to the buffer cursor
        let (target_row, col) = buffer.cursor_position();
        let target_col = col + if target_row == 0 { prompt.columns() } else { 0 };
        if extra > 0 {
            // Sitting at column 0, `extra` rows below the last segment
            let up = rows - 1 + extra - target_row;
            if up > 0 {
                ops.push(RenderOp::MoveUp(up));
            }
            push_horizontal(&mut ops, target_col as isize);
        } else {
            let up = rows - 1 - target_row;
            if up > 0 {
                ops.push(RenderOp::MoveUp(up));
            }
            push_horizontal(&mut ops, target_col as isize - end_col as isize);
        }

        tracing::debug!(rows, cursor_row = target_row, "full line repaint");
        self.last = Some(LastRender {
            glyphs: single_segment_glyphs,
            cursor: buffer.cursor().min(buffer.len()),
            rows,
            cursor_row: target_row,
        });
        ops
    }
}

fn push_horizontal(ops: &mut Vec<RenderOp>, delta: isize) {
    if delta < 0 {
        ops.push(RenderOp::MoveLeft(delta.unsigned_abs()));
    } else if delta > 0 {
        ops.push(RenderOp::MoveRight(delta as usize));
    }
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
