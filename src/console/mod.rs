//! Console buffer facade
//!
//! Composes the line buffer, undo stack, paste register, prompt policy,
//! and renderer into the editing primitives that action handlers call.
//! Every mutation updates the buffer, re-checks the masking policy, and
//! forwards the before/after state to the renderer for emission over the
//! injected `Connection`.
//!
//! A console buffer is strictly single-threaded: one key event produces
//! one sequence of mutations and one emission before the next is
//! processed. Hosts driving input from multiple sources must serialize
//! calls themselves.

use crate::core::{LineBuffer, PasteRegister, Prompt, UndoStack};
use crate::render::{self, RenderOp, Renderer};
use crate::EditorConfig;

/// Terminal dimensions reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Size {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Narrow transport interface consumed by this core: the current terminal
/// size and a sink for output code points (literal text and escape
/// sequences). Injected at construction; there is no process-wide
/// connection state.
pub trait Connection {
    /// Current terminal size
    fn size(&self) -> Size;

    /// Write output code points to the terminal. A failure here means the
    /// session can no longer render state and is propagated, never
    /// swallowed.
    fn write(&mut self, output: &[char]) -> std::io::Result<()>;
}

/// Error type for console operations
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Failed to write to transport: {0}")]
    Transport(#[from] std::io::Error),
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Editing facade over one input session
pub struct ConsoleBuffer {
    buffer: LineBuffer,
    prompt: Prompt,
    undo: UndoStack,
    paste: PasteRegister,
    renderer: Renderer,
    connection: Box<dyn Connection>,
}

impl ConsoleBuffer {
    /// Create a console buffer with default undo/paste configuration
    pub fn new(connection: Box<dyn Connection>, prompt: Prompt) -> Self {
        Self::with_config(connection, prompt, &EditorConfig::default())
    }

    /// Create a console buffer with explicit configuration
    pub fn with_config(
        connection: Box<dyn Connection>,
        prompt: Prompt,
        config: &EditorConfig,
    ) -> Self {
        Self {
            buffer: LineBuffer::new(),
            prompt,
            undo: UndoStack::with_limit(config.undo_limit),
            paste: PasteRegister::with_slots(config.paste_slots),
            renderer: Renderer::new(),
            connection,
        }
    }

    /// The line buffer being edited
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The active prompt
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Swap the prompt (and with it the masking policy) for the next input
    /// event, e.g. switching from username to password entry. The renderer
    /// forgets its display state so the next `draw_line` repaints from
    /// scratch.
    pub fn set_prompt(&mut self, prompt: Prompt) {
        self.prompt = prompt;
        self.renderer.reset();
    }

    /// The paste register shared across editing actions
    pub fn paste_register(&self) -> &PasteRegister {
        &self.paste
    }

    /// Mutable access for actions that capture deleted spans
    pub fn paste_register_mut(&mut self) -> &mut PasteRegister {
        &mut self.paste
    }

    /// The undo history for this session
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    /// Terminal size as reported by the transport
    pub fn size(&self) -> Size {
        self.connection.size()
    }

    /// Record the current buffer state as one undoable unit. Called once
    /// per logical user-visible edit by the action layer, so a multi-step
    /// action groups into a single undo.
    pub fn add_action_to_undo_stack(&mut self) {
        self.undo.record(self.buffer.snapshot());
    }

    /// Insert `text` at the cursor and echo it per the masking policy.
    /// Under a silent mask the cursor is pinned to the end of the content
    /// and nothing is emitted.
    pub fn write_string(&mut self, text: &str) -> ConsoleResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let disruptive = self.buffer.has_line_break() || text.contains('\n');
        self.buffer.insert_str(text);

        if self.prompt.mask().pins_cursor() {
            let len = self.buffer.len();
            self.buffer.set_cursor(len);
            return Ok(());
        }
        if disruptive {
            return self.draw_line();
        }
        self.render_diff()
    }

    /// Remove `|count|` code points backward (negative) or forward
    /// (positive) from the cursor, clamped to the buffer bounds. Returns
    /// the removed span so callers can route it to the paste register.
    pub fn delete(&mut self, count: isize) -> ConsoleResult<Vec<char>> {
        let disruptive = self.buffer.has_line_break();
        let removed = self.buffer.delete(count);

        if self.prompt.mask().pins_cursor() {
            let len = self.buffer.len();
            self.buffer.set_cursor(len);
            return Ok(removed);
        }
        if removed.is_empty() {
            return Ok(removed);
        }
        if disruptive {
            self.draw_line()?;
        } else {
            self.render_diff()?;
        }
        Ok(removed)
    }

    /// Move the cursor by `delta`, clamped to the buffer bounds, emitting
    /// one relative movement sequence for the *applied* delta. Movement
    /// requests are ignored under a silent mask.
    pub fn move_cursor(&mut self, delta: isize) -> ConsoleResult<isize> {
        if self.prompt.mask().pins_cursor() {
            return Ok(0);
        }
        let applied = self.buffer.move_cursor(delta);
        if applied == 0 {
            return Ok(0);
        }
        if self.buffer.has_line_break() {
            self.draw_line()?;
        } else {
            self.render_diff()?;
        }
        Ok(applied)
    }

    /// Repaint the whole line: prompt, rendered content, and a trailing
    /// cursor-position move. Used for initial display and after operations
    /// too disruptive to diff.
    pub fn draw_line(&mut self) -> ConsoleResult<()> {
        let ops = self.renderer.draw_line(&self.prompt, &self.buffer);
        self.emit(ops)
    }

    /// Restore the most recent undo frame and repaint. A no-op returning
    /// `false` when the stack is empty; this is a user-facing editing
    /// action, not an error.
    pub fn undo(&mut self) -> ConsoleResult<bool> {
        match self.undo.pop() {
            Some(frame) => {
                self.buffer.restore(&frame);
                if self.prompt.mask().pins_cursor() {
                    let len = self.buffer.len();
                    self.buffer.set_cursor(len);
                    return Ok(true);
                }
                self.draw_line()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Insert the most recent paste-register entry at the cursor. A no-op
    /// returning `false` when the register is empty.
    pub fn yank_paste_register(&mut self) -> ConsoleResult<bool> {
        let span: String = match self.paste.yank() {
            Some(span) => span.iter().collect(),
            None => return Ok(false),
        };
        self.write_string(&span)?;
        Ok(true)
    }

    fn render_diff(&mut self) -> ConsoleResult<()> {
        let glyphs = self.prompt.render_content(self.buffer.chars());
        let ops = self.renderer.diff(&glyphs, self.buffer.cursor());
        self.emit(ops)
    }

    fn emit(&mut self, ops: Vec<RenderOp>) -> ConsoleResult<()> {
        if ops.is_empty() {
            return Ok(());
        }
        let output = render::encode(&ops);
        tracing::trace!(ops = ops.len(), chars = output.len(), "emit");
        self.connection.write(&output)?;
        Ok(())
    }
}
