//! Built-in editing actions
//!
//! Thin adapters over the console buffer primitives. Names follow the
//! readline convention the key-binding layer uses.

use super::EditAction;
use crate::console::{ConsoleBuffer, ConsoleResult};

/// The built-in action set, boxed for the registry table
pub(super) fn defaults() -> Vec<Box<dyn EditAction>> {
    vec![
        Box::new(BackwardDeleteChar),
        Box::new(DeleteChar),
        Box::new(BackwardChar),
        Box::new(ForwardChar),
        Box::new(BeginningOfLine),
        Box::new(EndOfLine),
        Box::new(Yank),
        Box::new(Undo),
    ]
}

/// Delete the code point before the cursor, capturing it in the paste
/// register. Under a silent mask the deletion happens without touching
/// undo or paste state, and the cursor stays pinned to the content end.
pub struct BackwardDeleteChar;

impl EditAction for BackwardDeleteChar {
    fn name(&self) -> &'static str {
        "backward-delete-char"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        if console.prompt().mask().pins_cursor() {
            if !console.buffer().is_empty() {
                console.delete(-1)?;
            }
            return Ok(());
        }
        if console.buffer().cursor() > 0 {
            console.add_action_to_undo_stack();
            let removed = console.delete(-1)?;
            console.paste_register_mut().add_text(removed);
        }
        Ok(())
    }
}

/// Delete the code point under the cursor, capturing it in the paste
/// register
pub struct DeleteChar;

impl EditAction for DeleteChar {
    fn name(&self) -> &'static str {
        "delete-char"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        if console.prompt().mask().pins_cursor() {
            return Ok(());
        }
        if console.buffer().cursor() < console.buffer().len() {
            console.add_action_to_undo_stack();
            let removed = console.delete(1)?;
            console.paste_register_mut().add_text(removed);
        }
        Ok(())
    }
}

/// Move the cursor one code point left
pub struct BackwardChar;

impl EditAction for BackwardChar {
    fn name(&self) -> &'static str {
        "backward-char"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        console.move_cursor(-1)?;
        Ok(())
    }
}

/// Move the cursor one code point right
pub struct ForwardChar;

impl EditAction for ForwardChar {
    fn name(&self) -> &'static str {
        "forward-char"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        console.move_cursor(1)?;
        Ok(())
    }
}

/// Move the cursor to the start of the buffer
pub struct BeginningOfLine;

impl EditAction for BeginningOfLine {
    fn name(&self) -> &'static str {
        "beginning-of-line"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        let cursor = console.buffer().cursor() as isize;
        console.move_cursor(-cursor)?;
        Ok(())
    }
}

/// Move the cursor past the last code point
pub struct EndOfLine;

impl EditAction for EndOfLine {
    fn name(&self) -> &'static str {
        "end-of-line"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        let delta = console.buffer().len() as isize - console.buffer().cursor() as isize;
        console.move_cursor(delta)?;
        Ok(())
    }
}

/// Insert the most recent paste-register entry at the cursor, as one
/// undoable unit
pub struct Yank;

impl EditAction for Yank {
    fn name(&self) -> &'static str {
        "yank"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        if console.paste_register().is_empty() {
            return Ok(());
        }
        console.add_action_to_undo_stack();
        console.yank_paste_register()?;
        Ok(())
    }
}

/// Revert the most recent undoable edit; silent no-op on an empty stack
pub struct Undo;

impl EditAction for Undo {
    fn name(&self) -> &'static str {
        "undo"
    }

    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()> {
        console.undo()?;
        Ok(())
    }
}
