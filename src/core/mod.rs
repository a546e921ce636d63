//! Editing Core Module
//!
//! Platform-independent line-editing state. This module contains:
//! - Line buffer with cursor math and a derived multi-line view
//! - Undo stack (capped value snapshots)
//! - Paste register for deleted/cut spans
//! - Prompt and masking policy
//!
//! The core is designed to be completely deterministic and
//! rendering-agnostic: given the same sequence of editing operations, it
//! will always produce the same state.

mod buffer;
mod paste;
mod prompt;
mod undo;

pub use buffer::LineBuffer;
pub use paste::PasteRegister;
pub use prompt::{Mask, Prompt};
pub use undo::{UndoFrame, UndoStack};
