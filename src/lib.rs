//! Termline Line-Editing Core
//!
//! The editing engine behind an interactive line-based terminal input
//! component: an in-memory code-point buffer with a cursor, turned into
//! minimal terminal output. This crate provides:
//!
//! - `core`: line buffer, cursor math, undo stack, paste register, masking
//! - `render`: minimal ANSI diff rendering instead of full-line repaints
//! - `console`: the `ConsoleBuffer` facade composing the above over a
//!   caller-injected transport
//! - `action`: a closed registry of named editing actions layered on the
//!   facade
//!
//! Key-binding tables, edit modes, history storage, and the raw terminal
//! transport are external collaborators; this crate only consumes a narrow
//! `Connection` interface for output.

pub mod action;
pub mod config;
pub mod console;
pub mod core;
pub mod render;

pub use action::{ActionRegistry, EditAction};
pub use config::{ConfigError, EditorConfig};
pub use console::{Connection, ConsoleBuffer, ConsoleError, ConsoleResult, Size};
pub use core::{LineBuffer, Mask, PasteRegister, Prompt, UndoFrame, UndoStack};
pub use render::{RenderOp, Renderer};
