//! Prompt and masking policy
//!
//! The prompt is the immutable per-session leader text plus a policy for
//! how buffer content is echoed: verbatim, substituted with a mask glyph
//! (password fields), or fully silent (no visual growth signal at all).
//! Raw content must never reach the transport under a masked policy; the
//! renderer only ever sees what `render_content` produces.

use serde::{Deserialize, Serialize};

/// How buffer content is echoed to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mask {
    /// Echo content verbatim
    #[default]
    Plain,
    /// Echo one substitute glyph per content code point; cursor math still
    /// uses the real content length
    Char(char),
    /// No echo at all: nothing marks cursor position on screen, so the
    /// cursor is pinned to the end of the content and movement requests
    /// are ignored
    Silent,
}

impl Mask {
    /// Check if content is hidden in any way
    pub fn is_masking(&self) -> bool {
        !matches!(self, Mask::Plain)
    }

    /// Check if the cursor must stay pinned to the end of the content
    pub fn pins_cursor(&self) -> bool {
        matches!(self, Mask::Silent)
    }
}

/// Immutable per-session prompt: leader text plus echo policy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prompt {
    text: Vec<char>,
    mask: Mask,
}

impl Prompt {
    /// Create a plain-echo prompt
    pub fn new(text: &str) -> Self {
        Self::with_mask(text, Mask::Plain)
    }

    /// Create a prompt with an explicit masking policy
    pub fn with_mask(text: &str, mask: Mask) -> Self {
        Self {
            text: text.chars().collect(),
            mask,
        }
    }

    /// The prompt leader text as code points
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// Screen columns occupied by the prompt (one per code point)
    pub fn columns(&self) -> usize {
        self.text.len()
    }

    /// The active masking policy
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Check if this prompt hides content
    pub fn is_masking(&self) -> bool {
        self.mask.is_masking()
    }

    /// Render buffer content into the glyphs that may be echoed. Under
    /// `Char` every code point becomes the substitute glyph; under
    /// `Silent` the result is always empty.
    pub fn render_content(&self, content: &[char]) -> Vec<char> {
        match self.mask {
            Mask::Plain => content.to_vec(),
            Mask::Char(c) => vec![c; content.len()],
            Mask::Silent => Vec::new(),
        }
    }
}
