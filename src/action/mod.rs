//! Named editing actions
//!
//! Maps action names to behaviors as a closed set of tagged operations
//! behind one capability trait, registered in an explicit table built at
//! startup. No runtime reflection; a key-binding layer resolves a key
//! sequence to a name and looks it up here.
//!
//! Each action is a thin, independently testable adapter over the console
//! buffer primitives: it decides grouping (when to record an undo frame)
//! and routing (when a removed span goes to the paste register), and
//! leaves the buffer/cursor/render mechanics to the facade.

mod mappings;

use std::collections::HashMap;

use crate::console::{ConsoleBuffer, ConsoleResult};

pub use mappings::{
    BackwardChar, BackwardDeleteChar, BeginningOfLine, DeleteChar, EndOfLine, ForwardChar, Undo,
    Yank,
};

/// One named editing behavior applied to a console buffer
pub trait EditAction {
    /// Stable name the key-binding layer resolves to
    fn name(&self) -> &'static str;

    /// Apply this action to the console buffer
    fn apply(&self, console: &mut ConsoleBuffer) -> ConsoleResult<()>;
}

/// Explicit name-to-action table built at startup
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Box<dyn EditAction>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in actions
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for action in mappings::defaults() {
            registry.register(action);
        }
        registry
    }

    /// Add an action, replacing any previous one with the same name
    pub fn register(&mut self, action: Box<dyn EditAction>) {
        self.actions.insert(action.name(), action);
    }

    /// Look up an action by name
    pub fn get(&self, name: &str) -> Option<&dyn EditAction> {
        self.actions.get(name).map(|a| a.as_ref())
    }

    /// Apply the named action; `Ok(false)` when no such action is
    /// registered.
    pub fn apply(&self, name: &str, console: &mut ConsoleBuffer) -> ConsoleResult<bool> {
        match self.get(name) {
            Some(action) => {
                tracing::debug!(action = name, "apply");
                action.apply(console)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Registered action names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
