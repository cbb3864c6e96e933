//! Handler registry mapping tag names to handlers.

use std::collections::{HashMap, HashSet};

use super::handler::TagHandler;

/// Registry mapping element tag names to handlers.
///
/// Built once at startup and immutable afterwards. Every lookup resolves:
/// tags without a registered handler fall back to the container handler
/// supplied at construction, so an unknown tag is never an error.
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn TagHandler>>,
    fallback: Box<dyn TagHandler>,
}

impl HandlerRegistry {
    /// Create a registry with the given fallback handler.
    #[must_use]
    pub fn new(fallback: impl TagHandler + 'static) -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Register a handler for a specific tag name.
    ///
    /// Each tag gets at most one handler; registering the same tag twice
    /// is a construction bug, caught in debug builds.
    pub fn register(&mut self, tag: impl Into<String>, handler: impl TagHandler + 'static) {
        let tag = tag.into();
        let previous = self.handlers.insert(tag.clone(), Box::new(handler));
        debug_assert!(
            previous.is_none(),
            "duplicate handler registration for <{tag}>"
        );
    }

    /// Get the handler registered for a tag, if any.
    #[must_use]
    pub fn handler_for(&self, tag: &str) -> Option<&dyn TagHandler> {
        self.handlers.get(tag).map(|handler| handler.as_ref())
    }

    /// The fallback handler used for unrecognized tags.
    #[must_use]
    pub fn fallback(&self) -> &dyn TagHandler {
        self.fallback.as_ref()
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Return the set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(|tag| tag.as_str()).collect()
    }
}
