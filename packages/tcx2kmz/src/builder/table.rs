//! Dispatch table mapping element names to handlers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::handler::Handler;
use super::stack::Node;

/// Table mapping child element names to handlers.
///
/// Tables are filled once while a schema is configured and only read
/// afterwards. A lookup miss is not an error: the element is skipped.
pub struct DispatchTable<N> {
    handlers: HashMap<String, Box<dyn Handler<N>>>,
}

impl<N: Node> DispatchTable<N> {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific element name.
    ///
    /// Registering the same name twice replaces the earlier handler.
    pub fn register(&mut self, name: impl Into<String>, handler: impl Handler<N> + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Builder-style variant of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, handler: impl Handler<N> + 'static) -> Self {
        self.register(name, handler);
        self
    }

    /// Get the handler for an element, if one is registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Handler<N>> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Check if a handler is registered for an element name.
    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Return set of all registered element names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<N: Node> Default for DispatchTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for DispatchTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("DispatchTable").field("tags", &tags).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::stack::tests::TestNode;

    struct Dummy;

    impl Handler<TestNode> for Dummy {}

    #[test]
    fn test_register_and_get() {
        let mut table: DispatchTable<TestNode> = DispatchTable::new();
        table.register("point", Dummy);

        assert!(table.get("point").is_some());
        assert!(table.get("missing").is_none());
        assert!(table.has_handler("point"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_with_chains() {
        let table: DispatchTable<TestNode> = DispatchTable::new().with("a", Dummy).with("b", Dummy);

        let tags = table.registered_tags();
        assert!(tags.contains("a"));
        assert!(tags.contains("b"));
        assert_eq!(format!("{table:?}"), r#"DispatchTable { tags: ["a", "b"] }"#);
    }
}
