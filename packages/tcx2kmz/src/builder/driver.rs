//! Driver that feeds document events through the handler tree.
//!
//! The driver keeps two stacks in step with the event stream:
//!
//! - the handler stack holds one entry per open element, `None` for elements
//!   without a handler, so unmatched subtrees of any depth are skipped
//!   without disturbing the dispatch of their siblings;
//! - the construction stack holds the objects being built. The driver never
//!   touches it directly; only handlers push and pop.

use tracing::{debug, trace};

use super::event::{Attributes, Event};
use super::handler::Handler;
use super::stack::{ConstructionStack, Node};
use super::table::DispatchTable;
use crate::error::{BuildError, Result};

/// State kept for an element that has a handler.
struct Frame<'t, N> {
    handler: &'t dyn Handler<N>,
    text: String,
}

/// Push-down automaton for one parse.
///
/// A driver borrows the root table for its lifetime and owns both stacks, so
/// concurrent parses each need their own driver but can share the table.
pub struct Driver<'t, N> {
    root: &'t DispatchTable<N>,
    handlers: Vec<Option<Frame<'t, N>>>,
    objects: ConstructionStack<N>,
    skipped: usize,
}

impl<'t, N: Node> Driver<'t, N> {
    /// Create a driver whose top-level elements are looked up in `root`.
    #[must_use]
    pub fn new(root: &'t DispatchTable<N>) -> Self {
        Self {
            root,
            handlers: Vec::new(),
            objects: ConstructionStack::new(),
            skipped: 0,
        }
    }

    /// Number of currently open elements, matched or not.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.handlers.len()
    }

    /// Number of objects currently under construction.
    #[must_use]
    pub fn construction_depth(&self) -> usize {
        self.objects.depth()
    }

    /// Number of elements opened so far that had no handler.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Process one event.
    ///
    /// # Errors
    /// Whatever the handler involved reports, or `UnmatchedClose` for a close
    /// event with nothing open.
    pub fn feed(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Open { name, attributes } => self.open(name, attributes),
            Event::Text(chunk) => {
                self.text(chunk);
                Ok(())
            }
            Event::Close { name } => self.close(name),
        }
    }

    fn open(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        let next: Option<&'t dyn Handler<N>> = match self.handlers.last() {
            None => {
                let root = self.root;
                root.get(name)
            }
            Some(Some(frame)) => {
                let handler = frame.handler;
                handler.dispatch(name)
            }
            Some(None) => None,
        };

        match next {
            Some(handler) => {
                trace!(element = name, depth = self.handlers.len(), "Entering element");
                self.handlers.push(Some(Frame {
                    handler,
                    text: String::new(),
                }));
                handler.on_enter(&mut self.objects, name, attributes)
            }
            None => {
                // Only the top of an unmatched subtree is worth reporting.
                if !matches!(self.handlers.last(), Some(None)) {
                    debug!(
                        element = name,
                        depth = self.handlers.len(),
                        "No handler, skipping subtree"
                    );
                }
                self.skipped += 1;
                self.handlers.push(None);
                Ok(())
            }
        }
    }

    fn text(&mut self, chunk: &str) {
        if let Some(Some(frame)) = self.handlers.last_mut() {
            let handler = frame.handler;
            handler.on_text(&mut frame.text, chunk);
        }
    }

    fn close(&mut self, name: &str) -> Result<()> {
        match self.handlers.pop() {
            Some(Some(frame)) => {
                trace!(element = name, depth = self.handlers.len(), "Leaving element");
                frame.handler.on_exit(&mut self.objects, name, frame.text)
            }
            Some(None) => Ok(()),
            None => Err(BuildError::UnmatchedClose {
                element: name.to_string(),
            }),
        }
    }

    /// End the parse and hand over the single remaining object.
    ///
    /// # Errors
    /// `UnclosedElements` if the stream stopped mid-document, otherwise the
    /// result checks of [`ConstructionStack::into_result`].
    pub fn finish(self) -> Result<N> {
        if !self.handlers.is_empty() {
            return Err(BuildError::UnclosedElements {
                depth: self.handlers.len(),
            });
        }
        debug!(skipped = self.skipped, "Finished building document");
        self.objects.into_result()
    }
}

/// Build an object tree from an infallible event stream.
///
/// # Errors
/// The first error raised by any handler; no partial result is returned.
pub fn run<N, I>(root: &DispatchTable<N>, events: I) -> Result<N>
where
    N: Node,
    I: IntoIterator<Item = Event>,
{
    try_run(root, events.into_iter().map(Ok))
}

/// Build an object tree from an event stream whose source may fail.
///
/// Source errors are propagated unchanged and abort the parse like handler
/// errors do.
pub fn try_run<N, I>(root: &DispatchTable<N>, events: I) -> Result<N>
where
    N: Node,
    I: IntoIterator<Item = Result<Event>>,
{
    let mut driver = Driver::new(root);
    for event in events {
        driver.feed(&event?)?;
    }
    driver.finish()
}
