//! Handler trait definition.

use super::event::Attributes;
use super::stack::ConstructionStack;
use crate::error::Result;

/// Trait for element handlers.
///
/// A handler reacts to the events of the elements it is bound to. Handlers
/// are immutable configuration: anything that lives for the duration of one
/// element (the collected text) is owned by the driver and lent to the
/// handler, so one handler tree can serve any number of concurrent parses.
///
/// Every method has a no-op default; implementors override what they need.
pub trait Handler<N>: Send + Sync {
    /// Select the handler for a child element opened inside this one.
    ///
    /// `None` means the child and its whole subtree are ignored.
    fn dispatch(&self, _name: &str) -> Option<&dyn Handler<N>> {
        None
    }

    /// Called once when the element opens.
    fn on_enter(
        &self,
        _stack: &mut ConstructionStack<N>,
        _name: &str,
        _attributes: &Attributes,
    ) -> Result<()> {
        Ok(())
    }

    /// Called for every chunk of text directly inside the element.
    ///
    /// `buffer` starts empty when the element opens and is handed to
    /// [`on_exit`](Self::on_exit) when it closes.
    fn on_text(&self, _buffer: &mut String, _chunk: &str) {}

    /// Called once when the element closes, with the text collected by
    /// [`on_text`](Self::on_text).
    fn on_exit(
        &self,
        _stack: &mut ConstructionStack<N>,
        _name: &str,
        _text: String,
    ) -> Result<()> {
        Ok(())
    }
}
