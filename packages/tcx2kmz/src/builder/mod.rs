//! Declarative builder turning document events into typed object trees.
//!
//! A schema is a tree of [`DispatchTable`]s whose entries are handlers. The
//! [`Driver`] walks an event stream and consults the tables to decide which
//! handler governs each element. Handlers build objects on a
//! [`ConstructionStack`]; whatever is left on it at the end is the result.

mod driver;
mod event;
mod handler;
mod handlers;
mod stack;
mod table;

pub use driver::{run, try_run, Driver};
pub use event::{Attributes, Event};
pub use handler::Handler;
pub use handlers::{FieldHandler, GroupHandler, Merge, ObjectHandler};
pub use stack::{extract, ConstructionStack, Node, Variant};
pub use table::DispatchTable;
