//! XML input: turns documents into the builder's event stream.

mod events;

pub use events::{get_tag_name, parse_events, DocumentEvents};
