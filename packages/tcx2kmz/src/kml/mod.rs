//! KML output.
//!
//! [`Element`] is a small owned markup tree; [`Document`] adds the XML
//! declaration and the `<kml>` root with its namespaces.

mod element;
mod track;

use crate::config::{GX_NAMESPACE, KML_NAMESPACE};

pub use element::{Element, Pretty};
pub use track::from_activities;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A complete KML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap `content` in a `<kml>` root declaring the core and `gx:` namespaces.
    #[must_use]
    pub fn new(content: Element) -> Self {
        Self {
            root: Element::new("kml")
                .attr("xmlns", KML_NAMESPACE)
                .attr("xmlns:gx", GX_NAMESPACE)
                .child(content),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Whole document on a single line.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        format!("{XML_DECLARATION}{}", self.root)
    }

    /// Whole document, one element per line.
    #[must_use]
    pub fn to_pretty_string(&self, indent: &str) -> String {
        format!("{XML_DECLARATION}\n{}", self.root.pretty(indent))
    }
}
