//! Event source over a parsed `roxmltree` document.

use roxmltree::{Children, Document, Node};

use crate::builder::{Attributes, Event};
use crate::error::Result;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use tcx2kmz::xml::get_tag_name;
///
/// let xml = r#"<a:root xmlns:a="urn:x"><a:Lap/></a:root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let lap = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(lap), "Lap");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Collect an element's attributes in document order, local names only.
fn attributes_of(node: Node<'_, '_>) -> Attributes {
    node.attributes().map(|a| (a.name(), a.value())).collect()
}

/// Iterator replaying a document as open/text/close events.
///
/// Walks the tree lazily with one `children()` iterator per open element;
/// the element's `Close` is emitted when its iterator runs out. Comments and
/// processing instructions produce no events. Text nodes, including
/// whitespace between elements, are delivered as one `Text` each.
pub struct DocumentEvents<'a, 'input> {
    root: Option<Node<'a, 'input>>,
    open: Vec<(Node<'a, 'input>, Children<'a, 'input>)>,
}

impl<'a, 'input> DocumentEvents<'a, 'input> {
    /// Replay the whole document, starting at its root element.
    #[must_use]
    pub fn new(doc: &'a Document<'input>) -> Self {
        Self {
            root: Some(doc.root_element()),
            open: Vec::new(),
        }
    }

    fn enter(&mut self, node: Node<'a, 'input>) -> Event {
        self.open.push((node, node.children()));
        Event::Open {
            name: get_tag_name(node).to_string(),
            attributes: attributes_of(node),
        }
    }
}

impl Iterator for DocumentEvents<'_, '_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(root) = self.root.take() {
            return Some(self.enter(root));
        }
        loop {
            let (_, children) = self.open.last_mut()?;
            match children.next() {
                Some(child) if child.is_element() => return Some(self.enter(child)),
                Some(child) if child.is_text() => {
                    if let Some(text) = child.text() {
                        return Some(Event::Text(text.to_string()));
                    }
                }
                Some(_) => {}
                None => {
                    let (node, _) = self.open.pop()?;
                    return Some(Event::Close {
                        name: get_tag_name(node).to_string(),
                    });
                }
            }
        }
    }
}

/// Parse XML text and collect its events.
///
/// # Errors
/// Returns `XmlParse` if the text is not well-formed XML.
pub fn parse_events(text: &str) -> Result<Vec<Event>> {
    let doc = Document::parse(text)?;
    Ok(DocumentEvents::new(&doc).collect())
}
