//! Generic markup element with compact and indented rendering.

use std::borrow::Cow;
use std::fmt;

/// One element of an output document.
///
/// Children and attributes are written in insertion order. An element with
/// neither text nor children is written self-closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// An element with no content yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// An element holding only text, e.g. `<name>Lap 1</name>`.
    #[must_use]
    pub fn simple(name: impl Into<String>, text: impl fmt::Display) -> Self {
        let mut element = Self::new(name);
        element.text = Some(text.to_string());
        element
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add one child.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Add children, skipping `None`s.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Option<Element>>) -> Self {
        self.children.extend(children.into_iter().flatten());
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// `true` if the element would be written self-closing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// Indented rendering, one element per line.
    #[must_use]
    pub fn pretty<'a>(&'a self, indent: &'a str) -> Pretty<'a> {
        Pretty {
            element: self,
            indent,
        }
    }

    fn write_open_tag(&self, f: &mut fmt::Formatter<'_>, self_closing: bool) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }
        f.write_str(if self_closing { "/>" } else { ">" })
    }

    fn write_pretty(&self, f: &mut fmt::Formatter<'_>, indent: &str, depth: usize) -> fmt::Result {
        let prefix = indent.repeat(depth);
        if self.children.is_empty() {
            return writeln!(f, "{prefix}{self}");
        }
        f.write_str(&prefix)?;
        self.write_open_tag(f, false)?;
        if let Some(text) = &self.text {
            f.write_str(&escape(text, false))?;
        }
        f.write_str("\n")?;
        for child in &self.children {
            child.write_pretty(f, indent, depth + 1)?;
        }
        writeln!(f, "{prefix}</{}>", self.name)
    }
}

/// Compact rendering without any whitespace between elements.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return self.write_open_tag(f, true);
        }
        self.write_open_tag(f, false)?;
        if let Some(text) = &self.text {
            f.write_str(&escape(text, false))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// Display adapter returned by [`Element::pretty`].
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a> {
    element: &'a Element,
    indent: &'a str,
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.write_pretty(f, self.indent, 0)
    }
}

/// Escape markup characters in text or attribute values.
fn escape(value: &str, attribute: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (attribute && c == '"');
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
