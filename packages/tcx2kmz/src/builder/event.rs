//! The three-event contract between an event source and the driver.

/// Attributes of an opening tag, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute. Order of insertion is preserved.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One notification from a tree-structured document.
///
/// Sources must deliver these in well-formed nesting order. A single text
/// node may arrive as several `Text` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An element was opened.
    Open { name: String, attributes: Attributes },
    /// A chunk of character data inside the innermost open element.
    Text(String),
    /// The innermost open element was closed.
    Close { name: String },
}

impl Event {
    /// An open event without attributes.
    #[must_use]
    pub fn open(name: impl Into<String>) -> Self {
        Self::Open {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// An open event with attributes.
    #[must_use]
    pub fn open_with<K, V>(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Open {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn text(chunk: impl Into<String>) -> Self {
        Self::Text(chunk.into())
    }

    #[must_use]
    pub fn close(name: impl Into<String>) -> Self {
        Self::Close { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_preserve_order() {
        let mut attributes = Attributes::new();
        attributes.push("b", "2");
        attributes.push("a", "1");

        let names: Vec<&str> = attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(attributes.get("a"), Some("1"));
        assert_eq!(attributes.get("c"), None);
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            Event::open_with("Lap", [("StartTime", "2009-09-13T10:00:00Z")]),
            Event::Open {
                name: "Lap".to_string(),
                attributes: [("StartTime", "2009-09-13T10:00:00Z")].into_iter().collect(),
            }
        );
        assert_eq!(Event::text("12"), Event::Text("12".to_string()));
        assert_eq!(
            Event::close("Lap"),
            Event::Close {
                name: "Lap".to_string()
            }
        );
    }
}
