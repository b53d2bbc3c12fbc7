//! The construction stack and the typing seam between it and domain objects.

use crate::error::{BuildError, Result};

/// The object type carried on a construction stack.
///
/// A schema defines one enum over all of its domain objects and implements
/// this trait for it. The kind name only feeds error messages.
pub trait Node: 'static {
    /// Short name of the object variant held in `self`.
    fn kind(&self) -> &'static str;
}

/// A concrete domain type that can live on a construction stack of `N`.
///
/// Handlers are configured against concrete types (`Lap`, `Trackpoint`), so a
/// setter can never be bound to the wrong field type. The only thing left to
/// check at parse time is that the object on top of the stack is the expected
/// variant.
pub trait Variant<N: Node>: Sized + 'static {
    /// Name of this variant, matching what [`Node::kind`] reports for it.
    const KIND: &'static str;

    /// Wrap into the stack's node type.
    fn into_node(self) -> N;

    /// Unwrap from the node type, handing the node back on mismatch.
    fn from_node(node: N) -> std::result::Result<Self, N>;

    /// Borrow mutably if the node holds this variant.
    fn from_node_mut(node: &mut N) -> Option<&mut Self>;
}

/// Domain objects currently under assembly, innermost last.
#[derive(Debug)]
pub struct ConstructionStack<N> {
    objects: Vec<N>,
}

impl<N: Node> ConstructionStack<N> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn push(&mut self, node: N) {
        self.objects.push(node);
    }

    pub fn pop(&mut self) -> Option<N> {
        self.objects.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&N> {
        self.objects.last()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Borrow the top object as a concrete type.
    ///
    /// # Errors
    /// `EmptyStack` if there is no object, `UnexpectedNode` if the top object
    /// is a different variant. `element` names the element being handled.
    pub fn top_as<T: Variant<N>>(&mut self, element: &str) -> Result<&mut T> {
        let node = self
            .objects
            .last_mut()
            .ok_or_else(|| BuildError::EmptyStack {
                element: element.to_string(),
            })?;
        let found = node.kind();
        T::from_node_mut(node).ok_or_else(|| BuildError::UnexpectedNode {
            element: element.to_string(),
            expected: T::KIND,
            found,
        })
    }

    /// Pop the top object as a concrete type.
    ///
    /// The stack is left untouched when the top object has the wrong type.
    pub fn pop_as<T: Variant<N>>(&mut self, element: &str) -> Result<T> {
        self.top_as::<T>(element)?;
        let node = self.objects.pop().ok_or_else(|| BuildError::EmptyStack {
            element: element.to_string(),
        })?;
        extract(node, element)
    }

    /// Consume the stack, returning its only object.
    ///
    /// # Errors
    /// `MissingResult` for an empty stack, `LeftoverObjects` when more than
    /// one object remains.
    pub fn into_result(mut self) -> Result<N> {
        match self.objects.len() {
            0 => Err(BuildError::MissingResult),
            1 => self.objects.pop().ok_or(BuildError::MissingResult),
            count => Err(BuildError::LeftoverObjects { count }),
        }
    }
}

impl<N: Node> Default for ConstructionStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap a finished node into the concrete type the caller expects.
pub fn extract<N: Node, T: Variant<N>>(node: N, element: &str) -> Result<T> {
    T::from_node(node).map_err(|other| BuildError::UnexpectedNode {
        element: element.to_string(),
        expected: T::KIND,
        found: other.kind(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A minimal two-variant node type shared by the builder tests.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum TestNode {
        Record(Record),
        Point(Point),
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub(crate) struct Record {
        pub label: Option<String>,
        pub count: Option<u32>,
        pub points: Vec<Point>,
        pub best: Option<Point>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub(crate) struct Point {
        pub x: Option<f64>,
        pub y: Option<f64>,
    }

    impl Node for TestNode {
        fn kind(&self) -> &'static str {
            match self {
                Self::Record(_) => "Record",
                Self::Point(_) => "Point",
            }
        }
    }

    impl Variant<TestNode> for Record {
        const KIND: &'static str = "Record";

        fn into_node(self) -> TestNode {
            TestNode::Record(self)
        }

        fn from_node(node: TestNode) -> std::result::Result<Self, TestNode> {
            match node {
                TestNode::Record(record) => Ok(record),
                other => Err(other),
            }
        }

        fn from_node_mut(node: &mut TestNode) -> Option<&mut Self> {
            match node {
                TestNode::Record(record) => Some(record),
                _ => None,
            }
        }
    }

    impl Variant<TestNode> for Point {
        const KIND: &'static str = "Point";

        fn into_node(self) -> TestNode {
            TestNode::Point(self)
        }

        fn from_node(node: TestNode) -> std::result::Result<Self, TestNode> {
            match node {
                TestNode::Point(point) => Ok(point),
                other => Err(other),
            }
        }

        fn from_node_mut(node: &mut TestNode) -> Option<&mut Self> {
            match node {
                TestNode::Point(point) => Some(point),
                _ => None,
            }
        }
    }

    #[test]
    fn test_top_as_empty() {
        let mut stack: ConstructionStack<TestNode> = ConstructionStack::new();
        let err = stack.top_as::<Record>("label").unwrap_err();
        assert!(matches!(err, BuildError::EmptyStack { element } if element == "label"));
    }

    #[test]
    fn test_top_as_wrong_variant() {
        let mut stack = ConstructionStack::new();
        stack.push(Point::default().into_node());

        let err = stack.top_as::<Record>("label").unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnexpectedNode {
                expected: "Record",
                found: "Point",
                ..
            }
        ));
    }

    #[test]
    fn test_pop_as_keeps_stack_on_mismatch() {
        let mut stack = ConstructionStack::new();
        stack.push(Record::default().into_node());

        assert!(stack.pop_as::<Point>("point").is_err());
        assert_eq!(stack.depth(), 1);
        assert!(stack.pop_as::<Record>("record").is_ok());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_into_result() {
        let empty: ConstructionStack<TestNode> = ConstructionStack::new();
        assert!(matches!(empty.into_result(), Err(BuildError::MissingResult)));

        let mut two = ConstructionStack::new();
        two.push(Record::default().into_node());
        two.push(Point::default().into_node());
        assert!(matches!(
            two.into_result(),
            Err(BuildError::LeftoverObjects { count: 2 })
        ));

        let mut one = ConstructionStack::new();
        one.push(Record::default().into_node());
        assert_eq!(
            one.into_result().unwrap(),
            TestNode::Record(Record::default())
        );
    }
}
