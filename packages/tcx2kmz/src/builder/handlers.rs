//! The handler kinds schemas are assembled from.
//!
//! - [`FieldHandler`]: collects an element's text and writes one converted
//!   field on the object being built.
//! - [`ObjectHandler`]: builds a new object for the element and merges it into
//!   its parent when the element closes.
//! - [`GroupHandler`]: a pass-through for wrapper elements that carry no
//!   object of their own.

use std::marker::PhantomData;

use super::event::Attributes;
use super::handler::Handler;
use super::stack::{ConstructionStack, Node, Variant};
use super::table::DispatchTable;
use crate::convert::ConvertResult;
use crate::error::{BuildError, Result};

/// Leaf handler that sets one field of the enclosing object.
///
/// `P` is the type of the object expected on top of the construction stack,
/// `T` the converted field type. Text is concatenated across chunks and
/// converted exactly once, when the element closes.
pub struct FieldHandler<N, P, T> {
    convert: fn(&str) -> ConvertResult<T>,
    set: fn(&mut P, T),
    _node: PhantomData<fn() -> N>,
}

impl<N, P, T> FieldHandler<N, P, T> {
    /// Bind a conversion function to a field setter.
    #[must_use]
    pub fn new(convert: fn(&str) -> ConvertResult<T>, set: fn(&mut P, T)) -> Self {
        Self {
            convert,
            set,
            _node: PhantomData,
        }
    }
}

impl<N, P, T> Handler<N> for FieldHandler<N, P, T>
where
    N: Node,
    P: Variant<N>,
    T: 'static,
{
    fn on_text(&self, buffer: &mut String, chunk: &str) {
        buffer.push_str(chunk);
    }

    fn on_exit(&self, stack: &mut ConstructionStack<N>, name: &str, text: String) -> Result<()> {
        let value = (self.convert)(&text).map_err(|e| BuildError::conversion(name, e))?;
        let target = stack.top_as::<P>(name)?;
        (self.set)(target, value);
        Ok(())
    }
}

/// How a finished object is attached to its parent.
pub enum Merge<P, O> {
    /// Assign to a single field. A repeated element overwrites earlier ones.
    Replace(fn(&mut P, O)),
    /// Append to a sequence field, in document order.
    Append(fn(&mut P) -> &mut Vec<O>),
    /// Leave the object on the stack. Used for the document root, which
    /// becomes the parse result.
    Keep,
}

/// Composite handler that constructs an object for its element.
///
/// The object is pushed when the element opens, filled in by the handlers of
/// its children, and popped and merged into the parent `P` when it closes.
pub struct ObjectHandler<N, P, O> {
    construct: fn(&Attributes) -> ConvertResult<O>,
    merge: Merge<P, O>,
    children: DispatchTable<N>,
}

impl<N, P, O> ObjectHandler<N, P, O>
where
    N: Node,
    O: Default,
{
    /// An object handler whose object starts out as `O::default()`.
    #[must_use]
    pub fn new(merge: Merge<P, O>, children: DispatchTable<N>) -> Self {
        Self {
            construct: |_| Ok(O::default()),
            merge,
            children,
        }
    }
}

impl<N, P, O> ObjectHandler<N, P, O>
where
    N: Node,
{
    /// An object handler that seeds its object from the opening tag's attributes.
    ///
    /// Values recorded as attributes (e.g. a lap's start time) are captured
    /// here, before any child element or text is seen.
    #[must_use]
    pub fn from_attributes(
        construct: fn(&Attributes) -> ConvertResult<O>,
        merge: Merge<P, O>,
        children: DispatchTable<N>,
    ) -> Self {
        Self {
            construct,
            merge,
            children,
        }
    }
}

impl<N, O> ObjectHandler<N, O, O>
where
    N: Node,
    O: Default,
{
    /// Handler for the document's top-level element.
    #[must_use]
    pub fn root(children: DispatchTable<N>) -> Self {
        Self::new(Merge::Keep, children)
    }
}

impl<N, P, O> Handler<N> for ObjectHandler<N, P, O>
where
    N: Node,
    P: Variant<N>,
    O: Variant<N>,
{
    fn dispatch(&self, name: &str) -> Option<&dyn Handler<N>> {
        self.children.get(name)
    }

    fn on_enter(
        &self,
        stack: &mut ConstructionStack<N>,
        name: &str,
        attributes: &Attributes,
    ) -> Result<()> {
        let object = (self.construct)(attributes).map_err(|e| BuildError::conversion(name, e))?;
        stack.push(object.into_node());
        Ok(())
    }

    fn on_exit(&self, stack: &mut ConstructionStack<N>, name: &str, _text: String) -> Result<()> {
        match &self.merge {
            Merge::Keep => {
                stack.top_as::<O>(name)?;
            }
            Merge::Replace(set) => {
                let object = stack.pop_as::<O>(name)?;
                set(stack.top_as::<P>(name)?, object);
            }
            Merge::Append(sequence) => {
                let object = stack.pop_as::<O>(name)?;
                sequence(stack.top_as::<P>(name)?).push(object);
            }
        }
        Ok(())
    }
}

/// Pass-through handler for wrapper elements.
///
/// Dispatches its children against its own table and leaves the
/// construction stack alone, so children write into the nearest enclosing
/// object. `<Position>` around a trackpoint's coordinates is the typical case.
pub struct GroupHandler<N> {
    children: DispatchTable<N>,
}

impl<N: Node> GroupHandler<N> {
    #[must_use]
    pub fn new(children: DispatchTable<N>) -> Self {
        Self { children }
    }
}

impl<N: Node> Handler<N> for GroupHandler<N> {
    fn dispatch(&self, name: &str) -> Option<&dyn Handler<N>> {
        self.children.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::stack::tests::{Point, Record, TestNode};
    use crate::convert;

    fn point_x() -> FieldHandler<TestNode, Point, f64> {
        FieldHandler::new(convert::float, |point: &mut Point, x| point.x = Some(x))
    }

    #[test]
    fn test_field_handler_concatenates_chunks() {
        let handler = point_x();
        let mut stack = ConstructionStack::new();
        stack.push(Point::default().into_node());

        let mut buffer = String::new();
        handler.on_text(&mut buffer, "1");
        handler.on_text(&mut buffer, ".5");
        handler.on_exit(&mut stack, "x", buffer).unwrap();

        assert_eq!(
            stack.top(),
            Some(&TestNode::Point(Point {
                x: Some(1.5),
                y: None
            }))
        );
    }

    #[test]
    fn test_field_handler_conversion_error_names_element() {
        let handler = point_x();
        let mut stack = ConstructionStack::new();
        stack.push(Point::default().into_node());

        let err = handler
            .on_exit(&mut stack, "x", "east".to_string())
            .unwrap_err();
        assert_eq!(err.element(), Some("x"));
        assert!(matches!(err, BuildError::Conversion { .. }));
    }

    #[test]
    fn test_field_handler_wrong_parent() {
        let handler = point_x();
        let mut stack = ConstructionStack::new();
        stack.push(Record::default().into_node());

        let err = handler.on_exit(&mut stack, "x", "1".to_string()).unwrap_err();
        assert!(matches!(err, BuildError::UnexpectedNode { .. }));
    }

    #[test]
    fn test_object_handler_append() {
        let handler: ObjectHandler<TestNode, Record, Point> = ObjectHandler::new(
            Merge::Append(|record: &mut Record| &mut record.points),
            DispatchTable::new(),
        );
        let mut stack = ConstructionStack::new();
        stack.push(Record::default().into_node());

        for _ in 0..2 {
            handler
                .on_enter(&mut stack, "point", &Attributes::new())
                .unwrap();
            assert_eq!(stack.depth(), 2);
            handler.on_exit(&mut stack, "point", String::new()).unwrap();
        }

        let record: Record =
            crate::builder::extract(stack.into_result().unwrap(), "record").unwrap();
        assert_eq!(record.points.len(), 2);
    }

    #[test]
    fn test_object_handler_replace_overwrites() {
        let handler: ObjectHandler<TestNode, Record, Point> = ObjectHandler::from_attributes(
            |attributes: &Attributes| {
                Ok(Point {
                    x: convert::attribute(attributes, "x", convert::float)?,
                    y: None,
                })
            },
            Merge::Replace(|record: &mut Record, point| record.best = Some(point)),
            DispatchTable::new(),
        );
        let mut stack = ConstructionStack::new();
        stack.push(Record::default().into_node());

        for x in ["1", "2"] {
            let attributes: Attributes = [("x", x)].into_iter().collect();
            handler.on_enter(&mut stack, "best", &attributes).unwrap();
            handler.on_exit(&mut stack, "best", String::new()).unwrap();
        }

        let record: Record =
            crate::builder::extract(stack.into_result().unwrap(), "record").unwrap();
        assert_eq!(record.best.and_then(|p| p.x), Some(2.0));
    }

    #[test]
    fn test_object_handler_exit_on_empty_stack() {
        let handler: ObjectHandler<TestNode, Record, Point> = ObjectHandler::new(
            Merge::Append(|record: &mut Record| &mut record.points),
            DispatchTable::new(),
        );
        let mut stack = ConstructionStack::new();

        let err = handler
            .on_exit(&mut stack, "point", String::new())
            .unwrap_err();
        assert!(matches!(err, BuildError::EmptyStack { .. }));
    }

    #[test]
    fn test_group_handler_dispatches_only() {
        let group: GroupHandler<TestNode> =
            GroupHandler::new(DispatchTable::new().with("x", point_x()));
        let mut stack: ConstructionStack<TestNode> = ConstructionStack::new();

        assert!(group.dispatch("x").is_some());
        assert!(group.dispatch("y").is_none());
        group
            .on_enter(&mut stack, "position", &Attributes::new())
            .unwrap();
        assert!(stack.is_empty());
    }
}
