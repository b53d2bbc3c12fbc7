//! Scalar conversion functions for leaf handlers.
//!
//! Every converter has the shape `fn(&str) -> Result<T, ConvertError>` so it
//! can be bound into a [`FieldHandler`](crate::builder::FieldHandler) as a
//! plain function pointer. Input is trimmed before conversion; the raw text
//! of a streamed element usually carries the document's indentation.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::builder::Attributes;

/// A value that a converter refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got '{value}' ({reason})")]
pub struct ConvertError {
    /// Human-readable name of the expected type.
    pub expected: &'static str,
    /// The text that was rejected.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ConvertError {
    /// Create a new conversion error.
    #[must_use]
    pub fn new(expected: &'static str, value: impl Into<String>, reason: impl Display) -> Self {
        Self {
            expected,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result of a single conversion.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Keep text as-is, apart from surrounding whitespace.
///
/// An element that is present but empty yields `Some("")` on its field,
/// which stays distinguishable from an element that never occurred.
pub fn text(value: &str) -> ConvertResult<String> {
    Ok(value.trim().to_string())
}

/// Parse a floating point number.
///
/// # Examples
/// ```
/// use tcx2kmz::convert::float;
///
/// assert_eq!(float(" 47.5 ").unwrap(), 47.5);
/// assert!(float("north").is_err());
/// ```
pub fn float(value: &str) -> ConvertResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| ConvertError::new("floating point number", value, e))
}

/// Parse an integer of any width.
///
/// Used with a turbofish when bound into a handler: `convert::integer::<u32>`.
pub fn integer<T>(value: &str) -> ConvertResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConvertError::new("integer", value, e))
}

/// Parse an RFC 3339 timestamp and normalize it to UTC.
///
/// Accepts both whole seconds (`2009-09-13T10:00:00Z`) and fractional seconds
/// or explicit offsets, which newer devices emit.
pub fn timestamp(value: &str) -> ConvertResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ConvertError::new("timestamp", value, e))
}

/// Read a sensor presence enumeration as a boolean.
///
/// Only `Present` is `true`; `Absent`, an empty element or any unknown value
/// reads as `false`.
pub fn presence(value: &str) -> ConvertResult<bool> {
    Ok(value.trim() == "Present")
}

/// Convert an optional attribute of an opening tag.
///
/// A missing attribute is `Ok(None)`; a present one goes through `convert`.
pub fn attribute<T>(
    attributes: &Attributes,
    name: &str,
    convert: fn(&str) -> ConvertResult<T>,
) -> ConvertResult<Option<T>> {
    attributes.get(name).map(convert).transpose()
}
