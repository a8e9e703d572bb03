//! Nested key/value documents and dotted-path lookup.
//!
//! A document level is either a map of further levels or a scalar leaf.
//! Lists and other non-map values are scalars: a lookup cannot descend into
//! them.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum NestedValue<T> {
    Map(BTreeMap<String, NestedValue<T>>),
    Scalar(T),
}

impl<T> NestedValue<T> {
    /// Builds a map level from `(key, value)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, NestedValue<T>)>,
    {
        NestedValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, NestedValue<T>>> {
        match self {
            NestedValue::Map(entries) => Some(entries),
            NestedValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            NestedValue::Scalar(value) => Some(value),
            NestedValue::Map(_) => None,
        }
    }
}

/// Resolves `dotted_key` one `.`-separated segment at a time.
///
/// Returns `None` as soon as a segment is missing or the current level is a
/// scalar.
pub fn path_lookup<'a, T>(root: &'a NestedValue<T>, dotted_key: &str) -> Option<&'a NestedValue<T>> {
    dotted_key
        .split('.')
        .try_fold(root, |current, segment| match current {
            NestedValue::Map(entries) => entries.get(segment),
            NestedValue::Scalar(_) => None,
        })
}

/// [`path_lookup`] with a fallback for unresolved paths.
pub fn path_get<'a, T>(
    root: &'a NestedValue<T>,
    dotted_key: &str,
    default: &'a NestedValue<T>,
) -> &'a NestedValue<T> {
    path_lookup(root, dotted_key).unwrap_or(default)
}

/// Compact rendering: each map entry as `key:value`, no separators.
impl<T: fmt::Display> fmt::Display for NestedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedValue::Map(entries) => {
                for (key, value) in entries {
                    write!(f, "{}:{}", key, value)?;
                }
                Ok(())
            }
            NestedValue::Scalar(value) => write!(f, "{}", value),
        }
    }
}

impl From<Value> for NestedValue<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(entries) => NestedValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, NestedValue::from(v)))
                    .collect(),
            ),
            other => NestedValue::Scalar(other),
        }
    }
}

impl From<NestedValue<Value>> for Value {
    fn from(value: NestedValue<Value>) -> Self {
        match value {
            NestedValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
            NestedValue::Scalar(scalar) => scalar,
        }
    }
}
