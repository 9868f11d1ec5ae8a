//! Explicitly typed extension fields carried alongside the core task record.
//!
//! The task API may return fields this crate does not model. They are kept
//! here, by name, so callers must look them up deliberately instead of
//! reading arbitrary properties off the task.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// A scalar or list value of an extension field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    /// JSON `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Text value.
    Text(String),
    /// Homogeneous or mixed list of values.
    List(Vec<ExtensionValue>),
    /// Nested object, ordered by key.
    Object(BTreeMap<String, ExtensionValue>),
}

impl ExtensionValue {
    /// Returns the text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Named extension fields, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionFields(BTreeMap<String, ExtensionValue>);

impl ExtensionFields {
    /// Creates an empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: ExtensionValue) -> Option<ExtensionValue> {
        self.0.insert(name.into(), value)
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExtensionValue> {
        self.0.get(name)
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ExtensionValue)> for ExtensionFields {
    fn from_iter<I: IntoIterator<Item = (String, ExtensionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
