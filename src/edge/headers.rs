//! Header mapping as exposed by the edge platform.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wrapper record the platform uses for a single header value.
///
/// Only `value` is interpreted. The record is kept exactly as received,
/// including fields like `multiValue` and non-string values.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HeaderValueDescriptor(Map<String, Value>);

impl HeaderValueDescriptor {
    /// Wrap a string value.
    pub fn new(value: impl Into<String>) -> Self {
        let mut record = Map::new();
        record.insert("value".to_string(), Value::String(value.into()));
        Self(record)
    }

    /// The string payload, if the descriptor carries one.
    pub fn value(&self) -> Option<&str> {
        self.0.get("value").and_then(Value::as_str)
    }
}

/// Mapping from header name to value descriptor.
///
/// Names are stored as received; lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, HeaderValueDescriptor>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-case entry if present, otherwise the first case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&HeaderValueDescriptor> {
        self.0.get(name).or_else(|| {
            self.0
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replace every case-variant of `name` with a single entry keyed `name`.
    ///
    /// Returns the previous descriptor under the exact key, or else one of the
    /// removed variants.
    pub fn insert(
        &mut self,
        name: &str,
        descriptor: HeaderValueDescriptor,
    ) -> Option<HeaderValueDescriptor> {
        let mut previous = self.0.remove(name);
        let variants: Vec<String> = self
            .0
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(name))
            .cloned()
            .collect();
        for key in variants {
            let removed = self.0.remove(&key);
            if previous.is_none() {
                previous = removed;
            }
        }

        self.0.insert(name.to_string(), descriptor);
        previous
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValueDescriptor)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, HeaderValueDescriptor)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, HeaderValueDescriptor)>>(iter: I) -> Self {
        Headers(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
