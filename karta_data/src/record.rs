// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned record/dataset representation consumed by the geometry engine.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// A tagged field value.
///
/// Records carry values of unknown type; the engine only ever sees them
/// through this enum, so "is this a number" is an explicit question rather
/// than a cast.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A numeric value (possibly non-finite; coercion filters those).
    Number(f64),
    /// A textual value (possibly numeric-looking, e.g. `"$1,200"`).
    Text(String),
    /// The field is absent or explicitly null.
    Missing,
}

impl FieldValue {
    /// Returns the value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// A short name for the value's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Missing => "missing",
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        #[allow(
            clippy::cast_precision_loss,
            reason = "record values are chart data; f64 is the engine's working precision"
        )]
        {
            Self::Number(value as f64)
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

const MISSING: &FieldValue = &FieldValue::Missing;

/// An ordered field-name → value mapping.
///
/// Field order is preserved as inserted. Lookups are linear; records are
/// expected to stay small (one row of chart data).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, replacing any existing value under the same key.
    ///
    /// A replaced field keeps its original position in the record order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Looks up a field by name.
    ///
    /// Absent keys read as [`FieldValue::Missing`]; this never panics.
    pub fn field(&self, key: &str) -> &FieldValue {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or(MISSING)
    }

    /// Returns whether the record carries a field under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Iterates field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of records.
///
/// Order is meaningful (category order, time order) and is preserved by every
/// operation in the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset from records, preserving their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates records in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the distinct text values under `key`, in first-seen order.
    ///
    /// Non-text values are skipped. This is the categorical-domain scan used
    /// for bar/stack category order.
    pub fn distinct_text(&self, key: &str) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for record in &self.records {
            let Some(text) = record.field(key).as_text() else {
                continue;
            };
            if seen.insert(text) {
                out.push(String::from(text));
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn absent_fields_read_as_missing() {
        let r = Record::new().with_field("a", 1.0);
        assert_eq!(r.field("a"), &FieldValue::Number(1.0));
        assert_eq!(r.field("b"), &FieldValue::Missing);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut r = Record::new().with_field("a", 1.0).with_field("b", 2.0);
        r.insert("a", 3.0);
        assert_eq!(r.field("a"), &FieldValue::Number(3.0));
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn distinct_text_preserves_first_seen_order() {
        let data = Dataset::from_records(vec![
            Record::new().with_field("cat", "b"),
            Record::new().with_field("cat", "a"),
            Record::new().with_field("cat", "b"),
            Record::new().with_field("cat", 7.0),
        ]);
        assert_eq!(data.distinct_text("cat"), vec!["b", "a"]);
    }
}
