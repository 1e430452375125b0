use crate::value::{FieldValue, Matrix};
use crate::{Record, RecordSource};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A field value whose nested records are in-memory records.
pub type MemoryValue = FieldValue<MemoryRecord>;

/// One element of a struct array: field name → value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    fields: BTreeMap<String, MemoryValue>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn field(mut self, name: impl Into<String>, value: MemoryValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(name, FieldValue::Text(value.into()))
    }

    pub fn text_list<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.field(name, FieldValue::TextList(list))
    }

    pub fn scalar(self, name: impl Into<String>, value: f64) -> Self {
        self.field(name, FieldValue::Scalar(value))
    }

    pub fn vector(self, name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        self.field(name, FieldValue::Vector(values.into()))
    }

    pub fn matrix(self, name: impl Into<String>, matrix: Matrix) -> Self {
        self.field(name, FieldValue::Matrix(matrix))
    }

    pub fn record(self, name: impl Into<String>, record: MemoryRecord) -> Self {
        self.field(name, FieldValue::Record(record))
    }

    pub fn get(&self, name: &str) -> Option<&MemoryValue> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// An in-memory struct array. Cloning is cheap; elements are shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecord {
    elements: Arc<Vec<Element>>,
}

impl MemoryRecord {
    /// A struct array with no elements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A 1x1 struct.
    pub fn single(element: Element) -> Self {
        Self::array(vec![element])
    }

    pub fn array(elements: Vec<Element>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Record for MemoryRecord {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn field(&self, name: &str, index: usize) -> MemoryValue {
        self.elements
            .get(index)
            .and_then(|element| element.get(name))
            .cloned()
            .unwrap_or(FieldValue::Absent)
    }
}

/// An opened in-memory document: named top-level variables in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    variables: Vec<(String, MemoryRecord)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: impl Into<String>, record: MemoryRecord) -> Self {
        self.push(name, record);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, record: MemoryRecord) {
        self.variables.push((name.into(), record));
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl RecordSource for MemorySource {
    type Record = MemoryRecord;

    fn variables(&self) -> Vec<(String, MemoryRecord)> {
        self.variables.clone()
    }
}
