//! Record access abstractions for figure documents.
//!
//! A figure file is a tree of struct arrays: every record has a number of
//! elements, and each element maps field names to typed values (numbers,
//! strings, string lists or nested records). The converter only ever reads
//! through the [`Record`] and [`RecordSource`] traits, so any backend that can
//! answer "field `name` of element `index`" can feed it.
//!
//! ## Available Backends
//!
//! - [`MemoryRecord`] / [`MemorySource`]: in-memory trees, built with [`Element`]
//! - [`json`]: loads a JSON dump of a figure into a [`MemorySource`]
//!
//! ## Example
//!
//! ```ignore
//! use fig2ui_record::{Element, MemoryRecord, Record};
//!
//! let props = MemoryRecord::single(Element::new().text("Tag", "figure1"));
//! assert_eq!(props.text("Tag", 0).as_deref(), Some("figure1"));
//! ```

mod error;
pub mod json;
mod memory;
mod value;

pub use error::RecordError;
pub use memory::{Element, MemoryRecord, MemorySource, MemoryValue};
pub use value::{FieldValue, Matrix};

/// Read-only access to one struct array of a figure document.
///
/// Lookups never fail: a missing field or an out-of-range index yields
/// [`FieldValue::Absent`].
pub trait Record: Clone {
    /// Number of elements in the struct array.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Typed value of field `name` in element `index`.
    fn field(&self, name: &str, index: usize) -> FieldValue<Self>;

    /// Convenience: the field as a string, if it holds one.
    fn text(&self, name: &str, index: usize) -> Option<String> {
        self.field(name, index).as_text().map(str::to_string)
    }

    /// Convenience: the field as a nested record, if it holds one.
    fn record(&self, name: &str, index: usize) -> Option<Self> {
        self.field(name, index).into_record()
    }
}

/// An opened document exposing its top-level named variables.
pub trait RecordSource {
    type Record: Record;

    /// All top-level variables in file order.
    fn variables(&self) -> Vec<(String, Self::Record)>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    type Record = S::Record;

    fn variables(&self) -> Vec<(String, Self::Record)> {
        (**self).variables()
    }
}
