//! Loads a JSON dump of a figure document.
//!
//! The top level is an object of named variables. Values map as follows:
//!
//! | JSON                                 | Field value                    |
//! |--------------------------------------|--------------------------------|
//! | `null`, `[]`                         | `Absent`                       |
//! | number, bool                         | `Scalar`                       |
//! | string                               | `Text`                         |
//! | array of strings                     | `TextList`                     |
//! | array of numbers (`null` = NaN)      | `Vector`                       |
//! | array of arrays of numbers           | `Matrix` (rows × cols)         |
//! | array of arrays of arrays of numbers | `Matrix` (rows × cols × planes)|
//! | object                               | 1-element `Record`             |
//! | array of objects                     | struct array `Record`          |

use crate::error::RecordError;
use crate::memory::{Element, MemoryRecord, MemorySource, MemoryValue};
use crate::value::{FieldValue, Matrix};
use serde_json::{Map, Value};
use std::path::Path;

/// Parses a JSON figure dump.
pub fn from_str(source: &str) -> Result<MemorySource, RecordError> {
    let root: Value = serde_json::from_str(source)?;
    from_value(&root)
}

/// Reads and parses a JSON figure dump from disk.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<MemorySource, RecordError> {
    let path = path.as_ref();
    log::debug!("Loading record dump from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    from_str(&text)
}

/// Converts an already-parsed JSON document.
pub fn from_value(root: &Value) -> Result<MemorySource, RecordError> {
    let Value::Object(variables) = root else {
        return Err(RecordError::malformed("$", "top level must be an object of variables"));
    };

    let mut source = MemorySource::new();
    for (name, value) in variables {
        let path = format!("$.{}", name);
        let record = match convert_value(value, &path)? {
            FieldValue::Record(record) => record,
            other => {
                return Err(RecordError::malformed(
                    &path,
                    format!("variable must be a struct, found {}", other.kind_name()),
                ));
            }
        };
        source.push(name.clone(), record);
    }
    Ok(source)
}

fn convert_value(value: &Value, path: &str) -> Result<MemoryValue, RecordError> {
    match value {
        Value::Null => Ok(FieldValue::Absent),
        Value::Bool(b) => Ok(FieldValue::Scalar(if *b { 1.0 } else { 0.0 })),
        Value::Number(n) => Ok(FieldValue::Scalar(number(n))),
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        Value::Object(map) => Ok(FieldValue::Record(MemoryRecord::single(convert_object(
            map, path,
        )?))),
        Value::Array(items) => convert_array(items, path),
    }
}

fn convert_object(map: &Map<String, Value>, path: &str) -> Result<Element, RecordError> {
    let mut element = Element::new();
    for (name, value) in map {
        let field_path = format!("{}.{}", path, name);
        element = element.field(name.clone(), convert_value(value, &field_path)?);
    }
    Ok(element)
}

fn convert_array(items: &[Value], path: &str) -> Result<MemoryValue, RecordError> {
    let Some(first) = items.iter().find(|v| !v.is_null()) else {
        return if items.is_empty() {
            Ok(FieldValue::Absent)
        } else {
            // All nulls: a vector of NaN.
            Ok(FieldValue::Vector(vec![f64::NAN; items.len()]))
        };
    };

    match first {
        Value::String(_) => items
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(RecordError::malformed(
                    &format!("{}[{}]", path, i),
                    "mixed string list",
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::TextList),
        Value::Number(_) | Value::Bool(_) => numbers(items, path).map(FieldValue::Vector),
        Value::Object(_) => {
            let mut elements = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                match item {
                    Value::Object(map) => elements.push(convert_object(map, &item_path)?),
                    _ => return Err(RecordError::malformed(&item_path, "mixed struct array")),
                }
            }
            Ok(FieldValue::Record(MemoryRecord::array(elements)))
        }
        Value::Array(_) => convert_nested(items, path).map(FieldValue::Matrix),
        Value::Null => Ok(FieldValue::Absent),
    }
}

fn convert_nested(rows: &[Value], path: &str) -> Result<Matrix, RecordError> {
    let is_3d = rows
        .iter()
        .filter_map(Value::as_array)
        .flat_map(|row| row.iter())
        .any(Value::is_array);

    if is_3d {
        let mut pixels = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row_path = format!("{}[{}]", path, r);
            let cells = as_array(row, &row_path)?;
            let mut converted = Vec::with_capacity(cells.len());
            for (c, cell) in cells.iter().enumerate() {
                let cell_path = format!("{}[{}]", row_path, c);
                converted.push(numbers(as_array(cell, &cell_path)?, &cell_path)?);
            }
            pixels.push(converted);
        }
        Matrix::from_pixels(&pixels).ok_or_else(|| RecordError::malformed(path, "ragged matrix"))
    } else {
        let mut converted = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row_path = format!("{}[{}]", path, r);
            converted.push(numbers(as_array(row, &row_path)?, &row_path)?);
        }
        Matrix::from_rows(&converted).ok_or_else(|| RecordError::malformed(path, "ragged matrix"))
    }
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], RecordError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| RecordError::malformed(path, "expected an array"))
}

fn numbers(items: &[Value], path: &str) -> Result<Vec<f64>, RecordError> {
    items
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Null => Ok(f64::NAN),
            Value::Number(n) => Ok(number(n)),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(RecordError::malformed(
                &format!("{}[{}]", path, i),
                "expected a number",
            )),
        })
        .collect()
}

fn number(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, RecordSource};
    use std::io::Write;

    const FIGURE: &str = r#"{
        "hgS_070000": {
            "type": "figure",
            "properties": {
                "Name": "Demo",
                "Tag": "figure1",
                "Color": [0.94, 0.94, 0.94],
                "Position": [10, 20, 300, 200]
            },
            "children": [
                { "type": "uicontrol", "properties": { "Style": "popupmenu", "String": ["a", "b"] } },
                { "type": "axes", "properties": null }
            ]
        }
    }"#;

    #[test]
    fn test_load_figure_dump() {
        let source = from_str(FIGURE).unwrap();
        let variables = source.variables();
        assert_eq!(variables.len(), 1);

        let (name, root) = &variables[0];
        assert_eq!(name, "hgS_070000");
        assert_eq!(root.text("type", 0).as_deref(), Some("figure"));

        let props = root.record("properties", 0).unwrap();
        assert_eq!(props.text("Name", 0).as_deref(), Some("Demo"));
        assert_eq!(
            props.field("Position", 0).to_vector(),
            Some(vec![10.0, 20.0, 300.0, 200.0])
        );

        let children = root.record("children", 0).unwrap();
        assert_eq!(children.len(), 2);
        let popup = children.record("properties", 0).unwrap();
        assert_eq!(
            popup.field("String", 0),
            FieldValue::TextList(vec!["a".to_string(), "b".to_string()])
        );
        assert!(children.field("properties", 1).is_absent());
    }

    #[test]
    fn test_pixel_matrix_with_nan() {
        let source = from_str(
            r#"{ "v": { "CData": [[[1, 0, 0], [null, null, null]]] } }"#,
        )
        .unwrap();
        let (_, record) = &source.variables()[0];
        let cdata = record.field("CData", 0);
        let matrix = cdata.as_matrix().unwrap();
        assert_eq!((matrix.rows(), matrix.cols(), matrix.planes()), (1, 2, 3));
        assert_eq!(matrix.get(0, 0, 0), Some(1.0));
        assert!(matrix.get(0, 1, 2).unwrap().is_nan());
    }

    #[test]
    fn test_empty_array_is_absent() {
        let source = from_str(r#"{ "v": { "children": [] } }"#).unwrap();
        let (_, record) = &source.variables()[0];
        assert!(record.field("children", 0).is_absent());
    }

    #[test]
    fn test_top_level_must_be_object() {
        let result = from_str("[1, 2, 3]");
        assert!(matches!(result, Err(RecordError::Malformed { .. })));
    }

    #[test]
    fn test_variable_must_be_struct() {
        let result = from_str(r#"{ "hgS_070000": 3 }"#);
        assert!(matches!(result, Err(RecordError::Malformed { .. })));
    }

    #[test]
    fn test_mixed_list_is_rejected() {
        let result = from_str(r#"{ "v": { "String": ["a", 1] } }"#);
        match result {
            Err(RecordError::Malformed { path, .. }) => assert_eq!(path, "$.v.String[1]"),
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_str("{ nope"), Err(RecordError::Json(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIGURE.as_bytes()).unwrap();
        let source = load_file(file.path()).unwrap();
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file("/definitely/not/here.json");
        assert!(matches!(result, Err(RecordError::Io(_))));
    }
}
