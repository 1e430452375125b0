/// A dense numeric array of up to three dimensions, addressed `[row, col, plane]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    planes: usize,
    /// Row-major within each plane, planes stored one after another.
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from plane-major, row-major data.
    ///
    /// Returns `None` if `data.len()` does not match the dimensions.
    pub fn new(rows: usize, cols: usize, planes: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols)?.checked_mul(planes)? != data.len() {
            return None;
        }
        Some(Self {
            rows,
            cols,
            planes,
            data,
        })
    }

    /// Builds a single-plane matrix from rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Self::new(rows.len(), cols, 1, rows.concat())
    }

    /// Builds a matrix from per-pixel channel tuples (`pixels[row][col][plane]`).
    pub fn from_pixels(pixels: &[Vec<Vec<f64>>]) -> Option<Self> {
        let rows = pixels.len();
        let cols = pixels.first().map(Vec::len).unwrap_or(0);
        let planes = pixels
            .first()
            .and_then(|r| r.first())
            .map(Vec::len)
            .unwrap_or(0);
        let mut data = vec![0.0; rows * cols * planes];
        for (r, row) in pixels.iter().enumerate() {
            if row.len() != cols {
                return None;
            }
            for (c, pixel) in row.iter().enumerate() {
                if pixel.len() != planes {
                    return None;
                }
                for (p, value) in pixel.iter().enumerate() {
                    data[p * rows * cols + r * cols + c] = *value;
                }
            }
        }
        Self::new(rows, cols, planes, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    pub fn get(&self, row: usize, col: usize, plane: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols || plane >= self.planes {
            return None;
        }
        self.data
            .get(plane * self.rows * self.cols + row * self.cols + col)
            .copied()
    }

    /// The values of a row or column vector; `None` for 2-D data.
    pub fn as_vector(&self) -> Option<&[f64]> {
        (self.planes == 1 && (self.rows == 1 || self.cols == 1)).then_some(&self.data[..])
    }
}

/// A typed value read from a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<R> {
    /// The field does not exist, the index is out of range, or the value is empty.
    Absent,
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Matrix),
    Text(String),
    TextList(Vec<String>),
    Record(R),
}

impl<R> FieldValue<R> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            FieldValue::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Numeric content as a flat vector: scalars, vectors and row/column matrices.
    pub fn to_vector(&self) -> Option<Vec<f64>> {
        match self {
            FieldValue::Scalar(v) => Some(vec![*v]),
            FieldValue::Vector(v) => Some(v.clone()),
            FieldValue::Matrix(m) => m.as_vector().map(<[f64]>::to_vec),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&R> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<R> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Short type name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Scalar(_) => "scalar",
            FieldValue::Vector(_) => "vector",
            FieldValue::Matrix(_) => "matrix",
            FieldValue::Text(_) => "string",
            FieldValue::TextList(_) => "string list",
            FieldValue::Record(_) => "record",
        }
    }
}
