//! Toolbar icon rasters from `CData` color matrices.

use fig2ui_record::{FieldValue, Matrix};
use image::{Rgba, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    #[error("icon data is a {0}, expected a rows x cols x 3 matrix")]
    NotAMatrix(&'static str),

    #[error("icon data has {0} color planes, expected 3")]
    WrongPlanes(usize),

    #[error("icon of {rows}x{cols} pixels is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// An icon with no pixels.
pub fn empty_icon() -> RgbaImage {
    RgbaImage::new(0, 0)
}

/// Extracts an icon from a `CData` field. Absent data is an empty icon.
pub fn extract<R>(value: &FieldValue<R>) -> Result<RgbaImage, IconError> {
    match value {
        FieldValue::Absent => Ok(empty_icon()),
        FieldValue::Matrix(matrix) => from_matrix(matrix),
        other => Err(IconError::NotAMatrix(other.kind_name())),
    }
}

/// Converts a `rows x cols x 3` matrix of `[0, 1]` channels to RGBA.
///
/// The image is `cols` wide and `rows` high. Pixels with any NaN channel
/// stay fully transparent; all others are opaque.
pub fn from_matrix(matrix: &Matrix) -> Result<RgbaImage, IconError> {
    if matrix.planes() != 3 {
        return Err(IconError::WrongPlanes(matrix.planes()));
    }
    let too_large = || IconError::TooLarge {
        rows: matrix.rows(),
        cols: matrix.cols(),
    };
    let width = u32::try_from(matrix.cols()).map_err(|_| too_large())?;
    let height = u32::try_from(matrix.rows()).map_err(|_| too_large())?;

    let mut icon = RgbaImage::new(width, height);
    for (x, y, pixel) in icon.enumerate_pixels_mut() {
        let (row, col) = (y as usize, x as usize);
        let channel = |plane| matrix.get(row, col, plane).unwrap_or(f64::NAN);
        let (r, g, b) = (channel(0), channel(1), channel(2));
        if r.is_nan() || g.is_nan() || b.is_nan() {
            continue;
        }
        *pixel = Rgba([
            fig2ui_types::color::channel_to_u8(r),
            fig2ui_types::color::channel_to_u8(g),
            fig2ui_types::color::channel_to_u8(b),
            255,
        ]);
    }
    Ok(icon)
}
