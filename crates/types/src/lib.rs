pub mod color;
pub mod geometry;

pub use color::{background_rule, Color};
pub use geometry::{Point, Rect};
