use serde::Serialize;

/// An opaque RGB color with 8-bit channels.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Builds a color from fractional channels in `[0, 1]`.
    ///
    /// Only the first three values are used; returns `None` when fewer are given.
    pub fn from_fractions(channels: &[f64]) -> Option<Color> {
        match channels {
            [r, g, b, ..] => Some(Color {
                r: channel_to_u8(*r),
                g: channel_to_u8(*g),
                b: channel_to_u8(*b),
            }),
            _ => None,
        }
    }
}

/// Scales a fractional intensity to `0..=255`. NaN maps to 0.
pub fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A style sheet rule painting the background of the widget named `tag`.
pub fn background_rule(tag: &str, color: Color) -> String {
    format!(
        "#{} {{background-color: rgb({}, {}, {}); }}",
        tag, color.r, color.g, color.b
    )
}
