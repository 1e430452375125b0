use fig2ui_core::DEFAULT_ROOT_PREFIX;
use fig2ui_traits::FontSpec;

/// Suffix appended to the input's stem to name the output document.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_build";

/// Extension of the output document.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "ui";

/// Settings shared by every conversion a [`Converter`](crate::Converter) runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Font written into the window and used to measure "characters" units.
    pub font: FontSpec,
    /// The root window is the last top-level variable with this prefix.
    pub root_prefix: String,
    pub output_suffix: String,
    pub output_extension: String,
    /// Write toolbar icons as PNG files next to the output document.
    pub write_icons: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            root_prefix: DEFAULT_ROOT_PREFIX.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            write_icons: true,
        }
    }
}
