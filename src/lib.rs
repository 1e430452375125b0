//! # fig2ui
//!
//! Converts MATLAB GUIDE figure layouts into Qt Designer `.ui` documents.
//!
//! A figure arrives as a [`RecordSource`](fig2ui_record::RecordSource): a
//! set of named top-level variables holding nested records. The root window
//! is the last variable whose name starts with `hgS_`. Its children become a
//! widget tree with pixel geometry, panels adopt the widgets they enclose,
//! and the result is written as a `QMainWindow` form. Toolbar icons are
//! written next to the form as PNG files.
//!
//! ```no_run
//! use fig2ui::Converter;
//! use std::path::Path;
//!
//! let converter = Converter::builder().with_icons(false).build();
//! let report = converter.convert_file(Path::new("figures/main.json"))?;
//! println!("wrote {}", report.output.display());
//! # Ok::<(), fig2ui::ConvertError>(())
//! ```

pub mod config;
pub mod converter;
pub mod error;

pub use config::{ConverterConfig, DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_SUFFIX};
pub use converter::{ConversionReport, Converter, ConverterBuilder};
pub use error::ConvertError;

pub use fig2ui_core::{
    Action, BuildError, Diagnostic, Diagnostics, FormDocument, TextContent, WidgetKind,
    WidgetNode,
};
pub use fig2ui_record as record;
pub use fig2ui_record::{MemorySource, RecordSource};
pub use fig2ui_traits::{FixedMetricsProvider, FontMetrics, FontSpec, MetricsProvider};

use std::path::Path;

/// Converts one figure dump with default settings.
///
/// Returns `true` when `{stem}_build.ui` was written. Failures are logged.
pub fn convert(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match Converter::default().convert_file(path) {
        Ok(_) => true,
        Err(e) => {
            log::error!("Failed to convert {}: {}", path.display(), e);
            false
        }
    }
}
