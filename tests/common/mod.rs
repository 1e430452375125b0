pub mod fixtures;

use fig2ui::{Converter, FixedMetricsProvider, FontMetrics};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Metrics every test converter measures with: 6px `x`, 13px lines.
pub fn test_metrics() -> FontMetrics {
    FontMetrics::new(6.0, 13.0)
}

/// A converter with deterministic metrics.
pub fn converter() -> Converter {
    let _ = env_logger::builder().is_test(true).try_init();
    Converter::builder()
        .with_metrics_provider(Arc::new(FixedMetricsProvider::new(test_metrics())))
        .build()
}

/// Writes `dump` as `{name}.json` inside `dir` and returns its path.
pub fn write_dump(dir: &Path, name: &str, dump: &Value) -> std::io::Result<PathBuf> {
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, serde_json::to_vec_pretty(dump)?)?;
    Ok(path)
}

/// The `<rect>` of a widget's `geometry` property as `(x, y, width, height)`.
pub fn geometry_of(widget: roxmltree::Node<'_, '_>) -> Option<(i32, i32, i32, i32)> {
    let rect = widget
        .children()
        .find(|n| n.has_tag_name("property") && n.attribute("name") == Some("geometry"))?
        .children()
        .find(|n| n.has_tag_name("rect"))?;
    let field = |name: &str| -> Option<i32> {
        rect.children()
            .find(|n| n.has_tag_name(name))?
            .text()?
            .parse()
            .ok()
    };
    Some((field("x")?, field("y")?, field("width")?, field("height")?))
}

/// Finds a `<widget>` anywhere in the document by its `name` attribute.
pub fn find_widget<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.has_tag_name("widget") && n.attribute("name") == Some(name))
}
