mod common;

use common::fixtures::{control, demo_figure, figure, panel, toolbar};
use common::{TestResult, converter, find_widget, geometry_of, write_dump};
use fig2ui::{ConvertError, Diagnostic, WidgetKind};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_file_writes_ui_and_icons() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;

    let report = converter().convert_file(&input)?;

    assert_eq!(report.output, dir.path().join("demo_build.ui"));
    assert!(report.output.is_file());
    assert_eq!(report.icons, 1);
    // panel1 + okButton inside it + label1
    assert_eq!(report.widgets, 3);

    let icon = image::open(dir.path().join("zoomIn.png"))?.to_rgba8();
    assert_eq!(icon.dimensions(), (2, 2));
    assert_eq!(icon.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(icon.get_pixel(1, 1).0[3], 0);
    assert!(!dir.path().join("print.png").exists());
    Ok(())
}

#[test]
fn test_document_structure() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;
    let report = converter().convert_file(&input)?;

    let xml = fs::read_to_string(&report.output)?;
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    let doc = roxmltree::Document::parse(&xml)?;

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "ui");
    assert_eq!(root.attribute("version"), Some("4.0"));

    let window = find_widget(&doc, "figure1").ok_or("no window")?;
    assert_eq!(window.attribute("class"), Some("QMainWindow"));
    assert_eq!(geometry_of(window), Some((100, 100, 400, 300)));

    // MenuBar "none" suppresses the menu bar.
    assert!(doc.descendants().all(|n| n.attribute("class") != Some("QMenuBar")));

    let central = find_widget(&doc, "centralWidget").ok_or("no central widget")?;
    let top_level: Vec<_> = central
        .children()
        .filter(|n| n.has_tag_name("widget"))
        .filter_map(|n| n.attribute("name"))
        .collect();
    assert_eq!(top_level, vec!["panel1", "label1"]);
    Ok(())
}

#[test]
fn test_panel_adopts_enclosed_widgets() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;
    let report = converter().convert_file(&input)?;
    let xml = fs::read_to_string(&report.output)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let group = find_widget(&doc, "panel1").ok_or("no panel")?;
    assert_eq!(group.attribute("class"), Some("QGroupBox"));
    assert_eq!(geometry_of(group), Some((20, 130, 200, 150)));

    let button = find_widget(&doc, "okButton").ok_or("no button")?;
    assert_eq!(button.parent_element(), Some(group));
    // Window coordinates (40, 230) relative to the panel origin.
    assert_eq!(geometry_of(button), Some((20, 100, 80, 30)));

    let label = find_widget(&doc, "label1").ok_or("no label")?;
    assert_eq!(label.attribute("class"), Some("QLabel"));
    assert_eq!(geometry_of(label), Some((300, 30, 60, 20)));
    let text = label
        .descendants()
        .find(|n| n.has_tag_name("string"))
        .and_then(|n| n.text());
    assert_eq!(text, Some("Hello there"));
    Ok(())
}

#[test]
fn test_toolbar_and_actions() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;
    let report = converter().convert_file(&input)?;
    let xml = fs::read_to_string(&report.output)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let toolbar = find_widget(&doc, "mainToolBar").ok_or("no toolbar")?;
    assert_eq!(toolbar.attribute("class"), Some("QToolBar"));
    let added: Vec<_> = toolbar
        .children()
        .filter(|n| n.has_tag_name("addaction"))
        .filter_map(|n| n.attribute("name"))
        .collect();
    assert_eq!(added, vec!["zoomIn"]);

    let action = doc
        .descendants()
        .find(|n| n.has_tag_name("action"))
        .ok_or("no action")?;
    assert_eq!(action.attribute("name"), Some("zoomIn"));
    let iconset = action
        .descendants()
        .find(|n| n.has_tag_name("iconset"))
        .and_then(|n| n.text());
    assert_eq!(iconset, Some("zoomIn.png"));
    Ok(())
}

#[test]
fn test_conversion_is_deterministic() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;
    let converter = converter();

    let first = fs::read(converter.convert_file(&input)?.output)?;
    let second = fs::read(converter.convert_file(&input)?.output)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_unrecognized_style_is_skipped() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;
    let report = converter().convert_file(&input)?;

    assert!(report.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::Unrecognized { style, .. } if style == "listbox"
    )));
    let xml = fs::read_to_string(&report.output)?;
    assert!(!xml.contains("unsupported"));
    assert!(xml.contains("label1"));
    Ok(())
}

#[test]
fn test_missing_root_writes_nothing() -> TestResult {
    let dir = TempDir::new()?;
    let dump = json!({ "other": { "type": "figure" } });
    let input = write_dump(dir.path(), "noroot", &dump)?;

    let result = converter().convert_file(&input);
    assert!(matches!(result, Err(ConvertError::Build(_))));
    assert!(!dir.path().join("noroot_build.ui").exists());
    assert!(!fig2ui::convert(&input));
    Ok(())
}

#[test]
fn test_malformed_dump_is_a_record_error() -> TestResult {
    let dir = TempDir::new()?;
    let input = dir.path().join("broken.json");
    fs::write(&input, "not json")?;

    assert!(matches!(
        converter().convert_file(&input),
        Err(ConvertError::Record(_))
    ));
    assert!(!dir.path().join("broken_build.ui").exists());
    Ok(())
}

#[test]
fn test_icons_can_be_disabled() -> TestResult {
    let dir = TempDir::new()?;
    let input = write_dump(dir.path(), "demo", &demo_figure())?;

    let converter = fig2ui::Converter::builder()
        .with_metrics_provider(std::sync::Arc::new(fig2ui::FixedMetricsProvider::new(
            common::test_metrics(),
        )))
        .with_icons(false)
        .build();
    let report = converter.convert_file(&input)?;

    assert_eq!(report.icons, 0);
    assert!(!dir.path().join("zoomIn.png").exists());
    // The action still references its icon.
    assert!(fs::read_to_string(&report.output)?.contains("zoomIn.png"));
    Ok(())
}

#[test]
fn test_build_document_from_memory() -> TestResult {
    let dump = figure(json!([
        panel("outer", "", [0.0, 0.0, 400.0, 300.0]),
        panel("inner", "", [10.0, 10.0, 50.0, 50.0]),
        toolbar()
    ]));
    let source = fig2ui::record::json::from_value(&dump)?;
    let built = converter().build_document(&source)?;

    // Panels never adopt other panels, even when they enclose them.
    let tags: Vec<_> = built.document.widgets.iter().map(|w| w.tag.as_str()).collect();
    assert_eq!(tags, vec!["outer", "inner"]);
    assert!(built.document.widgets.iter().all(|w| w.children.is_empty()));
    assert!(built.document.widgets.iter().all(|w| w.kind == WidgetKind::Frame));
    assert_eq!(built.document.actions().len(), 1);
    Ok(())
}

#[test]
fn test_render_to_string_matches_file_output() -> TestResult {
    let dir = TempDir::new()?;
    let dump = figure(json!([control(
        Some("edit"),
        "name",
        [10.0, 10.0, 100.0, 20.0],
        json!("type here")
    )]));
    let input = write_dump(dir.path(), "edit", &dump)?;
    let converter = converter();

    let rendered = converter.render_to_string(&fig2ui::record::json::from_value(&dump)?)?;
    let written = fs::read_to_string(converter.convert_file(&input)?.output)?;
    assert_eq!(rendered, written);
    assert!(rendered.contains("QLineEdit"));
    Ok(())
}

#[test]
fn test_unstorable_icon_is_advisory() -> TestResult {
    let dir = TempDir::new()?;
    let dump = figure(json!([{
        "type": "uitoolbar",
        "properties": { "Tag": "toolbar1" },
        "children": [{
            "type": "uitoggletool",
            "properties": {
                "Tag": "../../escape",
                "CData": [[[1.0, 1.0, 1.0]]]
            }
        }]
    }]));
    let input = write_dump(dir.path(), "escape", &dump)?;

    let report = converter().convert_file(&input)?;

    assert!(report.output.is_file());
    assert_eq!(report.icons, 0);
    assert!(report.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::IconNotStored { action, .. } if action == "../../escape"
    )));
    assert!(!dir.path().join("../../escape.png").exists());
    assert!(fig2ui::convert(&input));
    Ok(())
}
