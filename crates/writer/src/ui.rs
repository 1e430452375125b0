//! Qt Designer `.ui` serialization.

use crate::error::WriteError;
use fig2ui_idf::{Action, FormDocument, WidgetKind, WidgetNode};
use fig2ui_traits::FontSpec;
use fig2ui_types::{Rect, background_rule};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const UI_VERSION: &str = "4.0";
const CENTRAL_WIDGET: &str = "centralWidget";
const MENU_BAR: &str = "menuBar";
const MAIN_TOOLBAR: &str = "mainToolBar";

/// Streams a [`FormDocument`] as `.ui` XML, indented by one space per level.
pub struct UiWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> UiWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            xml: Writer::new_with_indent(inner, b' ', 1),
        }
    }

    pub fn into_inner(self) -> W {
        self.xml.into_inner()
    }

    /// Writes the whole document, declaration to trailer.
    pub fn write_document(&mut self, doc: &FormDocument) -> Result<(), WriteError> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.start("ui", &[("version", UI_VERSION)])?;
        self.text_element("class", "MainWindow")?;

        self.start("widget", &[("class", "QMainWindow"), ("name", doc.tag.as_str())])?;
        self.property_rect("geometry", doc.geometry)?;
        self.property_font("font", &doc.font)?;
        self.property_string("windowTitle", &doc.title)?;
        if let Some(color) = doc.background {
            self.property_string("styleSheet", &background_rule(&doc.tag, color))?;
        }

        self.start("widget", &[("class", "QWidget"), ("name", CENTRAL_WIDGET)])?;
        for widget in &doc.widgets {
            self.write_widget(widget)?;
        }
        self.end("widget")?;

        if doc.menu_bar {
            self.empty("widget", &[("class", "QMenuBar"), ("name", MENU_BAR)])?;
        }

        if let Some(toolbar) = &doc.toolbar {
            self.write_toolbar(&toolbar.actions)?;
        }

        self.end("widget")?;
        self.write_trailer()?;
        self.end("ui")?;
        Ok(())
    }

    /// Writes one widget and, for frames, its children.
    pub fn write_widget(&mut self, widget: &WidgetNode) -> Result<(), WriteError> {
        let name = widget.tag.as_str();
        match widget.kind {
            WidgetKind::Axes => {
                self.start(
                    "widget",
                    &[("class", "QFrame"), ("name", name), ("native", "true")],
                )?;
                self.property_rect("geometry", widget.geometry)?;
                self.property_enum("frameShape", "QFrame::StyledPanel")?;
                self.property_enum("frameShadow", "QFrame::Sunken")?;
                self.style_sheet(widget)?;
            }
            WidgetKind::Frame => {
                self.start("widget", &[("class", "QGroupBox"), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                self.property_string("title", &widget.text.joined())?;
                self.style_sheet(widget)?;
                for child in &widget.children {
                    self.write_widget(child)?;
                }
            }
            WidgetKind::PushButton | WidgetKind::ToggleButton => {
                self.start("widget", &[("class", "QPushButton"), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                if !widget.text.is_empty() {
                    self.property_string("text", &widget.text.joined())?;
                }
                if widget.kind == WidgetKind::ToggleButton {
                    self.property_bool("checkable", true)?;
                }
                self.style_sheet(widget)?;
            }
            WidgetKind::Text => {
                self.start("widget", &[("class", "QLabel"), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                if !widget.text.is_empty() {
                    self.property_string("text", &widget.text.joined())?;
                }
                self.style_sheet(widget)?;
                self.property_set("alignment", "Qt::AlignCenter")?;
                self.property_bool("wordWrap", true)?;
            }
            WidgetKind::PopupMenu | WidgetKind::ListBox => {
                let class = if widget.kind == WidgetKind::PopupMenu {
                    "QComboBox"
                } else {
                    "QListWidget"
                };
                self.start("widget", &[("class", class), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                for item in widget.text.items() {
                    self.start("item", &[])?;
                    self.property_string("text", item)?;
                    self.end("item")?;
                }
                self.style_sheet(widget)?;
            }
            WidgetKind::Edit => {
                self.start("widget", &[("class", "QLineEdit"), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                if !widget.text.is_empty() {
                    self.property_string("text", &widget.text.joined())?;
                }
                self.style_sheet(widget)?;
            }
            WidgetKind::Slider => {
                self.start("widget", &[("class", "QScrollBar"), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                let orientation = if widget.geometry.width > widget.geometry.height {
                    "Qt::Horizontal"
                } else {
                    "Qt::Vertical"
                };
                self.property_enum("orientation", orientation)?;
                self.style_sheet(widget)?;
            }
            WidgetKind::Checkbox | WidgetKind::RadioButton => {
                let class = if widget.kind == WidgetKind::Checkbox {
                    "QCheckBox"
                } else {
                    "QRadioButton"
                };
                self.start("widget", &[("class", class), ("name", name)])?;
                self.property_rect("geometry", widget.geometry)?;
                self.property_string("text", &widget.text.joined())?;
                self.style_sheet(widget)?;
            }
            WidgetKind::ToolBar => {
                // Toolbars live beside the central widget, never inside it.
                log::debug!("Toolbar '{}' ignored inside the widget tree", name);
                return Ok(());
            }
        }
        self.end("widget")
    }

    fn write_toolbar(&mut self, actions: &[Action]) -> Result<(), WriteError> {
        self.start("widget", &[("class", "QToolBar"), ("name", MAIN_TOOLBAR)])?;
        self.start("attribute", &[("name", "toolBarArea")])?;
        self.text_element("enum", "TopToolBarArea")?;
        self.end("attribute")?;
        self.start("attribute", &[("name", "toolBarBreak")])?;
        self.text_element("bool", "false")?;
        self.end("attribute")?;
        for action in actions {
            self.empty("addaction", &[("name", action.name.as_str())])?;
        }
        self.end("widget")?;

        for action in actions {
            self.start("action", &[("name", action.name.as_str())])?;
            self.start("property", &[("name", "icon")])?;
            self.text_element("iconset", &action.icon_file_name())?;
            self.end("property")?;
            self.property_string("text", &action.tooltip)?;
            self.end("action")?;
        }
        Ok(())
    }

    fn write_trailer(&mut self) -> Result<(), WriteError> {
        self.empty("layoutdefault", &[("spacing", "6"), ("margin", "11")])?;

        self.start("customwidgets", &[])?;
        self.start("customwidget", &[])?;
        self.text_element("class", "QwtPlot")?;
        self.text_element("extends", "QWidget")?;
        self.start("header", &[("location", "global")])?;
        self.text("qwt_plot.h")?;
        self.end("header")?;
        self.text_element("container", "1")?;
        self.end("customwidget")?;
        self.end("customwidgets")?;

        self.text_element("pixmapfunction", "")?;
        self.text_element("resources", "")?;
        self.text_element("connections", "")
    }

    fn style_sheet(&mut self, widget: &WidgetNode) -> Result<(), WriteError> {
        match &widget.style_sheet {
            Some(rule) if !rule.is_empty() => self.property_string("styleSheet", rule),
            _ => Ok(()),
        }
    }

    // --- Properties ---

    fn property_string(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.text_element("string", value)?;
        self.end("property")
    }

    fn property_bool(&mut self, name: &str, value: bool) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.text_element("bool", if value { "true" } else { "false" })?;
        self.end("property")
    }

    fn property_enum(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.text_element("enum", value)?;
        self.end("property")
    }

    fn property_set(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.text_element("set", value)?;
        self.end("property")
    }

    fn property_rect(&mut self, name: &str, rect: Rect) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.start("rect", &[])?;
        self.text_element("x", &rect.x.to_string())?;
        self.text_element("y", &rect.y.to_string())?;
        self.text_element("width", &rect.width.to_string())?;
        self.text_element("height", &rect.height.to_string())?;
        self.end("rect")?;
        self.end("property")
    }

    fn property_font(&mut self, name: &str, font: &FontSpec) -> Result<(), WriteError> {
        self.start("property", &[("name", name)])?;
        self.start("font", &[])?;
        self.text_element("family", &font.family)?;
        self.text_element("pointsize", &font.point_size.to_string())?;
        self.end("font")?;
        self.end("property")
    }

    // --- Raw events ---

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), WriteError> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.xml.write_event(Event::Start(element))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), WriteError> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.xml.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), WriteError> {
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), WriteError> {
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name>text</name>` on one line; empty text gives `<name></name>`.
    fn text_element(&mut self, name: &str, text: &str) -> Result<(), WriteError> {
        self.start(name, &[])?;
        self.text(text)?;
        self.end(name)
    }
}

/// Serializes a document to a byte vector.
pub fn to_bytes(doc: &FormDocument) -> Result<Vec<u8>, WriteError> {
    let mut writer = UiWriter::new(Vec::new());
    writer.write_document(doc)?;
    Ok(writer.into_inner())
}

/// Serializes a document to a string.
pub fn to_string(doc: &FormDocument) -> Result<String, WriteError> {
    Ok(String::from_utf8(to_bytes(doc)?)?)
}
