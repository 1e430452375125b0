//! Intermediate Document Format (IDF)
//! The in-memory widget tree produced from a figure document, after building
//! and reconciliation but before serialization.

use fig2ui_traits::FontSpec;
use fig2ui_types::{Color, Rect};
use image::RgbaImage;
use serde::{Serialize, Serializer};

/// The closed set of widget kinds the converter knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetKind {
    Axes,
    PushButton,
    ToggleButton,
    Checkbox,
    RadioButton,
    Edit,
    Text,
    Slider,
    ListBox,
    PopupMenu,
    Frame,
    ToolBar,
}

impl WidgetKind {
    /// Returns a string identifier for the kind, used in logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Axes => "axes",
            WidgetKind::PushButton => "push-button",
            WidgetKind::ToggleButton => "toggle-button",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::RadioButton => "radio-button",
            WidgetKind::Edit => "edit",
            WidgetKind::Text => "text",
            WidgetKind::Slider => "slider",
            WidgetKind::ListBox => "list-box",
            WidgetKind::PopupMenu => "popup-menu",
            WidgetKind::Frame => "frame",
            WidgetKind::ToolBar => "toolbar",
        }
    }
}

/// Text carried by a widget: nothing, one string, or a list of entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum TextContent {
    #[default]
    None,
    Single(String),
    List(Vec<String>),
}

impl TextContent {
    pub fn is_empty(&self) -> bool {
        match self {
            TextContent::None => true,
            TextContent::Single(s) => s.is_empty(),
            TextContent::List(items) => items.is_empty(),
        }
    }

    /// The text as one line; list entries are joined with single spaces.
    pub fn joined(&self) -> String {
        match self {
            TextContent::None => String::new(),
            TextContent::Single(s) => s.clone(),
            TextContent::List(items) => items.join(" "),
        }
    }

    /// The text as entries; a single string is a one-entry list.
    pub fn items(&self) -> Vec<&str> {
        match self {
            TextContent::None => Vec::new(),
            TextContent::Single(s) => vec![s.as_str()],
            TextContent::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Promotes a single string to a list of entries separated by `|`.
    pub fn into_list(self) -> Self {
        match self {
            TextContent::Single(s) => TextContent::List(s.split('|').map(String::from).collect()),
            other => other,
        }
    }
}

/// A toolbar action with its tooltip and icon raster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub name: String,
    pub tooltip: String,
    #[serde(serialize_with = "serialize_icon_size")]
    pub icon: RgbaImage,
}

impl Action {
    pub fn new(name: impl Into<String>, tooltip: impl Into<String>, icon: RgbaImage) -> Self {
        Self {
            name: name.into(),
            tooltip: tooltip.into(),
            icon,
        }
    }

    pub fn has_icon(&self) -> bool {
        self.icon.width() > 0 && self.icon.height() > 0
    }

    /// File name of the icon asset, relative to the output document.
    pub fn icon_file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

fn serialize_icon_size<S: Serializer>(icon: &RgbaImage, serializer: S) -> Result<S::Ok, S::Error> {
    [icon.width(), icon.height()].serialize(serializer)
}

/// One widget in the tree. Children are owned; geometry is relative to the
/// enclosing container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetNode {
    pub kind: WidgetKind,
    pub tag: String,
    #[serde(skip_serializing_if = "TextContent::is_empty")]
    pub text: TextContent,
    pub geometry: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_sheet: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl WidgetNode {
    pub fn new(kind: WidgetKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            text: TextContent::None,
            geometry: Rect::default(),
            style_sheet: None,
            children: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: TextContent) -> Self {
        self.text = text;
        self
    }

    pub fn with_geometry(mut self, geometry: Rect) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: Option<String>) -> Self {
        self.style_sheet = style_sheet;
        self
    }

    pub fn with_children(mut self, children: Vec<WidgetNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    pub fn is_frame(&self) -> bool {
        self.kind == WidgetKind::Frame
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(WidgetNode::count).sum::<usize>()
    }
}

/// A fully built and reconciled form, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDocument {
    pub title: String,
    pub tag: String,
    pub background: Option<Color>,
    pub menu_bar: bool,
    pub font: FontSpec,
    pub geometry: Rect,
    pub widgets: Vec<WidgetNode>,
    pub toolbar: Option<WidgetNode>,
}

impl FormDocument {
    /// Height against which top-level widgets were flipped.
    pub fn reference_height(&self) -> i32 {
        self.geometry.height
    }

    pub fn actions(&self) -> &[Action] {
        self.toolbar
            .as_ref()
            .map(|t| t.actions.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of widgets below the central widget.
    pub fn widget_count(&self) -> usize {
        self.widgets.iter().map(WidgetNode::count).sum()
    }
}
