//! Recursive construction of widget nodes from figure records.

use crate::classify::classify;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::geometry::{self, Position, Units};
use crate::icon;
use fig2ui_idf::{Action, TextContent, WidgetKind, WidgetNode};
use fig2ui_record::{FieldValue, Record};
use fig2ui_traits::FontMetrics;
use fig2ui_types::{Color, Rect, background_rule};

/// Element type of toolbar entries that become actions.
pub const TOGGLE_TOOL: &str = "uitoggletool";

/// Builds widget nodes from the elements of a `children` struct array.
///
/// The reference height is passed to every call; a panel's children are
/// built against the panel's own height.
#[derive(Debug)]
pub struct TreeBuilder {
    metrics: FontMetrics,
    diagnostics: Diagnostics,
}

impl TreeBuilder {
    pub fn new(metrics: FontMetrics) -> Self {
        Self {
            metrics,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Builds every element of `children`, skipping those that yield no node.
    pub fn build_all<R: Record>(
        &mut self,
        children: &R,
        reference_height: i32,
        path: &str,
    ) -> Vec<WidgetNode> {
        (0..children.len())
            .filter_map(|index| self.build(children, index, reference_height, path))
            .collect()
    }

    /// Builds element `index` of `children`, or `None` if it is skipped.
    pub fn build<R: Record>(
        &mut self,
        children: &R,
        index: usize,
        reference_height: i32,
        parent_path: &str,
    ) -> Option<WidgetNode> {
        let path = format!("{}[{}]", parent_path, index);
        let type_name = children.text("type", index).unwrap_or_default();

        let Some(props) = children.record("properties", index) else {
            self.diagnostics
                .push(Diagnostic::MissingProperties { path });
            return None;
        };

        let tag = props.text("Tag", 0).unwrap_or_default();
        let style = props.text("Style", 0);

        let kind = match classify(&type_name, style.as_deref()) {
            Ok(kind) => kind,
            Err(unrecognized) => {
                self.diagnostics.push(Diagnostic::Unrecognized {
                    path,
                    type_name: unrecognized.type_name,
                    style: unrecognized.style,
                });
                return None;
            }
        };
        log::debug!("{}: {} '{}'", path, kind.name(), tag);

        let style_sheet = props
            .field("BackgroundColor", 0)
            .to_vector()
            .and_then(|channels| Color::from_fractions(&channels))
            .map(|color| background_rule(&tag, color));

        let node = WidgetNode::new(kind, tag).with_style_sheet(style_sheet);

        match kind {
            WidgetKind::ToolBar => {
                let actions = match children.record("children", index) {
                    Some(tools) => self.build_actions(&tools, &path),
                    None => Vec::new(),
                };
                Some(node.with_actions(actions))
            }
            WidgetKind::Frame => {
                let geometry = self.position(&props, reference_height, &path, &node.tag)?;
                let title = props.text("Title", 0).unwrap_or_default();
                let text = if title.is_empty() {
                    TextContent::None
                } else {
                    TextContent::Single(title)
                };
                let nested = match children.record("children", index) {
                    Some(nested) => {
                        self.build_all(&nested, geometry.height, &format!("{}.children", path))
                    }
                    None => Vec::new(),
                };
                Some(
                    node.with_geometry(geometry)
                        .with_text(text)
                        .with_children(nested),
                )
            }
            WidgetKind::Axes | WidgetKind::Slider => {
                let geometry = self.position(&props, reference_height, &path, &node.tag)?;
                Some(node.with_geometry(geometry))
            }
            WidgetKind::PopupMenu => {
                let geometry = self.position(&props, reference_height, &path, &node.tag)?;
                // Saved popups may hold their entries as one "a|b|c" string.
                let text = text_content(props.field("String", 0)).into_list();
                Some(node.with_geometry(geometry).with_text(text))
            }
            WidgetKind::PushButton
            | WidgetKind::ToggleButton
            | WidgetKind::Text
            | WidgetKind::Edit
            | WidgetKind::Checkbox
            | WidgetKind::RadioButton
            | WidgetKind::ListBox => {
                let geometry = self.position(&props, reference_height, &path, &node.tag)?;
                let text = text_content(props.field("String", 0));
                Some(node.with_geometry(geometry).with_text(text))
            }
        }
    }

    /// Resolves `props`' position against `reference_height`.
    ///
    /// Records a diagnostic and returns `None` when `Position` is unusable.
    pub fn position<R: Record>(
        &mut self,
        props: &R,
        reference_height: i32,
        path: &str,
        tag: &str,
    ) -> Option<Rect> {
        let Some(position) = props
            .field("Position", 0)
            .to_vector()
            .and_then(|values| Position::from_values(&values))
        else {
            self.diagnostics.push(Diagnostic::MissingPosition {
                path: path.to_string(),
                tag: tag.to_string(),
            });
            return None;
        };
        let scale = self.units(props, path).scale(&self.metrics);
        Some(geometry::resolve(&position, scale, reference_height))
    }

    /// Reads `Units`, falling back to pixels.
    pub fn units<R: Record>(&mut self, props: &R, path: &str) -> Units {
        let raw = props.text("Units", 0).unwrap_or_default();
        match Units::parse(&raw) {
            Some(units) => units,
            None => {
                if !raw.is_empty() {
                    self.diagnostics.push(Diagnostic::UnknownUnits {
                        path: path.to_string(),
                        units: raw,
                    });
                }
                Units::Pixels
            }
        }
    }

    fn build_actions<R: Record>(&mut self, tools: &R, toolbar_path: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        for index in 0..tools.len() {
            if tools.text("type", index).as_deref() != Some(TOGGLE_TOOL) {
                continue;
            }
            let path = format!("{}.children[{}]", toolbar_path, index);
            let Some(props) = tools.record("properties", index) else {
                self.diagnostics.push(Diagnostic::MissingProperties { path });
                continue;
            };

            let name = props.text("Tag", 0).unwrap_or_default();
            let tooltip = props.text("TooltipString", 0).unwrap_or_default();
            let icon = match icon::extract(&props.field("CData", 0)) {
                Ok(icon) => icon,
                Err(err) => {
                    self.diagnostics.push(Diagnostic::MalformedIcon {
                        path,
                        action: name.clone(),
                        reason: err.to_string(),
                    });
                    icon::empty_icon()
                }
            };
            actions.push(Action::new(name, tooltip, icon));
        }
        actions
    }
}

/// Reads a `String` field: one string, a list, or nothing.
fn text_content<R>(value: FieldValue<R>) -> TextContent {
    match value {
        FieldValue::Text(s) => TextContent::Single(s),
        FieldValue::TextList(items) => TextContent::List(items),
        _ => TextContent::None,
    }
}
