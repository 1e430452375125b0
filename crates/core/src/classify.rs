use fig2ui_idf::WidgetKind;
use thiserror::Error;

/// A `type`/`Style` pair that has no widget kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized widget: type '{type_name}', style '{style}'")]
pub struct Unrecognized {
    pub type_name: String,
    /// Empty when the record has no `Style`.
    pub style: String,
}

/// Maps a record's `type` and optional `Style` onto a widget kind.
pub fn classify(type_name: &str, style: Option<&str>) -> Result<WidgetKind, Unrecognized> {
    let kind = match type_name {
        "axes" => Some(WidgetKind::Axes),
        "uipanel" => Some(WidgetKind::Frame),
        "uitoolbar" => Some(WidgetKind::ToolBar),
        "uicontrol" => match style.unwrap_or_default() {
            "" => Some(WidgetKind::PushButton),
            "text" => Some(WidgetKind::Text),
            "popupmenu" => Some(WidgetKind::PopupMenu),
            "edit" => Some(WidgetKind::Edit),
            "slider" => Some(WidgetKind::Slider),
            "checkbox" => Some(WidgetKind::Checkbox),
            _ => None,
        },
        _ => None,
    };

    kind.ok_or_else(|| Unrecognized {
        type_name: type_name.to_string(),
        style: style.unwrap_or_default().to_string(),
    })
}
