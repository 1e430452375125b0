use serde_json::{Value, json};

/// The root window variable: a 400x300 pixel figure.
pub fn figure(children: Value) -> Value {
    json!({
        "hgS_070000": {
            "type": "figure",
            "properties": {
                "Name": "Demo window",
                "Tag": "figure1",
                "Units": "pixels",
                "Color": [0.9, 0.9, 0.9],
                "MenuBar": "none",
                "Position": [100, 100, 400, 300]
            },
            "children": children
        }
    })
}

/// A `uicontrol`. Push buttons carry no `Style` in saved figures.
pub fn control(style: Option<&str>, tag: &str, position: [f64; 4], string: Value) -> Value {
    let mut props = json!({
        "Tag": tag,
        "Units": "pixels",
        "Position": position,
        "String": string
    });
    if let Some(style) = style {
        props["Style"] = json!(style);
    }
    json!({ "type": "uicontrol", "properties": props })
}

pub fn panel(tag: &str, title: &str, position: [f64; 4]) -> Value {
    json!({
        "type": "uipanel",
        "properties": {
            "Tag": tag,
            "Title": title,
            "Units": "pixels",
            "Position": position
        }
    })
}

/// A toolbar with one toggle tool whose 2x2 icon has a transparent pixel,
/// and a push tool that is not exported.
pub fn toolbar() -> Value {
    json!({
        "type": "uitoolbar",
        "properties": { "Tag": "toolbar1" },
        "children": [
            {
                "type": "uitoggletool",
                "properties": {
                    "Tag": "zoomIn",
                    "TooltipString": "Zoom In",
                    "CData": [
                        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                        [[0.0, 0.0, 1.0], [null, null, null]]
                    ]
                }
            },
            {
                "type": "uipushtool",
                "properties": { "Tag": "print" }
            }
        ]
    })
}

/// A panel holding a button, a label outside it, a control with an
/// unsupported style and a toolbar.
pub fn demo_figure() -> Value {
    figure(json!([
        panel("panel1", "Options", [20.0, 20.0, 200.0, 150.0]),
        control(None, "okButton", [40.0, 40.0, 80.0, 30.0], json!("OK")),
        control(Some("text"), "label1", [300.0, 250.0, 60.0, 20.0], json!(["Hello", "there"])),
        control(Some("listbox"), "unsupported", [300.0, 10.0, 60.0, 60.0], json!("x")),
        toolbar()
    ]))
}
