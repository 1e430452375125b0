use crate::error::WriteError;
use fig2ui_idf::FormDocument;
use fig2ui_traits::AssetSink;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// PNG-encodes an icon raster.
pub fn encode_png(icon: &RgbaImage) -> Result<Vec<u8>, WriteError> {
    let mut bytes = Vec::new();
    icon.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// A toolbar icon that could not be encoded or stored.
#[derive(Debug)]
pub struct IconFailure {
    pub action: String,
    pub error: WriteError,
}

/// Outcome of [`store_icons`].
#[derive(Debug, Default)]
pub struct StoredIcons {
    pub stored: usize,
    pub failures: Vec<IconFailure>,
}

/// Stores every non-empty toolbar icon as `{action}.png`.
///
/// A failing icon does not stop the others; it is reported in
/// [`StoredIcons::failures`].
pub fn store_icons(doc: &FormDocument, sink: &dyn AssetSink) -> StoredIcons {
    let mut outcome = StoredIcons::default();
    for action in doc.actions() {
        if !action.has_icon() {
            log::debug!("Action '{}' has no icon pixels, no asset written", action.name);
            continue;
        }
        let name = action.icon_file_name();
        let result = encode_png(&action.icon)
            .and_then(|bytes| sink.store(&name, bytes).map_err(WriteError::from));
        match result {
            Ok(()) => {
                log::debug!("Stored icon '{}' via {}", name, sink.name());
                outcome.stored += 1;
            }
            Err(error) => outcome.failures.push(IconFailure {
                action: action.name.clone(),
                error,
            }),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use fig2ui_idf::{Action, WidgetKind, WidgetNode};
    use fig2ui_traits::{AssetError, FontSpec, InMemoryAssetSink};
    use fig2ui_types::Rect;
    use image::Rgba;

    fn document(actions: Vec<Action>) -> FormDocument {
        FormDocument {
            title: String::new(),
            tag: "figure1".into(),
            background: None,
            menu_bar: false,
            font: FontSpec::default(),
            geometry: Rect::new(0, 0, 10, 10),
            widgets: Vec::new(),
            toolbar: Some(WidgetNode::new(WidgetKind::ToolBar, "tb").with_actions(actions)),
        }
    }

    #[test]
    fn test_png_signature() {
        let bytes = encode_png(&RgbaImage::new(2, 2)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_store_only_non_empty_icons() {
        let mut icon = RgbaImage::new(1, 1);
        icon.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let doc = document(vec![
            Action::new("zoom", "Zoom", icon),
            Action::new("pan", "Pan", RgbaImage::new(0, 0)),
        ]);

        let sink = InMemoryAssetSink::new();
        let outcome = store_icons(&doc, &sink);
        assert_eq!(outcome.stored, 1);
        assert!(outcome.failures.is_empty());
        assert_eq!(sink.names(), vec!["zoom.png".to_string()]);

        let stored = sink.get("zoom.png").unwrap();
        let decoded = image::load_from_memory(&stored).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_no_toolbar_no_assets() {
        let mut doc = document(vec![]);
        doc.toolbar = None;
        let sink = InMemoryAssetSink::new();
        assert_eq!(store_icons(&doc, &sink).stored, 0);
        assert!(sink.is_empty());
    }

    /// Accepts only names without path separators.
    #[derive(Debug, Default)]
    struct FlatSink(InMemoryAssetSink);

    impl AssetSink for FlatSink {
        fn store(&self, name: &str, data: Vec<u8>) -> Result<(), AssetError> {
            if name.contains('/') {
                return Err(AssetError::InvalidName(name.to_string()));
            }
            self.0.store(name, data)
        }

        fn exists(&self, name: &str) -> bool {
            self.0.exists(name)
        }

        fn name(&self) -> &'static str {
            "FlatSink"
        }
    }

    #[test]
    fn test_rejected_icon_does_not_stop_others() {
        let mut icon = RgbaImage::new(1, 1);
        icon.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
        let doc = document(vec![
            Action::new("../../escape", "Bad", icon.clone()),
            Action::new("save", "Save", icon),
        ]);

        let sink = FlatSink::default();
        let outcome = store_icons(&doc, &sink);

        assert_eq!(outcome.stored, 1);
        assert!(sink.exists("save.png"));
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].action, "../../escape");
        assert!(matches!(
            outcome.failures[0].error,
            WriteError::Asset(AssetError::InvalidName(_))
        ));
    }
}
