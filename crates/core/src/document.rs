//! Document-level driver: locates the root window, builds its widgets and
//! reconciles containment.

use crate::builder::TreeBuilder;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::BuildError;
use crate::geometry::{self, Position};
use crate::reconcile::reconcile;
use fig2ui_idf::{FormDocument, WidgetKind, WidgetNode};
use fig2ui_record::{Record, RecordSource};
use fig2ui_traits::{FontMetrics, FontSpec};
use fig2ui_types::Color;

/// Default prefix of the variable holding the root window.
pub const DEFAULT_ROOT_PREFIX: &str = "hgS_";

/// `MenuBar` value that suppresses the menu bar.
pub const NO_MENU_BAR: &str = "none";

/// A built document together with the diagnostics collected on the way.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub document: FormDocument,
    pub diagnostics: Diagnostics,
}

/// Builds a [`FormDocument`] from an opened figure.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    font: FontSpec,
    metrics: FontMetrics,
    root_prefix: String,
}

impl DocumentBuilder {
    /// `metrics` must describe `font`; it scales "characters" units.
    pub fn new(font: FontSpec, metrics: FontMetrics) -> Self {
        Self {
            font,
            metrics,
            root_prefix: DEFAULT_ROOT_PREFIX.to_string(),
        }
    }

    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix = prefix.into();
        self
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn build<S: RecordSource>(&self, source: &S) -> Result<BuildOutput, BuildError> {
        let (variable, root) =
            find_root(source, &self.root_prefix).ok_or_else(|| BuildError::RootNotFound {
                prefix: self.root_prefix.clone(),
            })?;
        log::debug!(
            "Root variable '{}' of type '{}'",
            variable,
            root.text("type", 0).unwrap_or_default()
        );

        let props = root
            .record("properties", 0)
            .ok_or_else(|| BuildError::MissingRootProperties {
                variable: variable.clone(),
            })?;

        let mut builder = TreeBuilder::new(self.metrics);

        // The window flips against its own height.
        let position = props
            .field("Position", 0)
            .to_vector()
            .and_then(|values| Position::from_values(&values))
            .ok_or_else(|| BuildError::MissingRootPosition {
                variable: variable.clone(),
            })?;
        let scale = builder.units(&props, "properties").scale(&self.metrics);
        let window = geometry::resolve(&position, scale, position.pixel_height(scale));

        let title = props.text("Name", 0).unwrap_or_default();
        let tag = props.text("Tag", 0).unwrap_or_default();
        let menu_bar = props.text("MenuBar", 0).as_deref() != Some(NO_MENU_BAR);
        let background = props
            .field("Color", 0)
            .to_vector()
            .and_then(|channels| Color::from_fractions(&channels));

        let mut frames = Vec::new();
        let mut others = Vec::new();
        let mut toolbar: Option<WidgetNode> = None;
        let mut driver_diagnostics = Diagnostics::new();
        if background.is_none() {
            driver_diagnostics.push(Diagnostic::MissingWindowColor);
        }

        if let Some(children) = root.record("children", 0) {
            for index in 0..children.len() {
                let Some(node) = builder.build(&children, index, window.height, "children") else {
                    continue;
                };
                match node.kind {
                    WidgetKind::Frame => frames.push(node),
                    WidgetKind::ToolBar => {
                        let tag = node.tag.clone();
                        if let Some(replaced) = toolbar.replace(node) {
                            driver_diagnostics.push(Diagnostic::DuplicateToolbar {
                                replaced: replaced.tag,
                                tag,
                            });
                        }
                    }
                    _ => others.push(node),
                }
            }
        }

        let built = frames.len() + others.len();
        let widgets = reconcile(frames, others);
        log::debug!(
            "Built {} top-level widgets, {} after reconciliation",
            built,
            widgets.len()
        );

        let mut diagnostics = builder.into_diagnostics();
        diagnostics.extend(driver_diagnostics);

        Ok(BuildOutput {
            document: FormDocument {
                title,
                tag,
                background,
                menu_bar,
                font: self.font.clone(),
                geometry: window,
                widgets,
                toolbar,
            },
            diagnostics,
        })
    }
}

/// The last top-level variable whose name starts with `prefix`.
pub fn find_root<S: RecordSource>(source: &S, prefix: &str) -> Option<(String, S::Record)> {
    source
        .variables()
        .into_iter()
        .rfind(|(name, _)| name.starts_with(prefix))
}
