// src/converter.rs
use crate::config::ConverterConfig;
use crate::error::ConvertError;
use fig2ui_core::{BuildOutput, Diagnostic, Diagnostics, DocumentBuilder};
use fig2ui_record::RecordSource;
use fig2ui_resource::FilesystemAssetSink;
use fig2ui_traits::{
    AssetSink, FixedMetricsProvider, FontMetrics, FontSpec, MetricsProvider,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome of one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output: PathBuf,
    /// Widgets below the central widget, nested ones included.
    pub widgets: usize,
    pub icons: usize,
    pub diagnostics: Diagnostics,
}

/// A builder for creating a [`Converter`].
pub struct ConverterBuilder {
    config: ConverterConfig,
    metrics: Option<Arc<dyn MetricsProvider>>,
    system_fonts: bool,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            config: ConverterConfig::default(),
            metrics: None,
            system_fonts: cfg!(feature = "system-fonts"),
        }
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.config.font = font;
        self
    }

    pub fn with_root_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.root_prefix = prefix.into();
        self
    }

    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.output_suffix = suffix.into();
        self
    }

    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.output_extension = extension.into();
        self
    }

    pub fn with_icons(mut self, write_icons: bool) -> Self {
        self.config.write_icons = write_icons;
        self
    }

    /// Uses `provider` for font metrics. Takes precedence over system fonts.
    pub fn with_metrics_provider(mut self, provider: Arc<dyn MetricsProvider>) -> Self {
        self.metrics = Some(provider);
        self
    }

    /// Measures fonts installed on this machine. Without the `system-fonts`
    /// feature this has no effect.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.system_fonts = system_fonts;
        self
    }

    pub fn build(self) -> Converter {
        let metrics = match self.metrics {
            Some(provider) => provider,
            None => default_metrics(self.system_fonts, &self.config.font),
        };
        log::debug!("Using metrics provider {}", metrics.name());
        Converter {
            config: self.config,
            metrics,
        }
    }
}

#[cfg(feature = "system-fonts")]
fn default_metrics(system_fonts: bool, font: &FontSpec) -> Arc<dyn MetricsProvider> {
    if system_fonts {
        Arc::new(fig2ui_fonts::SystemFontMetrics::new())
    } else {
        approximate_metrics(font)
    }
}

#[cfg(not(feature = "system-fonts"))]
fn default_metrics(_system_fonts: bool, font: &FontSpec) -> Arc<dyn MetricsProvider> {
    approximate_metrics(font)
}

fn approximate_metrics(font: &FontSpec) -> Arc<dyn MetricsProvider> {
    Arc::new(FixedMetricsProvider::new(FontMetrics::approximate(
        font.point_size,
    )))
}

/// Converts figure documents into `.ui` files.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    metrics: Arc<dyn MetricsProvider>,
}

impl Default for Converter {
    fn default() -> Self {
        ConverterBuilder::new().build()
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// `{input dir}/{input stem}{suffix}.{extension}`.
    pub fn output_path_for(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let stem = input
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ConvertError::NoOutputPath {
                input: input.to_path_buf(),
                reason: "path has no file name",
            })?;
        let name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            self.config.output_suffix,
            self.config.output_extension
        );
        Ok(input
            .parent()
            .map(|dir| dir.join(&name))
            .unwrap_or_else(|| PathBuf::from(&name)))
    }

    /// Metrics of the configured font; approximated when it cannot be measured.
    pub fn font_metrics(&self) -> FontMetrics {
        let font = &self.config.font;
        match self.metrics.metrics(font) {
            Ok(metrics) => metrics,
            Err(e) => {
                log::warn!(
                    "Cannot measure '{}' {}pt ({}), using approximate metrics",
                    font.family,
                    font.point_size,
                    e
                );
                FontMetrics::approximate(font.point_size)
            }
        }
    }

    /// Builds and reconciles the widget tree of an opened figure.
    pub fn build_document<S: RecordSource>(&self, source: &S) -> Result<BuildOutput, ConvertError> {
        let builder = DocumentBuilder::new(self.config.font.clone(), self.font_metrics())
            .with_root_prefix(self.config.root_prefix.clone());
        Ok(builder.build(source)?)
    }

    /// Loads a figure dump from disk and builds its widget tree.
    pub fn build_file(&self, input: &Path) -> Result<BuildOutput, ConvertError> {
        let source = fig2ui_record::json::load_file(input)?;
        self.build_document(&source)
    }

    /// Renders an opened figure to `.ui` text without touching the filesystem.
    pub fn render_to_string<S: RecordSource>(&self, source: &S) -> Result<String, ConvertError> {
        let output = self.build_document(source)?;
        Ok(fig2ui_writer::to_string(&output.document)?)
    }

    /// Converts an opened figure, writing the document to `output` and icons
    /// through `assets`. Icons that cannot be stored are reported as
    /// diagnostics.
    pub fn convert_source<S: RecordSource>(
        &self,
        source: &S,
        output: &Path,
        assets: &dyn AssetSink,
    ) -> Result<ConversionReport, ConvertError> {
        let mut built = self.build_document(source)?;
        let bytes = fig2ui_writer::to_bytes(&built.document)?;
        fs::write(output, bytes)?;

        let icons = if self.config.write_icons {
            let outcome = fig2ui_writer::store_icons(&built.document, assets);
            for failure in outcome.failures {
                built.diagnostics.push(Diagnostic::IconNotStored {
                    action: failure.action,
                    reason: failure.error.to_string(),
                });
            }
            outcome.stored
        } else {
            0
        };

        Ok(ConversionReport {
            output: output.to_path_buf(),
            widgets: built.document.widget_count(),
            icons,
            diagnostics: built.diagnostics,
        })
    }

    /// Converts a figure dump on disk into `{stem}_build.ui` beside it.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport, ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::NoOutputPath {
                input: input.to_path_buf(),
                reason: "input file does not exist",
            });
        }
        let output = self.output_path_for(input)?;
        log::info!("Converting {} -> {}", input.display(), output.display());

        let source = fig2ui_record::json::load_file(input)?;
        let base = output
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let assets = FilesystemAssetSink::new(base);

        let report = self.convert_source(&source, &output, &assets)?;
        report.diagnostics.log_warnings(&input.display().to_string());
        log::info!(
            "Wrote {} ({} widgets, {} icons)",
            report.output.display(),
            report.widgets,
            report.icons
        );
        Ok(report)
    }
}
