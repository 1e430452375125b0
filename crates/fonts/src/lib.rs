//! Font metrics backed by installed system fonts.
//!
//! [`SystemFontMetrics`] discovers fonts with fontdb and reads the advance of
//! `x` and the line spacing with ttf-parser. Requested families that are not
//! installed (the legacy "MS Sans Serif" usually is not) fall back to the
//! platform's sans-serif face, the same substitution a desktop toolkit makes.

use fig2ui_traits::{FontError, FontMetrics, FontSpec, MetricsProvider};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Metrics provider over a fontdb database, with a per-font cache.
#[derive(Clone)]
pub struct SystemFontMetrics {
    db: Arc<RwLock<fontdb::Database>>,
    cache: Arc<RwLock<HashMap<FontSpec, FontMetrics>>>,
}

impl std::fmt::Debug for SystemFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces = self.db.read().map(|db| db.len()).unwrap_or(0);
        f.debug_struct("SystemFontMetrics")
            .field("faces", &faces)
            .finish()
    }
}

impl SystemFontMetrics {
    /// A provider with no fonts loaded.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// A provider over every font installed on this machine.
    pub fn new() -> Self {
        let provider = Self::empty();
        if let Ok(mut db) = provider.db.write() {
            db.load_system_fonts();
            log::debug!("Loaded {} system font faces", db.len());
        }
        provider
    }

    /// Adds font data directly to the database.
    pub fn load_font_data(&self, data: Vec<u8>) {
        if let Ok(mut db) = self.db.write() {
            db.load_font_data(data);
        }
        // New faces may change which family a query resolves to.
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    pub fn face_count(&self) -> usize {
        self.db.read().map(|db| db.len()).unwrap_or(0)
    }

    fn resolve(&self, font: &FontSpec) -> Result<FontMetrics, FontError> {
        let not_found = || FontError::NotFound {
            family: font.family.clone(),
            point_size: font.point_size,
        };

        let db = self
            .db
            .read()
            .map_err(|_| FontError::InvalidData("font database lock poisoned".to_string()))?;

        let id = db
            .query(&fontdb::Query {
                families: &[fontdb::Family::Name(&font.family), fontdb::Family::SansSerif],
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            })
            .ok_or_else(not_found)?;

        if let Some(face) = db.face(id) {
            log::debug!("  → Matched font: {:?} ({})", face.families, face.post_script_name);
        }

        db.with_face_data(id, |data, index| metrics_from_face_data(data, index, font))
            .ok_or_else(not_found)?
    }
}

impl Default for SystemFontMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemFontMetrics {
    fn metrics(&self, font: &FontSpec) -> Result<FontMetrics, FontError> {
        if let Ok(cache) = self.cache.read()
            && let Some(metrics) = cache.get(font)
        {
            return Ok(*metrics);
        }

        let metrics = self.resolve(font)?;
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(font.clone(), metrics);
        }
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "SystemFontMetrics"
    }
}

/// Reads `x` advance and line spacing from raw font data, scaled to the
/// font's pixel size and rounded to whole pixels.
pub fn metrics_from_face_data(
    data: &[u8],
    index: u32,
    font: &FontSpec,
) -> Result<FontMetrics, FontError> {
    let face = ttf_parser::Face::parse(data, index)
        .map_err(|e| FontError::InvalidData(e.to_string()))?;

    let units_per_em = face.units_per_em();
    if units_per_em == 0 {
        return Err(FontError::InvalidData("units per em is zero".to_string()));
    }
    let scale = font.pixel_size() / f64::from(units_per_em);

    let glyph = face.glyph_index('x').ok_or_else(|| FontError::MissingGlyph {
        family: font.family.clone(),
        glyph: 'x',
    })?;
    let advance = face.glyph_hor_advance(glyph).unwrap_or(0);

    let line_units =
        i32::from(face.ascender()) - i32::from(face.descender()) + i32::from(face.line_gap());

    Ok(FontMetrics::new(
        (f64::from(advance) * scale).round(),
        (f64::from(line_units) * scale).round(),
    ))
}
