//! # fig2ui-core
//!
//! Platform-agnostic conversion core.
//!
//! This crate turns an opened figure document into a [`FormDocument`]:
//! - **classify**: maps `type`/`Style` pairs onto widget kinds
//! - **geometry**: resolves unit-bearing positions into pixel rectangles
//! - **builder**: recursive widget construction with a scoped reference height
//! - **icon**: toolbar icon rasters from color matrices
//! - **reconcile**: reparents widgets into the panels that enclose them
//! - **document**: the driver tying the above together
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**: no filesystem access and no
//! font discovery. Records arrive through [`fig2ui_record::RecordSource`] and
//! font metrics are passed in by value, so every stage is a pure function of
//! its inputs plus a [`Diagnostics`] log.

// Re-export foundation crates
pub use fig2ui_idf as idf;
pub use fig2ui_record as record;
pub use fig2ui_traits as traits;
pub use fig2ui_types as types;

pub mod builder;
pub mod classify;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod reconcile;

pub use builder::TreeBuilder;
pub use classify::{Unrecognized, classify};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use document::{BuildOutput, DEFAULT_ROOT_PREFIX, DocumentBuilder, find_root};
pub use error::BuildError;
pub use geometry::{Position, Scale, Units};
pub use idf::{Action, FormDocument, TextContent, WidgetKind, WidgetNode};
pub use reconcile::reconcile;
