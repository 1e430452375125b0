//! Qt Designer `.ui` output for built figure documents.
//!
//! This crate provides:
//! - [`UiWriter`] for streaming a [`FormDocument`](fig2ui_idf::FormDocument) as `.ui` XML
//! - [`to_string`] / [`to_bytes`] convenience serializers
//! - [`store_icons`] for persisting toolbar icons as PNG assets

mod error;
mod icons;
mod ui;

pub use error::WriteError;
pub use icons::{IconFailure, StoredIcons, encode_png, store_icons};
pub use ui::{UiWriter, to_bytes, to_string};
