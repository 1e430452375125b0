//! Advisory warnings collected while building a document.
//!
//! Diagnostics never change whether a conversion succeeds. The builder
//! collects them; the caller decides how to report them.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The node's `type`/`Style` pair has no widget kind; the node is skipped.
    Unrecognized {
        path: String,
        type_name: String,
        style: String,
    },
    /// The node has no `properties`; it is skipped.
    MissingProperties { path: String },
    /// The node's `Position` has fewer than four values; it is skipped.
    MissingPosition { path: String, tag: String },
    /// `Units` is not a known unit system; pixels were assumed.
    UnknownUnits { path: String, units: String },
    /// A toolbar action's `CData` could not be read; the icon is empty.
    MalformedIcon {
        path: String,
        action: String,
        reason: String,
    },
    /// The window has no usable `Color`; no background rule is written.
    MissingWindowColor,
    /// More than one top-level toolbar; the later one replaces the earlier.
    DuplicateToolbar { replaced: String, tag: String },
    /// A toolbar icon could not be written; the form still references it.
    IconNotStored { action: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unrecognized {
                path,
                type_name,
                style,
            } => write!(
                f,
                "{}: skipping unrecognized widget (type '{}', style '{}')",
                path, type_name, style
            ),
            Diagnostic::MissingProperties { path } => {
                write!(f, "{}: skipping node without properties", path)
            }
            Diagnostic::MissingPosition { path, tag } => {
                write!(f, "{}: skipping '{}', Position needs four values", path, tag)
            }
            Diagnostic::UnknownUnits { path, units } => {
                write!(f, "{}: unknown units '{}', assuming pixels", path, units)
            }
            Diagnostic::MalformedIcon {
                path,
                action,
                reason,
            } => write!(f, "{}: icon of action '{}' ignored: {}", path, action, reason),
            Diagnostic::MissingWindowColor => {
                write!(f, "window has no Color, background rule omitted")
            }
            Diagnostic::DuplicateToolbar { replaced, tag } => {
                write!(f, "toolbar '{}' replaces earlier toolbar '{}'", tag, replaced)
            }
            Diagnostic::IconNotStored { action, reason } => {
                write!(f, "icon of action '{}' not written: {}", action, reason)
            }
        }
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Emits every diagnostic as a warning, prefixed with `context`.
    pub fn log_warnings(&self, context: &str) {
        for diagnostic in &self.items {
            log::warn!("{}: {}", context, diagnostic);
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic::Unrecognized {
            path: "children[2]".into(),
            type_name: "uicontrol".into(),
            style: "sparkline".into(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "children[2]: skipping unrecognized widget (type 'uicontrol', style 'sparkline')"
        );
    }

    #[test]
    fn test_collection_keeps_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::MissingWindowColor);
        diagnostics.push(Diagnostic::MissingProperties {
            path: "children[0]".into(),
        });

        assert_eq!(diagnostics.len(), 2);
        let first = diagnostics.iter().next();
        assert_eq!(first, Some(&Diagnostic::MissingWindowColor));
    }
}
