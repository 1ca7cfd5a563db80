//! Diagnostics for elements skipped during discovery or generation.
//!
//! Nothing reported here aborts a run. Every diagnostic is logged through
//! `tracing` as soon as it is recorded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Informational; the element was omitted and the run continued.
    #[default]
    Info,
}

/// Why an element was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticReason {
    /// A declared type or member carries no schema annotation.
    MissingAnnotation,
    /// A reference names a type that is not part of the batch.
    UnresolvedReference,
    /// An implementation's base type is not an `Object`.
    InvalidBaseType,
    /// An object-typed element carries no type reference at all.
    NoClassReference,
    /// A descriptor violates a required invariant and was rejected.
    InvalidDescriptor,
}

impl DiagnosticReason {
    /// Returns a short label for the reason.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingAnnotation => "missing annotation",
            Self::UnresolvedReference => "unresolved reference",
            Self::InvalidBaseType => "invalid base type",
            Self::NoClassReference => "no class reference",
            Self::InvalidDescriptor => "invalid descriptor",
        }
    }
}

impl fmt::Display for DiagnosticReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A report describing one skipped element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Identifies the skipped element (`Type`, `Type.field`, `Type.field(param)`).
    pub subject: String,
    /// Why the element was skipped.
    pub reason: DiagnosticReason,
    /// Human readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Creates an informational diagnostic.
    pub fn info(
        subject: impl Into<String>,
        reason: DiagnosticReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Info,
            subject: subject.into(),
            reason,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IGNORING {} ({}): {}", self.subject, self.reason, self.message)
    }
}

/// Ordered collection of diagnostics recorded during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records and logs a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::info!(
            subject = %diagnostic.subject,
            reason = %diagnostic.reason,
            "IGNORING: {}",
            diagnostic.message
        );
        self.entries.push(diagnostic);
    }

    /// Records and logs an informational diagnostic.
    pub fn report(
        &mut self,
        subject: impl Into<String>,
        reason: DiagnosticReason,
        message: impl Into<String>,
    ) {
        self.push(Diagnostic::info(subject, reason, message));
    }

    /// Appends every entry of `other`, without logging them again.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over recorded diagnostics in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns the recorded diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(entries: Vec<Diagnostic>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
