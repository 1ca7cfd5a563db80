//! Batch-scoped type registry.
//!
//! Resolves [`TypeRef`]s against the descriptors of one generation batch.
//! Resolution never fails hard: callers turn an [`Unresolved`] into a
//! diagnostic and omit the offending element.

use sdlgen_core::{DiagnosticReason, SchemaKind, TypeDescriptor, TypeRef};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Why a reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    /// No reference was given.
    #[error("no class reference is provided")]
    NoReference,

    /// The referenced type is declared but carries no schema annotation.
    #[error("'{0}' should be annotated")]
    Unannotated(String),

    /// The referenced type is not part of the batch.
    #[error("'{0}' is not part of the schema")]
    Unknown(String),

    /// The referenced type exists but has the wrong kind.
    #[error("'{name}' is of type {kind} (need to be of type OBJECT)")]
    WrongKind {
        /// Referenced type.
        name: String,
        /// Its actual kind.
        kind: SchemaKind,
    },
}

impl Unresolved {
    /// Returns the diagnostic reason reported for this failure.
    #[must_use]
    pub const fn reason(&self) -> DiagnosticReason {
        match self {
            Self::NoReference => DiagnosticReason::NoClassReference,
            Self::Unannotated(_) => DiagnosticReason::MissingAnnotation,
            Self::Unknown(_) => DiagnosticReason::UnresolvedReference,
            Self::WrongKind { .. } => DiagnosticReason::InvalidBaseType,
        }
    }
}

/// Lookup table over the descriptors of one batch.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry<'a> {
    types: HashMap<&'a str, &'a TypeDescriptor>,
    unannotated: HashSet<String>,
}

impl<'a> TypeRegistry<'a> {
    /// Creates a registry over `descriptors`.
    ///
    /// When two descriptors share a name the first one wins.
    pub fn new(descriptors: impl IntoIterator<Item = &'a TypeDescriptor>) -> Self {
        let mut types = HashMap::new();
        for descriptor in descriptors {
            if types.contains_key(descriptor.name.as_str()) {
                tracing::debug!("duplicate type {}, keeping first", descriptor.name);
                continue;
            }
            types.insert(descriptor.name.as_str(), descriptor);
        }
        Self {
            types,
            unannotated: HashSet::new(),
        }
    }

    /// Declares types that exist but carry no schema annotation.
    #[must_use]
    pub fn with_unannotated<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unannotated.extend(names.into_iter().map(Into::into));
        self
    }

    /// Looks up a descriptor by source name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a TypeDescriptor> {
        self.types.get(name).copied()
    }

    /// Returns the number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no descriptor is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolves a reference to any registered descriptor.
    ///
    /// # Errors
    /// Returns `Unresolved` if the reference is absent or names a type that
    /// is not registered.
    pub fn resolve(
        &self,
        type_ref: Option<&TypeRef>,
    ) -> Result<&'a TypeDescriptor, Unresolved> {
        let type_ref = type_ref.ok_or(Unresolved::NoReference)?;
        let name = type_ref.as_str();

        if let Some(descriptor) = self.get(name) {
            return Ok(descriptor);
        }
        if self.unannotated.contains(name) {
            return Err(Unresolved::Unannotated(name.to_string()));
        }
        Err(Unresolved::Unknown(name.to_string()))
    }

    /// Resolves the base type of an implementation, which must be an
    /// `Object`.
    ///
    /// # Errors
    /// Returns `Unresolved` if resolution fails or the base has another kind.
    pub fn resolve_base(
        &self,
        type_ref: Option<&TypeRef>,
    ) -> Result<&'a TypeDescriptor, Unresolved> {
        let base = self.resolve(type_ref)?;
        if base.kind != SchemaKind::Object {
            return Err(Unresolved::WrongKind {
                name: base.name.clone(),
                kind: base.kind,
            });
        }
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: SchemaKind, name: &str, operation_name: &str) -> TypeDescriptor {
        TypeDescriptor::new(kind, name, operation_name).expect("valid descriptor")
    }

    fn batch() -> Vec<TypeDescriptor> {
        vec![
            descriptor(SchemaKind::Object, "Author", "author"),
            descriptor(SchemaKind::Enum, "DocType", "docType"),
            descriptor(SchemaKind::Implementation, "Book", "book").with_base("Author"),
        ]
    }

    #[test]
    fn test_resolve_registered() {
        let types = batch();
        let registry = TypeRegistry::new(&types);

        assert_eq!(registry.len(), 3);
        let resolved = registry
            .resolve(Some(&TypeRef::new("DocType")))
            .expect("resolves");
        assert_eq!(resolved.operation_name, "docType");
    }

    #[test]
    fn test_resolve_failures() {
        let types = batch();
        let registry = TypeRegistry::new(&types).with_unannotated(["Helper"]);

        assert_eq!(registry.resolve(None), Err(Unresolved::NoReference));
        assert_eq!(
            registry.resolve(Some(&TypeRef::new("Helper"))),
            Err(Unresolved::Unannotated("Helper".to_string()))
        );
        assert_eq!(
            registry.resolve(Some(&TypeRef::new("Missing"))),
            Err(Unresolved::Unknown("Missing".to_string()))
        );
    }

    #[test]
    fn test_resolve_base_requires_object() {
        let types = batch();
        let registry = TypeRegistry::new(&types);

        let base = registry
            .resolve_base(Some(&TypeRef::new("Author")))
            .expect("object base");
        assert_eq!(base.operation_name, "author");

        let err = registry
            .resolve_base(Some(&TypeRef::new("DocType")))
            .unwrap_err();
        assert_eq!(
            err,
            Unresolved::WrongKind {
                name: "DocType".to_string(),
                kind: SchemaKind::Enum,
            }
        );
        assert_eq!(err.reason(), DiagnosticReason::InvalidBaseType);
    }

    #[test]
    fn test_empty_registry() {
        let none: Vec<TypeDescriptor> = Vec::new();
        let registry = TypeRegistry::new(&none).with_unannotated(["Helper"]);
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        let types = batch();
        assert!(!TypeRegistry::new(&types).is_empty());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let types = vec![
            descriptor(SchemaKind::Object, "Doc", "doc"),
            descriptor(SchemaKind::Object, "Doc", "document"),
        ];
        let registry = TypeRegistry::new(&types);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Doc").map(|d| d.operation_name.as_str()), Some("doc"));
    }

    #[test]
    fn test_reasons() {
        assert_eq!(
            Unresolved::NoReference.reason(),
            DiagnosticReason::NoClassReference
        );
        assert_eq!(
            Unresolved::Unannotated("A".into()).reason(),
            DiagnosticReason::MissingAnnotation
        );
        assert_eq!(
            Unresolved::Unknown("A".into()).reason(),
            DiagnosticReason::UnresolvedReference
        );
    }
}
