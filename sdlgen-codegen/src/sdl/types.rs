//! Type header generation: root keyword, operation name, implements clause.

use super::tokens::SdlToken;
use sdlgen_core::{Diagnostics, SchemaKind, TypeDescriptor};
use sdlgen_schema::TypeRegistry;

/// Tracks which operation roots have already been declared in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootState {
    query_opened: bool,
    mutation_opened: bool,
}

impl RootState {
    /// Creates a state with no root opened.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query_opened: false,
            mutation_opened: false,
        }
    }

    /// Marks the root of `kind` as opened.
    ///
    /// Returns true if it was already open, meaning the declaration must be
    /// emitted as an `extend`. Non-root kinds never extend.
    pub fn open(&mut self, kind: SchemaKind) -> bool {
        let flag = match kind {
            SchemaKind::Query => &mut self.query_opened,
            SchemaKind::Mutation => &mut self.mutation_opened,
            _ => return false,
        };
        std::mem::replace(flag, true)
    }

    /// Returns true once a query root was declared.
    #[must_use]
    pub const fn query_opened(&self) -> bool {
        self.query_opened
    }

    /// Returns true once a mutation root was declared.
    #[must_use]
    pub const fn mutation_opened(&self) -> bool {
        self.mutation_opened
    }
}

/// Generator for the header of a type declaration.
pub struct TypeHeaderGenerator<'r, 'a> {
    registry: &'r TypeRegistry<'a>,
}

impl<'r, 'a> TypeHeaderGenerator<'r, 'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry<'a>) -> Self {
        Self { registry }
    }

    /// Generates everything preceding the field block of `descriptor`.
    pub fn generate(
        &self,
        descriptor: &TypeDescriptor,
        roots: &mut RootState,
        diagnostics: &mut Diagnostics,
    ) -> String {
        let mut output = String::new();

        if roots.open(descriptor.kind) {
            output.push_str("extend ");
        }
        SdlToken::Space.push_to(&mut output);
        output.push_str(descriptor.kind.keyword().unwrap_or_default());
        SdlToken::Space.push_to(&mut output);

        if !descriptor.kind.is_operation_root() {
            output.push_str(&descriptor.operation_name);
            SdlToken::Space.push_to(&mut output);
        }

        if descriptor.kind == SchemaKind::Implementation {
            output.push_str(&self.generate_implements(descriptor, diagnostics));
        }

        output
    }

    /// Generates the implements clause, or nothing if the base type is
    /// absent or not an object.
    fn generate_implements(
        &self,
        descriptor: &TypeDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> String {
        match self.registry.resolve_base(descriptor.base_type_ref.as_ref()) {
            Ok(base) => format!("implements {}", base.operation_name),
            Err(unresolved) => {
                diagnostics.report(
                    descriptor.name.as_str(),
                    unresolved.reason(),
                    format!("class implementation of {} since {}", descriptor.name, unresolved),
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::DiagnosticReason;

    fn descriptor(kind: SchemaKind, name: &str, operation_name: &str) -> TypeDescriptor {
        TypeDescriptor::new(kind, name, operation_name).expect("valid descriptor")
    }

    #[test]
    fn test_root_state_extends_repeats() {
        let mut roots = RootState::new();
        assert!(!roots.open(SchemaKind::Query));
        assert!(roots.open(SchemaKind::Query));
        assert!(!roots.open(SchemaKind::Mutation));
        assert!(roots.open(SchemaKind::Mutation));
        assert!(!roots.open(SchemaKind::Object));
        assert!(!roots.open(SchemaKind::Object));
        assert!(roots.query_opened());
        assert!(roots.mutation_opened());
    }

    #[test]
    fn test_header_per_kind() {
        let types = vec![descriptor(SchemaKind::Object, "Doc", "doc")];
        let registry = TypeRegistry::new(&types);
        let generator = TypeHeaderGenerator::new(&registry);
        let mut roots = RootState::new();
        let mut diagnostics = Diagnostics::new();

        let cases = [
            (SchemaKind::Object, " type doc "),
            (SchemaKind::Input, " input doc "),
            (SchemaKind::Interface, " interface doc "),
            (SchemaKind::Enum, " enum doc "),
        ];
        for (kind, expected) in cases {
            let header = generator.generate(
                &descriptor(kind, "Doc", "doc"),
                &mut roots,
                &mut diagnostics,
            );
            assert_eq!(header, expected);
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_header_roots() {
        let registry = TypeRegistry::default();
        let generator = TypeHeaderGenerator::new(&registry);
        let mut roots = RootState::new();
        let mut diagnostics = Diagnostics::new();

        let q1 = descriptor(SchemaKind::Query, "Q1", "Q1");
        let q2 = descriptor(SchemaKind::Query, "Q2", "Q2");
        assert_eq!(generator.generate(&q1, &mut roots, &mut diagnostics), " query ");
        assert_eq!(
            generator.generate(&q2, &mut roots, &mut diagnostics),
            "extend  query "
        );

        let m1 = descriptor(SchemaKind::Mutation, "M1", "M1");
        assert_eq!(
            generator.generate(&m1, &mut roots, &mut diagnostics),
            " mutation "
        );
    }

    #[test]
    fn test_header_implements() {
        let types = vec![
            descriptor(SchemaKind::Object, "Author", "author"),
            descriptor(SchemaKind::Enum, "DocType", "docType"),
        ];
        let registry = TypeRegistry::new(&types);
        let generator = TypeHeaderGenerator::new(&registry);
        let mut roots = RootState::new();
        let mut diagnostics = Diagnostics::new();

        let book = descriptor(SchemaKind::Implementation, "Book", "book").with_base("Author");
        assert_eq!(
            generator.generate(&book, &mut roots, &mut diagnostics),
            "  book implements author"
        );

        let bad = descriptor(SchemaKind::Implementation, "Bad", "bad").with_base("DocType");
        assert_eq!(
            generator.generate(&bad, &mut roots, &mut diagnostics),
            "  bad "
        );

        let orphan = descriptor(SchemaKind::Implementation, "Orphan", "orphan");
        assert_eq!(
            generator.generate(&orphan, &mut roots, &mut diagnostics),
            "  orphan "
        );

        let reasons: Vec<_> = diagnostics.iter().map(|d| d.reason).collect();
        assert_eq!(
            reasons,
            vec![
                DiagnosticReason::InvalidBaseType,
                DiagnosticReason::NoClassReference
            ]
        );
    }
}
