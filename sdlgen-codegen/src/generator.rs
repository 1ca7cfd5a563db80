//! Schema generation orchestrator.

use crate::error::CodegenError;
use crate::sdl::{FieldGenerator, RootState, SdlToken, TypeHeaderGenerator};
use sdlgen_core::{Diagnostic, DiagnosticReason, Diagnostics, TypeDescriptor};
use sdlgen_schema::{DescriptorSet, TypeRegistry, validate_batch, validate_type};

/// Result of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOutput {
    /// Generated SDL document.
    pub sdl: String,
    /// Diagnostics for every skipped element, in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
}

impl SchemaOutput {
    /// Splits the output into the document and its diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Diagnostic>) {
        (self.sdl, self.diagnostics)
    }

    /// Returns true if nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Builder for configuring a [`Generator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    unannotated: Vec<String>,
    log_schema: bool,
}

impl GeneratorBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares types that exist but carry no schema annotation, so
    /// references to them are reported as such.
    #[must_use]
    pub fn unannotated<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unannotated.extend(names.into_iter().map(Into::into));
        self
    }

    /// Logs every finished document at debug level.
    #[must_use]
    pub fn log_schema(mut self, enabled: bool) -> Self {
        self.log_schema = enabled;
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator {
            unannotated: self.unannotated,
            log_schema: self.log_schema,
        }
    }
}

/// SDL schema generator.
///
/// Holds configuration only; every call to [`Generator::generate`] runs
/// with its own root state, so one generator can serve independent batches.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    unannotated: Vec<String>,
    log_schema: bool,
}

/// State scoped to a single generation call.
struct RunContext {
    roots: RootState,
    output: String,
    diagnostics: Diagnostics,
}

impl RunContext {
    fn new(diagnostics: Diagnostics) -> Self {
        Self {
            roots: RootState::new(),
            output: String::new(),
            diagnostics,
        }
    }
}

impl Generator {
    /// Creates a generator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for a configured generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Generates the SDL document for `descriptors`, in order.
    #[must_use]
    pub fn generate(&self, descriptors: &[TypeDescriptor]) -> SchemaOutput {
        self.run(descriptors, &[], Diagnostics::new())
    }

    /// Generates the SDL document for a discovered set.
    ///
    /// Discovery diagnostics come first in the output, and the set's
    /// unannotated types are known to the registry.
    #[must_use]
    pub fn generate_set(&self, set: &DescriptorSet) -> SchemaOutput {
        self.run(&set.descriptors, &set.unannotated, set.diagnostics.clone())
    }

    /// Checks that `descriptors` can be generated without rejections or
    /// name collisions.
    ///
    /// # Errors
    /// Returns `CodegenError` for the first invalid descriptor or duplicate.
    pub fn check(&self, descriptors: &[TypeDescriptor]) -> Result<(), CodegenError> {
        for descriptor in descriptors {
            validate_type(descriptor)?;
        }
        validate_batch(descriptors)?;
        Ok(())
    }

    fn run(
        &self,
        descriptors: &[TypeDescriptor],
        unannotated: &[String],
        diagnostics: Diagnostics,
    ) -> SchemaOutput {
        tracing::info!("START generating SDL schema for {} types", descriptors.len());
        let mut context = RunContext::new(diagnostics);

        if let Err(err) = validate_batch(descriptors) {
            tracing::warn!("{}", err);
        }

        let mut rejected = Vec::new();
        let accepted: Vec<&TypeDescriptor> = descriptors
            .iter()
            .filter(|descriptor| match validate_type(descriptor) {
                Ok(()) => true,
                Err(err) => {
                    context.diagnostics.report(
                        descriptor.name.as_str(),
                        DiagnosticReason::InvalidDescriptor,
                        format!("class {} rejected: {}", descriptor.name, err),
                    );
                    rejected.push(descriptor.name.clone());
                    false
                }
            })
            .collect();

        let registry = TypeRegistry::new(accepted.iter().copied()).with_unannotated(
            self.unannotated
                .iter()
                .chain(unannotated)
                .cloned()
                .chain(rejected),
        );
        if registry.is_empty() {
            tracing::debug!("no type descriptor accepted");
        } else {
            tracing::debug!("registered {} type descriptors", registry.len());
        }
        let headers = TypeHeaderGenerator::new(&registry);
        let fields = FieldGenerator::new(&registry);

        for descriptor in accepted {
            tracing::debug!("generating {} {}", descriptor.kind, descriptor.name);
            let header = headers.generate(descriptor, &mut context.roots, &mut context.diagnostics);
            let block = fields.generate(descriptor, &mut context.diagnostics);

            SdlToken::Newline.push_to(&mut context.output);
            context.output.push_str(&header);
            context.output.push_str(&block);
            SdlToken::Newline.push_to(&mut context.output);
        }

        tracing::info!(
            "END generating SDL schema ({} diagnostics)",
            context.diagnostics.len()
        );
        tracing::debug!(
            "query root declared: {}, mutation root declared: {}",
            context.roots.query_opened(),
            context.roots.mutation_opened()
        );
        if self.log_schema {
            tracing::debug!("SDL schema:\n{}", context.output);
        }

        SchemaOutput {
            sdl: context.output,
            diagnostics: context.diagnostics.into_vec(),
        }
    }
}
