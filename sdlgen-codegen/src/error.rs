//! Error types for schema generation.

use thiserror::Error;

/// Error type for generation entry points that read or check descriptors.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor input could not be read or parsed.
    #[error("descriptor parse error: {0}")]
    Parse(#[from] sdlgen_schema::ParseError),

    /// Descriptor batch is inconsistent.
    #[error("schema error: {0}")]
    Schema(#[from] sdlgen_schema::SchemaError),

    /// Descriptor violates a required invariant.
    #[error("invalid descriptor: {0}")]
    Descriptor(#[from] sdlgen_core::DescriptorError),
}
