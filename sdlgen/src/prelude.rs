//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sdlgen::prelude::*;
//! ```

// Descriptor model
pub use sdlgen_core::{
    Diagnostic, DiagnosticReason, FieldDescriptor, ParameterDescriptor, SchemaKind, SchemaType,
    TypeDescriptor, TypeRef, ValueType,
};

// Discovery
pub use sdlgen_schema::{DescriptorSet, discover};

// Generation
pub use sdlgen_codegen::{Generator, SchemaOutput, generate};

// Derive
pub use sdlgen_derive::SdlSchema;
