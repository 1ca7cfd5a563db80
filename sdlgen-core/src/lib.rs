//! # sdlgen Core
//!
//! Metadata model shared by every sdlgen crate.
//!
//! This crate provides:
//! - Type, field and parameter descriptors consumed by the schema generator
//! - Schema kinds and value types with their fixed SDL literals
//! - Diagnostics describing elements skipped during discovery or generation
//! - The [`SchemaType`] trait implemented by `#[derive(SdlSchema)]`

pub mod descriptor;
pub mod diagnostic;
pub mod error;
pub mod kind;

pub use descriptor::{FieldDescriptor, ParameterDescriptor, SchemaType, TypeDescriptor, TypeRef};
pub use diagnostic::{Diagnostic, DiagnosticReason, Diagnostics, Severity};
pub use error::{DescriptorError, Result};
pub use kind::{SchemaKind, ValueType};
