//! # sdlgen Schema
//!
//! Descriptor discovery, validation and type resolution.
//!
//! This crate provides:
//! - XML descriptor package parsing and directory scanning
//! - JSON descriptor loading
//! - Descriptor and batch validation
//! - The batch-scoped type registry used to resolve cross references

pub mod discovery;
pub mod error;
pub mod parser;
pub mod registry;
pub mod validation;

pub use discovery::{DescriptorSet, discover, load_file, parse_json};
pub use error::{ParseError, SchemaError};
pub use parser::{parse_descriptors, parse_descriptors_in};
pub use registry::{TypeRegistry, Unresolved};
pub use validation::{validate_batch, validate_field, validate_parameter, validate_type};
