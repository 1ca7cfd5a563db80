//! # sdlgen Codegen
//!
//! GraphQL SDL generation from type descriptors.
//!
//! This crate provides:
//! - The schema generator and its run-scoped emission state
//! - Type header, field block and argument rendering
//! - Entry points over descriptor XML, files and directories

pub mod error;
pub mod generator;
pub mod sdl;

pub use error::CodegenError;
pub use generator::{Generator, GeneratorBuilder, SchemaOutput};

use sdlgen_core::TypeDescriptor;
use std::path::Path;

/// Generates the SDL document for `descriptors` with default settings.
///
/// # Arguments
/// * `descriptors` - The type descriptors, in emission order
///
/// # Returns
/// The SDL document and the diagnostics of skipped elements.
#[must_use]
pub fn generate(descriptors: &[TypeDescriptor]) -> SchemaOutput {
    Generator::new().generate(descriptors)
}

/// Generates the SDL document from an XML descriptor package.
///
/// # Arguments
/// * `xml` - The descriptor package XML content
///
/// # Returns
/// The SDL document, with discovery diagnostics ahead of generation ones.
///
/// # Errors
/// Returns `CodegenError` if the XML cannot be parsed.
pub fn generate_from_xml(xml: &str) -> Result<SchemaOutput, CodegenError> {
    let set = sdlgen_schema::parse_descriptors(xml)?;
    Ok(Generator::new().generate_set(&set))
}

/// Generates the SDL document from an XML or JSON descriptor file.
///
/// # Arguments
/// * `path` - Path to a `.xml` or `.json` descriptor file
///
/// # Returns
/// The SDL document and its diagnostics.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &Path) -> Result<SchemaOutput, CodegenError> {
    let set = sdlgen_schema::load_file(path, &[])?;
    Ok(Generator::new().generate_set(&set))
}

/// Generates the SDL document from descriptor files and directories.
///
/// # Arguments
/// * `paths` - Descriptor files or directories, walked in sorted order
/// * `packages` - XML package filter; an empty filter keeps all packages
///
/// # Returns
/// The SDL document for every discovered descriptor, and its diagnostics.
///
/// # Errors
/// Returns `CodegenError` if any input cannot be read or parsed.
pub fn generate_from_paths<P: AsRef<Path>>(
    paths: &[P],
    packages: &[String],
) -> Result<SchemaOutput, CodegenError> {
    let set = sdlgen_schema::discover(paths, packages)?;
    Ok(Generator::new().generate_set(&set))
}
