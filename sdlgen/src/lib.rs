//! # sdlgen
//!
//! GraphQL SDL schema generation from declarative type descriptors.
//!
//! Types, their fields and field arguments are described once, either in
//! descriptor files or with `#[derive(SdlSchema)]`, and rendered into one
//! SDL document. Repeated `query`/`mutation` roots are merged with
//! `extend`, and elements that cannot be rendered are skipped and reported
//! as diagnostics instead of failing the run.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sdlgen::prelude::*;
//!
//! #[derive(SdlSchema)]
//! #[sdl(operation_name = "doc", crate = "sdlgen::core")]
//! struct Doc {
//!     #[sdl]
//!     title: String,
//!     #[sdl(nullable = false)]
//!     url: String,
//! }
//!
//! let output = generate(&[Doc::descriptor()]);
//! assert_eq!(output.sdl, "\n type doc {\ntitle: String\nurl: String!\n}\n\n");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Descriptors, kinds, value types and diagnostics
//! - [`schema`] - Descriptor discovery, validation and type resolution
//! - [`codegen`] - The SDL generator
//! - [`derive`] - The `SdlSchema` derive macro

pub mod prelude;

/// Descriptor model and diagnostics.
pub mod core {
    pub use sdlgen_core::*;
}

/// Descriptor discovery, validation and type resolution.
pub mod schema {
    pub use sdlgen_schema::*;
}

/// SDL generation.
pub mod codegen {
    pub use sdlgen_codegen::*;
}

/// Derive macro.
pub mod derive {
    pub use sdlgen_derive::*;
}

pub use sdlgen_codegen::{
    CodegenError, Generator, GeneratorBuilder, SchemaOutput, generate, generate_from_file,
    generate_from_paths, generate_from_xml,
};
pub use sdlgen_derive::SdlSchema;
