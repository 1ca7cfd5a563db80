//! Example schema declared with `#[derive(SdlSchema)]`.
//!
//! Run with: `RUST_LOG=info cargo run --example derive_schema`

#![allow(dead_code)]

use sdlgen::prelude::*;

#[derive(SdlSchema)]
#[sdl(operation_name = "doc")]
struct Doc {
    #[sdl]
    title: String,
    #[sdl(nullable = false, param(name = "welcome"), param(name = "test"))]
    url: String,
    #[sdl(ty = "object", of = DocType)]
    kind: DocType,
}

#[derive(SdlSchema)]
#[sdl(operation_name = "docType")]
enum DocType {
    #[sdl(name = "media")]
    Media,
    #[sdl(name = "document")]
    Document,
}

#[derive(SdlSchema)]
#[sdl(kind = "query", operation_name = "DocQuery")]
struct DocQuery {
    #[sdl(
        ty = "list",
        of = Doc,
        nullable = false,
        param(name = "kind", ty = "object", of = DocType)
    )]
    docs: Vec<Doc>,
}

#[derive(SdlSchema)]
#[sdl(kind = "mutation", operation_name = "DocMutation")]
struct DocMutation {
    #[sdl(ty = "boolean", param(name = "id", ty = "id", nullable = false))]
    delete: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let generator = Generator::builder().log_schema(true).build();
    let output = generator.generate(&[
        DocType::descriptor(),
        Doc::descriptor(),
        DocQuery::descriptor(),
        DocMutation::descriptor(),
    ]);

    print!("{}", output.sdl);
    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }
}
