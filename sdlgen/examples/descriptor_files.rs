//! Example generating a schema from the descriptor files under `demos/`.
//!
//! Run with: `RUST_LOG=debug cargo run --example descriptor_files`

use sdlgen::schema::discover;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos");
    let set = discover(&[demos], &["com.example".to_string()])?;
    println!(
        "discovered {} types ({} unannotated)",
        set.len(),
        set.unannotated.len()
    );

    let output = sdlgen::Generator::new().generate_set(&set);
    print!("{}", output.sdl);
    println!("{} diagnostics", output.diagnostics.len());
    Ok(())
}
