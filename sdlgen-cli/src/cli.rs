//! Command line interface: descriptor inputs → SDL document.

use anyhow::{Context, bail};
use clap::Parser;
use sdlgen::schema::discover;
use sdlgen::{Generator, SchemaOutput};
use std::path::{Path, PathBuf};

/// Generate a GraphQL SDL schema from type descriptor files
#[derive(Parser, Debug)]
#[command(name = "sdlgen", version)]
pub struct CommandLineInterface {
    /// Descriptor files (.xml, .json), directories or quoted glob patterns
    #[arg(num_args = 1.., required = true)]
    inputs: Vec<String>,

    /// Only keep XML packages named or nested under this package (repeatable)
    #[arg(long, short)]
    package: Vec<String>,

    /// Output .graphql file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Write the diagnostics as a JSON array to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Fail if any schema element was skipped
    #[arg(long, default_value_t = false)]
    deny_diagnostics: bool,

    /// Fail on invalid descriptors or duplicate names before generating
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Log at debug level, including the finished document
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let output = self.generate()?;

        match self.out.as_ref() {
            Some(out) => write_file(out, &output.sdl)?,
            None => print!("{}", output.sdl),
        }

        if let Some(report) = self.report.as_ref() {
            let json = serde_json::to_string_pretty(&output.diagnostics)?;
            write_file(report, &json)?;
        }

        if self.deny_diagnostics && !output.is_clean() {
            bail!(
                "{} schema element(s) were skipped",
                output.diagnostics.len()
            );
        }
        Ok(())
    }

    fn generate(&self) -> anyhow::Result<SchemaOutput> {
        let paths = resolve_file_path_patterns(&self.inputs)?;
        let set = discover(&paths, &self.package).context("failed to load descriptors")?;
        tracing::info!("loaded {} type descriptors", set.len());

        let generator = Generator::builder().log_schema(self.verbose).build();
        if self.check {
            generator.check(&set.descriptors)?;
        }
        Ok(generator.generate_set(&set))
    }
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Expands glob patterns; other inputs are taken as literal paths.
fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                bail!("glob pattern matched no files: {pattern}");
            }
            matched.sort();
            out.extend(matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
