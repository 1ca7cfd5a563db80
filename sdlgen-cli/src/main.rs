//! `sdlgen` command line tool.

mod cli;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::CommandLineInterface::load();

    let filter = if cli.verbose() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
