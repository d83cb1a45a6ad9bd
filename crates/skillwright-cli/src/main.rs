// Skillwright CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillwright_cli::{init, output, Cli, Command};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Init(args) => init::run(args),
    };

    if let Err(e) = result {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
