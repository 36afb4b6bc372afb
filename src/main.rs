mod cli;
mod commands;
mod github;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Silent unless RUST_LOG is set; logs go to stderr so they never mix
    // with the interactive prompt on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    if let Err(e) = command.run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
