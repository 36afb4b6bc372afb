use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{list, publish};

#[derive(Parser)]
#[command(
    name = "unveil",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List your private repositories
    List(list::ListArgs),

    /// Interactively make private repositories public
    Publish(publish::PublishArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    pub async fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::List(args) => list::run(args).await,
            Self::Publish(args) => publish::run(args).await,
            Self::Completions { shell } => {
                clap_complete::generate(
                    *shell,
                    &mut Cli::command(),
                    "unveil",
                    &mut std::io::stdout(),
                );
                Ok(())
            }
        }
    }
}
