mod check;
mod completions;
mod generate;
mod init;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for docbind_manual::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Document and schema errors surface through the generator as `eyre`
/// reports; print those with their source snippet too.
pub(crate) trait ExitOnDocumentError<T> {
    fn exit_on_document_error(self) -> Result<T>;
}

impl<T> ExitOnDocumentError<T> for Result<T> {
    fn exit_on_document_error(self) -> Result<T> {
        self.map_err(|report| match report.downcast::<Box<docbind_manual::Error>>() {
            Ok(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
            Err(report) => report,
        })
    }
}

#[derive(Parser)]
#[command(name = "docbind")]
#[command(version)]
#[command(about = "Compile reference documentation into a typed TypeScript RPC client")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default docbind.toml
    Init(InitCommand),

    /// Generate the client bindings
    Generate(GenerateCommand),

    /// Bind every document without writing anything
    Check(CheckCommand),

    /// List the commands found in the reference documents
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
