use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use webhook_configctl::{
    commands::{
        add_cmd::{self, AddArgs},
        validate_cmd,
    },
    config::{hooks_file, LOG_FILTER_ENV_VAR},
    errors::Error,
    prompt::TerminalPrompter,
};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// webhook-configctl: Build and check webhook server hook definitions
#[derive(Parser, Debug)]
#[command(name = "webhook-configctl")]
#[command(about = "Build and check webhook server hook definitions", long_about = None)]
struct Cli {
    /// Path to the hooks file
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactively add a hook to the hooks file
    Add(AddArgs),

    /// Check that every hook in the hooks file has its required fields
    Validate,

    /// Show the CLI version
    Version,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let file = hooks_file(cli.file.as_deref());
    match &cli.command {
        Commands::Add(args) => add_cmd::execute(args, &file, &mut TerminalPrompter::new()),
        Commands::Validate => validate_cmd::execute(&file),
        Commands::Version => {
            println!("webhook-configctl version {}", version());
            Ok(())
        }
    }
}

fn version() -> &'static str {
    option_env!("WEBHOOK_CONFIGCTL_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

fn main() {
    // Logs go to stderr so they never mix with the command output
    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(EnvFilter::from_env(LOG_FILTER_ENV_VAR))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        debug!(message = "Command failed", error = ?e);
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
