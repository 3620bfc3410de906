//! dashctl CLI - dashboard list panels as code
//!
//! Reads panel definitions (a title plus named options) from YAML, TOML or
//! JSON files and prints the resulting dashboard panel JSON:
//! - `build`: build panels and print them
//! - `check`: validate definitions without printing panels
//! - `options`: list the available options
//! - `config`: inspect ~/.dashctl/config.toml

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod definition;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "dashctl",
    author,
    version,
    about = "Build dashboard list panels from declarative definitions",
    long_about = "Apply ordered panel options to dashboard list panels and emit dashboard JSON. \
                  Options are validated as they are applied; the first invalid one rejects the panel."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build panels from definition files and print them
    Build(commands::build::BuildArgs),
    /// Validate definition files
    Check(commands::build::CheckArgs),
    /// List available panel options
    Options(commands::options::OptionsArgs),
    /// Inspect dashctl configuration (path, show)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Build(args) => commands::run_build(args)?,
        Commands::Check(args) => commands::run_check(args)?,
        Commands::Options(args) => commands::run_options(args)?,
        Commands::Config(args) => commands::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
