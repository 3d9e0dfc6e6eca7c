//! PanelForge - VCV Rack scaffolds from Vectornator panel drawings

use clap::{Parser, Subcommand};
use panelforge::cli::common::load_config;
use panelforge::cli::{
    CliResult, ConfigArgs, ExitCode, GenerateArgs, InspectArgs, PatchSvgArgs, ValidateArgs,
};
use panelforge::constants::APP_BINARY_NAME;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PanelForge - VCV Rack scaffolds from Vectornator panel drawings
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a module scaffold from a bundle
    Generate(GenerateArgs),
    /// Set physical size attributes on a panel SVG
    PatchSvg(PatchSvgArgs),
    /// List the components of an artboard
    Inspect(InspectArgs),
    /// Check an artboard for problems before generating
    Validate(ValidateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Command::Generate(args) => args.execute(&load_config(config_path)?),
        Command::PatchSvg(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Config(args) => args.execute(config_path),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code.code());
}
