//! `skuforge` entry point.

use std::process::ExitCode;

use clap::Parser;

use skuforge_cli::commands::{self, GenerateArgs, InputArgs};
use skuforge_cli::config::Config;
use skuforge_cli::input::read_input;
use skuforge_observability::LogFormat;

/// Expand a product description into its SKUs.
///
/// The description is JSON: a product `name` and a list of `attributes`, each
/// with a `name` and `values` carrying a `name` and an `active` flag.
#[derive(Parser, Debug)]
#[command(name = "skuforge", version, about)]
struct Cli {
    /// Log line format (overrides SKUFORGE_LOG_FORMAT).
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Pretty-print JSON output (or set SKUFORGE_PRETTY=1).
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a description and print `{"isValid", "message"}`.
    Validate(InputArgs),
    /// Print every SKU of a valid description.
    Generate(GenerateArgs),
    /// Print the product name and attribute columns.
    Columns(InputArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.log_format, cli.pretty);

    skuforge_observability::init(config.log_format);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let outcome = match &cli.command {
        Commands::Validate(args) => {
            let raw = read_input(args.input.as_deref())?;
            commands::validate(&raw, &config, &mut stdout)?
        }
        Commands::Generate(args) => {
            let raw = read_input(args.input.input.as_deref())?;
            commands::generate(&raw, args, &config, &mut stdout, &mut stderr)?
        }
        Commands::Columns(args) => {
            let raw = read_input(args.input.as_deref())?;
            commands::columns(&raw, &config, &mut stdout, &mut stderr)?
        }
    };

    Ok(ExitCode::from(outcome.exit_code()))
}
