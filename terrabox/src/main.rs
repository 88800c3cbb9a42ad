mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show the print area of a boundary file
	Import(tools::import::Subcommand),

	#[clap(alias = "show")]
	/// Preview the tiling of a print area
	Preview(tools::preview::Subcommand),

	/// List the available elevation sources
	Sources(tools::sources::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Import(arguments) => tools::import::run(arguments),
		Commands::Preview(arguments) => tools::preview::run(arguments),
		Commands::Sources(arguments) => tools::sources::run(arguments),
	}
}
