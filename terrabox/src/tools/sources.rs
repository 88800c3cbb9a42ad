use anyhow::Result;
use clap::Args;
use terrabox::core::DemSource;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// print only the layer names
	#[arg(long, short)]
	names: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	for dem in DemSource::ALL {
		if arguments.names {
			println!("{dem}");
		} else {
			println!(
				"{:<30} {:>6} m {:>8.3}\" {}",
				dem.name(),
				dem.resolution_m(),
				dem.cell_width_arcsec(),
				dem.catalog_url()
			);
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn list_sources() {
		run_command(vec!["terrabox", "sources"]).unwrap();
		run_command(vec!["terrabox", "sources", "--names"]).unwrap();
	}
}
