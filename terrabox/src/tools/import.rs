use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use terrabox::geometry::import_boundary;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// boundary file you want to import
	/// supported formats are: *.kml, *.kmz
	#[arg(required = true, verbatim_doc_comment)]
	filename: PathBuf,

	/// print every vertex as "lat lon"
	#[arg(long, short)]
	vertices: bool,
}

#[tokio::main(flavor = "current_thread")]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let path = &arguments.filename;
	let bytes = tokio::fs::read(path)
		.await
		.with_context(|| format!("failed to read boundary file {path:?}"))?;
	let file_name = path
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_default();
	let import = import_boundary(&file_name, &bytes).with_context(|| format!("failed to import {path:?}"))?;

	println!("north east: {:?}", import.bbox.north_east());
	println!("south west: {:?}", import.bbox.south_west());
	println!("vertices: {}", import.polygon.len());
	if arguments.vertices {
		for vertex in import.polygon.vertices() {
			println!("{} {}", vertex.lat, vertex.lon);
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn import_kml() {
		run_command(vec!["terrabox", "import", "--vertices", "../testdata/boundary.kml"]).unwrap();
	}

	#[test]
	fn import_rejects_line() {
		let err = run_command(vec!["terrabox", "import", "../testdata/line.kml"]).unwrap_err();
		assert_eq!(
			format!("{:#}", err),
			"failed to import \"../testdata/line.kml\": boundary file does not contain a polygon (need at least 3 coordinates, found 2)"
		);
	}
}
