use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;
use terrabox::{
	config::{AreaConfig, Config},
	core::{DemSource, FileFormat},
	settings::{ImportOutcome, Settings},
};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// YAML configuration file
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// boundary file (*.kml or *.kmz) that sets the print area
	#[arg(long, short)]
	boundary: Option<PathBuf>,

	/// north edge of the print area in degrees
	#[arg(long, allow_negative_numbers = true, requires_all = ["south", "east", "west"])]
	north: Option<f64>,

	/// south edge of the print area in degrees
	#[arg(long, allow_negative_numbers = true, requires = "north")]
	south: Option<f64>,

	/// east edge of the print area in degrees
	#[arg(long, allow_negative_numbers = true, requires = "north")]
	east: Option<f64>,

	/// west edge of the print area in degrees
	#[arg(long, allow_negative_numbers = true, requires = "north")]
	west: Option<f64>,

	/// width of one tile in mm
	#[arg(long)]
	tile_width: Option<f64>,

	/// number of tiles west to east
	#[arg(long)]
	tiles_x: Option<i32>,

	/// number of tiles south to north
	#[arg(long)]
	tiles_y: Option<i32>,

	/// print resolution in mm, 0 to sample the elevation source as is
	#[arg(long, allow_negative_numbers = true)]
	print_resolution: Option<f64>,

	/// elevation source, see "terrabox sources"
	#[arg(long)]
	dem: Option<String>,

	/// file format: obj, STLa, STLb or GeoTiff
	#[arg(long)]
	format: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut settings = build_settings(arguments)?;

	if let Some(path) = &arguments.boundary {
		match settings.load_boundary_file(path).await? {
			ImportOutcome::Applied => {}
			ImportOutcome::Rejected(err) => {
				return Err(err).with_context(|| format!("failed to import {path:?}"));
			}
			ImportOutcome::Stale => bail!("import of {path:?} was superseded"),
		}
	}

	print!("{}", render(&mut settings));
	Ok(())
}

fn build_settings(arguments: &Subcommand) -> Result<Settings> {
	let mut config = match &arguments.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	if let (Some(north), Some(south), Some(east), Some(west)) =
		(arguments.north, arguments.south, arguments.east, arguments.west)
	{
		config.area = Some(AreaConfig {
			north,
			south,
			east,
			west,
		});
	}

	config.tiling.override_optional_tile_width_mm(&arguments.tile_width);
	config.tiling.override_optional_tiles_x(&arguments.tiles_x);
	config.tiling.override_optional_tiles_y(&arguments.tiles_y);
	config
		.tiling
		.override_optional_print_resolution_mm(&arguments.print_resolution);

	let dem = arguments.dem.as_deref().map(str::parse::<DemSource>).transpose()?;
	config.print.override_optional_dem(&dem);
	let file_format = arguments
		.format
		.as_deref()
		.map(str::parse::<FileFormat>)
		.transpose()?;
	config.print.override_optional_file_format(&file_format);

	config.into_settings()
}

fn render(settings: &mut Settings) -> String {
	let bbox = settings.state().bbox;
	let polygon = settings.state().polygon.as_ref().map(|p| p.len());
	let job_size = settings.job_size();
	let bounds = settings.map_view().bounds;
	let advisories = settings.advisories(bounds.as_ref());
	let derived = settings.derived();

	let mut lines = vec![format!("print area: {bbox:?}")];
	lines.push(match polygon {
		Some(count) => format!("boundary: {count} vertices"),
		None => "boundary: none".to_string(),
	});
	lines.push(format!("tile height: {}", derived.tile_height_display()));
	lines.push(format!("ground resolution: {}", derived.ground_resolution));
	lines.push(format!("division lines x: {}", join(&derived.division_lines_x)));
	lines.push(format!("division lines y: {}", join(&derived.division_lines_y)));
	lines.push(format!("job size: {job_size}"));
	for advisory in advisories {
		lines.push(format!("warning: {advisory}"));
	}
	lines.push(String::new());

	let mut text = lines.join("\n");
	text.push('\n');
	text.push_str(&settings.to_form().to_string());
	text
}

fn join(values: &[f64]) -> String {
	values.iter().map(f64::to_string).collect::<Vec<_>>().join(", ")
}
