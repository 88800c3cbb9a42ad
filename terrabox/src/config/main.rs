use super::{AreaConfig, PrintConfig, TilingConfig, ViewportConfig};
use crate::settings::Settings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Print area corners. Without it the area is centered on the viewport.
	#[serde(default)]
	pub area: Option<AreaConfig>,

	/// Tile size, tile counts and print resolution
	#[serde(default)]
	pub tiling: TilingConfig,

	/// Elevation source and generator options
	#[serde(default)]
	pub print: PrintConfig,

	/// Visible map bounds
	#[serde(default)]
	pub viewport: Option<ViewportConfig>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Builds the settings. The viewport is applied first so that an explicit area
	/// takes precedence over one centered on the viewport.
	pub fn into_settings(self) -> Result<Settings> {
		let mut settings = Settings::default();
		if let Some(viewport) = &self.viewport {
			viewport.apply(&mut settings)?;
		}
		if let Some(area) = &self.area {
			area.apply(&mut settings)?;
		}
		self.tiling.apply(&mut settings)?;
		self.print.apply(&mut settings)?;
		Ok(settings)
	}
}
