use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Output format requested from the terrain generation backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileFormat {
	/// Wavefront OBJ (ascii)
	Obj,
	/// ASCII STL
	StlAscii,
	/// Binary STL
	#[default]
	StlBinary,
	/// DEM raster only, no 3D geometry
	GeoTiff,
}

impl FileFormat {
	pub fn name(&self) -> &'static str {
		match self {
			FileFormat::Obj => "obj",
			FileFormat::StlAscii => "STLa",
			FileFormat::StlBinary => "STLb",
			FileFormat::GeoTiff => "GeoTiff",
		}
	}

	/// Raster exports skip mesh generation, so the backend accepts much larger jobs.
	pub fn is_raster_only(&self) -> bool {
		matches!(self, FileFormat::GeoTiff)
	}
}

impl Display for FileFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for FileFormat {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<Self> {
		Ok(match value.trim() {
			"obj" => FileFormat::Obj,
			"STLa" => FileFormat::StlAscii,
			"STLb" => FileFormat::StlBinary,
			"GeoTiff" => FileFormat::GeoTiff,
			_ => bail!("unknown file format '{value}', expected one of: obj, STLa, STLb, GeoTiff"),
		})
	}
}

impl TryFrom<String> for FileFormat {
	type Error = anyhow::Error;
	fn try_from(value: String) -> Result<Self> {
		FileFormat::from_str(&value)
	}
}

impl From<FileFormat> for String {
	fn from(value: FileFormat) -> Self {
		value.name().to_string()
	}
}
