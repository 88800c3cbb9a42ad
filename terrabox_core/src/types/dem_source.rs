use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Elevation data layers the terrain generation backend can sample from.
///
/// Each layer has a nominal ground resolution (shown to the user and used to flag
/// under-sampling) and a cell width in arc seconds (used to estimate the job size when
/// the print resolution is left at "source resolution").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DemSource {
	#[default]
	UsgsNed,
	NrcanCdem,
	UsgsSrtm,
	JaxaAlos,
	UsgsGmted2010,
	UsgsGtopo30,
	CryoSat2Antarctica,
	NoaaEtopo1,
}

impl DemSource {
	pub const ALL: [DemSource; 8] = [
		DemSource::UsgsNed,
		DemSource::NrcanCdem,
		DemSource::UsgsSrtm,
		DemSource::JaxaAlos,
		DemSource::UsgsGmted2010,
		DemSource::UsgsGtopo30,
		DemSource::CryoSat2Antarctica,
		DemSource::NoaaEtopo1,
	];

	/// Layer name as used by the backend and in the `DEM_name` form field.
	pub fn name(&self) -> &'static str {
		use DemSource::*;
		match self {
			UsgsNed => "USGS/NED",
			NrcanCdem => "NRCan/CDEM",
			UsgsSrtm => "USGS/SRTMGL1_003",
			JaxaAlos => "JAXA/ALOS/AW3D30/V2_2",
			UsgsGmted2010 => "USGS/GMTED2010",
			UsgsGtopo30 => "USGS/GTOPO30",
			CryoSat2Antarctica => "CPOM/CryoSat2/ANTARCTICA_DEM",
			NoaaEtopo1 => "NOAA/NGDC/ETOPO1",
		}
	}

	/// Nominal ground resolution in meters.
	pub fn resolution_m(&self) -> f64 {
		use DemSource::*;
		match self {
			UsgsNed => 10.0,
			NrcanCdem => 20.0,
			UsgsSrtm | JaxaAlos => 30.0,
			UsgsGmted2010 => 90.0,
			UsgsGtopo30 | CryoSat2Antarctica => 1000.0,
			NoaaEtopo1 => 2000.0,
		}
	}

	/// Width of one raster cell in arc seconds.
	pub fn cell_width_arcsec(&self) -> f64 {
		use DemSource::*;
		match self {
			UsgsNed => 1.0 / 9.0,
			NrcanCdem => 0.75,
			UsgsSrtm | JaxaAlos => 1.0,
			UsgsGmted2010 => 7.5,
			UsgsGtopo30 | CryoSat2Antarctica => 30.0,
			NoaaEtopo1 => 60.0,
		}
	}

	/// Catalog page describing the layer.
	pub fn catalog_url(&self) -> String {
		format!(
			"https://developers.google.com/earth-engine/datasets/catalog/{}",
			self.name().replace('/', "_")
		)
	}
}

impl Display for DemSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DemSource {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<Self> {
		match DemSource::ALL.iter().find(|source| source.name() == value.trim()) {
			Some(source) => Ok(*source),
			None => bail!("unknown elevation source '{value}'"),
		}
	}
}

impl TryFrom<String> for DemSource {
	type Error = anyhow::Error;
	fn try_from(value: String) -> Result<Self> {
		DemSource::from_str(&value)
	}
}

impl From<DemSource> for String {
	fn from(value: DemSource) -> Self {
		value.name().to_string()
	}
}
