use crate::settings::Settings;
use anyhow::{Context, Result};
use serde::Deserialize;
use terrabox_core::GeoPoint;

/// Corners of the print area in degrees.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AreaConfig {
	pub north: f64,
	pub south: f64,
	pub east: f64,
	pub west: f64,
}

impl AreaConfig {
	pub fn north_east(&self) -> Result<GeoPoint> {
		GeoPoint::new(self.north, self.east).context("invalid north-east corner")
	}

	pub fn south_west(&self) -> Result<GeoPoint> {
		GeoPoint::new(self.south, self.west).context("invalid south-west corner")
	}

	pub fn apply(&self, settings: &mut Settings) -> Result<()> {
		settings
			.set_box_from_corners(self.north_east()?, self.south_west()?)
			.context("invalid print area")
	}
}
