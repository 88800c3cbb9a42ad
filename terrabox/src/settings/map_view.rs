use anyhow::{Result, bail, ensure};
use std::{fmt::Display, str::FromStr};
use terrabox_core::{GeoBBox, GeoPoint};

/// Where the map was last looking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
	pub center: GeoPoint,
	pub zoom: u8,
	/// Visible bounds, once the map has reported them.
	pub bounds: Option<GeoBBox>,
}

impl Default for MapView {
	fn default() -> Self {
		Self {
			center: GeoPoint::from((44.59982, -108.11695)),
			zoom: 11,
			bounds: None,
		}
	}
}

/// Base map layer underneath the hillshade overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapType {
	#[default]
	Roadmap,
	Satellite,
	Hybrid,
	Terrain,
}

impl MapType {
	pub fn name(&self) -> &'static str {
		match self {
			MapType::Roadmap => "roadmap",
			MapType::Satellite => "satellite",
			MapType::Hybrid => "hybrid",
			MapType::Terrain => "terrain",
		}
	}
}

impl Display for MapType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for MapType {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s.trim().to_ascii_lowercase().as_str() {
			"roadmap" => MapType::Roadmap,
			"satellite" => MapType::Satellite,
			"hybrid" => MapType::Hybrid,
			"terrain" => MapType::Terrain,
			_ => bail!("unknown map type '{s}'"),
		})
	}
}

/// Hillshade elevation angles offered in the UI and the gamma each one implies.
pub const HILLSHADE_GAMMA_PRESETS: [(u8, f64); 6] = [(55, 0.3), (45, 1.0), (35, 1.2), (25, 1.5), (10, 2.5), (5, 4.5)];

/// How the hillshade preview is blended over the base map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayParameters {
	pub map_type: MapType,
	/// 0 is opaque, 100 invisible.
	pub transparency_pct: u8,
	pub gamma: f64,
	pub hillshade_azimuth: u16,
	hillshade_elevation: u8,
}

impl Default for OverlayParameters {
	fn default() -> Self {
		Self {
			map_type: MapType::Roadmap,
			transparency_pct: 20,
			gamma: 1.0,
			hillshade_azimuth: 315,
			hillshade_elevation: 45,
		}
	}
}

impl OverlayParameters {
	pub fn opacity(&self) -> f64 {
		1.0 - f64::from(self.transparency_pct) / 100.0
	}

	pub fn hillshade_elevation(&self) -> u8 {
		self.hillshade_elevation
	}

	/// Sets the sun elevation and the matching gamma preset. Only the angles in
	/// [`HILLSHADE_GAMMA_PRESETS`] are accepted.
	pub fn set_hillshade_elevation(&mut self, elevation: u8) -> Result<()> {
		let Some((_, gamma)) = HILLSHADE_GAMMA_PRESETS.iter().find(|(e, _)| *e == elevation) else {
			bail!("hillshade elevation {elevation}° is not one of 55, 45, 35, 25, 10 or 5");
		};
		self.hillshade_elevation = elevation;
		self.gamma = *gamma;
		Ok(())
	}

	pub fn set_transparency_pct(&mut self, transparency: u8) -> Result<()> {
		ensure!(
			transparency <= 100,
			"transparency ({transparency}%) must be between 0 and 100"
		);
		self.transparency_pct = transparency;
		Ok(())
	}

	pub fn set_hillshade_azimuth(&mut self, azimuth: u16) -> Result<()> {
		ensure!(azimuth < 360, "hillshade azimuth ({azimuth}°) must be below 360");
		self.hillshade_azimuth = azimuth;
		Ok(())
	}
}
