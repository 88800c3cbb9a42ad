use crate::settings::Settings;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TilingConfig {
	/// Width of one tile in mm.
	pub tile_width_mm: Option<f64>,

	/// Number of tiles west to east.
	pub tiles_x: Option<i32>,

	/// Number of tiles south to north.
	pub tiles_y: Option<i32>,

	/// Print resolution in mm; 0 or less samples the elevation source as is.
	pub print_resolution_mm: Option<f64>,
}

impl TilingConfig {
	pub fn override_optional_tile_width_mm(&mut self, tile_width_mm: &Option<f64>) {
		if tile_width_mm.is_some() {
			self.tile_width_mm = *tile_width_mm;
		}
	}
	pub fn override_optional_tiles_x(&mut self, tiles_x: &Option<i32>) {
		if tiles_x.is_some() {
			self.tiles_x = *tiles_x;
		}
	}
	pub fn override_optional_tiles_y(&mut self, tiles_y: &Option<i32>) {
		if tiles_y.is_some() {
			self.tiles_y = *tiles_y;
		}
	}
	pub fn override_optional_print_resolution_mm(&mut self, print_resolution_mm: &Option<f64>) {
		if print_resolution_mm.is_some() {
			self.print_resolution_mm = *print_resolution_mm;
		}
	}

	/// Applies the configured values and checks the resulting parameters.
	pub fn apply(&self, settings: &mut Settings) -> Result<()> {
		if let Some(tile_width_mm) = self.tile_width_mm {
			settings.set_tile_width_mm(tile_width_mm);
		}
		if self.tiles_x.is_some() || self.tiles_y.is_some() {
			let parameters = settings.parameters();
			let tiles_x = self.tiles_x.unwrap_or(parameters.tile_count_x);
			let tiles_y = self.tiles_y.unwrap_or(parameters.tile_count_y);
			settings.set_tile_counts(tiles_x, tiles_y);
		}
		if let Some(print_resolution_mm) = self.print_resolution_mm {
			settings.set_print_resolution_mm(print_resolution_mm);
		}
		settings.parameters().check()
	}
}
