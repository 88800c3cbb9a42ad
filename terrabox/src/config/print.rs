use crate::settings::Settings;
use anyhow::Result;
use serde::Deserialize;
use terrabox_core::{DemSource, FileFormat};

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PrintConfig {
	/// Elevation source, e.g. `USGS/NED`.
	pub dem: Option<DemSource>,

	pub base_thickness_mm: Option<f64>,

	pub z_scale: Option<f64>,

	/// One of `obj`, `STLa`, `STLb` or `GeoTiff`.
	pub file_format: Option<FileFormat>,

	/// Extra generator options as `"key": value` pairs.
	pub manual: Option<String>,

	pub poly_url: Option<String>,
}

impl PrintConfig {
	pub fn override_optional_dem(&mut self, dem: &Option<DemSource>) {
		if dem.is_some() {
			self.dem = *dem;
		}
	}
	pub fn override_optional_file_format(&mut self, file_format: &Option<FileFormat>) {
		if file_format.is_some() {
			self.file_format = *file_format;
		}
	}

	pub fn apply(&self, settings: &mut Settings) -> Result<()> {
		if let Some(dem) = self.dem {
			settings.set_dem_source(dem);
		}
		let print = settings.print_options_mut();
		if let Some(base_thickness_mm) = self.base_thickness_mm {
			print.base_thickness_mm = base_thickness_mm;
		}
		if let Some(z_scale) = self.z_scale {
			print.z_scale = z_scale;
		}
		if let Some(file_format) = self.file_format {
			print.file_format = file_format;
		}
		if let Some(manual) = &self.manual {
			print.manual.clone_from(manual);
		}
		if let Some(poly_url) = &self.poly_url {
			print.poly_url.clone_from(poly_url);
		}
		print.check()
	}
}
