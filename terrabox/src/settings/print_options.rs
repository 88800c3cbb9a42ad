use anyhow::{Result, ensure};
use log::warn;
use serde_json::{Map, Value};
use terrabox_core::FileFormat;

/// Print settings that do not affect the tiling preview.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintOptions {
	/// Thickness of the base below the lowest elevation, in mm.
	pub base_thickness_mm: f64,
	/// Vertical exaggeration.
	pub z_scale: f64,
	pub file_format: FileFormat,
	/// Free-form `"key": value` pairs handed to the generator as is.
	pub manual: String,
	/// URL of a boundary file hosted elsewhere.
	pub poly_url: String,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			base_thickness_mm: 1.0,
			z_scale: 1.0,
			file_format: FileFormat::StlBinary,
			manual: String::new(),
			poly_url: String::new(),
		}
	}
}

impl PrintOptions {
	pub fn check(&self) -> Result<()> {
		ensure!(
			self.base_thickness_mm >= 0.0,
			"base thickness ({} mm) must not be negative",
			self.base_thickness_mm
		);
		ensure!(self.z_scale > 0.0, "z scale ({}) must be positive", self.z_scale);
		Ok(())
	}

	pub fn manual_options(&self) -> ManualOptions {
		ManualOptions::parse(&self.manual)
	}
}

/// The parsed manual options.
///
/// The text is a JSON object body without the braces, e.g.
/// `"no_bottom": true, "tile_centered": false`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualOptions {
	pub options: Map<String, Value>,
	/// Set when the text could not be parsed; the options are then empty.
	pub warning: Option<String>,
}

impl ManualOptions {
	/// Parses manual options. Invalid text is not an error: it yields empty options
	/// and a warning.
	pub fn parse(text: &str) -> ManualOptions {
		if text.trim().is_empty() {
			return ManualOptions::default();
		}
		match serde_json::from_str::<Map<String, Value>>(&format!("{{{text}}}")) {
			Ok(options) => ManualOptions { options, warning: None },
			Err(err) => {
				warn!("ignoring manual options {text:?}: {err}");
				ManualOptions {
					options: Map::new(),
					warning: Some(format!("manual options are not valid and were ignored ({err})")),
				}
			}
		}
	}

	/// `true` if the `"only"` option asks the generator for a single tile.
	pub fn single_tile(&self) -> bool {
		self.options.get("only").is_some_and(|only| !only.is_null())
	}
}
