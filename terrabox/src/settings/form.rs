//! The flat field map exchanged with the page template and the generator.

use super::{MapView, PrintOptions, Settings};
use crate::area::PrintArea;
use anyhow::{Result, anyhow, bail};
use std::{collections::BTreeMap, fmt::Display, str::FromStr};
use terrabox_core::GeoPoint;

/// Field names. They are what the generator expects and must not change.
pub mod field {
	pub const TRLAT: &str = "trlat";
	pub const TRLON: &str = "trlon";
	pub const BLLAT: &str = "bllat";
	pub const BLLON: &str = "bllon";
	pub const TILEWIDTH: &str = "tilewidth";
	pub const NTILESX: &str = "ntilesx";
	pub const NTILESY: &str = "ntilesy";
	pub const PRINTRES: &str = "printres";
	pub const BASETHICK: &str = "basethick";
	pub const ZSCALE: &str = "zscale";
	pub const FILEFORMAT: &str = "fileformat";
	pub const MANUAL: &str = "manual";
	pub const POLY_URL: &str = "polyURL";
	pub const DEM_NAME: &str = "DEM_name";
	pub const MAP_LAT: &str = "map_lat";
	pub const MAP_LON: &str = "map_lon";
	pub const MAP_ZOOM: &str = "map_zoom";
	pub const MAPTYPE: &str = "maptype";
	pub const TRANSP: &str = "transp";
	pub const GAMMA: &str = "gamma";
	pub const HSAZI: &str = "hsazi";
	pub const HSELEV: &str = "hselev";
	pub const WARNING: &str = "warning";
}

const DEFAULTS: [(&str, &str); 23] = [
	(field::TRLAT, ""),
	(field::TRLON, ""),
	(field::BLLAT, ""),
	(field::BLLON, ""),
	(field::TILEWIDTH, "80"),
	(field::NTILESX, "1"),
	(field::NTILESY, "1"),
	(field::PRINTRES, "0.4"),
	(field::BASETHICK, "1"),
	(field::ZSCALE, "1.0"),
	(field::FILEFORMAT, "STLb"),
	(field::MANUAL, ""),
	(field::POLY_URL, ""),
	(field::DEM_NAME, "USGS/NED"),
	(field::MAP_LAT, "44.59982"),
	(field::MAP_LON, "-108.11695"),
	(field::MAP_ZOOM, "11"),
	(field::MAPTYPE, "roadmap"),
	(field::TRANSP, "20"),
	(field::GAMMA, "1"),
	(field::HSAZI, "315"),
	(field::HSELEV, "45"),
	(field::WARNING, ""),
];

/// Form field names and values, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
	/// The values of a freshly loaded page.
	pub fn defaults() -> Self {
		DEFAULTS.iter().copied().collect()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	pub fn set(&mut self, name: &str, value: impl ToString) {
		self.0.insert(name.to_string(), value.to_string());
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The value of a field, falling back to its default when missing.
	fn value(&self, name: &str) -> &str {
		self.get(name)
			.or_else(|| DEFAULTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v))
			.unwrap_or_default()
			.trim()
	}

	fn parse<T>(&self, name: &str) -> Result<T>
	where
		T: FromStr,
		T::Err: Display,
	{
		let value = self.value(name);
		value
			.parse::<T>()
			.map_err(|e| anyhow!("invalid value '{value}' for form field '{name}': {e}"))
	}
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for FormFields {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		FormFields(iter.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}
}

/// One `name=value` line per field.
impl Display for FormFields {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (name, value) in &self.0 {
			writeln!(f, "{name}={value}")?;
		}
		Ok(())
	}
}

/// Undoes the HTML escaping the page template applies to the manual options.
pub(crate) fn unescape_manual(text: &str) -> String {
	text.replace("&amp;quot;", "\"").replace("&#34;", "\"")
}

impl Settings {
	/// Builds settings from submitted or templated form fields. Missing fields take
	/// their default. Empty corner fields mean no box has been chosen yet.
	pub fn from_form(fields: &FormFields) -> Result<Settings> {
		let map = MapView {
			center: GeoPoint::new(fields.parse(field::MAP_LAT)?, fields.parse(field::MAP_LON)?)?,
			zoom: fields.parse(field::MAP_ZOOM)?,
			bounds: None,
		};

		let corners = [field::TRLAT, field::TRLON, field::BLLAT, field::BLLON];
		let filled = corners.iter().filter(|name| !fields.value(name).is_empty()).count();
		let mut settings = match filled {
			0 => Settings::new(PrintArea::placeholder(map.center)),
			4 => {
				let mut settings = Settings::new(PrintArea::placeholder(map.center));
				settings.set_box_from_corners(
					GeoPoint::new(fields.parse(field::TRLAT)?, fields.parse(field::TRLON)?)?,
					GeoPoint::new(fields.parse(field::BLLAT)?, fields.parse(field::BLLON)?)?,
				)?;
				settings
			}
			_ => bail!("the corner fields {corners:?} must be either all set or all empty"),
		};
		settings.set_map_view(map);

		settings.set_dem_source(fields.parse(field::DEM_NAME)?);
		settings.set_tile_width_mm(fields.parse(field::TILEWIDTH)?);
		settings.set_tile_counts(fields.parse(field::NTILESX)?, fields.parse(field::NTILESY)?);
		settings.set_print_resolution_mm(fields.parse(field::PRINTRES)?);
		settings.parameters().check()?;

		let print = PrintOptions {
			base_thickness_mm: fields.parse(field::BASETHICK)?,
			z_scale: fields.parse(field::ZSCALE)?,
			file_format: fields.parse(field::FILEFORMAT)?,
			manual: unescape_manual(fields.value(field::MANUAL)),
			poly_url: fields.value(field::POLY_URL).to_string(),
		};
		print.check()?;
		*settings.print_options_mut() = print;

		let overlay = settings.overlay_mut();
		overlay.map_type = fields.parse(field::MAPTYPE)?;
		overlay.set_transparency_pct(fields.parse(field::TRANSP)?)?;
		overlay.set_hillshade_azimuth(fields.parse(field::HSAZI)?)?;
		overlay.set_hillshade_elevation(fields.parse(field::HSELEV)?)?;
		overlay.gamma = fields.parse(field::GAMMA)?;

		Ok(settings)
	}

	/// The current settings as form fields, including the advisories as `warning`.
	pub fn to_form(&mut self) -> FormFields {
		let mut fields = FormFields::default();

		if self.area().is_placeholder() {
			for name in [field::TRLAT, field::TRLON, field::BLLAT, field::BLLON] {
				fields.set(name, "");
			}
		} else {
			let bbox = self.state().bbox;
			fields.set(field::TRLAT, bbox.y_max);
			fields.set(field::TRLON, bbox.x_max);
			fields.set(field::BLLAT, bbox.y_min);
			fields.set(field::BLLON, bbox.x_min);
		}

		let parameters = *self.parameters();
		fields.set(field::TILEWIDTH, parameters.tile_width_mm);
		fields.set(field::NTILESX, parameters.tile_count_x);
		fields.set(field::NTILESY, parameters.tile_count_y);
		fields.set(field::PRINTRES, parameters.print_resolution_mm);
		fields.set(field::DEM_NAME, self.dem_source());

		let print = self.print_options();
		fields.set(field::BASETHICK, print.base_thickness_mm);
		fields.set(field::ZSCALE, print.z_scale);
		fields.set(field::FILEFORMAT, print.file_format);
		fields.set(field::MANUAL, &print.manual);
		fields.set(field::POLY_URL, &print.poly_url);

		let map = *self.map_view();
		fields.set(field::MAP_LAT, map.center.lat);
		fields.set(field::MAP_LON, map.center.lon);
		fields.set(field::MAP_ZOOM, map.zoom);

		let overlay = *self.overlay();
		fields.set(field::MAPTYPE, overlay.map_type);
		fields.set(field::TRANSP, overlay.transparency_pct);
		fields.set(field::GAMMA, overlay.gamma);
		fields.set(field::HSAZI, overlay.hillshade_azimuth);
		fields.set(field::HSELEV, overlay.hillshade_elevation());

		fields.set(field::WARNING, self.advisories(map.bounds.as_ref()).join("; "));
		fields
	}
}
