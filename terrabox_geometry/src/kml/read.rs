use super::parse_kml;
use crate::ImportError;
use log::debug;
use std::{
	io::{Cursor, Read},
	path::Path,
};
use terrabox_core::{BoundaryPolygon, GeoBBox};

/// Container formats a boundary file may come in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryFormat {
	/// Plain KML text.
	Kml,
	/// Zip archive whose first entry is the KML text.
	Kmz,
}

impl BoundaryFormat {
	/// Determines the format from the extension of a file name (case insensitive).
	pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
		let extension = Path::new(file_name)
			.extension()
			.map(|e| e.to_string_lossy().to_ascii_lowercase())
			.unwrap_or_default();
		match extension.as_str() {
			"kml" => Ok(BoundaryFormat::Kml),
			"kmz" => Ok(BoundaryFormat::Kmz),
			_ => Err(ImportError::UnsupportedFormat { extension }),
		}
	}
}

/// A successfully imported boundary and the box enclosing it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryImport {
	pub bbox: GeoBBox,
	pub polygon: BoundaryPolygon,
}

/// Imports a boundary polygon from the contents of an uploaded file.
///
/// The format is chosen by the file extension. Pure: the caller decides what to do
/// with the result.
///
/// # Examples
/// ```
/// use terrabox_geometry::import_boundary;
///
/// let kml = "<kml><coordinates>-110,38,0 -109,38,0 -109,39,0 -110,39,0</coordinates></kml>";
/// let import = import_boundary("area.kml", kml.as_bytes()).unwrap();
/// assert_eq!(import.bbox.as_tuple(), (-110.0, 38.0, -109.0, 39.0));
/// assert_eq!(import.polygon.len(), 4);
/// ```
pub fn import_boundary(file_name: &str, bytes: &[u8]) -> Result<BoundaryImport, ImportError> {
	let format = BoundaryFormat::from_file_name(file_name)?;
	debug!("importing {file_name:?} as {format:?} ({} bytes)", bytes.len());

	let text = match format {
		BoundaryFormat::Kml => std::str::from_utf8(bytes).map_err(ImportError::parse)?.to_string(),
		BoundaryFormat::Kmz => read_first_entry(bytes)?,
	};

	let polygon = parse_kml(&text)?;
	let bbox = polygon.bbox().map_err(ImportError::parse)?;
	Ok(BoundaryImport { bbox, polygon })
}

fn read_first_entry(bytes: &[u8]) -> Result<String, ImportError> {
	let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(ImportError::parse)?;
	if archive.is_empty() {
		return Err(ImportError::parse("kmz archive is empty"));
	}
	let mut entry = archive.by_index(0).map_err(ImportError::parse)?;
	debug!("reading kmz entry {:?}", entry.name());

	let mut text = String::new();
	entry.read_to_string(&mut text).map_err(ImportError::parse)?;
	Ok(text)
}
