use crate::ImportError;
use log::debug;
use terrabox_core::{BoundaryPolygon, GeoPoint};

/// Parses the boundary polygon of a KML document.
///
/// The text of every `<coordinates>` element is collected in document order, so a
/// placemark split over several elements yields one ring.
pub fn parse_kml(text: &str) -> Result<BoundaryPolygon, ImportError> {
	let options = roxmltree::ParsingOptions {
		allow_dtd: true,
		..roxmltree::ParsingOptions::default()
	};
	let document = roxmltree::Document::parse_with_options(text, options).map_err(ImportError::parse)?;

	let mut found_element = false;
	let mut coordinates = String::new();
	for node in document
		.descendants()
		.filter(|n| n.is_element() && n.tag_name().name() == "coordinates")
	{
		found_element = true;
		for text in node.descendants().filter_map(|n| if n.is_text() { n.text() } else { None }) {
			coordinates.push(' ');
			coordinates.push_str(text);
		}
	}
	if !found_element {
		return Err(ImportError::parse("no <coordinates> element found"));
	}

	let vertices = parse_coordinates(&coordinates)?;
	if vertices.len() < BoundaryPolygon::MIN_VERTICES {
		return Err(ImportError::TooFewVertices { found: vertices.len() });
	}
	debug!("parsed {} boundary vertices", vertices.len());

	BoundaryPolygon::new(vertices).map_err(ImportError::parse)
}

/// Parses a KML coordinate list: whitespace separated `lon,lat[,elevation]` tuples.
///
/// Tabs, newlines and repeated blanks between tuples are formatting only. The elevation
/// is ignored.
pub fn parse_coordinates(text: &str) -> Result<Vec<GeoPoint>, ImportError> {
	text.split_whitespace().map(parse_tuple).collect()
}

fn parse_tuple(tuple: &str) -> Result<GeoPoint, ImportError> {
	let mut parts = tuple.split(',');
	let mut next_number = |name: &str| -> Result<f64, ImportError> {
		let part = parts
			.next()
			.filter(|p| !p.is_empty())
			.ok_or_else(|| ImportError::parse(format!("coordinate '{tuple}' is missing the {name}")))?;
		part
			.parse::<f64>()
			.map_err(|_| ImportError::parse(format!("coordinate '{tuple}' has an invalid {name}")))
	};
	let lon = next_number("longitude")?;
	let lat = next_number("latitude")?;
	Ok(GeoPoint::from((lat, lon)))
}
