use super::TilingParameters;
use crate::{GeoBBox, GeoPoint, PrintAreaState, geodesy::meters_per_degree};
use log::trace;
use std::fmt::Display;

/// Real-world size of one sampled elevation cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroundResolution {
	/// Rounded to centimeters.
	Meters(f64),
	/// The elevation layer is used at its own resolution, no resampling.
	Same,
}

impl GroundResolution {
	pub fn meters(&self) -> Option<f64> {
		match self {
			GroundResolution::Meters(m) => Some(*m),
			GroundResolution::Same => None,
		}
	}
}

impl Display for GroundResolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GroundResolution::Meters(m) => write!(f, "{m} m"),
			GroundResolution::Same => f.write_str("the same"),
		}
	}
}

/// A straight line segment to draw on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
	pub from: GeoPoint,
	pub to: GeoPoint,
}

/// Everything the preview shows about how the print area will be tiled and sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedTiling {
	pub ground_resolution: GroundResolution,
	/// Physical height of one tile in mm.
	pub tile_height_mm: f64,
	/// Interior tile boundaries as longitudes, west to east.
	pub division_lines_x: Vec<f64>,
	/// Interior tile boundaries as latitudes, south to north.
	pub division_lines_y: Vec<f64>,
	/// The ground resolution is finer than the elevation layer can deliver.
	pub under_sampled: bool,
}

impl DerivedTiling {
	/// Tile height truncated (not rounded) to one decimal, e.g. `"123.4 mm"`.
	pub fn tile_height_display(&self) -> String {
		format!("{:.1} mm", (self.tile_height_mm * 10.0).trunc() / 10.0)
	}

	/// Division lines as drawable segments spanning the box: x lines run north to
	/// south, y lines run west to east.
	pub fn division_segments(&self, bbox: &GeoBBox) -> Vec<LineSegment> {
		let x_lines = self.division_lines_x.iter().map(|&lon| LineSegment {
			from: GeoPoint::from((bbox.y_max, lon)),
			to: GeoPoint::from((bbox.y_min, lon)),
		});
		let y_lines = self.division_lines_y.iter().map(|&lat| LineSegment {
			from: GeoPoint::from((lat, bbox.x_min)),
			to: GeoPoint::from((lat, bbox.x_max)),
		});
		x_lines.chain(y_lines).collect()
	}
}

/// Computes the derived tiling of a print area.
///
/// Pure function; recompute whenever the box, the tile counts, the tile width or the
/// print resolution change. Degenerate inputs (zero span, poles, zero tiles) produce
/// non-finite numbers rather than errors.
///
/// # Examples
/// ```
/// use terrabox_core::{GeoBBox, PrintAreaState, tiling::*};
///
/// let state = PrintAreaState::new(GeoBBox::new(-110.0, 38.0, -109.0, 39.0).unwrap());
/// let params = TilingParameters { tile_count_x: 2, ..TilingParameters::default() };
/// let derived = compute_derived_tiling(&state, &params);
/// assert_eq!(derived.division_lines_x, vec![-109.5]);
/// assert!(derived.division_lines_y.is_empty());
/// ```
pub fn compute_derived_tiling(state: &PrintAreaState, params: &TilingParameters) -> DerivedTiling {
	let bbox = &state.bbox;
	let (span_lat, span_lon) = bbox.span();
	let (lat_m, lon_m) = meters_per_degree(bbox.center().lat);

	let ground_resolution = if params.uses_source_resolution() {
		GroundResolution::Same
	} else {
		let cells_per_tile = params.tile_width_mm / params.print_resolution_mm;
		let total_cells = cells_per_tile * f64::from(params.tile_count_x);
		let width_m = (bbox.x_max - bbox.x_min).abs() * lon_m;
		GroundResolution::Meters(round_to_cm(width_m / total_cells))
	};

	let under_sampled = match ground_resolution {
		GroundResolution::Meters(m) => m < params.source_resolution_m,
		GroundResolution::Same => false,
	};

	let height_m = span_lat * lat_m;
	let width_m = span_lon * lon_m;
	let tile_height_mm = params.tile_width_mm * (height_m / width_m);

	let derived = DerivedTiling {
		ground_resolution,
		tile_height_mm,
		division_lines_x: interior_lines(bbox.x_min, span_lon, params.tile_count_x),
		division_lines_y: interior_lines(bbox.y_min, span_lat, params.tile_count_y),
		under_sampled,
	};
	trace!("derived tiling for {bbox:?} with {params:?}: {derived:?}");
	derived
}

/// Equally spaced interior lines splitting `[start, start + span]` into `count` parts.
fn interior_lines(start: f64, span: f64, count: i32) -> Vec<f64> {
	if count <= 1 {
		return Vec::new();
	}
	let step = span / f64::from(count);
	(1..count).map(|i| start + f64::from(i) * step).collect()
}

fn round_to_cm(meters: f64) -> f64 {
	(meters * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn state(west: f64, south: f64, east: f64, north: f64) -> PrintAreaState {
		PrintAreaState::new(GeoBBox::new(west, south, east, north).unwrap())
	}

	#[test]
	fn ground_resolution_at_38_degrees() {
		// 0.01° of longitude at 38° north, 100 mm tiles, 0.4 mm nozzle, 2 tiles => 500 cells
		let state = state(-109.01, 37.995, -109.0, 38.005);
		let params = TilingParameters {
			tile_width_mm: 100.0,
			tile_count_x: 2,
			print_resolution_mm: 0.4,
			..TilingParameters::default()
		};
		let derived = compute_derived_tiling(&state, &params);

		let expected = round_to_cm(0.01 * meters_per_degree(38.0).1 / 500.0);
		let GroundResolution::Meters(actual) = derived.ground_resolution else {
			panic!("expected a numeric ground resolution");
		};
		assert_relative_eq!(actual, expected, epsilon = 1e-9);
		assert_relative_eq!(actual, 1.76, epsilon = 1e-9);
		assert!(derived.under_sampled, "1.76 m is finer than the 10 m source");
	}

	#[rstest]
	#[case(0.0)]
	#[case(-0.4)]
	fn source_resolution_sentinel(#[case] print_res: f64) {
		let params = TilingParameters {
			print_resolution_mm: print_res,
			..TilingParameters::default()
		};
		let derived = compute_derived_tiling(&state(-110.0, 38.0, -109.0, 39.0), &params);
		assert_eq!(derived.ground_resolution, GroundResolution::Same);
		assert_eq!(derived.ground_resolution.to_string(), "the same");
		assert!(!derived.under_sampled);
	}

	#[test]
	fn coarse_sampling_is_not_under_sampled() {
		let params = TilingParameters {
			tile_width_mm: 100.0,
			print_resolution_mm: 1.0,
			source_resolution_m: 30.0,
			..TilingParameters::default()
		};
		let derived = compute_derived_tiling(&state(-110.0, 38.0, -109.0, 39.0), &params);
		// ~87.2 km across 100 cells
		assert_relative_eq!(derived.ground_resolution.meters().unwrap(), 872.33, epsilon = 1e-9);
		assert!(!derived.under_sampled);
	}

	#[test]
	fn tile_height_follows_meter_aspect_ratio() {
		let params = TilingParameters {
			tile_width_mm: 100.0,
			..TilingParameters::default()
		};
		let derived = compute_derived_tiling(&state(-110.0, 38.0, -109.0, 39.0), &params);
		let (lat_m, lon_m) = meters_per_degree(38.5);
		assert_relative_eq!(derived.tile_height_mm, 100.0 * lat_m / lon_m, epsilon = 1e-9);
	}

	#[rstest]
	#[case(126.38, "126.3 mm")]
	#[case(126.99, "126.9 mm")]
	#[case(80.0, "80.0 mm")]
	fn tile_height_display_truncates(#[case] height: f64, #[case] expected: &str) {
		let derived = DerivedTiling {
			ground_resolution: GroundResolution::Same,
			tile_height_mm: height,
			division_lines_x: vec![],
			division_lines_y: vec![],
			under_sampled: false,
		};
		assert_eq!(derived.tile_height_display(), expected);
	}

	#[rstest]
	#[case(3, vec![-109.0 - 2.0 / 3.0, -109.0 - 1.0 / 3.0])]
	#[case(2, vec![-109.5])]
	#[case(1, vec![])]
	#[case(0, vec![])]
	#[case(-3, vec![])]
	fn division_lines_x(#[case] count: i32, #[case] expected: Vec<f64>) {
		let params = TilingParameters {
			tile_count_x: count,
			..TilingParameters::default()
		};
		let derived = compute_derived_tiling(&state(-110.0, 38.0, -109.0, 39.0), &params);
		assert_eq!(derived.division_lines_x.len(), expected.len());
		for (actual, expected) in derived.division_lines_x.iter().zip(expected) {
			assert_relative_eq!(*actual, expected, epsilon = 1e-12);
		}
	}

	#[test]
	fn division_lines_y_and_segments() {
		let params = TilingParameters {
			tile_count_x: 2,
			tile_count_y: 4,
			..TilingParameters::default()
		};
		let area = state(-110.0, 38.0, -109.0, 40.0);
		let derived = compute_derived_tiling(&area, &params);
		assert_eq!(derived.division_lines_y, vec![38.5, 39.0, 39.5]);

		let segments = derived.division_segments(&area.bbox);
		assert_eq!(segments.len(), 4);
		assert_eq!(
			segments[0],
			LineSegment {
				from: GeoPoint::from((40.0, -109.5)),
				to: GeoPoint::from((38.0, -109.5)),
			}
		);
		assert_eq!(
			segments[1],
			LineSegment {
				from: GeoPoint::from((38.5, -110.0)),
				to: GeoPoint::from((38.5, -109.0)),
			}
		);
	}
}
