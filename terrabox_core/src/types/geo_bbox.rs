use super::GeoPoint;
use anyhow::{Result, bail, ensure};
use std::fmt::Debug;

/// A geographical bounding box (`GeoBBox`) represents the rectangular print area
/// on the map, defined by its minimum and maximum longitude (x) and latitude (y).
///
/// The bounding box is defined by four `f64` values:
/// - `x_min` (west): Minimum longitude.
/// - `y_min` (south): Minimum latitude.
/// - `x_max` (east): Maximum longitude.
/// - `y_max` (north): Maximum latitude.
///
/// Boxes crossing the antimeridian (west > east) are not supported and are rejected
/// by every constructor.
///
/// # Examples
///
/// ## Creating a box from two corners
/// ```
/// use terrabox_core::{GeoBBox, GeoPoint};
///
/// let ne = GeoPoint::new(39.0, -109.0).unwrap();
/// let sw = GeoPoint::new(38.0, -110.0).unwrap();
/// let bbox = GeoBBox::from_corners(ne, sw).unwrap();
/// assert_eq!(bbox.as_tuple(), (-110.0, 38.0, -109.0, 39.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
	phantom: (),
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from four `f64` values:
	/// `west, south, east, north`.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
	/// assert_eq!(bbox.x_min, -10.0);
	/// assert_eq!(bbox.y_max, 5.0);
	/// ```
	#[must_use = "GeoBBox::new returns a Result; handle the error or unwrap"]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
			phantom: (),
		}
		.checked()
	}

	/// Creates a `GeoBBox` from its north-east and south-west corners.
	///
	/// The corners are taken as given: a north-east corner south of the south-west
	/// corner is an error, as is a north-east corner west of the south-west corner
	/// (a box crossing the antimeridian).
	pub fn from_corners(north_east: GeoPoint, south_west: GeoPoint) -> Result<GeoBBox> {
		ensure!(
			north_east.lat >= south_west.lat,
			"north-east latitude ({}) must be >= south-west latitude ({})",
			north_east.lat,
			south_west.lat
		);
		ensure!(
			north_east.lon >= south_west.lon,
			"north-east longitude ({}) must be >= south-west longitude ({}); boxes crossing the antimeridian are not supported",
			north_east.lon,
			south_west.lon
		);
		GeoBBox::new(south_west.lon, south_west.lat, north_east.lon, north_east.lat)
	}

	/// Returns the axis-aligned envelope of a sequence of points.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::{GeoBBox, GeoPoint};
	///
	/// let points = [GeoPoint::from((38.0, -110.0)), GeoPoint::from((39.0, -109.0))];
	/// let bbox = GeoBBox::from_points(points.iter()).unwrap();
	/// assert_eq!(bbox.as_tuple(), (-110.0, 38.0, -109.0, 39.0));
	/// ```
	pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Result<GeoBBox> {
		let mut iter = points.into_iter();
		let Some(first) = iter.next() else {
			bail!("cannot build a bounding box from an empty list of points");
		};
		let mut bbox = GeoBBox {
			x_min: first.lon,
			y_min: first.lat,
			x_max: first.lon,
			y_max: first.lat,
			phantom: (),
		};
		for point in iter {
			bbox.x_min = bbox.x_min.min(point.lon);
			bbox.y_min = bbox.y_min.min(point.lat);
			bbox.x_max = bbox.x_max.max(point.lon);
			bbox.y_max = bbox.y_max.max(point.lat);
		}
		bbox.checked()
	}

	/// Returns the box `center ± (half_lat, half_lon)`, clamped to the valid
	/// coordinate ranges.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::{GeoBBox, GeoPoint};
	///
	/// let bbox = GeoBBox::around(GeoPoint::from((89.0, 0.0)), 2.0, 1.0);
	/// assert_eq!(bbox.as_tuple(), (-1.0, 87.0, 1.0, 90.0));
	/// ```
	pub fn around(center: GeoPoint, half_lat: f64, half_lon: f64) -> GeoBBox {
		GeoBBox {
			x_min: (center.lon - half_lon).max(-180.0),
			y_min: (center.lat - half_lat).max(-90.0),
			x_max: (center.lon + half_lon).min(180.0),
			y_max: (center.lat + half_lat).min(90.0),
			phantom: (),
		}
	}

	/// The north-east (top right) corner.
	pub fn north_east(&self) -> GeoPoint {
		GeoPoint::from((self.y_max, self.x_max))
	}

	/// The south-west (bottom left) corner.
	pub fn south_west(&self) -> GeoPoint {
		GeoPoint::from((self.y_min, self.x_min))
	}

	/// Returns the extent of the box as `(Δlat, Δlon)` in degrees.
	pub fn span(&self) -> (f64, f64) {
		(self.y_max - self.y_min, self.x_max - self.x_min)
	}

	/// Returns the center of the box.
	pub fn center(&self) -> GeoPoint {
		GeoPoint::from(((self.y_min + self.y_max) / 2.0, (self.x_min + self.x_max) / 2.0))
	}

	/// Returns the bounding box as a fixed‑size array `[f64; 4]` in the order
	/// `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as a tuple `(x_min, y_min, x_max, y_max)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// Returns `true` if `other` lies strictly inside `self`: all four edges of
	/// `other` are inside the corresponding edges of `self`, none touching.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::GeoBBox;
	///
	/// let outer = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
	/// assert!(outer.contains_strictly(&GeoBBox::new(-9.0, -4.0, 9.0, 4.0).unwrap()));
	/// assert!(!outer.contains_strictly(&GeoBBox::new(-10.0, -4.0, 9.0, 4.0).unwrap()));
	/// ```
	pub fn contains_strictly(&self, other: &GeoBBox) -> bool {
		other.x_min > self.x_min && other.y_min > self.y_min && other.x_max < self.x_max && other.y_max < self.y_max
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			self.as_array().iter().all(|v| v.is_finite()),
			"bounding box coordinates must be finite numbers"
		);
		ensure!(self.x_min >= -180., "x_min ({}) must be >= -180", self.x_min);
		ensure!(self.y_min >= -90., "y_min ({}) must be >= -90", self.y_min);
		ensure!(self.x_max <= 180., "x_max ({}) must be <= 180", self.x_max);
		ensure!(self.y_max <= 90., "y_max ({}) must be <= 90", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Renders the bounding box in the form "GeoBBox(-10, -5, 10, 5)" for example
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
