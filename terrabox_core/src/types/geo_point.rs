use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A point in geographic space:
/// - `f64` latitude (range: [-90, 90])
/// - `f64` longitude (range: [-180, 180])
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

impl GeoPoint {
	/// Creates a new `GeoPoint` and checks that latitude and longitude are in range.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::GeoPoint;
	///
	/// let point = GeoPoint::new(38.5, -109.5).unwrap();
	/// assert_eq!(point.lat, 38.5);
	/// assert!(GeoPoint::new(91.0, 0.0).is_err());
	/// ```
	pub fn new(lat: f64, lon: f64) -> Result<GeoPoint> {
		let point = GeoPoint { lat, lon };
		point.check()?;
		Ok(point)
	}

	/// Checks that the stored latitude and longitude are within valid ranges.
	pub fn check(&self) -> Result<()> {
		ensure!(self.lat.is_finite(), "latitude must be a finite number");
		ensure!(self.lon.is_finite(), "longitude must be a finite number");
		ensure!(-90.0 <= self.lat, "latitude ({}) must be >= -90", self.lat);
		ensure!(self.lat <= 90.0, "latitude ({}) must be <= 90", self.lat);
		ensure!(-180.0 <= self.lon, "longitude ({}) must be >= -180", self.lon);
		ensure!(self.lon <= 180.0, "longitude ({}) must be <= 180", self.lon);
		Ok(())
	}

	/// Returns the point as `(lat, lon)`.
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.lat, self.lon)
	}
}

impl Debug for GeoPoint {
	/// Formats the point as `"lat, lon"`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.lat, self.lon)
	}
}

impl From<(f64, f64)> for GeoPoint {
	/// Builds a point from a `(lat, lon)` tuple without range checks.
	fn from((lat, lon): (f64, f64)) -> Self {
		GeoPoint { lat, lon }
	}
}
