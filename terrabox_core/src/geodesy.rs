//! Length of one degree of latitude and longitude on the WGS84 ellipsoid.
//!
//! Uses the empirical cosine series also found in common degree-length calculators.
//! Accurate to about a centimeter per degree, which is plenty for sizing a print area.

// latitude terms
const M1: f64 = 111_132.954;
const M2: f64 = -559.822;
const M3: f64 = 1.175;
const M4: f64 = -0.0023;

// longitude terms
const P1: f64 = 111_412.84;
const P2: f64 = -93.5;
const P3: f64 = 0.118;

/// Returns `(meters_per_degree_lat, meters_per_degree_lon)` at the given latitude.
///
/// Defined for every latitude; at the poles the longitude length degenerates to ~0.
///
/// # Examples
/// ```
/// use terrabox_core::geodesy::meters_per_degree;
///
/// let (lat_m, lon_m) = meters_per_degree(0.0);
/// assert!((lat_m - 110_574.3).abs() < 0.1);
/// assert!((lon_m - 111_319.5).abs() < 0.1);
/// ```
pub fn meters_per_degree(latitude_deg: f64) -> (f64, f64) {
	let lat = latitude_deg.to_radians();
	let lat_len = M1 + M2 * (2.0 * lat).cos() + M3 * (4.0 * lat).cos() + M4 * (6.0 * lat).cos();
	let lon_len = P1 * lat.cos() + P2 * (3.0 * lat).cos() + P3 * (5.0 * lat).cos();
	(lat_len, lon_len)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 110_574.304_7, 111_319.458)]
	#[case(45.0, 111_131.779, 78_846.805_7)]
	#[case(-45.0, 111_131.779, 78_846.805_7)]
	fn known_values(#[case] lat: f64, #[case] lat_m: f64, #[case] lon_m: f64) {
		let (a, b) = meters_per_degree(lat);
		assert_relative_eq!(a, lat_m, epsilon = 1e-3);
		assert_relative_eq!(b, lon_m, epsilon = 1e-3);
	}

	#[test]
	fn longitude_shrinks_towards_poles() {
		let (_, equator) = meters_per_degree(0.0);
		let (_, mid) = meters_per_degree(60.0);
		let (_, pole) = meters_per_degree(90.0);
		assert!(equator > mid);
		assert!(mid > pole);
		assert!(pole.abs() < 1e-6);
	}
}
