use anyhow::{Result, ensure};

/// Printer and tiling settings that, together with the print area, determine the
/// derived tiling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingParameters {
	/// Physical width of one tile in mm. Tile height follows from the box aspect ratio.
	pub tile_width_mm: f64,
	/// Number of tiles in x (west to east).
	pub tile_count_x: i32,
	/// Number of tiles in y (south to north).
	pub tile_count_y: i32,
	/// Nozzle/print resolution in mm. Values `<= 0` mean "use the source resolution".
	pub print_resolution_mm: f64,
	/// Ground resolution of the selected elevation layer in meters.
	pub source_resolution_m: f64,
}

impl TilingParameters {
	/// Returns `true` if the print resolution is the "use source resolution" sentinel.
	pub fn uses_source_resolution(&self) -> bool {
		self.print_resolution_mm <= 0.0
	}

	/// Checks the parameters a user may submit.
	///
	/// The calculator itself accepts anything; this is for input validation only.
	pub fn check(&self) -> Result<()> {
		ensure!(
			self.tile_width_mm > 0.0,
			"tile width ({} mm) must be positive",
			self.tile_width_mm
		);
		ensure!(self.tile_count_x >= 1, "tile count x ({}) must be >= 1", self.tile_count_x);
		ensure!(self.tile_count_y >= 1, "tile count y ({}) must be >= 1", self.tile_count_y);
		ensure!(
			self.source_resolution_m > 0.0,
			"source resolution ({} m) must be positive",
			self.source_resolution_m
		);
		Ok(())
	}
}

impl Default for TilingParameters {
	fn default() -> Self {
		Self {
			tile_width_mm: 80.0,
			tile_count_x: 1,
			tile_count_y: 1,
			print_resolution_mm: 0.4,
			source_resolution_m: 10.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn default_is_valid() {
		TilingParameters::default().check().unwrap();
		assert!(!TilingParameters::default().uses_source_resolution());
	}

	#[rstest]
	#[case(0.0, 1, 1, 10.0)]
	#[case(-5.0, 1, 1, 10.0)]
	#[case(100.0, 0, 1, 10.0)]
	#[case(100.0, 1, -2, 10.0)]
	#[case(100.0, 1, 1, 0.0)]
	fn invalid(#[case] width: f64, #[case] nx: i32, #[case] ny: i32, #[case] source: f64) {
		let params = TilingParameters {
			tile_width_mm: width,
			tile_count_x: nx,
			tile_count_y: ny,
			print_resolution_mm: 0.4,
			source_resolution_m: source,
		};
		assert!(params.check().is_err());
	}

	#[rstest]
	#[case(0.0, true)]
	#[case(-1.0, true)]
	#[case(0.25, false)]
	fn source_resolution_sentinel(#[case] print_res: f64, #[case] expected: bool) {
		let params = TilingParameters {
			print_resolution_mm: print_res,
			..TilingParameters::default()
		};
		assert_eq!(params.uses_source_resolution(), expected);
	}
}
