//! Estimates how many raster cells a print job needs, the way the generation backend
//! does before accepting a job.

use crate::{DemSource, FileFormat, GeoBBox, tiling::TilingParameters};
use std::fmt::Display;

/// Largest number of cells the backend processes for mesh formats.
pub const MAX_CELLS_PERMITTED: f64 = 1000.0 * 1000.0 * 0.7;

/// Raster-only exports are accepted up to this multiple of [`MAX_CELLS_PERMITTED`].
pub const RASTER_ONLY_FACTOR: f64 = 100.0;

/// Estimated number of cells of a job and the limit it is checked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JobSize {
	pub cells: u64,
	pub limit: u64,
}

impl JobSize {
	/// Estimates the job size of a print area.
	///
	/// With a print resolution the cell count follows from the tile size in mm; with the
	/// "source resolution" sentinel it follows from the area and the cell width of the
	/// elevation layer.
	///
	/// A job that prints a `single_tile` only carries its share of the whole area.
	pub fn estimate(
		bbox: &GeoBBox,
		params: &TilingParameters,
		dem: DemSource,
		format: FileFormat,
		single_tile: bool,
	) -> JobSize {
		let (span_lat, span_lon) = bbox.span();
		let tiles = f64::from(params.tile_count_x) * f64::from(params.tile_count_y);
		let mut cells = if params.uses_source_resolution() {
			let arcsec = dem.cell_width_arcsec();
			((span_lon * 3600.0) / arcsec) * ((span_lat * 3600.0) / arcsec)
		} else {
			let pr = params.print_resolution_mm;
			let width = params.tile_width_mm;
			let height = width * (span_lat / span_lon);
			(width / pr) * (height / pr) * tiles
		};
		if single_tile && tiles > 0.0 {
			cells /= tiles;
		}

		let mut limit = MAX_CELLS_PERMITTED;
		if format.is_raster_only() {
			limit *= RASTER_ONLY_FACTOR;
		}

		JobSize {
			cells: cells.max(0.0) as u64,
			limit: limit as u64,
		}
	}

	pub fn is_too_large(&self) -> bool {
		self.cells > self.limit
	}
}

impl Display for JobSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} kilo pixels (limit {} kilo pixels)",
			kilo(self.cells),
			kilo(self.limit)
		)
	}
}

fn kilo(cells: u64) -> f64 {
	((cells as f64 / 1000.0) * 100.0).round() / 100.0
}
