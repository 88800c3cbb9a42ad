//! The interactive map the print area is shown on.

use terrabox_core::{BoundaryPolygon, GeoBBox, GeoPoint, tiling::LineSegment};

/// A map that can display the print area.
///
/// Implementations wrap whatever renders the map; the settings surface only talks to
/// it through this trait.
pub trait MapViewport {
	/// Currently visible bounds.
	fn bounds(&self) -> GeoBBox;

	/// Shows (or moves) the editable print-area rectangle.
	fn draw_box(&mut self, bbox: &GeoBBox);

	/// Shows the imported boundary polygon, replacing any previous one.
	fn draw_polygon(&mut self, polygon: &BoundaryPolygon);

	fn clear_polygon(&mut self);

	/// Shows the tile division lines, replacing any previous ones.
	fn draw_division_lines(&mut self, segments: &[LineSegment]);

	fn clear_division_lines(&mut self);

	/// Pans and zooms so that `bbox` is visible.
	fn fit_bounds(&mut self, bbox: &GeoBBox);
}

/// Something happened on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
	/// The rectangle was resized or moved to the given bounds.
	BoxChanged(GeoBBox),
	/// The user started dragging the rectangle.
	DragStart,
	/// The user released the rectangle at the given bounds.
	DragEnd(GeoBBox),
	/// The map stopped moving.
	Idle { bounds: GeoBBox, center: GeoPoint, zoom: u8 },
}
