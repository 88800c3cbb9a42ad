use super::{BoundaryPolygon, GeoBBox};

/// The print area of a session: the selection box and, if the box came from an
/// imported boundary file, the boundary itself.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintAreaState {
	pub bbox: GeoBBox,
	pub polygon: Option<BoundaryPolygon>,
}

impl PrintAreaState {
	pub fn new(bbox: GeoBBox) -> Self {
		Self { bbox, polygon: None }
	}

	pub fn has_polygon(&self) -> bool {
		self.polygon.is_some()
	}
}
