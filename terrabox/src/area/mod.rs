//! The print-area box model: the single owner of the selected box and boundary.

use anyhow::Result;
use log::{debug, info};
use terrabox_core::{GeoBBox, GeoPoint, PrintAreaState};
use terrabox_geometry::BoundaryImport;

/// Half extent in degrees of the box shown before the user has chosen one.
pub const PLACEHOLDER_HALF_SPAN_DEG: f64 = 0.05;

/// Owns the [`PrintAreaState`] and tracks whether it changed since the derived
/// tiling was last computed.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintArea {
	state: PrintAreaState,
	placeholder: bool,
	dirty: bool,
}

impl PrintArea {
	pub fn new(bbox: GeoBBox) -> Self {
		Self {
			state: PrintAreaState::new(bbox),
			placeholder: false,
			dirty: true,
		}
	}

	/// A provisional box around `center`, to be replaced by the first viewport
	/// recentering or by any explicit box.
	pub fn placeholder(center: GeoPoint) -> Self {
		let bbox = GeoBBox::around(center, PLACEHOLDER_HALF_SPAN_DEG, PLACEHOLDER_HALF_SPAN_DEG);
		Self {
			placeholder: true,
			..Self::new(bbox)
		}
	}

	/// `true` until a box has been set by the user, an import or a recentering.
	pub fn is_placeholder(&self) -> bool {
		self.placeholder
	}

	pub fn state(&self) -> &PrintAreaState {
		&self.state
	}

	/// Sets the box from typed-in corners.
	///
	/// A north-east corner south or west of the south-west corner is rejected and the
	/// state is left untouched. Clears an imported boundary.
	pub fn set_box_from_corners(&mut self, north_east: GeoPoint, south_west: GeoPoint) -> Result<()> {
		let bbox = GeoBBox::from_corners(north_east, south_west)?;
		self.replace_box(bbox);
		Ok(())
	}

	/// Sets the box after the user dragged or resized the rectangle. Clears an imported
	/// boundary.
	pub fn set_box_from_drag(&mut self, bbox: GeoBBox) {
		self.replace_box(bbox);
	}

	/// Takes over box and boundary of an imported file.
	pub fn apply_import_result(&mut self, import: BoundaryImport) {
		info!(
			"applying imported boundary with {} vertices, {:?}",
			import.polygon.len(),
			import.bbox
		);
		self.state = PrintAreaState {
			bbox: import.bbox,
			polygon: Some(import.polygon),
		};
		self.placeholder = false;
		self.dirty = true;
	}

	/// Centers a new box on the viewport, a third of the visible span in each direction.
	/// Clears an imported boundary.
	pub fn recenter_on_viewport(&mut self, viewport: &GeoBBox) {
		let (span_lat, span_lon) = viewport.span();
		self.replace_box(GeoBBox::around(viewport.center(), span_lat / 3.0, span_lon / 3.0));
	}

	/// Returns whether the state changed since the last call, and resets the flag.
	pub fn take_dirty(&mut self) -> bool {
		std::mem::take(&mut self.dirty)
	}

	fn replace_box(&mut self, bbox: GeoBBox) {
		debug!("print area set to {bbox:?}");
		if self.state.polygon.is_some() {
			debug!("dropping imported boundary");
		}
		self.state = PrintAreaState::new(bbox);
		self.placeholder = false;
		self.dirty = true;
	}
}
