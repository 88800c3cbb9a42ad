use super::{GeoBBox, GeoPoint};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An imported boundary: an ordered ring of at least three vertices.
///
/// The ring is not necessarily closed explicitly; the first vertex may or may not be
/// repeated at the end, exactly as it appeared in the source file.
#[derive(Clone, PartialEq)]
pub struct BoundaryPolygon(Vec<GeoPoint>);

impl BoundaryPolygon {
	pub const MIN_VERTICES: usize = 3;

	/// Creates a polygon from vertices in file order.
	///
	/// # Examples
	/// ```
	/// use terrabox_core::{BoundaryPolygon, GeoPoint};
	///
	/// let polygon = BoundaryPolygon::new(vec![
	///     GeoPoint::from((38.0, -110.0)),
	///     GeoPoint::from((38.0, -109.0)),
	///     GeoPoint::from((39.0, -109.0)),
	/// ])
	/// .unwrap();
	/// assert_eq!(polygon.len(), 3);
	/// ```
	pub fn new(vertices: Vec<GeoPoint>) -> Result<Self> {
		ensure!(
			vertices.len() >= Self::MIN_VERTICES,
			"a polygon needs at least {} vertices, got {}",
			Self::MIN_VERTICES,
			vertices.len()
		);
		for vertex in &vertices {
			vertex.check()?;
		}
		Ok(Self(vertices))
	}

	pub fn vertices(&self) -> &[GeoPoint] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Axis-aligned min/max envelope of all vertices (not a minimal rotated rectangle).
	pub fn bbox(&self) -> Result<GeoBBox> {
		GeoBBox::from_points(&self.0)
	}
}

impl Debug for BoundaryPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
