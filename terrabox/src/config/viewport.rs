use crate::settings::{MapView, Settings};
use anyhow::{Context, Result};
use serde::Deserialize;
use terrabox_core::GeoBBox;

/// The visible map bounds. Used to place a print area when none is configured and to
/// check that the print area is visible.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
	pub north: f64,
	pub south: f64,
	pub east: f64,
	pub west: f64,
	pub zoom: Option<u8>,
}

impl ViewportConfig {
	pub fn bounds(&self) -> Result<GeoBBox> {
		GeoBBox::new(self.west, self.south, self.east, self.north).context("invalid viewport")
	}

	/// Stores the map view and, if no print area has been set yet, centers one on it.
	pub fn apply(&self, settings: &mut Settings) -> Result<()> {
		let bounds = self.bounds()?;
		settings.set_map_view(MapView {
			center: bounds.center(),
			zoom: self.zoom.unwrap_or(MapView::default().zoom),
			bounds: Some(bounds),
		});
		if settings.area().is_placeholder() {
			settings.recenter_on_viewport(&bounds);
		}
		Ok(())
	}
}
