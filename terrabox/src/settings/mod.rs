//! The settings surface: everything the page lets the user choose, kept in sync with
//! the map and the form sent to the generator.

mod boundary;
mod form;
mod map_view;
mod print_options;

pub use boundary::{BoundarySelections, ImportOutcome, ImportTicket};
pub use form::{FormFields, field};
pub use map_view::{HILLSHADE_GAMMA_PRESETS, MapType, MapView, OverlayParameters};
pub use print_options::{ManualOptions, PrintOptions};

use crate::{
	area::PrintArea,
	viewport::{MapViewport, ViewportEvent},
};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;
use terrabox_core::{
	DemSource, GeoBBox, GeoPoint, PrintAreaState,
	job_size::JobSize,
	tiling::{DerivedTiling, TilingParameters, compute_derived_tiling},
};
use terrabox_geometry::{ImportError, import_boundary};

/// Owns the print area and all parameters, and caches the derived tiling.
#[derive(Clone, Debug)]
pub struct Settings {
	area: PrintArea,
	parameters: TilingParameters,
	dem: DemSource,
	print: PrintOptions,
	map: MapView,
	overlay: OverlayParameters,
	selections: BoundarySelections,
	dragging: bool,
	derived: Option<DerivedTiling>,
}

impl Default for Settings {
	fn default() -> Self {
		let map = MapView::default();
		let mut settings = Settings::new(PrintArea::placeholder(map.center));
		settings.map = map;
		settings
	}
}

impl Settings {
	pub fn new(area: PrintArea) -> Self {
		let dem = DemSource::default();
		Self {
			area,
			parameters: TilingParameters {
				source_resolution_m: dem.resolution_m(),
				..TilingParameters::default()
			},
			dem,
			print: PrintOptions::default(),
			map: MapView::default(),
			overlay: OverlayParameters::default(),
			selections: BoundarySelections::default(),
			dragging: false,
			derived: None,
		}
	}

	pub fn state(&self) -> &PrintAreaState {
		self.area.state()
	}

	pub fn area(&self) -> &PrintArea {
		&self.area
	}

	pub fn parameters(&self) -> &TilingParameters {
		&self.parameters
	}

	pub fn dem_source(&self) -> DemSource {
		self.dem
	}

	pub fn print_options(&self) -> &PrintOptions {
		&self.print
	}

	pub fn print_options_mut(&mut self) -> &mut PrintOptions {
		&mut self.print
	}

	pub fn map_view(&self) -> &MapView {
		&self.map
	}

	pub fn set_map_view(&mut self, map: MapView) {
		self.map = map;
	}

	pub fn overlay(&self) -> &OverlayParameters {
		&self.overlay
	}

	pub fn overlay_mut(&mut self) -> &mut OverlayParameters {
		&mut self.overlay
	}

	/// The derived tiling, recomputed only if the box or a tiling parameter changed.
	pub fn derived(&mut self) -> &DerivedTiling {
		if self.area.take_dirty() {
			self.derived = None;
		}
		let (state, parameters) = (self.area.state(), &self.parameters);
		self.derived.get_or_insert_with(|| {
			debug!("recomputing derived tiling for {:?}", state.bbox);
			compute_derived_tiling(state, parameters)
		})
	}

	/// The job size the generator will check, per tile if the manual options ask for
	/// a single one.
	pub fn job_size(&self) -> JobSize {
		JobSize::estimate(
			&self.state().bbox,
			&self.parameters,
			self.dem,
			self.print.file_format,
			self.print.manual_options().single_tile(),
		)
	}

	pub fn set_tile_width_mm(&mut self, tile_width_mm: f64) {
		self.parameters.tile_width_mm = tile_width_mm;
		self.derived = None;
	}

	pub fn set_tile_counts(&mut self, tile_count_x: i32, tile_count_y: i32) {
		self.parameters.tile_count_x = tile_count_x;
		self.parameters.tile_count_y = tile_count_y;
		self.derived = None;
	}

	/// Sets the print resolution; `<= 0` selects the source resolution.
	pub fn set_print_resolution_mm(&mut self, print_resolution_mm: f64) {
		self.parameters.print_resolution_mm = print_resolution_mm;
		self.derived = None;
	}

	/// Selects the elevation layer, which also determines the source resolution.
	pub fn set_dem_source(&mut self, dem: DemSource) {
		self.dem = dem;
		self.parameters.source_resolution_m = dem.resolution_m();
		self.derived = None;
	}

	pub fn set_box_from_corners(&mut self, north_east: GeoPoint, south_west: GeoPoint) -> Result<()> {
		self.area.set_box_from_corners(north_east, south_west)
	}

	pub fn set_box_from_drag(&mut self, bbox: GeoBBox) {
		self.area.set_box_from_drag(bbox);
	}

	pub fn recenter_on_viewport(&mut self, viewport: &GeoBBox) {
		self.area.recenter_on_viewport(viewport);
	}

	/// Imports a boundary file and applies it. A rejected file leaves the print area
	/// unchanged.
	pub fn import_boundary(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ImportError> {
		let ticket = self.select_boundary_file();
		match self.finish_boundary_import(ticket, file_name, bytes) {
			ImportOutcome::Rejected(err) => Err(err),
			ImportOutcome::Applied | ImportOutcome::Stale => Ok(()),
		}
	}

	/// Registers that the user picked a boundary file whose contents are still being
	/// read. Supersedes any earlier pending selection.
	pub fn select_boundary_file(&mut self) -> ImportTicket {
		self.selections.select()
	}

	/// Imports the contents of a selected file, unless a newer file was selected since.
	pub fn finish_boundary_import(&mut self, ticket: ImportTicket, file_name: &str, bytes: &[u8]) -> ImportOutcome {
		if !self.selections.complete(ticket) {
			debug!("dropping outdated import of {file_name:?}");
			return ImportOutcome::Stale;
		}
		match import_boundary(file_name, bytes) {
			Ok(import) => {
				self.area.apply_import_result(import);
				ImportOutcome::Applied
			}
			Err(err) => {
				warn!("rejected boundary file {file_name:?}: {err}");
				ImportOutcome::Rejected(err)
			}
		}
	}

	/// Reads a boundary file from disk and imports it.
	///
	/// The settings stay borrowed while the file is read, so nothing can supersede this
	/// import. Callers that let the user pick another file during the read use
	/// [`Settings::select_boundary_file`] and [`Settings::finish_boundary_import`].
	pub async fn load_boundary_file(&mut self, path: &Path) -> Result<ImportOutcome> {
		let ticket = self.select_boundary_file();
		let bytes = tokio::fs::read(path)
			.await
			.with_context(|| format!("failed to read boundary file {path:?}"))?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();
		Ok(self.finish_boundary_import(ticket, &file_name, &bytes))
	}

	/// Returns `true` unless the print area lies strictly inside the viewport.
	pub fn warn_if_box_outside_viewport(&self, viewport: &GeoBBox) -> bool {
		let outside = !viewport.contains_strictly(&self.state().bbox);
		if outside {
			debug!("print area {:?} is not inside the viewport {viewport:?}", self.state().bbox);
		}
		outside
	}

	/// Non-fatal problems with the current settings, as messages for the user.
	pub fn advisories(&mut self, viewport: Option<&GeoBBox>) -> Vec<String> {
		let mut advisories = Vec::new();

		if viewport.is_some_and(|viewport| self.warn_if_box_outside_viewport(viewport)) {
			advisories.push("the print area extends beyond the visible map".to_string());
		}

		let (under_sampled, ground_resolution) = {
			let derived = self.derived();
			(derived.under_sampled, derived.ground_resolution)
		};
		if under_sampled {
			advisories.push(format!(
				"ground resolution of {ground_resolution} is finer than the {} m source resolution of {}",
				self.dem.resolution_m(),
				self.dem
			));
		}

		let job_size = self.job_size();
		if job_size.is_too_large() {
			advisories.push(format!("job size of {job_size} is too large"));
		}

		if let Some(warning) = self.print.manual_options().warning {
			advisories.push(warning);
		}

		advisories
	}

	/// Reacts to something that happened on the map.
	pub fn handle_viewport_event(&mut self, event: ViewportEvent, viewport: &mut dyn MapViewport) {
		match event {
			ViewportEvent::BoxChanged(bbox) => {
				self.area.set_box_from_drag(bbox);
				self.redraw(viewport);
			}
			ViewportEvent::DragStart => {
				self.dragging = true;
				viewport.clear_division_lines();
			}
			ViewportEvent::DragEnd(bbox) => {
				self.dragging = false;
				self.area.set_box_from_drag(bbox);
				self.redraw(viewport);
			}
			ViewportEvent::Idle { bounds, center, zoom } => {
				self.map = MapView {
					center,
					zoom,
					bounds: Some(bounds),
				};
				if self.area.is_placeholder() {
					self.area.recenter_on_viewport(&bounds);
					self.redraw(viewport);
				}
			}
		}
	}

	/// Draws box, boundary and division lines. Division lines are left out while the
	/// box is being dragged.
	pub fn redraw(&mut self, viewport: &mut dyn MapViewport) {
		let bbox = self.state().bbox;
		viewport.draw_box(&bbox);
		match &self.state().polygon {
			Some(polygon) => viewport.draw_polygon(polygon),
			None => viewport.clear_polygon(),
		}
		viewport.clear_division_lines();
		if !self.dragging {
			let segments = self.derived().division_segments(&bbox);
			if !segments.is_empty() {
				viewport.draw_division_lines(&segments);
			}
		}
	}

	/// Moves the map onto the print area, e.g. after an import, and redraws.
	pub fn fit_viewport(&mut self, viewport: &mut dyn MapViewport) {
		viewport.fit_bounds(&self.state().bbox);
		self.redraw(viewport);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::viewport::recording::{Call, RecordingViewport};
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;
	use terrabox_core::{geodesy::meters_per_degree, tiling::GroundResolution};

	const SQUARE_KML: &str = "<kml><coordinates>-110,38,0 -109,38,0 -109,39,0 -110,39,0</coordinates></kml>";

	fn bbox(west: f64, south: f64, east: f64, north: f64) -> GeoBBox {
		GeoBBox::new(west, south, east, north).unwrap()
	}

	fn settings_with_box(west: f64, south: f64, east: f64, north: f64) -> Settings {
		Settings::new(PrintArea::new(bbox(west, south, east, north)))
	}

	#[test]
	fn default_settings() {
		let mut settings = Settings::default();
		assert!(settings.area().is_placeholder());
		let center = settings.state().bbox.center();
		assert_relative_eq!(center.lat, 44.59982, epsilon = 1e-9);
		assert_relative_eq!(center.lon, -108.11695, epsilon = 1e-9);
		assert_eq!(settings.dem_source(), DemSource::UsgsNed);
		assert_eq!(settings.parameters(), &TilingParameters::default());
		assert_eq!(settings.derived().division_lines_x, Vec::<f64>::new());
	}

	#[test]
	fn ground_resolution_for_two_tiles() {
		let mut settings = settings_with_box(-110.0, 37.995, -109.99, 38.005);
		settings.set_tile_width_mm(100.0);
		settings.set_print_resolution_mm(0.4);
		settings.set_tile_counts(2, 1);

		let expected = ((0.01 * meters_per_degree(38.0).1 / 500.0) * 100.0).round() / 100.0;
		assert_eq!(settings.derived().ground_resolution, GroundResolution::Meters(expected));
		assert_relative_eq!(expected, 1.76);
		assert!(settings.derived().under_sampled);
	}

	#[test]
	fn derived_is_cached_until_a_change() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		assert_eq!(settings.derived().division_lines_x, Vec::<f64>::new());

		settings.set_tile_counts(2, 2);
		assert_eq!(settings.derived().division_lines_x, vec![-109.5]);
		assert_eq!(settings.derived().division_lines_y, vec![38.5]);

		settings.set_box_from_drag(bbox(-112.0, 38.0, -108.0, 39.0));
		assert_eq!(settings.derived().division_lines_x, vec![-110.0]);
	}

	#[test]
	fn dem_source_sets_source_resolution() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		assert!(!settings.derived().under_sampled);

		settings.set_dem_source(DemSource::UsgsGtopo30);
		assert_relative_eq!(settings.parameters().source_resolution_m, 1000.0);
		// 80 mm at 0.4 mm over ~87 km: ~437 m per cell
		assert!(settings.derived().under_sampled);

		settings.set_print_resolution_mm(0.0);
		assert_eq!(settings.derived().ground_resolution, GroundResolution::Same);
		assert!(!settings.derived().under_sampled);
	}

	#[test]
	fn import_applies_box_and_polygon() {
		let mut settings = Settings::default();
		settings.import_boundary("area.kml", SQUARE_KML.as_bytes()).unwrap();
		assert!(!settings.area().is_placeholder());
		assert_eq!(settings.state().bbox, bbox(-110.0, 38.0, -109.0, 39.0));
		assert_eq!(settings.state().polygon.as_ref().map(|p| p.len()), Some(4));
	}

	#[test]
	fn rejected_imports_leave_state_untouched() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		settings.import_boundary("area.kml", SQUARE_KML.as_bytes()).unwrap();
		let before = settings.state().clone();

		let err = settings
			.import_boundary("area.kml", b"<kml><coordinates>-110,38,0 -109,38,0</coordinates></kml>")
			.unwrap_err();
		assert_eq!(err, ImportError::TooFewVertices { found: 2 });
		assert_eq!(settings.state(), &before);

		let err = settings.import_boundary("area.kml", b"<kml><coord").unwrap_err();
		assert!(matches!(err, ImportError::ParseFailure(_)));
		assert_eq!(settings.state(), &before);

		let err = settings.import_boundary("area.gpx", SQUARE_KML.as_bytes()).unwrap_err();
		assert!(matches!(err, ImportError::UnsupportedFormat { .. }));
		assert_eq!(settings.state(), &before);
	}

	#[test]
	fn stale_import_is_dropped() {
		let mut settings = settings_with_box(0.0, 0.0, 1.0, 1.0);
		let first = settings.select_boundary_file();
		let second = settings.select_boundary_file();

		assert_eq!(
			settings.finish_boundary_import(first, "first.kml", SQUARE_KML.as_bytes()),
			ImportOutcome::Stale
		);
		assert_eq!(settings.state().bbox, bbox(0.0, 0.0, 1.0, 1.0));

		assert_eq!(
			settings.finish_boundary_import(second, "second.kml", SQUARE_KML.as_bytes()),
			ImportOutcome::Applied
		);
		assert!(settings.state().has_polygon());
	}

	#[tokio::test]
	async fn load_boundary_file_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("boundary.KML");
		std::fs::write(&path, SQUARE_KML).unwrap();

		let mut settings = Settings::default();
		let outcome = settings.load_boundary_file(&path).await.unwrap();
		assert_eq!(outcome, ImportOutcome::Applied);
		assert_eq!(settings.state().bbox, bbox(-110.0, 38.0, -109.0, 39.0));

		let missing = settings.load_boundary_file(&dir.path().join("missing.kml")).await;
		assert!(missing.is_err());
		assert!(settings.state().has_polygon());
	}

	#[test]
	fn box_outside_viewport() {
		let settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		assert!(!settings.warn_if_box_outside_viewport(&bbox(-111.0, 37.0, -108.0, 40.0)));
		assert!(settings.warn_if_box_outside_viewport(&bbox(-110.0, 37.0, -108.0, 40.0)));
		assert!(settings.warn_if_box_outside_viewport(&bbox(-111.0, 37.0, -108.0, 39.0)));
		assert!(settings.warn_if_box_outside_viewport(&bbox(-109.5, 37.0, -108.0, 40.0)));
		assert!(settings.warn_if_box_outside_viewport(&bbox(0.0, 0.0, 1.0, 1.0)));
	}

	#[test]
	fn advisories() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		settings.set_dem_source(DemSource::UsgsGtopo30);
		settings.set_print_resolution_mm(0.0);
		assert_eq!(settings.advisories(Some(&bbox(-111.0, 37.0, -108.0, 40.0))), Vec::<String>::new());
		assert_eq!(
			settings.advisories(Some(&bbox(-109.5, 37.0, -108.0, 40.0))),
			vec!["the print area extends beyond the visible map".to_string()]
		);

		// a full degree of 1/9 arc second cells
		settings.set_dem_source(DemSource::UsgsNed);
		let advisories = settings.advisories(None);
		assert_eq!(advisories.len(), 1);
		assert!(advisories[0].starts_with("job size of "), "{}", advisories[0]);
		assert!(advisories[0].ends_with(" is too large"), "{}", advisories[0]);

		settings.set_box_from_drag(bbox(-110.0, 38.0, -109.99, 38.01));
		settings.set_print_resolution_mm(0.4);
		settings.print_options_mut().manual = "broken".to_string();
		let advisories = settings.advisories(None);
		assert_eq!(advisories.len(), 2);
		assert!(advisories[0].starts_with("ground resolution of 4.39 m"), "{}", advisories[0]);
		assert!(
			advisories[0].ends_with("finer than the 10 m source resolution of USGS/NED"),
			"{}",
			advisories[0]
		);
		assert!(advisories[1].starts_with("manual options"), "{}", advisories[1]);
	}

	#[test]
	fn single_tile_job_size() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		settings.set_tile_width_mm(100.0);
		settings.set_tile_counts(2, 2);
		settings.set_print_resolution_mm(0.2);
		assert_eq!(settings.job_size().cells, 1_000_000);
		assert_eq!(settings.advisories(None).len(), 1);

		settings.print_options_mut().manual = r#""only": [1, 1]"#.to_string();
		assert_eq!(settings.job_size().cells, 250_000);
		assert_eq!(settings.advisories(None), Vec::<String>::new());
	}

	#[test]
	fn first_idle_recenters_placeholder() {
		let mut settings = Settings::default();
		let bounds = bbox(-111.0, 37.0, -108.0, 40.0);
		let mut viewport = RecordingViewport::new(bounds);

		settings.handle_viewport_event(
			ViewportEvent::Idle {
				bounds,
				center: GeoPoint::from((38.5, -109.5)),
				zoom: 8,
			},
			&mut viewport,
		);
		assert_eq!(settings.map_view().zoom, 8);
		assert_eq!(settings.map_view().bounds, Some(bounds));
		assert_eq!(settings.state().bbox, bbox(-110.5, 37.5, -108.5, 39.5));
		assert_eq!(
			viewport.calls,
			vec![
				Call::DrawBox(bbox(-110.5, 37.5, -108.5, 39.5)),
				Call::ClearPolygon,
				Call::ClearDivisionLines
			]
		);

		viewport.calls.clear();
		let later = bbox(-112.0, 36.0, -107.0, 41.0);
		settings.handle_viewport_event(
			ViewportEvent::Idle {
				bounds: later,
				center: later.center(),
				zoom: 7,
			},
			&mut viewport,
		);
		assert_eq!(settings.state().bbox, bbox(-110.5, 37.5, -108.5, 39.5));
		assert!(viewport.calls.is_empty());
	}

	#[test]
	fn drag_hides_and_redraws_division_lines() {
		let mut settings = settings_with_box(-110.0, 38.0, -109.0, 39.0);
		settings.set_tile_counts(2, 1);
		let mut viewport = RecordingViewport::new(bbox(-111.0, 37.0, -108.0, 40.0));

		settings.handle_viewport_event(ViewportEvent::DragStart, &mut viewport);
		settings.handle_viewport_event(ViewportEvent::BoxChanged(bbox(-110.0, 38.0, -108.0, 39.0)), &mut viewport);
		assert_eq!(
			viewport.calls,
			vec![
				Call::ClearDivisionLines,
				Call::DrawBox(bbox(-110.0, 38.0, -108.0, 39.0)),
				Call::ClearPolygon,
				Call::ClearDivisionLines,
			]
		);

		viewport.calls.clear();
		settings.handle_viewport_event(ViewportEvent::DragEnd(bbox(-110.0, 38.0, -108.5, 39.0)), &mut viewport);
		let segments = settings.derived().division_segments(&bbox(-110.0, 38.0, -108.5, 39.0));
		assert_eq!(segments.len(), 1);
		assert_eq!(segments[0].from, GeoPoint::from((39.0, -109.25)));
		assert_eq!(
			viewport.calls,
			vec![
				Call::DrawBox(bbox(-110.0, 38.0, -108.5, 39.0)),
				Call::ClearPolygon,
				Call::ClearDivisionLines,
				Call::DrawDivisionLines(segments),
			]
		);
	}

	#[test]
	fn fit_viewport_after_import() {
		let mut settings = Settings::default();
		settings.import_boundary("area.kml", SQUARE_KML.as_bytes()).unwrap();
		let mut viewport = RecordingViewport::new(bbox(0.0, 0.0, 1.0, 1.0));
		settings.fit_viewport(&mut viewport);
		assert_eq!(
			viewport.calls,
			vec![
				Call::FitBounds(bbox(-110.0, 38.0, -109.0, 39.0)),
				Call::DrawBox(bbox(-110.0, 38.0, -109.0, 39.0)),
				Call::DrawPolygon(4),
				Call::ClearDivisionLines,
			]
		);
	}
}
