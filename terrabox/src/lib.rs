//! # terrabox
//!
//! Selection and preview of a geographic print area for 3D printed terrain tiles.
//!
//! - [`area`]: the print-area box, set by corners, by dragging, by importing a boundary
//!   file or by centering it on the map
//! - [`settings`]: tiling and print parameters, the derived tiling preview and the flat
//!   form fields sent to the generator
//! - [`viewport`]: the map the print area is shown on
//! - [`config`]: YAML configuration for the command line preview
//!
//! ```rust
//! use terrabox::{core::GeoPoint, settings::Settings};
//!
//! let mut settings = Settings::default();
//! settings
//! 	.set_box_from_corners(GeoPoint::from((39.0, -109.0)), GeoPoint::from((38.0, -110.0)))
//! 	.unwrap();
//! settings.set_tile_counts(3, 1);
//! assert_eq!(settings.derived().division_lines_x.len(), 2);
//! ```

pub mod area;
pub mod config;
pub mod settings;
pub mod viewport;

pub use terrabox_core as core;
pub use terrabox_geometry as geometry;
