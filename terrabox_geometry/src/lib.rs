//! Reads boundary polygons from KML and KMZ files.

mod error;
pub use error::ImportError;

pub mod kml;
pub use kml::{BoundaryImport, import_boundary};
