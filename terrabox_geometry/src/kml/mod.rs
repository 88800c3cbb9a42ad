mod parse;
mod read;

pub use parse::{parse_coordinates, parse_kml};
pub use read::{BoundaryFormat, BoundaryImport, import_boundary};
