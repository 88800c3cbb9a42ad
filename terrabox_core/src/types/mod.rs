//! Contains types like geographic points, bounding boxes, elevation sources and output formats.

mod boundary_polygon;
pub use boundary_polygon::*;

mod dem_source;
pub use dem_source::*;

mod file_format;
pub use file_format::*;

mod geo_bbox;
pub use geo_bbox::*;

mod geo_point;
pub use geo_point::*;

mod print_area_state;
pub use print_area_state::*;
