//! Contains the geographic types and the numeric model of a terrain print area:
//! points, bounding boxes, degree lengths, tiling and job size estimates.

pub mod geodesy;

pub mod job_size;

pub mod tiling;

pub mod types;
pub use types::*;
