//! Tile height, ground resolution and division lines of a print area.

mod derived;
mod parameters;

pub use derived::*;
pub use parameters::*;
