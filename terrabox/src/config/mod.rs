//! Preview configuration.
//!
//! A YAML file with up to four sections, all optional:
//! - [`AreaConfig`]: the print area corners
//! - [`TilingConfig`]: tile size, tile counts and print resolution
//! - [`PrintConfig`]: elevation source and generator options
//! - [`ViewportConfig`]: the visible map bounds and zoom
//!
//! The configuration is turned into [`Settings`](crate::settings::Settings) with
//! [`Config::into_settings`].

mod area;
mod main;
mod print;
mod tiling;
mod viewport;

pub use area::AreaConfig;
pub use main::Config;
pub use print::PrintConfig;
pub use tiling::TilingConfig;
pub use viewport::ViewportConfig;
