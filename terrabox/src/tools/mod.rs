pub mod import;
pub mod preview;
pub mod sources;
